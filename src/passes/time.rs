use regex::Regex;
use tracing::trace;

use super::{Pass, fixed_pattern};
use crate::direction::Direction;
use crate::error::DictionaryResult;
use crate::working_text::{Segment, WorkingText};

// One or two hour digits, exactly two minute digits. No range checks and no
// word boundaries: "99:99" is a time, and so is the "23:45" inside "123:456".
const AMERICAN_TIME: &str = r"([0-9]{1,2}):([0-9]{2})";
const BRITISH_TIME: &str = r"([0-9]{1,2})\.([0-9]{2})";

/// Rewrites clock times between `H:MM` and `H.MM`
pub struct TimePass {
    american: Regex,
    british: Regex,
}

impl TimePass {
    pub fn new() -> DictionaryResult<Self> {
        Ok(TimePass {
            american: fixed_pattern(AMERICAN_TIME)?,
            british: fixed_pattern(BRITISH_TIME)?,
        })
    }
}

impl Pass for TimePass {
    fn name(&self) -> &'static str {
        "time"
    }

    fn apply(&self, text: WorkingText, direction: Direction) -> WorkingText {
        let (pattern, separator) = match direction {
            Direction::AmericanToBritish => (&self.american, '.'),
            Direction::BritishToAmerican => (&self.british, ':'),
        };

        text.replace_matches(pattern, |captures| {
            let time = format!("{}{}{}", &captures[1], separator, &captures[2]);
            trace!(from = &captures[0], to = %time, "time");
            Some(vec![Segment::Marked(time)])
        })
    }
}
