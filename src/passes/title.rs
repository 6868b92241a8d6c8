use regex::Regex;
use tracing::trace;

use super::{Pass, fixed_pattern};
use crate::case::capitalize_first_letter;
use crate::dictionary::Dictionary;
use crate::direction::Direction;
use crate::error::DictionaryResult;
use crate::store::DictionaryStore;
use crate::working_text::{Segment, WorkingText};

/// American titles end with a period and are followed by whitespace, which
/// the match consumes and replaces with a single space
const AMERICAN_TITLES: &str = r"\b(Mr\.|Mrs\.|Ms\.|Mx\.|Dr\.|Prof\.)\s";

/// British titles carry no period
const BRITISH_TITLES: &str = r"\b(Mr|Mrs|Ms|Mx|Dr|Prof)\b";

/// Rewrites courtesy titles (`Mr.` ↔ `Mr`)
///
/// The title set is closed and matched case-sensitively; the dictionary
/// lookup uses the lowercased title. Titles missing from the dictionary are
/// left alone.
pub struct TitlePass {
    american: Regex,
    british: Regex,
    american_to_british: Dictionary,
    british_to_american: Dictionary,
}

impl TitlePass {
    pub fn new(store: &DictionaryStore) -> DictionaryResult<Self> {
        Ok(TitlePass {
            american: fixed_pattern(AMERICAN_TITLES)?,
            british: fixed_pattern(BRITISH_TITLES)?,
            american_to_british: store.titles(Direction::AmericanToBritish).clone(),
            british_to_american: store.titles(Direction::BritishToAmerican).clone(),
        })
    }
}

impl Pass for TitlePass {
    fn name(&self) -> &'static str {
        "titles"
    }

    fn apply(&self, text: WorkingText, direction: Direction) -> WorkingText {
        let (pattern, titles) = match direction {
            Direction::AmericanToBritish => (&self.american, &self.american_to_british),
            Direction::BritishToAmerican => (&self.british, &self.british_to_american),
        };

        text.replace_matches(pattern, |captures| {
            let matched = &captures[0];
            let replacement = titles.get(matched.trim())?;
            trace!(from = matched, to = replacement, "title");

            match direction {
                Direction::AmericanToBritish => Some(vec![
                    Segment::Marked(capitalize_first_letter(replacement)),
                    Segment::Open(" ".to_string()),
                ]),
                Direction::BritishToAmerican => {
                    let mut title = replacement.to_string();
                    if !title.ends_with('.') {
                        title.push('.');
                    }
                    Some(vec![Segment::Marked(capitalize_first_letter(&title))])
                }
            }
        })
    }
}
