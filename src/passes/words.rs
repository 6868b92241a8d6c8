use regex::{Captures, Regex};
use tracing::trace;

use super::{Pass, phrase_pattern};
use crate::case::match_case;
use crate::dictionary::Dictionary;
use crate::direction::Direction;
use crate::error::DictionaryResult;
use crate::highlight::highlight;
use crate::store::DictionaryStore;
use crate::working_text::WorkingText;

/// A dictionary key compiled to a whole-word, case-insensitive pattern
struct WordRule {
    key: String,
    pattern: Regex,
    replacement: String,
}

/// Compile a dictionary into rules, longest keys first
fn compile(dictionary: &Dictionary) -> DictionaryResult<Vec<WordRule>> {
    dictionary
        .by_descending_length()
        .into_iter()
        .map(|(key, replacement)| {
            Ok(WordRule {
                key: key.to_string(),
                pattern: phrase_pattern(key)?,
                replacement: replacement.to_string(),
            })
        })
        .collect()
}

/// Rewrites vocabulary and spelling
///
/// Consults the variant-only vocabulary, then the spelling dictionary. Rules
/// run one after another over the same open text, so a rule sees the output
/// of every rule before it, markup included.
pub struct WordPass {
    american_to_british: Vec<Vec<WordRule>>,
    british_to_american: Vec<Vec<WordRule>>,
}

impl WordPass {
    pub fn new(store: &DictionaryStore) -> DictionaryResult<Self> {
        let compile_all = |direction: Direction| -> DictionaryResult<Vec<Vec<WordRule>>> {
            store
                .word_dictionaries(direction)
                .into_iter()
                .map(compile)
                .collect()
        };

        Ok(WordPass {
            american_to_british: compile_all(Direction::AmericanToBritish)?,
            british_to_american: compile_all(Direction::BritishToAmerican)?,
        })
    }

    /// Number of compiled rules for a direction
    pub fn rule_count(&self, direction: Direction) -> usize {
        self.rules(direction).iter().map(Vec::len).sum()
    }

    fn rules(&self, direction: Direction) -> &[Vec<WordRule>] {
        match direction {
            Direction::AmericanToBritish => &self.american_to_british,
            Direction::BritishToAmerican => &self.british_to_american,
        }
    }
}

impl Pass for WordPass {
    fn name(&self) -> &'static str {
        "words"
    }

    fn apply(&self, text: WorkingText, direction: Direction) -> WorkingText {
        let rules = self.rules(direction);

        text.map_open(|mut open| {
            for rule in rules.iter().flatten() {
                if !rule.pattern.is_match(&open) {
                    continue;
                }
                open = rule
                    .pattern
                    .replace_all(&open, |captures: &Captures| {
                        let replacement = match_case(&captures[0], &rule.replacement);
                        trace!(key = %rule.key, from = &captures[0], to = %replacement, "word");
                        highlight(&replacement)
                    })
                    .into_owned();
            }
            open
        })
    }
}
