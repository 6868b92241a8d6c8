use regex::{NoExpand, Regex};
use tracing::trace;

use super::{Pass, fixed_pattern, phrase_pattern};
use crate::direction::Direction;
use crate::error::DictionaryResult;
use crate::highlight::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, highlight};
use crate::working_text::{Segment, WorkingText};

/// Rewritten the same way in both directions, always to this exact casing
const HIGH_TECH: (&str, &str) = ("high tech", "high-tech");

/// Idioms that swap for one another, as (American, British)
const NAMED_IDIOMS: [(&str, &str); 1] = [("Rube Goldberg machine", "Heath Robinson device")];

struct PhraseRule {
    pattern: Regex,
    replacement: &'static str,
}

impl PhraseRule {
    fn new(phrase: &str, replacement: &'static str) -> DictionaryResult<Self> {
        Ok(PhraseRule {
            pattern: phrase_pattern(phrase)?,
            replacement,
        })
    }
}

/// Rewrites fixed idioms
///
/// "high tech" becomes "high-tech" regardless of direction, then each named
/// idiom is swapped for its counterpart in the target variant. Substituted
/// idioms are marked, so the word pass cannot translate them again.
pub struct IdiomPass {
    american_to_british: Vec<PhraseRule>,
    british_to_american: Vec<PhraseRule>,
}

impl IdiomPass {
    pub fn new() -> DictionaryResult<Self> {
        let (phrase, fixed) = HIGH_TECH;
        let mut american_to_british = vec![PhraseRule::new(phrase, fixed)?];
        let mut british_to_american = vec![PhraseRule::new(phrase, fixed)?];
        for (american, british) in NAMED_IDIOMS {
            american_to_british.push(PhraseRule::new(american, british)?);
            british_to_american.push(PhraseRule::new(british, american)?);
        }
        Ok(IdiomPass {
            american_to_british,
            british_to_american,
        })
    }
}

impl Pass for IdiomPass {
    fn name(&self) -> &'static str {
        "idioms"
    }

    fn apply(&self, text: WorkingText, direction: Direction) -> WorkingText {
        let rules = match direction {
            Direction::AmericanToBritish => &self.american_to_british,
            Direction::BritishToAmerican => &self.british_to_american,
        };

        rules.iter().fold(text, |text, rule| {
            text.replace_matches(&rule.pattern, |captures| {
                trace!(from = &captures[0], to = rule.replacement, "idiom");
                Some(vec![Segment::Marked(rule.replacement.to_string())])
            })
        })
    }
}

/// Keeps the British idioms out of American output
///
/// Runs after the word pass in the British→American direction only. A
/// vocabulary entry could still produce a highlighted British idiom from
/// open text; any such span is rewritten to its American counterpart.
/// American→British output is left as the word pass produced it.
pub struct IdiomGuardPass {
    british_to_american: Vec<PhraseRule>,
}

impl IdiomGuardPass {
    pub fn new() -> DictionaryResult<Self> {
        let british_to_american = NAMED_IDIOMS
            .iter()
            .map(|&(american, british)| -> DictionaryResult<PhraseRule> {
                let pattern = fixed_pattern(&format!(
                    "(?i){}{}{}",
                    regex::escape(HIGHLIGHT_OPEN),
                    regex::escape(british),
                    regex::escape(HIGHLIGHT_CLOSE)
                ))?;
                Ok(PhraseRule {
                    pattern,
                    replacement: american,
                })
            })
            .collect::<DictionaryResult<Vec<_>>>()?;
        Ok(IdiomGuardPass {
            british_to_american,
        })
    }
}

impl Pass for IdiomGuardPass {
    fn name(&self) -> &'static str {
        "idiom-guard"
    }

    fn apply(&self, text: WorkingText, direction: Direction) -> WorkingText {
        if direction != Direction::BritishToAmerican {
            return text;
        }

        text.map_open(|open| {
            self.british_to_american.iter().fold(open, |open, rule| {
                rule.pattern
                    .replace_all(&open, NoExpand(&highlight(rule.replacement)))
                    .into_owned()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(text: &str, direction: Direction) -> String {
        IdiomPass::new()
            .unwrap()
            .apply(WorkingText::new(text), direction)
            .render()
    }

    #[test]
    fn test_high_tech_both_directions() {
        for direction in Direction::ALL {
            assert_eq!(
                apply("a HIGH TECH gadget", direction),
                r#"a <span class="highlight">high-tech</span> gadget"#
            );
        }
        assert_eq!(apply("high technology", Direction::AmericanToBritish), "high technology");
    }

    #[test]
    fn test_named_idiom_american_to_british() {
        assert_eq!(
            apply("Like a high tech Rube Goldberg machine.", Direction::AmericanToBritish),
            r#"Like a <span class="highlight">high-tech</span> <span class="highlight">Heath Robinson device</span>."#
        );
        // Only the target direction's idiom is rewritten
        assert_eq!(
            apply("a heath robinson device", Direction::AmericanToBritish),
            "a heath robinson device"
        );
    }

    #[test]
    fn test_named_idiom_british_to_american() {
        assert_eq!(
            apply("What a heath robinson device!", Direction::BritishToAmerican),
            r#"What a <span class="highlight">Rube Goldberg machine</span>!"#
        );
    }

    #[test]
    fn test_guard_rewrites_highlighted_source_idiom() {
        let guard = IdiomGuardPass::new().unwrap();
        let text = WorkingText::new(r#"a <span class="highlight">heath Robinson device</span>"#);
        assert_eq!(
            guard.apply(text, Direction::BritishToAmerican).render(),
            r#"a <span class="highlight">Rube Goldberg machine</span>"#
        );
    }

    #[test]
    fn test_guard_ignores_plain_text_and_marked_spans() {
        let guard = IdiomGuardPass::new().unwrap();
        let text = WorkingText::new("a Heath Robinson device");
        assert_eq!(
            guard.apply(text, Direction::BritishToAmerican).render(),
            "a Heath Robinson device"
        );

        // Marked spans are final, even when they hold the idiom
        let mut text = WorkingText::default();
        text.push(Segment::Marked("Heath Robinson device".into()));
        let text = guard.apply(text, Direction::BritishToAmerican);
        assert_eq!(text.segments(), &[Segment::Marked("Heath Robinson device".into())]);
    }

    #[test]
    fn test_guard_leaves_american_to_british_output_alone() {
        let guard = IdiomGuardPass::new().unwrap();
        let text = WorkingText::new(r#"a <span class="highlight">Rube Goldberg machine</span>"#);
        assert_eq!(
            guard.apply(text, Direction::AmericanToBritish).render(),
            r#"a <span class="highlight">Rube Goldberg machine</span>"#
        );
    }
}
