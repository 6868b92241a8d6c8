//! Translation passes
//!
//! A translation is an ordered pipeline of passes, each taking the previous
//! pass's output:
//!
//! 1. [`TitlePass`] - courtesy titles (`Mr.` ↔ `Mr`)
//! 2. [`TimePass`] - clock times (`2:30` ↔ `2.30`)
//! 3. [`IdiomPass`] - "high tech", then the directional named idiom
//! 4. [`WordPass`] - variant-only vocabulary, then spelling
//! 5. [`IdiomGuardPass`] - keeps a named idiom from surfacing in its source form
//!
//! Every pass compiles its patterns at construction, so translating a string
//! never builds a regex.

pub mod idiom;
pub mod time;
pub mod title;
pub mod words;

pub use idiom::{IdiomGuardPass, IdiomPass};
pub use time::TimePass;
pub use title::TitlePass;
pub use words::WordPass;

use regex::Regex;

use crate::direction::Direction;
use crate::error::{DictionaryError, DictionaryResult};
use crate::working_text::WorkingText;

/// One stage of the translation pipeline
///
/// Passes hold only immutable, precompiled state and may be shared across
/// threads.
pub trait Pass: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Apply this pass for the given direction
    fn apply(&self, text: WorkingText, direction: Direction) -> WorkingText;
}

/// Compile a case-insensitive, whole-word pattern for a literal phrase
pub(crate) fn phrase_pattern(phrase: &str) -> DictionaryResult<Regex> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase))).map_err(|source| {
        DictionaryError::Pattern {
            key: phrase.to_string(),
            source,
        }
    })
}

/// Compile one of the fixed patterns owned by a pass
pub(crate) fn fixed_pattern(pattern: &str) -> DictionaryResult<Regex> {
    Regex::new(pattern).map_err(|source| DictionaryError::Pattern {
        key: pattern.to_string(),
        source,
    })
}
