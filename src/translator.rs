//! Translation Engine
//!
//! [`Translator`] validates a request, then runs the pass pipeline over a
//! private working copy of the text. It holds only immutable state built at
//! construction, so one instance can serve any number of threads.
//!
//! # Example
//!
//! ```
//! use amerbrit::{Direction, Translator};
//!
//! let translator = Translator::new()?;
//! let translation =
//!     translator.translate_text("Mangoes are my favorite fruit.", Direction::AmericanToBritish);
//! assert_eq!(
//!     translation.as_str(),
//!     r#"Mangoes are my <span class="highlight">favourite</span> fruit."#
//! );
//! # Ok::<(), amerbrit::DictionaryError>(())
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::direction::Direction;
use crate::error::{DictionaryResult, InvalidInput};
use crate::passes::{IdiomGuardPass, IdiomPass, Pass, TimePass, TitlePass, WordPass};
use crate::store::DictionaryStore;
use crate::working_text::WorkingText;

/// Returned in place of a translation when the output equals the input
pub const EVERYTHING_LOOKS_GOOD: &str = "Everything looks good to me!";

/// Returned when the text is empty or whitespace only
pub const NO_TEXT_TO_TRANSLATE: &str = "No text to translate";

/// A validated translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub direction: Direction,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, direction: Direction) -> Self {
        TranslationRequest {
            text: text.into(),
            direction,
        }
    }
}

/// Outcome of a translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// At least one span changed; the text carries highlight markup
    Translated(String),
    /// Nothing matched
    Unchanged,
    /// The input was blank
    NothingToTranslate,
}

impl Translation {
    /// The translated text, or the sentinel message for the other outcomes
    pub fn as_str(&self) -> &str {
        match self {
            Translation::Translated(text) => text,
            Translation::Unchanged => EVERYTHING_LOOKS_GOOD,
            Translation::NothingToTranslate => NO_TEXT_TO_TRANSLATE,
        }
    }

    pub fn is_translated(&self) -> bool {
        matches!(self, Translation::Translated(_))
    }

    pub fn into_string(self) -> String {
        match self {
            Translation::Translated(text) => text,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whitespace, including the byte-order mark, is all the text holds
fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}').is_empty()
}

pub struct Translator {
    passes: Vec<Box<dyn Pass>>,
}

impl Translator {
    /// Create a translator over the built-in dictionaries
    pub fn new() -> DictionaryResult<Self> {
        Self::with_store(DictionaryStore::builtin()?)
    }

    /// Create a translator over a custom store, compiling every pattern
    pub fn with_store(store: DictionaryStore) -> DictionaryResult<Self> {
        let passes: Vec<Box<dyn Pass>> = vec![
            Box::new(TitlePass::new(&store)?),
            Box::new(TimePass::new()?),
            Box::new(IdiomPass::new()?),
            Box::new(WordPass::new(&store)?),
            Box::new(IdiomGuardPass::new()?),
        ];
        debug!(passes = passes.len(), "translator initialized");
        Ok(Translator { passes })
    }

    /// Validate raw input and translate it
    ///
    /// Checks run in order and the first failure wins:
    /// 1. `text` is absent (not a string) → [`InvalidInput::MissingFields`]
    /// 2. `text` is blank → `Ok(Translation::NothingToTranslate)`
    /// 3. `locale` is not a known direction → [`InvalidInput::InvalidLocale`]
    pub fn translate(&self, text: Option<&str>, locale: &str) -> Result<Translation, InvalidInput> {
        let text = text.ok_or(InvalidInput::MissingFields)?;
        if is_blank(text) {
            return Ok(Translation::NothingToTranslate);
        }
        let direction: Direction = locale.parse()?;
        Ok(self.execute(&TranslationRequest::new(text, direction)))
    }

    pub fn execute(&self, request: &TranslationRequest) -> Translation {
        self.translate_text(&request.text, request.direction)
    }

    /// Translate text in the given direction
    pub fn translate_text(&self, text: &str, direction: Direction) -> Translation {
        if is_blank(text) {
            return Translation::NothingToTranslate;
        }

        let working = self.passes.iter().fold(WorkingText::new(text), |working, pass| {
            let working = pass.apply(working, direction);
            trace!(pass = pass.name(), %direction, text = %working, "pass applied");
            working
        });

        let rendered = working.render();
        if rendered == text {
            Translation::Unchanged
        } else {
            Translation::Translated(rendered)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> Translator {
        Translator::new().unwrap()
    }

    #[test]
    fn test_translate_validation_order() {
        let translator = translator();
        assert_eq!(
            translator.translate(None, "american-to-british"),
            Err(InvalidInput::MissingFields)
        );
        // Missing text wins over a bad locale
        assert_eq!(
            translator.translate(None, "french-to-spanish"),
            Err(InvalidInput::MissingFields)
        );
        // Blank text wins over a bad locale
        assert_eq!(
            translator.translate(Some("   "), "french-to-spanish"),
            Ok(Translation::NothingToTranslate)
        );
        assert_eq!(
            translator.translate(Some("Mangoes are my favorite fruit."), "french-to-spanish"),
            Err(InvalidInput::InvalidLocale)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InvalidInput::MissingFields.to_string(),
            "Required field(s) missing"
        );
        assert_eq!(
            InvalidInput::InvalidLocale.to_string(),
            "Invalid value for locale field"
        );
    }

    #[test]
    fn test_sentinels() {
        let translator = translator();
        assert_eq!(
            translator
                .translate(Some(""), "american-to-british")
                .unwrap()
                .as_str(),
            "No text to translate"
        );
        assert_eq!(
            translator
                .translate(Some("This text needs no translation."), "american-to-british")
                .unwrap()
                .to_string(),
            "Everything looks good to me!"
        );
        assert_eq!(
            translator.translate_text("\n\t ", Direction::BritishToAmerican),
            Translation::NothingToTranslate
        );
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        let translator = translator();
        assert_eq!(
            translator.translate(Some("\u{FEFF}"), "american-to-british"),
            Ok(Translation::NothingToTranslate)
        );
        assert_eq!(
            translator.translate_text(" \u{FEFF}\n", Direction::BritishToAmerican),
            Translation::NothingToTranslate
        );
    }

    #[test]
    fn test_translation_accessors() {
        let translated = Translation::Translated("x".into());
        assert!(translated.is_translated());
        assert_eq!(translated.into_string(), "x");
        assert!(!Translation::Unchanged.is_translated());
        assert_eq!(
            Translation::Unchanged.into_string(),
            "Everything looks good to me!"
        );
    }

    #[test]
    fn test_execute_request() {
        let translator = translator();
        let request = TranslationRequest::new("Lunch is at 12:15 today.", Direction::AmericanToBritish);
        assert_eq!(
            translator.execute(&request),
            Translation::Translated(
                r#"Lunch is at <span class="highlight">12.15</span> today."#.to_string()
            )
        );
    }

    #[test]
    fn test_translator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator>();
    }
}
