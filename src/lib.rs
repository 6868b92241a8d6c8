//! American ↔ British English translator
//!
//! Rewrites vocabulary, spelling, courtesy titles and clock times between the
//! two variants, wrapping every changed span in highlight markup.

pub mod case;
pub mod dictionary;
pub mod direction;
pub mod error;
pub mod highlight;
pub mod loader;
pub mod passes;
pub mod store;
pub mod translator;
pub mod working_text;


// Re-export main types for convenient access
pub use case::{capitalize_first_letter, match_case};
pub use dictionary::Dictionary;
pub use direction::Direction;
pub use error::{DictionaryError, DictionaryResult, InvalidInput};
pub use highlight::highlight;
pub use loader::{load_dictionary_from_file, load_tables_from_dir};
pub use store::{DictionaryStore, DictionaryTables};
pub use translator::{
    EVERYTHING_LOOKS_GOOD, NO_TEXT_TO_TRANSLATE, Translation, TranslationRequest, Translator,
};
pub use working_text::{Segment, WorkingText};
