//! Error types for the translator
//!
//! Two families exist: [`InvalidInput`] for requests the engine refuses to
//! translate, and [`DictionaryError`] for problems while building the
//! dictionary store from JSON tables.

use std::path::PathBuf;
use thiserror::Error;

/// Validation failures for a translation request
///
/// The `Display` strings are part of the public API contract: the HTTP layer
/// sends them back verbatim in the `error` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The text is absent or is not a string
    #[error("Required field(s) missing")]
    MissingFields,
    /// The locale is not one of the supported directions
    #[error("Invalid value for locale field")]
    InvalidLocale,
}

/// Errors raised while loading dictionaries or compiling their patterns
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// A dictionary file could not be read
    #[error("Failed to read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A dictionary table is not valid JSON
    #[error("Failed to parse JSON from '{name}': {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    /// The JSON root of a dictionary table is not an object
    #[error("Invalid JSON in '{0}': root must be an object")]
    NotAnObject(String),
    /// The dictionary directory is missing or is a plain file
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// A dictionary key produced a pattern the regex engine rejected
    #[error("Failed to compile pattern for '{key}': {source}")]
    Pattern {
        key: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for dictionary operations
pub type DictionaryResult<T> = Result<T, DictionaryError>;
