//! Dictionary Store
//!
//! Holds the four authored forward tables and the two tables derived from
//! them by reversal. Everything is built once and only read afterwards, so a
//! store can be shared between threads without locking.

use tracing::debug;

use crate::dictionary::Dictionary;
use crate::direction::Direction;
use crate::error::DictionaryResult;

pub(crate) const AMERICAN_ONLY: &str = "american-only";
pub(crate) const BRITISH_ONLY: &str = "british-only";
pub(crate) const AMERICAN_TO_BRITISH_SPELLING: &str = "american-to-british-spelling";
pub(crate) const AMERICAN_TO_BRITISH_TITLES: &str = "american-to-british-titles";

/// Built-in tables, embedded at compile time
pub(crate) const BUILTIN_TABLES: [(&str, &str); 4] = [
    (AMERICAN_ONLY, include_str!("../data/american-only.json")),
    (BRITISH_ONLY, include_str!("../data/british-only.json")),
    (
        AMERICAN_TO_BRITISH_SPELLING,
        include_str!("../data/american-to-british-spelling.json"),
    ),
    (
        AMERICAN_TO_BRITISH_TITLES,
        include_str!("../data/american-to-british-titles.json"),
    ),
];

pub(crate) fn builtin_table(name: &str) -> DictionaryResult<Dictionary> {
    let json = BUILTIN_TABLES
        .iter()
        .find(|(table, _)| *table == name)
        .map(|(_, json)| *json)
        .unwrap_or("{}");
    Dictionary::from_json_str(name, json)
}

/// The authored forward tables a store is built from
#[derive(Debug, Clone, Default)]
pub struct DictionaryTables {
    /// Words that exist only in American English, mapped to a British equivalent
    pub american_only: Dictionary,
    /// Words that exist only in British English, mapped to an American equivalent
    pub british_only: Dictionary,
    /// American spellings mapped to British spellings
    pub american_to_british_spelling: Dictionary,
    /// American courtesy titles (with period) mapped to British ones
    pub american_to_british_titles: Dictionary,
}

impl DictionaryTables {
    /// The tables shipped with the crate
    pub fn builtin() -> DictionaryResult<Self> {
        Ok(DictionaryTables {
            american_only: builtin_table(AMERICAN_ONLY)?,
            british_only: builtin_table(BRITISH_ONLY)?,
            american_to_british_spelling: builtin_table(AMERICAN_TO_BRITISH_SPELLING)?,
            american_to_british_titles: builtin_table(AMERICAN_TO_BRITISH_TITLES)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DictionaryStore {
    american_only: Dictionary,
    british_only: Dictionary,
    american_to_british_spelling: Dictionary,
    american_to_british_titles: Dictionary,
    british_to_american_spelling: Dictionary,
    british_to_american_titles: Dictionary,
}

impl DictionaryStore {
    /// Build a store from the embedded tables
    pub fn builtin() -> DictionaryResult<Self> {
        Ok(Self::from_tables(DictionaryTables::builtin()?))
    }

    /// Build a store, deriving the British-to-American tables by reversal
    pub fn from_tables(tables: DictionaryTables) -> Self {
        let british_to_american_spelling = tables.american_to_british_spelling.reversed();
        let british_to_american_titles = tables.american_to_british_titles.reversed();

        debug!(
            american_only = tables.american_only.len(),
            british_only = tables.british_only.len(),
            spelling = tables.american_to_british_spelling.len(),
            titles = tables.american_to_british_titles.len(),
            "dictionary store built"
        );

        DictionaryStore {
            american_only: tables.american_only,
            british_only: tables.british_only,
            american_to_british_spelling: tables.american_to_british_spelling,
            american_to_british_titles: tables.american_to_british_titles,
            british_to_american_spelling,
            british_to_american_titles,
        }
    }

    /// Dictionaries for the word pass, in the order they are consulted:
    /// variant-only vocabulary first, then spelling
    pub fn word_dictionaries(&self, direction: Direction) -> [&Dictionary; 2] {
        match direction {
            Direction::AmericanToBritish => [&self.american_only, &self.american_to_british_spelling],
            Direction::BritishToAmerican => [&self.british_only, &self.british_to_american_spelling],
        }
    }

    /// Title dictionary for the title pass
    pub fn titles(&self, direction: Direction) -> &Dictionary {
        match direction {
            Direction::AmericanToBritish => &self.american_to_british_titles,
            Direction::BritishToAmerican => &self.british_to_american_titles,
        }
    }
}
