use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

use crate::error::{DictionaryError, DictionaryResult};

/// Insertion-ordered mapping from a lowercase source term to its replacement
///
/// Keys are single words or multi-word phrases. Order matters twice: it is
/// the tie-break when keys of equal length are sorted for matching, and it
/// decides which key survives when [`Dictionary::reversed`] meets duplicate
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<(String, String)>,
    // key -> position in `entries`
    index: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    /// Insert a term, lowercasing the key
    ///
    /// An existing key keeps its original position and takes the new value.
    pub fn insert(&mut self, key: &str, value: &str) -> &mut Self {
        let key = key.to_lowercase();
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = value.to_owned(),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value.to_owned()));
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(&key.to_lowercase())
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Swap keys and values
    ///
    /// When several keys share a value, the key inserted last wins.
    pub fn reversed(&self) -> Dictionary {
        let mut reversed = Dictionary::new();
        for (key, value) in self.iter() {
            reversed.insert(value, key);
        }
        reversed
    }

    /// Entries sorted by descending key length, ties in insertion order
    ///
    /// Matching longer phrases first keeps a short key from breaking up a
    /// compound term that contains it.
    pub fn by_descending_length(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| b.chars().count().cmp(&a.chars().count()));
        entries
    }

    /// Parse a dictionary from a JSON object of string values
    ///
    /// `name` only labels errors and warnings. Non-string values are skipped.
    pub fn from_json_str(name: &str, json: &str) -> DictionaryResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(|source| DictionaryError::Json {
            name: name.to_string(),
            source,
        })?;

        let object = value
            .as_object()
            .ok_or_else(|| DictionaryError::NotAnObject(name.to_string()))?;

        let mut dictionary = Dictionary::new();
        for (key, value) in object {
            match value.as_str() {
                Some(replacement) => {
                    dictionary.insert(key, replacement);
                }
                None => warn!(dictionary = name, key = %key, "entry is not a string, skipping"),
            }
        }
        Ok(dictionary)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for (key, value) in iter {
            dictionary.insert(key.as_ref(), value.as_ref());
        }
        dictionary
    }
}
