use std::fs;
use std::path::Path;

use tracing::debug;

use crate::dictionary::Dictionary;
use crate::error::{DictionaryError, DictionaryResult};
use crate::store::{
    AMERICAN_ONLY, AMERICAN_TO_BRITISH_SPELLING, AMERICAN_TO_BRITISH_TITLES, BRITISH_ONLY,
    DictionaryStore, DictionaryTables, builtin_table,
};

/// Load a dictionary from a single JSON file
///
/// The JSON file should have the following structure:
/// ```json
/// {
///     "favorite": "favourite",
///     "parking lot": "car park"
/// }
/// ```
///
/// Entries whose value is not a string are skipped with a warning.
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON
/// - Root is not an object
pub fn load_dictionary_from_file(path: &Path) -> DictionaryResult<Dictionary> {
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Dictionary::from_json_str(&path.display().to_string(), &content)
}

/// Load the forward tables from a directory of JSON files
///
/// Looks for `american-only.json`, `british-only.json`,
/// `american-to-british-spelling.json` and `american-to-british-titles.json`.
/// A missing file falls back to the built-in table of the same name, so a
/// directory only needs the tables it overrides.
pub fn load_tables_from_dir(dir: &Path) -> DictionaryResult<DictionaryTables> {
    if !dir.is_dir() {
        return Err(DictionaryError::NotADirectory(dir.to_path_buf()));
    }

    let load = |name: &str| -> DictionaryResult<Dictionary> {
        let path = dir.join(format!("{name}.json"));
        if path.is_file() {
            debug!(path = %path.display(), "loading dictionary");
            load_dictionary_from_file(&path)
        } else {
            debug!(table = name, "no override found, using built-in table");
            builtin_table(name)
        }
    };

    Ok(DictionaryTables {
        american_only: load(AMERICAN_ONLY)?,
        british_only: load(BRITISH_ONLY)?,
        american_to_british_spelling: load(AMERICAN_TO_BRITISH_SPELLING)?,
        american_to_british_titles: load(AMERICAN_TO_BRITISH_TITLES)?,
    })
}

impl DictionaryStore {
    /// Build a store from a directory of JSON tables, see [`load_tables_from_dir`]
    pub fn from_dir(dir: &Path) -> DictionaryResult<Self> {
        Ok(DictionaryStore::from_tables(load_tables_from_dir(dir)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use std::fs;

    #[test]
    fn test_load_dictionary_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("british-only.json");
        fs::write(&path, r#"{"Footie": "soccer", "bad": 1}"#).unwrap();

        let dictionary = load_dictionary_from_file(&path).unwrap();
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.get("footie"), Some("soccer"));
    }

    #[test]
    fn test_load_dictionary_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_dictionary_from_file(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(DictionaryError::Io { .. })));
    }

    #[test]
    fn test_load_tables_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("american-only.json"),
            r#"{"sidewalk": "footpath"}"#,
        )
        .unwrap();

        let tables = load_tables_from_dir(dir.path()).unwrap();
        assert_eq!(tables.american_only.len(), 1);
        assert_eq!(tables.american_only.get("sidewalk"), Some("footpath"));
        assert_eq!(
            tables.american_to_british_spelling.get("favorite"),
            Some("favourite")
        );
        assert_eq!(tables.american_to_british_titles.len(), 6);
    }

    #[test]
    fn test_store_from_dir_derives_reverse_tables() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("american-to-british-spelling.json"),
            r#"{"donut": "doughnut"}"#,
        )
        .unwrap();

        let store = DictionaryStore::from_dir(dir.path()).unwrap();
        let [_, spelling] = store.word_dictionaries(Direction::BritishToAmerican);
        assert_eq!(spelling.len(), 1);
        assert_eq!(spelling.get("doughnut"), Some("donut"));
    }

    #[test]
    fn test_load_tables_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "hello").unwrap();

        assert!(matches!(
            load_tables_from_dir(&file),
            Err(DictionaryError::NotADirectory(_))
        ));
        assert!(matches!(
            load_tables_from_dir(&dir.path().join("missing")),
            Err(DictionaryError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_load_tables_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("british-only.json"), "{ broken").unwrap();

        match load_tables_from_dir(dir.path()) {
            Err(DictionaryError::Json { name, .. }) => {
                assert!(name.ends_with("british-only.json"));
            }
            other => panic!("Expected Json error, got {:?}", other.map(|_| ())),
        }
    }
}
