//! The accent dictionary and its persisted forms
//!
//! A [`Dictionary`] maps exact lookup keys (kana readings or kanji
//! expressions) to ordered, de-duplicated candidate lists. It is built once,
//! either by compiling the source dictionary or by reloading one of its
//! derivatives, and is read-only afterwards.

pub mod cache;
pub mod compiler;
pub mod loader;
pub mod snapshot;

pub use compiler::{CompileStats, DictionaryCompiler};
pub use loader::DatabasePaths;

use crate::domain::DatabaseEntry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `path` with `.tmp` appended, the staging name for atomic replacement
pub(crate) fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Lookup key to pronunciation candidates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    entries: IndexMap<String, Vec<DatabaseEntry>>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `entry` under `key`, ignoring exact duplicates.
    ///
    /// Returns whether the entry was added.
    pub(crate) fn insert(&mut self, key: &str, entry: DatabaseEntry) -> bool {
        let candidates = self.entries.entry(key.to_string()).or_default();
        if candidates.contains(&entry) {
            return false;
        }
        candidates.push(entry);
        true
    }

    /// Candidates for an exact key, in insertion order
    pub fn get(&self, key: &str) -> Option<&[DatabaseEntry]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of (key, entry) pairs
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Keys with their candidates, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DatabaseEntry])> {
        self.entries
            .iter()
            .map(|(key, candidates)| (key.as_str(), candidates.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MoraPositions;

    fn entry(kana: &str, accent: &str) -> DatabaseEntry {
        DatabaseEntry::new(
            kana,
            accent,
            MoraPositions::default(),
            MoraPositions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_insert_deduplicates_per_key() {
        let mut dict = Dictionary::new();
        assert!(dict.insert("箸", entry("ハシ", "12")));
        assert!(!dict.insert("箸", entry("ハシ", "12")));
        assert!(dict.insert("箸", entry("ハシ", "01")));
        assert!(dict.insert("ハシ", entry("ハシ", "12")));

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.entry_count(), 3);
        assert_eq!(dict.get("箸").unwrap().len(), 2);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut dict = Dictionary::new();
        dict.insert("橋", entry("ハシ", "12"));
        dict.insert("箸", entry("ハシ", "12"));
        dict.insert("端", entry("ハシ", "01"));
        dict.insert("箸", entry("ハシ", "01"));

        let keys: Vec<&str> = dict.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["橋", "箸", "端"]);

        let accents: Vec<&str> = dict
            .get("箸")
            .unwrap()
            .iter()
            .map(|e| e.accent.as_str())
            .collect();
        assert_eq!(accents, vec!["12", "01"]);
    }

    #[test]
    fn test_missing_key() {
        let dict = Dictionary::new();
        assert!(dict.get("雨").is_none());
        assert!(!dict.contains_key("雨"));
        assert!(dict.is_empty());
    }
}
