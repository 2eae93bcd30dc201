//! Status synonym table
//!
//! Maps raw backend status codes onto canonical step labels. Lookups are
//! case-insensitive on the raw code; several codes may share one label.

use std::collections::HashMap;

/// Raw status code -> canonical step label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSynonymTable {
    entries: HashMap<String, String>,
}

impl StatusSynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(raw code, label)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (raw, label) in pairs {
            table.insert(raw.as_ref(), label);
        }
        table
    }

    /// Add or replace a mapping. The raw code is stored uppercased.
    pub fn insert(&mut self, raw: &str, label: impl Into<String>) {
        self.entries.insert(raw.to_uppercase(), label.into());
    }

    /// Canonical label for a raw status, if one is mapped
    pub fn canonical(&self, raw: &str) -> Option<&str> {
        self.entries.get(&raw.to_uppercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All raw codes mapping to the given label, sorted
    pub fn codes_for(&self, label: &str) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, l)| labels_match(l, label))
            .map(|(raw, _)| raw.as_str())
            .collect();
        codes.sort_unstable();
        codes
    }
}

/// Case-insensitive label comparison
pub(crate) fn labels_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
