//! Domain Entities
//!
//! Core business entities for the flag quiz domain.

use std::collections::BTreeMap;

/// A single (code, name) pair of the flag catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: String,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Immutable set of catalog entries, unique by code.
///
/// Entries are kept sorted by code so that a seeded RNG yields the same
/// selections regardless of how the dataset was ordered on disk. Names are
/// not required to be unique.
#[derive(Debug, Clone, Default)]
pub struct FlagCatalog {
    entries: Vec<CatalogEntry>,
}

impl FlagCatalog {
    /// Build a catalog from a code → name mapping
    pub fn new(codes: BTreeMap<String, String>) -> Self {
        let entries = codes
            .into_iter()
            .map(|(code, name)| CatalogEntry { code, name })
            .collect();
        Self { entries }
    }

    /// Build a catalog from pairs; a repeated code keeps its last name
    pub fn from_pairs<I, C, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        let codes = pairs
            .into_iter()
            .map(|(code, name)| (code.into(), name.into()))
            .collect();
        Self::new(codes)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its code
    pub fn get(&self, code: &str) -> Option<&CatalogEntry> {
        self.entries
            .binary_search_by(|entry| entry.code.as_str().cmp(code))
            .ok()
            .map(|idx| &self.entries[idx])
    }
}

/// A generated quiz question.
///
/// `options` holds `name` exactly once, has no duplicate names, and is in
/// random order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagQuestion {
    /// Code of the flag to show
    pub code: String,
    /// Expected answer
    pub name: String,
    pub options: Vec<String>,
}

impl FlagQuestion {
    /// Position of the correct answer within `options`
    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|option| *option == self.name)
    }
}
