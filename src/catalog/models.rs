//! Data model for the vocabulary catalog

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single vocabulary entry
///
/// The Arabic string doubles as the word's unique key for progress tracking;
/// duplicate Arabic entries share a single progress record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    #[serde(rename = "ar")]
    pub arabic: String,
    #[serde(rename = "en")]
    pub english: String,
}

impl WordPair {
    pub fn new(arabic: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            arabic: arabic.into(),
            english: english.into(),
        }
    }
}

/// One category's display glyph and ordered word list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryData {
    pub icon: String,
    pub words: Vec<WordPair>,
}

/// The full vocabulary, read-only at runtime
///
/// Categories keep the order they have in the source JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<String, CategoryData>,
}

impl Catalog {
    /// Load a catalog from a JSON file: an object mapping category name to
    /// `{ "icon": …, "words": [{ "ar": …, "en": … }, …] }`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let catalog = serde_json::from_str(&content)?;
        Ok(catalog)
    }

    /// Look up a category by name
    pub fn get(&self, name: &str) -> Option<&CategoryData> {
        self.categories.get(name)
    }

    /// Iterate categories in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryData)> {
        self.categories.iter().map(|(name, data)| (name.as_str(), data))
    }

    /// Every word, concatenated in catalog order
    pub fn all_words(&self) -> impl Iterator<Item = &WordPair> {
        self.categories.values().flat_map(|data| data.words.iter())
    }

    /// Total number of words across all categories
    pub fn total_words(&self) -> usize {
        self.categories.values().map(|data| data.words.len()).sum()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
