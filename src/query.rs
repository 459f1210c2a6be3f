//! Derived word listings and progress statistics
//!
//! Pure reads over the catalog and the progress store. The presentation
//! layer and the study sessions both consume these.

use std::cmp::Reverse;

use crate::catalog::{Catalog, WordPair};
use crate::progress::{ProgressStore, MAX_STARS};

/// Which categories a listing draws from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Named(String),
}

impl CategoryFilter {
    /// `None` or the literal `"all"` selects every category
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            None | Some("all") => CategoryFilter::All,
            Some(name) => CategoryFilter::Named(name.to_string()),
        }
    }
}

/// Star-rating filter: either no restriction or an exact level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFilter {
    Any,
    Exactly(u8),
}

/// Matches for one category in a search result
#[derive(Debug)]
pub struct CategoryMatches<'a> {
    pub name: &'a str,
    pub icon: &'a str,
    pub words: Vec<&'a WordPair>,
}

/// Aggregate learning statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStats {
    pub total: usize,
    pub learned: usize,
    /// Rounded percentage; defined as 0 for an empty catalog
    pub percent: u32,
}

/// Read-only query service over a catalog and the current progress
pub struct WordQuery<'a> {
    catalog: &'a Catalog,
    progress: &'a ProgressStore,
}

impl<'a> WordQuery<'a> {
    pub fn new(catalog: &'a Catalog, progress: &'a ProgressStore) -> Self {
        Self { catalog, progress }
    }

    /// Every word, concatenated in catalog order
    pub fn all_words(&self) -> Vec<&'a WordPair> {
        self.catalog.all_words().collect()
    }

    /// Words of one category, or everything. An unknown category name yields
    /// an empty list, not an error.
    pub fn words_for_category(&self, filter: &CategoryFilter) -> Vec<&'a WordPair> {
        match filter {
            CategoryFilter::All => self.all_words(),
            CategoryFilter::Named(name) => self
                .catalog
                .get(name)
                .map(|data| data.words.iter().collect())
                .unwrap_or_default(),
        }
    }

    /// Category listing narrowed by rating. The star filter keeps words
    /// whose rating equals the level exactly; `hide_known` then drops
    /// fully rated (3-star) words. Both are independently toggleable.
    pub fn filtered_words(
        &self,
        category: &CategoryFilter,
        star_filter: StarFilter,
        hide_known: bool,
    ) -> Vec<&'a WordPair> {
        let mut words = self.words_for_category(category);

        if let StarFilter::Exactly(level) = star_filter {
            words.retain(|w| self.progress.stars(&w.arabic) == level);
        }

        if hide_known {
            words.retain(|w| self.progress.stars(&w.arabic) < MAX_STARS);
        }

        words
    }

    /// Per-category substring search: case-insensitive against English,
    /// raw (no case folding) against Arabic. Categories without a match are
    /// omitted; an empty query returns the full catalog structure.
    pub fn search(&self, query: &str) -> Vec<CategoryMatches<'a>> {
        let query = query.trim();
        let query_lower = query.to_lowercase();

        self.catalog
            .iter()
            .filter_map(|(name, data)| {
                let words: Vec<&WordPair> = data
                    .words
                    .iter()
                    .filter(|w| {
                        query.is_empty()
                            || w.arabic.contains(query)
                            || w.english.to_lowercase().contains(&query_lower)
                    })
                    .collect();

                if words.is_empty() {
                    None
                } else {
                    Some(CategoryMatches {
                        name,
                        icon: &data.icon,
                        words,
                    })
                }
            })
            .collect()
    }

    /// Filtered listing for the study overview: optionally narrowed by a
    /// search query, sorted highest-rated first (catalog order breaks ties).
    pub fn overview(
        &self,
        category: &CategoryFilter,
        star_filter: StarFilter,
        hide_known: bool,
        query: &str,
    ) -> Vec<&'a WordPair> {
        let mut words = self.filtered_words(category, star_filter, hide_known);

        let query = query.trim();
        if !query.is_empty() {
            let query_lower = query.to_lowercase();
            words.retain(|w| {
                w.arabic.contains(query) || w.english.to_lowercase().contains(&query_lower)
            });
        }

        words.sort_by_key(|w| Reverse(self.progress.stars(&w.arabic)));
        words
    }

    /// Overall counts and rounded completion percentage
    pub fn stats(&self) -> ProgressStats {
        let total = self.catalog.total_words();
        let learned = self.progress.learned_count();
        let percent = if total == 0 {
            0
        } else {
            ((learned as f64 / total as f64) * 100.0).round() as u32
        };

        ProgressStats {
            total,
            learned,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample_catalog() -> Catalog {
        serde_json::from_value(json!({
            "Greetings": {
                "icon": "👋",
                "words": [
                    { "ar": "مرحبا", "en": "hello" },
                    { "ar": "مع السلامة", "en": "goodbye" },
                    { "ar": "صباح الخير", "en": "good morning" }
                ]
            },
            "Food": {
                "icon": "🍞",
                "words": [
                    { "ar": "خبز", "en": "bread" },
                    { "ar": "ماء", "en": "water" }
                ]
            }
        }))
        .unwrap()
    }

    fn open_store(dir: &TempDir) -> ProgressStore {
        ProgressStore::open(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_words_for_unknown_category_is_empty() {
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let query = WordQuery::new(&catalog, &store);

        assert!(query
            .words_for_category(&CategoryFilter::Named("Animals".into()))
            .is_empty());
        assert_eq!(query.words_for_category(&CategoryFilter::All).len(), 5);
    }

    #[test]
    fn test_star_filter_matches_exact_level_only() {
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.set_stars("مرحبا", 2).unwrap();
        store.set_stars("خبز", 2).unwrap();
        store.set_stars("ماء", 3).unwrap();

        let query = WordQuery::new(&catalog, &store);
        let words = query.filtered_words(&CategoryFilter::All, StarFilter::Exactly(2), false);
        let english: Vec<&str> = words.iter().map(|w| w.english.as_str()).collect();

        assert_eq!(english, vec!["hello", "bread"]);
    }

    #[test]
    fn test_hide_known_drops_exactly_three_star_words() {
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.set_stars("مرحبا", 3).unwrap();
        store.set_stars("خبز", 2).unwrap();

        let query = WordQuery::new(&catalog, &store);
        let words = query.filtered_words(&CategoryFilter::All, StarFilter::Any, true);
        let english: Vec<&str> = words.iter().map(|w| w.english.as_str()).collect();

        assert_eq!(english, vec!["goodbye", "good morning", "bread", "water"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_english() {
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let query = WordQuery::new(&catalog, &store);

        let matches = query.search("BREAD");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Food");
        assert_eq!(matches[0].words.len(), 1);
        assert_eq!(matches[0].words[0].english, "bread");
    }

    #[test]
    fn test_search_matches_arabic_substring() {
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let query = WordQuery::new(&catalog, &store);

        let matches = query.search("مرحبا");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Greetings");
        assert_eq!(matches[0].words.len(), 1);
    }

    #[test]
    fn test_empty_search_returns_full_catalog() {
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let query = WordQuery::new(&catalog, &store);

        let matches = query.search("   ");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].words.len(), 3);
        assert_eq!(matches[1].words.len(), 2);
    }

    #[test]
    fn test_stats_on_empty_catalog_is_zero_percent() {
        let catalog = Catalog::default();
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let query = WordQuery::new(&catalog, &store);

        let stats = query.stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.percent, 0);
    }

    #[test]
    fn test_stats_percent_is_rounded() {
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.toggle_learned("مرحبا").unwrap();

        let query = WordQuery::new(&catalog, &store);
        let stats = query.stats();

        // 1 of 5 words
        assert_eq!(stats.learned, 1);
        assert_eq!(stats.percent, 20);
    }

    #[test]
    fn test_overview_sorts_by_stars_descending() {
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.set_stars("خبز", 3).unwrap();
        store.set_stars("مع السلامة", 1).unwrap();

        let query = WordQuery::new(&catalog, &store);
        let words = query.overview(&CategoryFilter::All, StarFilter::Any, false, "");
        let english: Vec<&str> = words.iter().map(|w| w.english.as_str()).collect();

        // bread (3), goodbye (1), then the zero-star words in catalog order
        assert_eq!(
            english,
            vec!["bread", "goodbye", "hello", "good morning", "water"]
        );
    }
}
