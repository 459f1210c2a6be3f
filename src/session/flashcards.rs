//! Flashcard session
//!
//! A filtered, shuffled working set with a cursor. Exhausting the deck does
//! not end the session: the working set is rebuilt from the same
//! configuration (re-evaluating the filters against the updated progress)
//! and reshuffled, so the user loops through it indefinitely. The outcome of
//! the final judgment reports the restart for callers that want to surface
//! it instead.

use rand::Rng;

use crate::catalog::{Catalog, WordPair};
use crate::progress::{ProgressStorageError, ProgressStore};
use crate::query::{CategoryFilter, StarFilter, WordQuery};

use super::shuffle;

type Result<T> = std::result::Result<T, ProgressStorageError>;

/// Shown on both card faces when the current filters leave nothing to study
pub const EMPTY_DECK_TEXT: &str = "No words available";

/// Filter and display configuration for a deck
#[derive(Debug, Clone)]
pub struct DeckConfig {
    pub category: CategoryFilter,
    pub star_filter: StarFilter,
    pub hide_known: bool,
    /// Show English on the front instead of Arabic
    pub reverse: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            star_filter: StarFilter::Any,
            hide_known: false,
            reverse: false,
        }
    }
}

/// What the presentation layer shows for the current card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub front: String,
    pub back: String,
    pub stars: u8,
    /// One-based position in the deck; 0 when the deck is empty
    pub position: usize,
    pub deck_size: usize,
}

/// Result of one judgment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JudgeOutcome {
    /// New star rating when the card was marked known
    pub stars: Option<u8>,
    /// Whether this judgment flipped the learned flag on
    pub newly_learned: bool,
    /// The deck ran out and was rebuilt with a fresh shuffle
    pub deck_restarted: bool,
}

/// One flashcard study session. In-memory only.
pub struct FlashcardSession {
    config: DeckConfig,
    cards: Vec<WordPair>,
    current: usize,
    flipped: bool,
}

impl FlashcardSession {
    /// Build the working set from the configuration and shuffle it
    pub fn new<R: Rng>(
        config: DeckConfig,
        catalog: &Catalog,
        progress: &ProgressStore,
        rng: &mut R,
    ) -> Self {
        let mut session = Self {
            config,
            cards: Vec::new(),
            current: 0,
            flipped: false,
        };
        session.rebuild(catalog, progress, rng);
        session
    }

    /// Recompute the working set from the current filters and reshuffle.
    /// Ratings may have changed since the deck was built, so the filters are
    /// re-evaluated from scratch.
    fn rebuild<R: Rng>(&mut self, catalog: &Catalog, progress: &ProgressStore, rng: &mut R) {
        let query = WordQuery::new(catalog, progress);
        let mut cards: Vec<WordPair> = query
            .filtered_words(
                &self.config.category,
                self.config.star_filter,
                self.config.hide_known,
            )
            .into_iter()
            .cloned()
            .collect();
        shuffle(&mut cards, rng);

        self.cards = cards;
        self.current = 0;
        self.flipped = false;
    }

    pub fn current_card(&self) -> Option<&WordPair> {
        self.cards.get(self.current)
    }

    /// Faces and rating for the current card. An empty deck yields the
    /// no-data sentinel on both faces rather than an error.
    pub fn view(&self, progress: &ProgressStore) -> CardView {
        match self.current_card() {
            None => CardView {
                front: EMPTY_DECK_TEXT.to_string(),
                back: EMPTY_DECK_TEXT.to_string(),
                stars: 0,
                position: 0,
                deck_size: 0,
            },
            Some(card) => {
                let (front, back) = if self.config.reverse {
                    (card.english.clone(), card.arabic.clone())
                } else {
                    (card.arabic.clone(), card.english.clone())
                };
                CardView {
                    front,
                    back,
                    stars: progress.stars(&card.arabic),
                    position: self.current + 1,
                    deck_size: self.cards.len(),
                }
            }
        }
    }

    /// Judge the current card and move to the next one.
    ///
    /// A "known" judgment records both progress writes (star increment and
    /// learned flag) through the store's coupling rule; "unknown" writes
    /// nothing. Exhausting the deck rebuilds it in place and keeps going.
    /// Judging an empty deck is a no-op.
    pub fn judge<R: Rng>(
        &mut self,
        known: bool,
        catalog: &Catalog,
        progress: &mut ProgressStore,
        rng: &mut R,
    ) -> Result<JudgeOutcome> {
        let Some(card) = self.current_card() else {
            return Ok(JudgeOutcome {
                stars: None,
                newly_learned: false,
                deck_restarted: false,
            });
        };
        let key = card.arabic.clone();

        let (stars, newly_learned) = if known {
            let outcome = progress.record_known(&key)?;
            (Some(outcome.stars), outcome.newly_learned)
        } else {
            (None, false)
        };

        self.current += 1;
        self.flipped = false;

        let deck_restarted = self.current >= self.cards.len();
        if deck_restarted {
            self.rebuild(catalog, progress, rng);
        }

        Ok(JudgeOutcome {
            stars,
            newly_learned,
            deck_restarted,
        })
    }

    /// Toggle front/back visibility. Purely presentational; resets whenever
    /// the cursor moves.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Swap which language shows first, without touching deck order
    pub fn set_reverse(&mut self, reverse: bool) {
        self.config.reverse = reverse;
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn deck_size(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample_catalog() -> Catalog {
        serde_json::from_value(json!({
            "Greetings": {
                "icon": "👋",
                "words": [
                    { "ar": "مرحبا", "en": "hello" },
                    { "ar": "مع السلامة", "en": "goodbye" }
                ]
            },
            "Food": {
                "icon": "🍞",
                "words": [
                    { "ar": "خبز", "en": "bread" }
                ]
            }
        }))
        .unwrap()
    }

    fn open_store(dir: &TempDir) -> ProgressStore {
        ProgressStore::open(dir.path().to_path_buf()).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn test_known_judgment_raises_stars_and_sets_learned() {
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let mut rng = rng();
        let mut session =
            FlashcardSession::new(DeckConfig::default(), &catalog, &store, &mut rng);

        let key = session.current_card().unwrap().arabic.clone();
        let outcome = session.judge(true, &catalog, &mut store, &mut rng).unwrap();

        assert_eq!(outcome.stars, Some(1));
        assert!(outcome.newly_learned);
        assert_eq!(store.stars(&key), 1);
        assert!(store.is_learned(&key));
    }

    #[test]
    fn test_unknown_judgment_writes_nothing() {
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let mut rng = rng();
        let mut session =
            FlashcardSession::new(DeckConfig::default(), &catalog, &store, &mut rng);

        let key = session.current_card().unwrap().arabic.clone();
        let outcome = session.judge(false, &catalog, &mut store, &mut rng).unwrap();

        assert_eq!(outcome.stars, None);
        assert_eq!(store.stars(&key), 0);
        assert!(!store.is_learned(&key));
        assert_eq!(store.learned_count(), 0);
    }

    #[test]
    fn test_exhausting_the_deck_restarts_it() {
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let mut rng = rng();
        let mut session =
            FlashcardSession::new(DeckConfig::default(), &catalog, &store, &mut rng);
        assert_eq!(session.deck_size(), 3);

        for i in 0..3 {
            let outcome = session.judge(false, &catalog, &mut store, &mut rng).unwrap();
            assert_eq!(outcome.deck_restarted, i == 2);
        }

        // Back at the start of a fresh shuffle, and still going
        assert_eq!(session.deck_size(), 3);
        assert!(session.current_card().is_some());
        assert_eq!(session.view(&store).position, 1);

        for _ in 0..3 {
            session.judge(false, &catalog, &mut store, &mut rng).unwrap();
        }
        assert!(session.current_card().is_some());
    }

    #[test]
    fn test_restart_reapplies_filters_against_new_ratings() {
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.set_stars("مرحبا", 2).unwrap();
        store.set_stars("مع السلامة", 2).unwrap();
        store.set_stars("خبز", 2).unwrap();

        let config = DeckConfig {
            hide_known: true,
            ..DeckConfig::default()
        };
        let mut rng = rng();
        let mut session = FlashcardSession::new(config, &catalog, &store, &mut rng);
        assert_eq!(session.deck_size(), 3);

        // Knowing every card pushes each to 3 stars; the rebuilt deck hides
        // them all
        for _ in 0..3 {
            session.judge(true, &catalog, &mut store, &mut rng).unwrap();
        }
        assert_eq!(session.deck_size(), 0);
        assert!(session.current_card().is_none());
    }

    #[test]
    fn test_empty_deck_views_sentinel_and_judges_as_noop() {
        let catalog = Catalog::default();
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let mut rng = rng();
        let mut session =
            FlashcardSession::new(DeckConfig::default(), &catalog, &store, &mut rng);

        let view = session.view(&store);
        assert_eq!(view.front, EMPTY_DECK_TEXT);
        assert_eq!(view.back, EMPTY_DECK_TEXT);
        assert_eq!(view.position, 0);

        let outcome = session.judge(true, &catalog, &mut store, &mut rng).unwrap();
        assert!(!outcome.deck_restarted);
        assert_eq!(store.learned_count(), 0);
    }

    #[test]
    fn test_reverse_mode_swaps_faces_only() {
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let mut rng = rng();
        let mut session = FlashcardSession::new(
            DeckConfig {
                category: CategoryFilter::Named("Food".into()),
                ..DeckConfig::default()
            },
            &catalog,
            &store,
            &mut rng,
        );

        let view = session.view(&store);
        assert_eq!(view.front, "خبز");
        assert_eq!(view.back, "bread");

        session.set_reverse(true);
        let view = session.view(&store);
        assert_eq!(view.front, "bread");
        assert_eq!(view.back, "خبز");
        assert_eq!(session.deck_size(), 1);
    }

    #[test]
    fn test_flip_resets_on_advance() {
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let mut rng = rng();
        let mut session =
            FlashcardSession::new(DeckConfig::default(), &catalog, &store, &mut rng);

        session.flip();
        assert!(session.is_flipped());
        session.judge(false, &catalog, &mut store, &mut rng).unwrap();
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_category_deck_end_to_end() {
        // Two passes of "known" over the Greetings deck leave both words at
        // two stars and in the learned set
        let catalog = sample_catalog();
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let mut rng = rng();
        let config = DeckConfig {
            category: CategoryFilter::Named("Greetings".into()),
            ..DeckConfig::default()
        };
        let mut session = FlashcardSession::new(config, &catalog, &store, &mut rng);
        assert_eq!(session.deck_size(), 2);

        // First pass
        for _ in 0..2 {
            session.judge(true, &catalog, &mut store, &mut rng).unwrap();
        }
        assert_eq!(store.stars("مرحبا"), 1);
        assert_eq!(store.stars("مع السلامة"), 1);
        assert!(store.is_learned("مرحبا"));
        assert!(store.is_learned("مع السلامة"));

        // Second pass over the restarted deck
        for _ in 0..2 {
            session.judge(true, &catalog, &mut store, &mut rng).unwrap();
        }
        assert_eq!(store.stars("مرحبا"), 2);
        assert_eq!(store.stars("مع السلامة"), 2);
    }
}
