//! Kalima — vocabulary trainer core
//!
//! Categorized Arabic/English word pairs with per-word mastery tracking
//! (a 0–3 star rating plus a binary "learned" flag), derived word listings,
//! and two transient study sessions: a multiple-choice quiz and a flashcard
//! deck. Progress mutations are persisted immediately as JSON.
//!
//! Rendering and event wiring live outside this crate; everything here takes
//! and returns plain data.

pub mod catalog;
pub mod progress;
pub mod query;
pub mod session;

pub use catalog::{Catalog, CatalogError, CategoryData, WordPair};
pub use progress::{ProgressStore, ProgressStorageError, MAX_STARS};
pub use query::{CategoryFilter, ProgressStats, StarFilter, WordQuery};
