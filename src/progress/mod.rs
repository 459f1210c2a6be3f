//! Per-word learning progress
//!
//! Two independently persisted structures: the set of words marked "learned"
//! and a 0–3 star rating per word. They are loosely coupled by a single rule:
//! a "known" judgment in a flashcard session raises the rating *and* sets the
//! learned flag. Nothing ever syncs the other way.

mod storage;

pub use storage::{KnownOutcome, ProgressStorageError, ProgressStore, MAX_STARS};
