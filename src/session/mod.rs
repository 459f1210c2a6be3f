//! Transient study sessions
//!
//! Quiz and flashcard sessions live in memory only; abandoning one simply
//! drops it. Nothing is persisted mid-session — progress writes happen
//! through the progress store as judgments are recorded.

mod flashcards;
mod quiz;

pub use flashcards::{CardView, DeckConfig, FlashcardSession, JudgeOutcome, EMPTY_DECK_TEXT};
pub use quiz::{
    AdvanceToken, QuizQuestion, QuizSession, Submission, OPTIONS_PER_QUESTION, QUIZ_LENGTH,
};

use rand::Rng;

/// Uniform shuffle of a slice (Fisher–Yates, via `rand`)
///
/// Every permutation is equally likely for an unbiased RNG. Both sessions
/// route their randomization through here.
pub(crate) fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    use rand::seq::SliceRandom;
    items.shuffle(rng);
}
