//! Multiple-choice quiz session
//!
//! Up to ten questions sampled from the whole catalog. Each question shows
//! an Arabic prompt and shuffled English options. After an answer the
//! session locks until the presentation layer redeems the advance token —
//! the UI shows feedback for a moment before moving on, and the token ties
//! that deferred step to this session so a callback that outlives its quiz
//! can never touch a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

use crate::catalog::Catalog;

use super::shuffle;

/// Number of questions in a full session; shorter catalogs get one question
/// per word.
pub const QUIZ_LENGTH: usize = 10;

/// Options per question, correct answer included. Questions get fewer when
/// the catalog cannot supply three distinct distractors.
pub const OPTIONS_PER_QUESTION: usize = 4;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(0);

/// One prompt with its shuffled answer options
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    /// Arabic prompt text
    pub prompt: String,
    /// The English translation being asked for
    pub correct: String,
    /// Pairwise-distinct options in display order; contains `correct`
    /// exactly once
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Asking,
    AwaitingAdvance,
    Completed,
}

/// Handle returned by a submission; redeem it to move past the question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceToken {
    session: u64,
    question: usize,
}

/// Outcome of one answer submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub correct: bool,
    pub advance: AdvanceToken,
}

/// One quiz attempt. In-memory only: dropping the session discards it.
pub struct QuizSession {
    id: u64,
    questions: Vec<QuizQuestion>,
    current: usize,
    score: u32,
    phase: Phase,
}

impl QuizSession {
    /// Sample words and build questions. An empty catalog yields an already
    /// completed session.
    pub fn start<R: Rng>(catalog: &Catalog, rng: &mut R) -> Self {
        let mut words: Vec<_> = catalog.all_words().collect();
        shuffle(&mut words, rng);
        words.truncate(QUIZ_LENGTH);

        let questions: Vec<QuizQuestion> = words
            .iter()
            .map(|word| {
                // Distractors come from the distinct English translations of
                // the *other* words, sampled without replacement.
                let mut distractors: Vec<&str> = catalog
                    .all_words()
                    .map(|w| w.english.as_str())
                    .filter(|english| *english != word.english)
                    .collect();
                distractors.sort_unstable();
                distractors.dedup();
                shuffle(&mut distractors, rng);
                distractors.truncate(OPTIONS_PER_QUESTION - 1);

                let mut options: Vec<String> = Vec::with_capacity(OPTIONS_PER_QUESTION);
                options.push(word.english.clone());
                options.extend(distractors.into_iter().map(String::from));
                shuffle(&mut options, rng);

                QuizQuestion {
                    prompt: word.arabic.clone(),
                    correct: word.english.clone(),
                    options,
                }
            })
            .collect();

        let phase = if questions.is_empty() {
            Phase::Completed
        } else {
            Phase::Asking
        };

        Self {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            questions,
            current: 0,
            score: 0,
            phase,
        }
    }

    /// The question currently being asked, `None` once completed
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            Phase::Completed => None,
            _ => self.questions.get(self.current),
        }
    }

    /// Zero-based index of the current question
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Score the selected option against the current question. Locks the
    /// session until the returned token is redeemed; submissions while
    /// locked (or after completion) return `None` and change nothing.
    pub fn submit_answer(&mut self, selected: &str) -> Option<Submission> {
        if self.phase != Phase::Asking {
            return None;
        }
        let question = self.questions.get(self.current)?;

        let correct = selected == question.correct;
        if correct {
            self.score += 1;
        }
        self.phase = Phase::AwaitingAdvance;

        Some(Submission {
            correct,
            advance: AdvanceToken {
                session: self.id,
                question: self.current,
            },
        })
    }

    /// Move past an answered question. A token from another session or from
    /// an already-advanced question is ignored, so a delayed callback fires
    /// harmlessly into whatever session is live.
    pub fn advance(&mut self, token: AdvanceToken) {
        if self.phase != Phase::AwaitingAdvance
            || token.session != self.id
            || token.question != self.current
        {
            return;
        }

        self.current += 1;
        self.phase = if self.current >= self.questions.len() {
            Phase::Completed
        } else {
            Phase::Asking
        };
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of questions in the session
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
