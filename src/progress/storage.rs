//! Progress storage implementation
//!
//! Two JSON files in the data directory:
//! - `learned_words.json` — array of Arabic keys marked learned
//! - `word_stars.json`    — object mapping Arabic key to a 0–3 rating
//!
//! Every mutation rewrites the affected file in full. Missing or malformed
//! files fall back to empty defaults at startup; a broken file is logged,
//! never fatal.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Highest star rating a word can reach
pub const MAX_STARS: u8 = 3;

const LEARNED_FILE: &str = "learned_words.json";
const STARS_FILE: &str = "word_stars.json";

#[derive(Error, Debug)]
pub enum ProgressStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, ProgressStorageError>;

/// Result of recording a "known" judgment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownOutcome {
    /// Star rating after the increment
    pub stars: u8,
    /// Whether this judgment flipped the learned flag on
    pub newly_learned: bool,
}

/// Persistent store for learned flags and star ratings
///
/// All read operations are total: absent keys read as unlearned / zero stars.
pub struct ProgressStore {
    data_dir: PathBuf,
    learned: BTreeSet<String>,
    stars: BTreeMap<String, u8>,
}

impl ProgressStore {
    /// Open the store, creating the data directory if needed
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;

        let learned: BTreeSet<String> = load_or_default(&data_dir.join(LEARNED_FILE));
        let stars: BTreeMap<String, u8> = load_or_default(&data_dir.join(STARS_FILE));

        // A foreign writer may have left out-of-range ratings behind
        let stars = stars
            .into_iter()
            .map(|(key, value)| (key, value.min(MAX_STARS)))
            .collect();

        Ok(Self {
            data_dir,
            learned,
            stars,
        })
    }

    fn learned_file(&self) -> PathBuf {
        self.data_dir.join(LEARNED_FILE)
    }

    fn stars_file(&self) -> PathBuf {
        self.data_dir.join(STARS_FILE)
    }

    // ===== Learned flag =====

    pub fn is_learned(&self, key: &str) -> bool {
        self.learned.contains(key)
    }

    /// Insert the key if absent, remove it if present. Returns the new
    /// membership and persists immediately.
    pub fn toggle_learned(&mut self, key: &str) -> Result<bool> {
        if !self.learned.remove(key) {
            self.learned.insert(key.to_string());
        }
        self.save_learned()?;
        Ok(self.learned.contains(key))
    }

    pub fn learned_count(&self) -> usize {
        self.learned.len()
    }

    // ===== Star ratings =====

    /// Current rating, 0 when the key has never been rated
    pub fn stars(&self, key: &str) -> u8 {
        self.stars.get(key).copied().unwrap_or(0)
    }

    /// Set the rating, clamped to 0..=3, and persist
    pub fn set_stars(&mut self, key: &str, value: u8) -> Result<()> {
        self.stars.insert(key.to_string(), value.min(MAX_STARS));
        self.save_stars()
    }

    /// Raise the rating by one, capped at 3. Returns the resulting value.
    pub fn increment_stars(&mut self, key: &str) -> Result<u8> {
        let current = self.stars(key);
        if current < MAX_STARS {
            self.set_stars(key, current + 1)?;
        }
        Ok(self.stars(key))
    }

    /// Record a "known" judgment: the one place the two structures are
    /// written together. Raises the rating and sets the learned flag if it
    /// was not set; both writes persist. Unlearning a word never resets its
    /// stars, and lowering stars never clears the learned flag.
    pub fn record_known(&mut self, key: &str) -> Result<KnownOutcome> {
        let stars = self.increment_stars(key)?;
        let newly_learned = if self.is_learned(key) {
            false
        } else {
            self.toggle_learned(key)?;
            true
        };
        Ok(KnownOutcome {
            stars,
            newly_learned,
        })
    }

    // ===== Persistence =====

    fn save_learned(&self) -> Result<()> {
        save_json(&self.learned_file(), &self.learned)
    }

    fn save_stars(&self) -> Result<()> {
        save_json(&self.stars_file(), &self.stars)
    }
}

fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a JSON file, falling back to the default when the file is absent,
/// unreadable, or malformed.
fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        return T::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Failed to read progress file {:?}: {}", path, e);
            return T::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Ignoring malformed progress file {:?}: {}", path, e);
            T::default()
        }
    }
}
