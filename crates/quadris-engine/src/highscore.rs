//! Top-N high-score ledger.
//!
//! The ledger is a pure value; reading and writing it is the host's job.
//! It serializes as a JSON array of `[score, "name"]` pairs, best first.

use serde::{Deserialize, Serialize};

/// Maximum number of entries a ledger keeps.
pub const HIGHSCORE_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, String)", into = "(usize, String)")]
pub struct HighscoreEntry {
    score: usize,
    name: String,
}

impl From<(usize, String)> for HighscoreEntry {
    fn from((score, name): (usize, String)) -> Self {
        Self { score, name }
    }
}

impl From<HighscoreEntry> for (usize, String) {
    fn from(entry: HighscoreEntry) -> Self {
        (entry.score, entry.name)
    }
}

impl HighscoreEntry {
    #[must_use]
    pub fn new(score: usize, name: impl Into<String>) -> Self {
        Self {
            score,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Best scores, highest first, at most [`HIGHSCORE_CAPACITY`] of them.
///
/// Entries with equal scores keep the order they were added in, so an older
/// entry outranks a newer one with the same score.
///
/// # Example
///
/// ```
/// use quadris_engine::{HighscoreEntry, HighscoreLedger};
///
/// let mut ledger = HighscoreLedger::new();
/// assert_eq!(ledger.insert(HighscoreEntry::new(12, "ada")), Some(0));
/// assert_eq!(ledger.insert(HighscoreEntry::new(30, "bob")), Some(0));
/// assert_eq!(ledger.entries()[1].name(), "ada");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<HighscoreEntry>", into = "Vec<HighscoreEntry>")]
pub struct HighscoreLedger {
    entries: Vec<HighscoreEntry>,
}

impl From<Vec<HighscoreEntry>> for HighscoreLedger {
    /// Sorts descending (stable) and keeps the best [`HIGHSCORE_CAPACITY`].
    fn from(mut entries: Vec<HighscoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(HIGHSCORE_CAPACITY);
        Self { entries }
    }
}

impl From<HighscoreLedger> for Vec<HighscoreEntry> {
    fn from(ledger: HighscoreLedger) -> Self {
        ledger.entries
    }
}

impl HighscoreLedger {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[HighscoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= HIGHSCORE_CAPACITY
    }

    /// Lowest score on the ledger, if any.
    #[must_use]
    pub fn min_score(&self) -> Option<usize> {
        self.entries.last().map(HighscoreEntry::score)
    }

    /// Returns true if `score` would enter the ledger: there is a free slot or
    /// it beats the current minimum.
    #[must_use]
    pub fn qualifies(&self, score: usize) -> bool {
        !self.is_full() || self.min_score().is_some_and(|min| score > min)
    }

    /// Adds `entry` if it qualifies and returns its rank (0 is best).
    pub fn insert(&mut self, entry: HighscoreEntry) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }
        let rank = self.entries.partition_point(|e| e.score >= entry.score);
        self.entries.insert(rank, entry);
        self.entries.truncate(HIGHSCORE_CAPACITY);
        Some(rank)
    }
}
