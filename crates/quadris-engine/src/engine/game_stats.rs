use serde::{Deserialize, Serialize};

/// Largest number of rows a single piece can complete at once.
pub const MAX_LINES_PER_LOCK: usize = 4;

/// Per-game counters kept alongside the score.
///
/// The score of a game is its total number of cleared lines; this adds the
/// number of locked pieces and how often each multi-line clear happened.
///
/// # Example
///
/// ```
/// use quadris_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.record_lock(0);
/// stats.record_lock(2);
///
/// assert_eq!(stats.completed_pieces(), 2);
/// assert_eq!(stats.total_cleared_lines(), 2);
/// assert_eq!(stats.line_cleared_counter()[2], 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; MAX_LINES_PER_LOCK + 1],
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; MAX_LINES_PER_LOCK + 1],
        }
    }

    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Histogram of locks by rows cleared; index `n` counts locks that
    /// cleared exactly `n` rows.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; MAX_LINES_PER_LOCK + 1] {
        &self.line_cleared_counter
    }

    /// Records one locked piece that completed `cleared_lines` rows.
    pub fn record_lock(&mut self, cleared_lines: usize) {
        assert!(
            cleared_lines <= MAX_LINES_PER_LOCK,
            "a piece cannot clear {cleared_lines} rows"
        );
        self.completed_pieces += 1;
        self.total_cleared_lines += cleared_lines;
        self.line_cleared_counter[cleared_lines] += 1;
    }
}
