use std::time::Duration;

use super::PieceSeed;

/// Default gravity period.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(300);

/// Tunables for an [`Engine`](super::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// How often the host should call `tick`. Shorter is harder.
    pub tick_interval: Duration,
    /// Seed for the piece sequence; `None` draws a fresh one.
    pub seed: Option<PieceSeed>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            seed: None,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: PieceSeed) -> Self {
        self.seed = Some(seed);
        self
    }
}
