use serde::{Deserialize, Serialize};

/// Notification from the engine to its host.
///
/// Events are queued in the order they happen and handed out by
/// [`Engine::drain_events`](super::Engine::drain_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
pub enum EngineEvent {
    /// Total lines cleared so far. Sent on start and after every clear.
    ScoreChanged(usize),
    Paused,
    Resumed,
    /// The board topped out. Carries the final score and is sent once per game.
    GameOver(usize),
}

impl EngineEvent {
    /// Returns the score carried by the event, if any.
    #[must_use]
    pub const fn score(self) -> Option<usize> {
        match self {
            EngineEvent::ScoreChanged(score) | EngineEvent::GameOver(score) => Some(score),
            EngineEvent::Paused | EngineEvent::Resumed => None,
        }
    }
}
