use serde::{Deserialize, Serialize};

/// Phase of the game state machine.
///
/// - `Idle` → `Running` on `start`
/// - `Running` ↔ `Paused` on `toggle_pause`
/// - `Running` → `LineClearWait` when a landed piece completes rows
/// - `LineClearWait` → `Running` on the next tick, which spawns a piece
/// - `Running` → `GameOver` when a new piece has no room to spawn
///
/// `start` leaves every state except `Paused` for a fresh `Running` game.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
pub enum EngineState {
    #[default]
    Idle,
    Running,
    Paused,
    LineClearWait,
    GameOver,
}

impl EngineState {
    /// Returns true while the host should keep calling `tick`.
    #[must_use]
    pub const fn is_ticking(self) -> bool {
        matches!(self, EngineState::Running | EngineState::LineClearWait)
    }
}
