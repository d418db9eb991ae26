//! Simulation engine for a falling-block puzzle game.
//!
//! - [`core`]: cell values, pieces and the playfield grid
//! - [`engine`]: the game state machine driven by a host loop
//! - [`highscore`]: bounded top-N ledger updated at game over
//!
//! The engine performs no I/O. A host calls [`Engine::tick`] at the cadence
//! reported by [`Engine::tick_interval`], forwards player commands, and drains
//! [`EngineEvent`]s to update its display.

pub use self::{core::*, engine::*, highscore::*};

pub mod core;
pub mod engine;
pub mod highscore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("piece colliding with the board or its bounds")]
pub struct PieceCollisionError;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    #[display("invalid hex: expected 32 characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("invalid hex: {_0:?}")]
    InvalidDigits(#[error(not(source))] String),
}
