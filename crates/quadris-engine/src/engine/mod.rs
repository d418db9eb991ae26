//! Game state machine and its supporting pieces.
//!
//! - [`Engine`] - owns the grid, the falling piece and the score
//! - [`EngineState`] - idle, running, paused, waiting after a clear, or over
//! - [`EngineEvent`] - notifications the host drains after each call
//! - [`EngineConfig`] - tick interval and piece seed
//! - [`PieceGenerator`] / [`PieceSeed`] - uniform random piece kinds
//! - [`GameStats`] - locked pieces and clear histogram
//!
//! # Host Contract
//!
//! The engine never blocks, sleeps or performs I/O. The host:
//!
//! 1. calls [`Engine::start`]
//! 2. calls [`Engine::tick`] every [`Engine::tick_interval`] while it is `Some`
//! 3. forwards player commands (move, rotate, drop, pause) as they arrive
//! 4. drains [`Engine::drain_events`] and renders from the query methods
//!
//! # Example
//!
//! ```
//! use quadris_engine::{Engine, EngineConfig, EngineEvent};
//!
//! let mut engine = Engine::new(EngineConfig::default());
//! engine.start();
//! assert_eq!(
//!     engine.drain_events().collect::<Vec<_>>(),
//!     [EngineEvent::ScoreChanged(0)]
//! );
//!
//! engine.move_left();
//! engine.rotate_cw();
//! engine.hard_drop();
//!
//! while engine.tick_interval().is_some() {
//!     engine.hard_drop();
//!     engine.tick();
//! }
//! assert!(engine.drain_events().any(|e| e.is_game_over()));
//! ```

pub use self::{
    config::*, event::*, game_engine::*, game_stats::*, piece_generator::*, state::*,
};

mod config;
mod event;
mod game_engine;
mod game_stats;
mod piece_generator;
mod state;
