//! Core game types: moves, RNG, configuration, state.
//!
//! Everything here is plain data. The rules that act on it live in
//! `rules`.

pub mod moves;
pub mod rng;
pub mod config;
pub mod state;

pub use moves::{Move, RoundOutcome, UnknownMove};
pub use rng::{GameRng, GameRngState};
pub use config::{BotPolicy, ConfigError, PolicyTable, RulesConfig, DEFAULT_MAX_ROUNDS};
pub use state::{GamePhase, GameState, StateError};
