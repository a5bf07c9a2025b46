//! # rps-plus
//!
//! Round-resolution and game-state engine for Rock-Paper-Scissors-Plus:
//! three rounds of rock/paper/scissors where each side also holds a single
//! bomb that beats everything.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned State**: The engine never creates or stores a
//!    `GameState`. It validates input and transitions the state it is
//!    handed.
//!
//! 2. **Errors As Data**: A rejected move is a `MoveError` value, and an
//!    invalid move still consumes its round.
//!
//! 3. **Injectable Randomness**: Every bot draw takes a `GameRng`, so a
//!    seeded game replays exactly.
//!
//! ## Modules
//!
//! - `core`: Moves, RNG, configuration, game state
//! - `rules`: Move validation and the round engine
//! - `referee`: Full round cycle with interpreter and narrator seams
//! - `session`: In-memory session registry with per-session locking

pub mod core;
pub mod rules;
pub mod referee;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BotPolicy, ConfigError, GamePhase, GameRng, GameRngState, GameState, Move, RoundOutcome,
    RulesConfig, StateError,
};

pub use crate::rules::{MoveError, MoveValidator, RoundEngine, Validation};

pub use crate::referee::{
    Interpretation, InterpretationSource, MoveInterpreter, Narrator, NoInterpreter,
    PlainNarrator, Referee, RoundReport,
};

pub use crate::session::{
    Session, SessionError, SessionId, SessionRegistry, SessionSnapshot, SessionStart,
};
