//! Per-session game state.
//!
//! ## GameState
//!
//! Everything a game needs between rounds:
//! - Round counter (1-based) and the session's round limit
//! - Scores for both sides
//! - Bomb usage for both sides
//! - Terminal flag
//!
//! The caller owns the state. The engine only reads and transitions it,
//! and never creates or discards one on its own.
//!
//! ## Invariants
//!
//! - `1 <= round <= max_rounds` at all times; once the game is over,
//!   `round == max_rounds`.
//! - Each bomb flag flips false to true at most once.
//! - Once `game_over` is set, nothing changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::DEFAULT_MAX_ROUNDS;
use super::moves::RoundOutcome;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    InProgress,
    /// Terminal and absorbing.
    GameOver,
}

/// A `GameState` that no sequence of rounds could have produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("game must have at least 1 round")]
    ZeroRounds,

    #[error("round {round} is outside 1..={max_rounds}")]
    RoundOutOfRange { round: u32, max_rounds: u32 },

    #[error("finished game must stop at round {max_rounds}, found round {round}")]
    UnclampedGameOver { round: u32, max_rounds: u32 },
}

/// Mutable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current round number (starts at 1).
    pub round: u32,

    /// Rounds in this game. Fixed for the session.
    pub max_rounds: u32,

    pub user_score: u32,
    pub bot_score: u32,

    pub user_bomb_used: bool,
    pub bot_bomb_used: bool,

    /// Set once every round has been played.
    pub game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS)
    }
}

impl GameState {
    /// Fresh state at round 1 with nothing scored or spent.
    ///
    /// ```
    /// use rps_plus::GameState;
    ///
    /// let state = GameState::new(3);
    /// assert_eq!(state.round, 1);
    /// assert!(!state.game_over);
    /// ```
    #[must_use]
    pub fn new(max_rounds: u32) -> Self {
        assert!(max_rounds > 0, "Must have at least 1 round");

        Self {
            round: 1,
            max_rounds,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
            game_over: false,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else {
            GamePhase::InProgress
        }
    }

    /// Overall result, once the game has finished.
    ///
    /// Higher score wins; equal scores are a draw.
    #[must_use]
    pub fn winner(&self) -> Option<RoundOutcome> {
        if !self.game_over {
            return None;
        }
        Some(match self.user_score.cmp(&self.bot_score) {
            std::cmp::Ordering::Greater => RoundOutcome::User,
            std::cmp::Ordering::Less => RoundOutcome::Bot,
            std::cmp::Ordering::Equal => RoundOutcome::Draw,
        })
    }

    /// Rounds still to be played, counting the current one.
    #[must_use]
    pub fn rounds_remaining(&self) -> u32 {
        match self.max_rounds.checked_sub(self.round) {
            Some(left) if !self.game_over => left.saturating_add(1),
            _ => 0,
        }
    }

    /// Check the round bounds a played game always keeps.
    ///
    /// States built through [`GameState::new`] and the engine always pass;
    /// anything decoded from outside should be checked before it is played.
    pub fn check_invariants(&self) -> Result<(), StateError> {
        let (round, max_rounds) = (self.round, self.max_rounds);
        if max_rounds == 0 {
            return Err(StateError::ZeroRounds);
        }
        if round == 0 || round > max_rounds {
            return Err(StateError::RoundOutOfRange { round, max_rounds });
        }
        if self.game_over && round != max_rounds {
            return Err(StateError::UnclampedGameOver { round, max_rounds });
        }
        Ok(())
    }

    /// Encode as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a snapshot produced by [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
