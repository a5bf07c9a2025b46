//! Move validation.
//!
//! Checks run in order and stop at the first failure:
//! 1. Absent or empty input → `NoMoveProvided`
//! 2. Not one of the four tokens (after trim + lowercase) → `InvalidMove`
//! 3. Bomb when that side has already spent it → `BombAlreadyUsed`
//!
//! The same check is applied to raw player input and to any candidate token
//! produced by an interpreter.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::moves::Move;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("No move provided")]
    NoMoveProvided,

    #[error("Invalid move")]
    InvalidMove,

    #[error("Bomb already used")]
    BombAlreadyUsed,
}

/// Stateless move validator.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveValidator;

impl MoveValidator {
    /// Normalize and validate a raw move token.
    ///
    /// ```
    /// use rps_plus::{Move, MoveError, MoveValidator};
    ///
    /// assert_eq!(MoveValidator::validate(Some("  ROCK "), false), Ok(Move::Rock));
    /// assert_eq!(MoveValidator::validate(Some("bomb"), true), Err(MoveError::BombAlreadyUsed));
    /// assert_eq!(MoveValidator::validate(None, false), Err(MoveError::NoMoveProvided));
    /// ```
    pub fn validate(raw: Option<&str>, bomb_used: bool) -> Result<Move, MoveError> {
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(MoveError::NoMoveProvided),
        };

        let mv: Move = raw.parse().map_err(|_| MoveError::InvalidMove)?;

        if mv.is_bomb() && bomb_used {
            return Err(MoveError::BombAlreadyUsed);
        }

        Ok(mv)
    }
}

/// Validation result as a flat record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub accepted: bool,
    #[serde(rename = "move")]
    pub mv: Option<Move>,
    pub error: Option<MoveError>,
}

impl From<Result<Move, MoveError>> for Validation {
    fn from(result: Result<Move, MoveError>) -> Self {
        match result {
            Ok(mv) => Self {
                accepted: true,
                mv: Some(mv),
                error: None,
            },
            Err(error) => Self {
                accepted: false,
                mv: None,
                error: Some(error),
            },
        }
    }
}
