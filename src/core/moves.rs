//! Moves and round outcomes.
//!
//! ## Move
//!
//! The four playable tokens. Parsing trims surrounding whitespace and
//! ignores case; the canonical form is the lowercase token.
//!
//! ## RoundOutcome
//!
//! Who took a round: the user, the bot, or nobody.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A playable move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// Single-use per side per game. Beats every other move.
    Bomb,
}

impl Move {
    /// All moves in canonical order.
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// The three moves available once a side has spent its bomb.
    pub const BASIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Canonical lowercase token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Move::Bomb)
    }

    /// The basic move this one defeats, or `None` for bomb.
    #[must_use]
    pub const fn prey(self) -> Option<Move> {
        match self {
            Move::Rock => Some(Move::Scissors),
            Move::Scissors => Some(Move::Paper),
            Move::Paper => Some(Move::Rock),
            Move::Bomb => None,
        }
    }

    /// Check if this move beats `other`.
    ///
    /// Bomb beats everything except another bomb. Among the basic moves the
    /// relation is rock > scissors > paper > rock.
    ///
    /// ```
    /// use rps_plus::Move;
    ///
    /// assert!(Move::Rock.beats(Move::Scissors));
    /// assert!(Move::Bomb.beats(Move::Paper));
    /// assert!(!Move::Bomb.beats(Move::Bomb));
    /// ```
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        match (self, other) {
            (Move::Bomb, Move::Bomb) => false,
            (Move::Bomb, _) => true,
            (_, Move::Bomb) => false,
            _ => self.prey() == Some(other),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token is not one of the four moves.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown move {0:?}")]
pub struct UnknownMove(pub String);

impl FromStr for Move {
    type Err = UnknownMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            "bomb" => Ok(Move::Bomb),
            _ => Err(UnknownMove(normalized)),
        }
    }
}

/// Result of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    User,
    Bot,
    Draw,
}

impl RoundOutcome {
    /// Swap the roles of user and bot.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            RoundOutcome::User => RoundOutcome::Bot,
            RoundOutcome::Bot => RoundOutcome::User,
            RoundOutcome::Draw => RoundOutcome::Draw,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundOutcome::User => "user",
            RoundOutcome::Bot => "bot",
            RoundOutcome::Draw => "draw",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
