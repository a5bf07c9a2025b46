//! Game configuration.
//!
//! - `BotPolicy`: the discrete distributions the bot draws its move from
//! - `RulesConfig`: round count plus bot policy
//!
//! Both default to the standard game: three rounds, and a bot that plays
//! rock/paper/scissors at 0.3 each and bomb at 0.1 until its bomb is spent.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::moves::Move;

/// Standard number of rounds in a game.
pub const DEFAULT_MAX_ROUNDS: u32 = 3;

/// Rejected configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_rounds must be at least 1")]
    ZeroRounds,

    #[error("weight for {mv} must be finite and non-negative, got {weight}")]
    BadWeight { mv: Move, weight: f32 },

    #[error("policy table has no positive weight")]
    EmptyTable,

    #[error("policy table lists {0} more than once")]
    DuplicateMove(Move),

    #[error("disarmed policy table must not contain bomb")]
    BombAfterUse,
}

/// Weighted move table. At most four entries, one per move.
pub type PolicyTable = SmallVec<[(Move, f32); 4]>;

/// Bot move distribution.
///
/// `armed` is used while the bot still holds its bomb, `disarmed` after.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBotPolicy")]
pub struct BotPolicy {
    armed: PolicyTable,
    disarmed: PolicyTable,
}

#[derive(Deserialize)]
struct RawBotPolicy {
    armed: PolicyTable,
    disarmed: PolicyTable,
}

impl TryFrom<RawBotPolicy> for BotPolicy {
    type Error = ConfigError;

    fn try_from(raw: RawBotPolicy) -> Result<Self, Self::Error> {
        Self::new(raw.armed, raw.disarmed)
    }
}

impl BotPolicy {
    /// Build a policy from two tables, validating both.
    pub fn new(armed: PolicyTable, disarmed: PolicyTable) -> Result<Self, ConfigError> {
        check_table(&armed)?;
        check_table(&disarmed)?;
        if disarmed.iter().any(|&(mv, w)| mv.is_bomb() && w > 0.0) {
            return Err(ConfigError::BombAfterUse);
        }
        Ok(Self { armed, disarmed })
    }

    /// The table to draw from given the bot's bomb status.
    #[must_use]
    pub fn table(&self, bomb_used: bool) -> &[(Move, f32)] {
        if bomb_used {
            &self.disarmed
        } else {
            &self.armed
        }
    }
}

impl Default for BotPolicy {
    fn default() -> Self {
        Self {
            armed: SmallVec::from_slice(&[
                (Move::Rock, 0.3),
                (Move::Paper, 0.3),
                (Move::Scissors, 0.3),
                (Move::Bomb, 0.1),
            ]),
            disarmed: Move::BASIC.iter().map(|&mv| (mv, 1.0)).collect(),
        }
    }
}

fn check_table(table: &[(Move, f32)]) -> Result<(), ConfigError> {
    for (i, &(mv, weight)) in table.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ConfigError::BadWeight { mv, weight });
        }
        if table[..i].iter().any(|&(seen, _)| seen == mv) {
            return Err(ConfigError::DuplicateMove(mv));
        }
    }
    if table.iter().map(|&(_, w)| w).sum::<f32>() <= 0.0 {
        return Err(ConfigError::EmptyTable);
    }
    Ok(())
}

/// Rules for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRulesConfig")]
pub struct RulesConfig {
    /// Rounds per game (default: 3).
    pub max_rounds: u32,

    /// Bot move distribution.
    pub bot_policy: BotPolicy,
}

#[derive(Deserialize)]
struct RawRulesConfig {
    max_rounds: u32,
    #[serde(default)]
    bot_policy: BotPolicy,
}

impl TryFrom<RawRulesConfig> for RulesConfig {
    type Error = ConfigError;

    fn try_from(raw: RawRulesConfig) -> Result<Self, Self::Error> {
        Ok(Self::new()
            .with_max_rounds(raw.max_rounds)?
            .with_policy(raw.bot_policy))
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            bot_policy: BotPolicy::default(),
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds.
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Result<Self, ConfigError> {
        if max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        self.max_rounds = max_rounds;
        Ok(self)
    }

    /// Replace the bot policy.
    #[must_use]
    pub fn with_policy(mut self, policy: BotPolicy) -> Self {
        self.bot_policy = policy;
        self
    }
}
