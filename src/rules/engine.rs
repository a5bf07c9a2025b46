//! Round engine: bot moves, resolution, state transitions.
//!
//! A round is played in three steps, all driven by the caller:
//! - `generate_bot_move`: one weighted draw from the bot policy
//! - `resolve`: who took the round
//! - `apply_outcome`: score, bomb and round bookkeeping
//!
//! The engine holds no game state of its own. It mutates the `GameState`
//! it is handed and nothing else, so callers must serialize rounds for the
//! same game.

use crate::core::config::{BotPolicy, RulesConfig};
use crate::core::moves::{Move, RoundOutcome};
use crate::core::rng::GameRng;
use crate::core::state::GameState;

/// Stateless round engine parameterized by the game's rules.
#[derive(Clone, Debug, Default)]
pub struct RoundEngine {
    config: RulesConfig,
}

impl RoundEngine {
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Get the rules configuration.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn policy(&self) -> &BotPolicy {
        &self.config.bot_policy
    }

    /// Draw the bot's move for this round.
    ///
    /// Never returns bomb once `bot_bomb_used` is set.
    pub fn generate_bot_move(&self, bot_bomb_used: bool, rng: &mut GameRng) -> Move {
        let table = self.policy().table(bot_bomb_used);
        let weights: smallvec::SmallVec<[f32; 4]> = table.iter().map(|&(_, w)| w).collect();

        let mv = rng
            .choose_weighted(&weights)
            .map(|i| table[i].0)
            // Policies are validated to have positive mass; keep the draw total anyway.
            .unwrap_or(Move::Rock);

        tracing::debug!(bot_move = %mv, bot_bomb_used, "bot move drawn");
        mv
    }

    /// Decide a round.
    ///
    /// ```
    /// use rps_plus::{Move, RoundEngine, RoundOutcome};
    ///
    /// assert_eq!(RoundEngine::resolve(Move::Paper, Move::Rock), RoundOutcome::User);
    /// assert_eq!(RoundEngine::resolve(Move::Paper, Move::Bomb), RoundOutcome::Bot);
    /// assert_eq!(RoundEngine::resolve(Move::Bomb, Move::Bomb), RoundOutcome::Draw);
    /// ```
    #[must_use]
    pub fn resolve(user_move: Move, bot_move: Move) -> RoundOutcome {
        if user_move == bot_move {
            RoundOutcome::Draw
        } else if user_move.beats(bot_move) {
            RoundOutcome::User
        } else {
            RoundOutcome::Bot
        }
    }

    /// Apply a round's result to `state`.
    ///
    /// - No-op once the game is over.
    /// - Bomb flags and scores change only when `move_was_valid` and a user
    ///   move is present; otherwise `outcome` is ignored.
    /// - The round counter advances either way. Past `max_rounds` the game
    ///   ends and the counter is pinned at `max_rounds`.
    pub fn apply_outcome<'s>(
        &self,
        state: &'s mut GameState,
        outcome: RoundOutcome,
        user_move: Option<Move>,
        bot_move: Option<Move>,
        move_was_valid: bool,
    ) -> &'s mut GameState {
        if state.game_over {
            tracing::debug!(round = state.round, "game already over, ignoring round");
            return state;
        }

        if let (true, Some(user_move)) = (move_was_valid, user_move) {
            if user_move.is_bomb() {
                state.user_bomb_used = true;
            }
            if bot_move.is_some_and(Move::is_bomb) {
                state.bot_bomb_used = true;
            }

            match outcome {
                RoundOutcome::User => state.user_score += 1,
                RoundOutcome::Bot => state.bot_score += 1,
                RoundOutcome::Draw => {}
            }
        }

        state.round += 1;

        if state.round > state.max_rounds {
            state.game_over = true;
            state.round = state.max_rounds;
            tracing::info!(
                user_score = state.user_score,
                bot_score = state.bot_score,
                "game over"
            );
        }

        tracing::debug!(
            round = state.round,
            user_score = state.user_score,
            bot_score = state.bot_score,
            valid = move_was_valid,
            "round applied"
        );

        state
    }
}
