//! Full round cycle for one game.
//!
//! `Referee` composes the pieces a caller would otherwise wire by hand:
//! interpret the player's text, draw the bot's move (valid rounds only),
//! resolve, apply the result, then narrate. An invalid move still uses up
//! the round.
//!
//! The referee borrows the `GameState` for the duration of one call and
//! keeps nothing afterwards.

mod interpreter;
mod narrator;

pub use interpreter::{Interpretation, InterpretationSource, MoveInterpreter, NoInterpreter};
pub use narrator::{Narrator, PlainNarrator};

use serde::{Deserialize, Serialize};

use crate::core::moves::{Move, RoundOutcome};
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::rules::engine::RoundEngine;
use crate::rules::validator::MoveError;
use crate::session::SessionError;

/// Everything that happened in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Number of the round that was just played.
    pub round: u32,
    /// State after the round was applied.
    pub state: GameState,
    pub user_move: Option<Move>,
    pub bot_move: Option<Move>,
    /// `Draw` for invalid rounds.
    pub outcome: RoundOutcome,
    pub valid_move: bool,
    pub error: Option<MoveError>,
    pub source: InterpretationSource,
    /// Narration; empty until the narrator has run.
    pub message: String,
}

/// Plays rounds against a game state.
pub struct Referee<I = NoInterpreter, N = PlainNarrator> {
    engine: RoundEngine,
    interpreter: I,
    narrator: N,
}

impl Referee {
    /// Referee with direct validation only and plain narration.
    pub fn new(engine: RoundEngine) -> Self {
        Self::with_parts(engine, NoInterpreter, PlainNarrator)
    }
}

impl Default for Referee {
    fn default() -> Self {
        Self::new(RoundEngine::default())
    }
}

impl<I: MoveInterpreter, N: Narrator> Referee<I, N> {
    pub fn with_parts(engine: RoundEngine, interpreter: I, narrator: N) -> Self {
        Self {
            engine,
            interpreter,
            narrator,
        }
    }

    /// Swap in a different interpreter.
    pub fn with_interpreter<J: MoveInterpreter>(self, interpreter: J) -> Referee<J, N> {
        Referee::with_parts(self.engine, interpreter, self.narrator)
    }

    /// Swap in a different narrator.
    pub fn with_narrator<M: Narrator>(self, narrator: M) -> Referee<I, M> {
        Referee::with_parts(self.engine, self.interpreter, narrator)
    }

    #[must_use]
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// Intro line for a game that has not started yet.
    #[must_use]
    pub fn opening(&self, state: &GameState) -> String {
        self.narrator.opening(state)
    }

    /// Play one round from raw player text.
    ///
    /// Returns `SessionError::GameOver` without touching the state if the
    /// game has already finished.
    pub fn play_round(
        &self,
        state: &mut GameState,
        user_text: &str,
        rng: &mut GameRng,
    ) -> Result<RoundReport, SessionError> {
        if state.is_over() {
            return Err(SessionError::GameOver);
        }

        let round = state.round;
        let interpretation = Interpretation::run(user_text, state.user_bomb_used, &self.interpreter);
        let user_move = interpretation.mv();

        let (bot_move, outcome) = match user_move {
            Some(user_move) => {
                let bot_move = self.engine.generate_bot_move(state.bot_bomb_used, rng);
                (Some(bot_move), RoundEngine::resolve(user_move, bot_move))
            }
            None => (None, RoundOutcome::Draw),
        };

        let valid_move = interpretation.is_valid();
        self.engine
            .apply_outcome(state, outcome, user_move, bot_move, valid_move);

        let mut report = RoundReport {
            round,
            state: state.clone(),
            user_move,
            bot_move,
            outcome,
            valid_move,
            error: interpretation.error(),
            source: interpretation.source,
            message: String::new(),
        };
        report.message = self.narrator.narrate(&report);

        Ok(report)
    }
}
