//! Round narration.
//!
//! `PlainNarrator` produces the fixed one-line summary. Richer narrators
//! (an LLM announcer, say) implement `Narrator` and should fall back to
//! `PlainNarrator` when they have nothing to add.

use super::RoundReport;
use crate::core::state::GameState;

/// Produces human-readable lines for a game.
pub trait Narrator: Send + Sync {
    /// Line for a finished round.
    fn narrate(&self, report: &RoundReport) -> String;

    /// Line announcing a fresh game.
    fn opening(&self, state: &GameState) -> String {
        format!(
            "New game started. Best of {}. Bomb beats all but can only be used once!",
            state.max_rounds
        )
    }
}

/// Deterministic one-line summary.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainNarrator;

impl Narrator for PlainNarrator {
    fn narrate(&self, report: &RoundReport) -> String {
        let user = report.user_move.map_or("invalid", |m| m.as_str());
        let bot = report.bot_move.map_or("n/a", |m| m.as_str());
        format!(
            "Round {} | User move: {} | Bot move: {} | Outcome: {}. Score - You {} : Bot {}.",
            report.round,
            user,
            bot,
            report.outcome,
            report.state.user_score,
            report.state.bot_score,
        )
    }
}
