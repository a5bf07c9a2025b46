//! Turning player text into a move.
//!
//! Direct validation is tried first. If that fails, an external
//! `MoveInterpreter` (typically a language-model classifier) may offer a
//! candidate token, which is validated exactly like player input before it
//! is trusted.

use serde::{Deserialize, Serialize};

use crate::core::moves::Move;
use crate::rules::validator::{MoveError, MoveValidator};

/// External classifier for free-form move text.
///
/// Implementations return a candidate token or `None` when the text does
/// not clearly map to a move. Candidates are never trusted unchecked.
pub trait MoveInterpreter: Send + Sync {
    fn interpret(&self, text: &str, bomb_used: bool) -> Option<String>;
}

/// Interpreter that never recognizes anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoInterpreter;

impl MoveInterpreter for NoInterpreter {
    fn interpret(&self, _text: &str, _bomb_used: bool) -> Option<String> {
        None
    }
}

impl<F> MoveInterpreter for F
where
    F: Fn(&str, bool) -> Option<String> + Send + Sync,
{
    fn interpret(&self, text: &str, bomb_used: bool) -> Option<String> {
        self(text, bomb_used)
    }
}

/// Where an accepted move came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpretationSource {
    Direct,
    Interpreter,
    Failed,
}

/// Result of interpreting player text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interpretation {
    pub result: Result<Move, MoveError>,
    pub source: InterpretationSource,
}

impl Interpretation {
    /// Run the two-step pipeline.
    ///
    /// On failure the reported error is the interpreter candidate's if one
    /// was offered, otherwise the direct validation error.
    pub fn run<I: MoveInterpreter + ?Sized>(
        text: &str,
        bomb_used: bool,
        interpreter: &I,
    ) -> Self {
        let direct_err = match MoveValidator::validate(Some(text), bomb_used) {
            Ok(mv) => {
                return Self {
                    result: Ok(mv),
                    source: InterpretationSource::Direct,
                }
            }
            Err(e) => e,
        };

        let error = match interpreter.interpret(text, bomb_used) {
            Some(candidate) => match MoveValidator::validate(Some(candidate.as_str()), bomb_used) {
                Ok(mv) => {
                    return Self {
                        result: Ok(mv),
                        source: InterpretationSource::Interpreter,
                    }
                }
                Err(e) => {
                    tracing::warn!(%candidate, error = %e, "interpreter returned unusable move");
                    e
                }
            },
            None => direct_err,
        };

        tracing::debug!(error = %error, "move rejected");
        Self {
            result: Err(error),
            source: InterpretationSource::Failed,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    #[must_use]
    pub fn mv(&self) -> Option<Move> {
        self.result.ok()
    }

    #[must_use]
    pub fn error(&self) -> Option<MoveError> {
        self.result.err()
    }
}
