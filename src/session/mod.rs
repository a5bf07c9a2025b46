//! In-memory session registry.
//!
//! Maps a `SessionId` to one game. Rounds for the same session are
//! serialized behind a per-session lock; different sessions never contend
//! beyond the brief map lookup. Nothing here is durable: use
//! [`SessionRegistry::snapshot`] and [`SessionRegistry::restore`] to move
//! sessions in and out of external storage.

mod registry;

pub use registry::{Session, SessionRegistry, SessionSnapshot, SessionStart};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::core::state::StateError;

/// Opaque session key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a new random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Errors from playing or managing sessions.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Game already finished.")]
    GameOver,

    #[error("session snapshot failed: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("session snapshot rejected: {0}")]
    InvalidState(#[from] StateError),
}
