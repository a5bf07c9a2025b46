//! Session storage with per-session mutual exclusion.

use im::Vector;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{SessionError, SessionId};
use crate::core::rng::{GameRng, GameRngState};
use crate::core::state::GameState;
use crate::referee::{MoveInterpreter, Narrator, NoInterpreter, PlainNarrator, Referee, RoundReport};
use crate::rules::engine::RoundEngine;

/// One game in progress (or finished and not yet removed).
#[derive(Clone, Debug)]
pub struct Session {
    pub state: GameState,
    rng: GameRng,
    history: Vector<RoundReport>,
}

impl Session {
    fn new(max_rounds: u32, rng: GameRng) -> Self {
        Self {
            state: GameState::new(max_rounds),
            rng,
            history: Vector::new(),
        }
    }

    /// Rounds played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundReport> {
        &self.history
    }

    /// Rounds in which the player's move was rejected.
    #[must_use]
    pub fn invalid_rounds(&self) -> usize {
        self.history.iter().filter(|r| !r.valid_move).count()
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.clone(),
            rng: self.rng.state(),
            history: self.history.clone(),
        }
    }
}

/// Serializable copy of a session, RNG position included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: GameState,
    pub rng: GameRngState,
    pub history: Vector<RoundReport>,
}

impl SessionSnapshot {
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// A freshly started game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStart {
    pub id: SessionId,
    pub state: GameState,
    /// Narrator's intro line.
    pub message: String,
}

/// Registry of live sessions.
///
/// The map lock is held only to look up or insert a session handle; rounds
/// run under that session's own lock.
pub struct SessionRegistry<I, N> {
    referee: Referee<I, N>,
    root_rng: Mutex<GameRng>,
    sessions: Mutex<FxHashMap<SessionId, Arc<Mutex<Session>>>>,
}

impl<I: MoveInterpreter, N: Narrator> SessionRegistry<I, N> {
    /// Create a registry. Each new session forks its own stream from `rng`.
    pub fn new(referee: Referee<I, N>, rng: GameRng) -> Self {
        Self {
            referee,
            root_rng: Mutex::new(rng),
            sessions: Mutex::new(FxHashMap::default()),
        }
    }

    #[must_use]
    pub fn referee(&self) -> &Referee<I, N> {
        &self.referee
    }

    /// Start a fresh game.
    pub fn start(&self) -> SessionStart {
        let id = SessionId::new();
        let rng = self.root_rng.lock().fork();
        let session = Session::new(self.referee.engine().config().max_rounds, rng);
        let state = session.state.clone();

        self.sessions.lock().insert(id, Arc::new(Mutex::new(session)));
        tracing::info!(session_id = %id, "session started");

        SessionStart {
            id,
            message: self.referee.opening(&state),
            state,
        }
    }

    fn handle(&self, id: SessionId) -> Result<Arc<Mutex<Session>>, SessionError> {
        self.sessions
            .lock()
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound(id))
    }

    /// Run `f` with exclusive access to one session.
    pub fn with_session<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, SessionError> {
        let handle = self.handle(id)?;
        let mut session = handle.lock();
        Ok(f(&mut *session))
    }

    /// Play one round for a session.
    pub fn play(&self, id: SessionId, user_text: &str) -> Result<RoundReport, SessionError> {
        let handle = self.handle(id)?;
        let mut guard = handle.lock();
        let session = &mut *guard;

        let report = self
            .referee
            .play_round(&mut session.state, user_text, &mut session.rng)?;
        session.history.push_back(report.clone());

        if report.state.is_over() {
            tracing::info!(session_id = %id, winner = ?report.state.winner(), "session finished");
        }

        Ok(report)
    }

    /// Current state of a session.
    pub fn state(&self, id: SessionId) -> Result<GameState, SessionError> {
        self.with_session(id, |s| s.state.clone())
    }

    /// Round history of a session.
    pub fn history(&self, id: SessionId) -> Result<Vector<RoundReport>, SessionError> {
        self.with_session(id, |s| s.history.clone())
    }

    /// Drop a session, returning its final state.
    pub fn remove(&self, id: SessionId) -> Result<GameState, SessionError> {
        let handle = self
            .sessions
            .lock()
            .remove(&id)
            .ok_or(SessionError::NotFound(id))?;
        let state = handle.lock().state.clone();
        tracing::debug!(session_id = %id, "session removed");
        Ok(state)
    }

    /// Encode a session for external storage.
    pub fn snapshot(&self, id: SessionId) -> Result<Vec<u8>, SessionError> {
        let snapshot = self.with_session(id, |s| s.snapshot())?;
        Ok(snapshot.to_bytes()?)
    }

    /// Load a session from bytes produced by [`SessionRegistry::snapshot`],
    /// replacing any live session with the same id.
    ///
    /// Snapshots whose state fails [`GameState::check_invariants`] are
    /// rejected and leave the registry unchanged.
    pub fn restore(&self, id: SessionId, bytes: &[u8]) -> Result<GameState, SessionError> {
        let snapshot = SessionSnapshot::from_bytes(bytes)?;
        snapshot.state.check_invariants()?;
        let session = Session {
            state: snapshot.state,
            rng: GameRng::from_state(&snapshot.rng),
            history: snapshot.history,
        };
        let state = session.state.clone();

        self.sessions.lock().insert(id, Arc::new(Mutex::new(session)));
        tracing::debug!(session_id = %id, round = state.round, "session restored");

        Ok(state)
    }

    /// Drop every finished session. Returns how many were removed.
    ///
    /// Sessions locked by another caller are skipped and left for a later
    /// pass. The map lock is never held while a session lock is taken.
    pub fn prune_finished(&self) -> usize {
        let handles: Vec<_> = self
            .sessions
            .lock()
            .iter()
            .map(|(id, handle)| (*id, Arc::clone(handle)))
            .collect();

        let finished: Vec<_> = handles
            .into_iter()
            .filter(|(_, handle)| handle.try_lock().is_some_and(|s| s.state.is_over()))
            .collect();

        let mut sessions = self.sessions.lock();
        let mut removed = 0;
        for (id, handle) in finished {
            // A restore may have replaced the handle since it was checked.
            if sessions.get(&id).is_some_and(|live| Arc::ptr_eq(live, &handle)) {
                sessions.remove(&id);
                removed += 1;
            }
        }

        if removed > 0 {
            tracing::debug!(removed, "pruned finished sessions");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionRegistry<NoInterpreter, PlainNarrator> {
    fn default() -> Self {
        Self::new(Referee::new(RoundEngine::default()), GameRng::from_entropy())
    }
}
