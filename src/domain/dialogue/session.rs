//! Per-conversation mutable state.

use crate::domain::foundation::{SessionId, StateName, Timestamp};

/// The mutable state of one conversation.
///
/// Holds the current state plus bot-specific scratch data `S` (e.g. a
/// remembered entity from earlier in the conversation). Exactly one
/// session exists per engine instance; the current state is mutated
/// only by the engine's transition operations.
#[derive(Debug)]
pub struct Session<S> {
    id: SessionId,
    state: StateName,
    scratch: S,
    started_at: Timestamp,
}

impl<S> Session<S> {
    /// Opens a session in the given initial state.
    pub fn new(initial_state: StateName, scratch: S) -> Self {
        Self {
            id: SessionId::new(),
            state: initial_state,
            scratch,
            started_at: Timestamp::now(),
        }
    }

    /// Returns the session identifier.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the current state.
    pub fn state(&self) -> &StateName {
        &self.state
    }

    /// Returns the bot's scratch data.
    pub fn scratch(&self) -> &S {
        &self.scratch
    }

    /// Returns the bot's scratch data mutably.
    pub fn scratch_mut(&mut self) -> &mut S {
        &mut self.scratch
    }

    /// Returns when the session was opened.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    // Only the engine's transition operations move the state.
    pub(crate) fn set_state(&mut self, state: StateName) {
        self.state = state;
    }
}
