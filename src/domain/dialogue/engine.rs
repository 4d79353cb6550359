//! Dialogue engine: composes tag extraction, handler dispatch, and
//! state transitions.

use crate::domain::foundation::{ConfigWarning, EngineError, Manner, StateName};
use crate::domain::tags::{extract_tags, PhraseTable};

use super::{HandlerSet, Session, StateRegistry, Transition};

/// A single-conversation dialogue agent.
///
/// Holds the immutable configuration supplied by a bot definition
/// (state registry, phrase table, handler set) and the one mutable
/// [`Session`]. All calls are synchronous; an implementation wanting
/// multiple simultaneous conversations instantiates one engine per
/// conversation.
///
/// # Transition contract
///
/// `respond` extracts tags, invokes the current state's respond-from
/// decider, and applies the [`Transition`] it returns through
/// `enter_state` or `finish`. The default state is therefore never
/// reached silently: every return to idle carries an explicit manner.
pub struct DialogueEngine<S> {
    registry: StateRegistry,
    phrases: PhraseTable,
    handlers: HandlerSet<S>,
    session: Session<S>,
    warnings: Vec<ConfigWarning>,
}

impl<S: Default> DialogueEngine<S> {
    /// Constructs an engine from a bot's declarative configuration.
    ///
    /// Wiring problems (missing handlers, undeclared default state)
    /// are surfaced as warnings - logged and retrievable via
    /// [`DialogueEngine::warnings`] - never as construction failures.
    pub fn new(registry: StateRegistry, phrases: PhraseTable, handlers: HandlerSet<S>) -> Self {
        let warnings = registry.validate(&handlers);
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }

        let session = Session::new(registry.default_state().clone(), S::default());
        tracing::debug!(
            session_id = %session.id(),
            started_at = %session.started_at(),
            default_state = %session.state(),
            phrases = phrases.len(),
            "dialogue engine ready"
        );

        Self {
            registry,
            phrases,
            handlers,
            session,
            warnings,
        }
    }
}

impl<S> DialogueEngine<S> {
    /// Returns the state the conversation is currently in.
    pub fn current_state(&self) -> &StateName {
        self.session.state()
    }

    /// Returns the session, including the bot's scratch data.
    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Returns the wiring warnings collected at construction.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Responds to a user message.
    ///
    /// Extracts tag counts from the message, invokes the respond-from
    /// decider for the current state, and applies the transition it
    /// returns. The tag counts live only for the duration of this call.
    ///
    /// # Errors
    ///
    /// `MissingRespondHandler` if the current state has no decider,
    /// plus any error the applied transition raises.
    pub fn respond(&mut self, message: &str) -> Result<String, EngineError> {
        let tags = extract_tags(message, &self.phrases);
        let state = self.session.state().clone();
        tracing::debug!(
            session_id = %self.session.id(),
            state = %state,
            distinct_tags = tags.len(),
            "responding to message"
        );

        let decider = self
            .handlers
            .respond_handler(&state)
            .ok_or_else(|| EngineError::MissingRespondHandler(state.clone()))?;
        let transition = decider(self.session.scratch_mut(), message, &tags)?;

        match transition {
            Transition::ToState(next) => self.enter_state(&next),
            Transition::Finish(manner) => self.finish(&manner),
        }
    }

    /// Enters a non-default state, announcing the reason.
    ///
    /// Invokes the state's on-enter producer, then records the
    /// transition; no partial state is observable between the two from
    /// the caller's point of view, and a producer error leaves the
    /// current state untouched.
    ///
    /// # Errors
    ///
    /// - `UnknownState` if the state is not declared
    /// - `InvalidTransition` if the state is the default state, which
    ///   is reached only via [`DialogueEngine::finish`]
    /// - `MissingEnterHandler` if the state has no on-enter producer
    pub fn enter_state(&mut self, state: &StateName) -> Result<String, EngineError> {
        if !self.registry.contains(state) {
            return Err(EngineError::UnknownState(state.clone()));
        }
        if state == self.registry.default_state() {
            return Err(EngineError::InvalidTransition(state.clone()));
        }

        let producer = self
            .handlers
            .enter_handler(state)
            .ok_or_else(|| EngineError::MissingEnterHandler(state.clone()))?;
        let response = producer(self.session.scratch())?;

        self.session.set_state(state.clone());
        tracing::debug!(session_id = %self.session.id(), state = %state, "entered state");
        Ok(response)
    }

    /// Returns the conversation to the default state under a manner.
    ///
    /// # Errors
    ///
    /// `UnknownFinishManner` if no finish producer is registered for
    /// the manner.
    pub fn finish(&mut self, manner: &Manner) -> Result<String, EngineError> {
        let producer = self
            .handlers
            .finish_handler(manner)
            .ok_or_else(|| EngineError::UnknownFinishManner(manner.clone()))?;
        let response = producer(self.session.scratch())?;

        self.session.set_state(self.registry.default_state().clone());
        tracing::debug!(
            session_id = %self.session.id(),
            manner = %manner,
            "finished; back to default state"
        );
        Ok(response)
    }
}
