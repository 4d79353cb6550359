//! Handler tables supplied by bot definitions.
//!
//! The original framework this engine models dispatched handlers by
//! method-name pattern; here the handler set is an explicit mapping
//! from state name to function values, supplied at construction.

use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::{EngineError, Manner, StateName, TagCounts};

/// Where a respond decision sends the conversation next.
///
/// Every respond-from decider must produce exactly one transition;
/// returning a value (instead of calling back into the engine) makes
/// that a type-level guarantee rather than a calling convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Enter the named non-default state.
    ToState(StateName),
    /// Return to the default state under the named manner.
    Finish(Manner),
}

impl Transition {
    /// Transition into a non-default state.
    pub fn to_state(state: impl Into<StateName>) -> Self {
        Self::ToState(state.into())
    }

    /// Return to the default state under a manner.
    pub fn finish(manner: impl Into<Manner>) -> Self {
        Self::Finish(manner.into())
    }
}

/// Produces the announcement text when a state is entered.
pub type EnterHandler<S> = Box<dyn Fn(&S) -> Result<String, EngineError> + Send>;

/// Decides, from the message and its tag counts, where the
/// conversation goes next. May mutate the bot's scratch data.
pub type RespondHandler<S> =
    Box<dyn Fn(&mut S, &str, &TagCounts) -> Result<Transition, EngineError> + Send>;

/// Produces the exit text for a finish manner.
pub type FinishHandler<S> = Box<dyn Fn(&S) -> Result<String, EngineError> + Send>;

/// The per-state and per-manner handler functions of one bot.
///
/// Read-only configuration from the engine's point of view; `S` is the
/// bot's scratch data (e.g. a remembered entity).
pub struct HandlerSet<S> {
    enter: HashMap<StateName, EnterHandler<S>>,
    respond: HashMap<StateName, RespondHandler<S>>,
    finish: HashMap<Manner, FinishHandler<S>>,
}

impl<S> HandlerSet<S> {
    /// Starts a builder for a handler set.
    pub fn builder() -> HandlerSetBuilder<S> {
        HandlerSetBuilder {
            set: Self {
                enter: HashMap::new(),
                respond: HashMap::new(),
                finish: HashMap::new(),
            },
        }
    }

    /// Returns the on-enter producer for a state, if registered.
    pub fn enter_handler(&self, state: &StateName) -> Option<&EnterHandler<S>> {
        self.enter.get(state)
    }

    /// Returns the respond-from decider for a state, if registered.
    pub fn respond_handler(&self, state: &StateName) -> Option<&RespondHandler<S>> {
        self.respond.get(state)
    }

    /// Returns the finish producer for a manner, if registered.
    pub fn finish_handler(&self, manner: &Manner) -> Option<&FinishHandler<S>> {
        self.finish.get(manner)
    }

    /// Returns true if the state has an on-enter producer.
    pub fn has_enter_handler(&self, state: &StateName) -> bool {
        self.enter.contains_key(state)
    }

    /// Returns true if the state has a respond-from decider.
    pub fn has_respond_handler(&self, state: &StateName) -> bool {
        self.respond.contains_key(state)
    }

    /// Returns the registered finish manners in arbitrary order.
    pub fn manners(&self) -> impl Iterator<Item = &Manner> {
        self.finish.keys()
    }
}

impl<S> fmt::Debug for HandlerSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSet")
            .field("enter", &self.enter.keys().collect::<Vec<_>>())
            .field("respond", &self.respond.keys().collect::<Vec<_>>())
            .field("finish", &self.finish.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder collecting a bot's handlers before engine construction.
pub struct HandlerSetBuilder<S> {
    set: HandlerSet<S>,
}

impl<S> HandlerSetBuilder<S> {
    /// Registers the on-enter producer for a state.
    pub fn on_enter(
        mut self,
        state: impl Into<StateName>,
        handler: impl Fn(&S) -> Result<String, EngineError> + Send + 'static,
    ) -> Self {
        self.set.enter.insert(state.into(), Box::new(handler));
        self
    }

    /// Registers the respond-from decider for a state.
    pub fn respond_from(
        mut self,
        state: impl Into<StateName>,
        handler: impl Fn(&mut S, &str, &TagCounts) -> Result<Transition, EngineError>
            + Send
            + 'static,
    ) -> Self {
        self.set.respond.insert(state.into(), Box::new(handler));
        self
    }

    /// Registers the finish producer for an exit manner.
    pub fn finish_with(
        mut self,
        manner: impl Into<Manner>,
        handler: impl Fn(&S) -> Result<String, EngineError> + Send + 'static,
    ) -> Self {
        self.set.finish.insert(manner.into(), Box::new(handler));
        self
    }

    /// Finalizes the handler set.
    pub fn build(self) -> HandlerSet<S> {
        self.set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_registers_all_three_roles() {
        let set: HandlerSet<u32> = HandlerSet::builder()
            .on_enter("asking", |count: &u32| Ok(format!("asked {} times", count)))
            .respond_from("waiting", |count, _msg, _tags| {
                *count += 1;
                Ok(Transition::to_state("asking"))
            })
            .finish_with("done", |_| Ok("bye".to_string()))
            .build();

        assert!(set.has_enter_handler(&StateName::new("asking")));
        assert!(set.has_respond_handler(&StateName::new("waiting")));
        assert!(set.finish_handler(&Manner::new("done")).is_some());
        assert!(!set.has_enter_handler(&StateName::new("waiting")));
    }

    #[test]
    fn respond_handler_mutates_scratch() {
        let set: HandlerSet<u32> = HandlerSet::builder()
            .respond_from("waiting", |count: &mut u32, _msg, _tags| {
                *count += 1;
                Ok(Transition::finish("done"))
            })
            .build();

        let handler = set.respond_handler(&StateName::new("waiting")).unwrap();
        let mut scratch = 0u32;
        let transition = handler(&mut scratch, "hi", &TagCounts::new()).unwrap();
        assert_eq!(scratch, 1);
        assert_eq!(transition, Transition::Finish(Manner::new("done")));
    }

    #[test]
    fn transition_constructors_build_variants() {
        assert_eq!(
            Transition::to_state("asking"),
            Transition::ToState(StateName::new("asking"))
        );
        assert_eq!(
            Transition::finish("thanks"),
            Transition::Finish(Manner::new("thanks"))
        );
    }

    #[test]
    fn debug_lists_registered_names_without_functions() {
        let set: HandlerSet<()> = HandlerSet::builder()
            .finish_with("done", |_| Ok(String::new()))
            .build();
        let debug = format!("{:?}", set);
        assert!(debug.contains("done"));
    }
}
