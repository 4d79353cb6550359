//! Declared state set and construction-time wiring validation.

use crate::domain::foundation::{ConfigWarning, HandlerRole, StateName};

use super::HandlerSet;

/// The declared set of state names and the designated default state.
///
/// # Invariants
///
/// - Declaration order is preserved (the first declared state is the
///   suggestion offered when the default state is misspelled)
/// - Duplicate declarations collapse to the first occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRegistry {
    states: Vec<StateName>,
    default_state: StateName,
}

impl StateRegistry {
    /// Declares a state set with its default (idle) state.
    pub fn new<S>(states: impl IntoIterator<Item = S>, default_state: impl Into<StateName>) -> Self
    where
        S: Into<StateName>,
    {
        let mut declared: Vec<StateName> = Vec::new();
        for state in states {
            let state = state.into();
            if !declared.contains(&state) {
                declared.push(state);
            }
        }
        Self {
            states: declared,
            default_state: default_state.into(),
        }
    }

    /// Returns the declared states in declaration order.
    pub fn states(&self) -> &[StateName] {
        &self.states
    }

    /// Returns the default (idle) state.
    pub fn default_state(&self) -> &StateName {
        &self.default_state
    }

    /// Returns true if the state is declared.
    pub fn contains(&self, state: &StateName) -> bool {
        self.states.contains(state)
    }

    /// Checks that every declared state is wired to the handlers its
    /// role requires.
    ///
    /// Validation is advisory: a partially wired bot can still run for
    /// the states that do work, so problems are reported as warnings
    /// rather than failing construction. Non-default states need both
    /// an on-enter producer and a respond-from decider; the default
    /// state needs only a respond-from decider.
    pub fn validate<S>(&self, handlers: &HandlerSet<S>) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if !self.contains(&self.default_state) {
            warnings.push(ConfigWarning::DefaultStateUndeclared {
                default: self.default_state.clone(),
                suggestion: self.states.first().cloned(),
            });
        }

        for state in &self.states {
            if *state != self.default_state && !handlers.has_enter_handler(state) {
                warnings.push(ConfigWarning::MissingHandler {
                    state: state.clone(),
                    role: HandlerRole::OnEnter,
                });
            }
            if !handlers.has_respond_handler(state) {
                warnings.push(ConfigWarning::MissingHandler {
                    state: state.clone(),
                    role: HandlerRole::RespondFrom,
                });
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialogue::Transition;

    fn fully_wired() -> HandlerSet<()> {
        HandlerSet::builder()
            .respond_from("waiting", |_, _, _| Ok(Transition::finish("done")))
            .on_enter("asking", |_| Ok("?".to_string()))
            .respond_from("asking", |_, _, _| Ok(Transition::finish("done")))
            .finish_with("done", |_| Ok("bye".to_string()))
            .build()
    }

    #[test]
    fn fully_wired_bot_validates_clean() {
        let registry = StateRegistry::new(["waiting", "asking"], "waiting");
        assert!(registry.validate(&fully_wired()).is_empty());
    }

    #[test]
    fn undeclared_default_state_warns_with_suggestion() {
        let registry = StateRegistry::new(["waiting", "asking"], "wating");
        let warnings = registry.validate(&fully_wired());
        assert!(warnings.contains(&ConfigWarning::DefaultStateUndeclared {
            default: StateName::new("wating"),
            suggestion: Some(StateName::new("waiting")),
        }));
    }

    #[test]
    fn missing_handlers_warn_per_state_and_role() {
        let handlers: HandlerSet<()> = HandlerSet::builder()
            .respond_from("waiting", |_, _, _| Ok(Transition::finish("done")))
            .build();
        let registry = StateRegistry::new(["waiting", "asking"], "waiting");
        let warnings = registry.validate(&handlers);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.contains(&ConfigWarning::MissingHandler {
            state: StateName::new("asking"),
            role: HandlerRole::OnEnter,
        }));
        assert!(warnings.contains(&ConfigWarning::MissingHandler {
            state: StateName::new("asking"),
            role: HandlerRole::RespondFrom,
        }));
    }

    #[test]
    fn default_state_missing_responder_warns() {
        let handlers: HandlerSet<()> = HandlerSet::builder().build();
        let registry = StateRegistry::new(["waiting"], "waiting");
        let warnings = registry.validate(&handlers);
        assert_eq!(
            warnings,
            vec![ConfigWarning::MissingHandler {
                state: StateName::new("waiting"),
                role: HandlerRole::RespondFrom,
            }]
        );
    }

    #[test]
    fn default_state_needs_no_enter_handler() {
        let handlers: HandlerSet<()> = HandlerSet::builder()
            .respond_from("waiting", |_, _, _| Ok(Transition::finish("done")))
            .build();
        let registry = StateRegistry::new(["waiting"], "waiting");
        assert!(registry.validate(&handlers).is_empty());
    }

    #[test]
    fn duplicate_declarations_collapse() {
        let registry = StateRegistry::new(["waiting", "waiting", "asking"], "waiting");
        assert_eq!(registry.states().len(), 2);
    }
}
