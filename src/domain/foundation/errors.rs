//! Error types for the dialogue engine.

use std::fmt;
use thiserror::Error;

use super::{Manner, StateName};

/// Fatal errors raised by engine operations at call time.
///
/// These indicate a bug in the handler wiring of a bot definition,
/// not a user-input problem, and abort the call rather than being
/// silently swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("state '{0}' is not declared in the state set")]
    UnknownState(StateName),

    #[error("cannot enter default state '{0}' directly; return to it via finish")]
    InvalidTransition(StateName),

    #[error("no finish handler registered for manner '{0}'")]
    UnknownFinishManner(Manner),

    #[error("state '{0}' has no respond handler")]
    MissingRespondHandler(StateName),

    #[error("state '{0}' has no on-enter handler")]
    MissingEnterHandler(StateName),

    #[error("no fact recorded for entity '{0}'")]
    UnknownEntity(String),
}

/// Which handler role a state is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerRole {
    OnEnter,
    RespondFrom,
}

impl fmt::Display for HandlerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandlerRole::OnEnter => "on-enter",
            HandlerRole::RespondFrom => "respond-from",
        };
        write!(f, "{}", s)
    }
}

/// Non-fatal diagnostics emitted while validating a bot's wiring.
///
/// A partially wired bot can still run for the states that do work,
/// so these warn instead of failing construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The declared default state is not a member of the state set.
    DefaultStateUndeclared {
        default: StateName,
        suggestion: Option<StateName>,
    },

    /// A declared state is missing a handler its role requires.
    MissingHandler { state: StateName, role: HandlerRole },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::DefaultStateUndeclared {
                default,
                suggestion: Some(suggestion),
            } => write!(
                f,
                "default state '{}' is not declared in the state set; perhaps you mean '{}'",
                default, suggestion
            ),
            ConfigWarning::DefaultStateUndeclared {
                default,
                suggestion: None,
            } => write!(
                f,
                "default state '{}' is not declared in the state set",
                default
            ),
            ConfigWarning::MissingHandler { state, role } => write!(
                f,
                "state '{}' is declared but has no {} handler",
                state, role
            ),
        }
    }
}

impl std::error::Error for ConfigWarning {}
