//! Opaque name types for dialogue states and exit manners.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a dialogue state.
///
/// States are opaque identifiers; the engine attaches no meaning to
/// the text beyond membership in the declared state set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateName(String);

impl StateName {
    /// Creates a state name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StateName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for StateName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Named reason for returning to the default state.
///
/// Every return to idle has an explicit manner, each with its own
/// exit response text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manner(String);

impl Manner {
    /// Creates a manner label.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Manner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Manner {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Manner {
    fn from(name: String) -> Self {
        Self(name)
    }
}
