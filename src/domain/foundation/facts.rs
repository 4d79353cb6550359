//! Auxiliary per-entity fact lookup.

use std::collections::HashMap;

use super::EngineError;

/// Read-only mapping from a recognized entity to a fact about it.
///
/// Bot definitions use fact tables for auxiliary data keyed by entities
/// their tag vocabulary can recognize (e.g. a professor's office hours).
/// Looking up an entity with no recorded fact is `UnknownEntity`, so
/// handlers should only look up entities after confirming membership
/// via tag presence or [`FactTable::contains`].
#[derive(Debug, Clone, Default)]
pub struct FactTable {
    facts: HashMap<String, String>,
}

impl FactTable {
    /// Creates an empty fact table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fact table from (entity, fact) pairs.
    pub fn from_pairs<E, F>(pairs: impl IntoIterator<Item = (E, F)>) -> Self
    where
        E: Into<String>,
        F: Into<String>,
    {
        Self {
            facts: pairs
                .into_iter()
                .map(|(entity, fact)| (entity.into(), fact.into()))
                .collect(),
        }
    }

    /// Adds a fact, replacing any existing fact for the entity.
    pub fn with_fact(mut self, entity: impl Into<String>, fact: impl Into<String>) -> Self {
        self.facts.insert(entity.into(), fact.into());
        self
    }

    /// Returns true if a fact is recorded for the entity.
    pub fn contains(&self, entity: &str) -> bool {
        self.facts.contains_key(entity)
    }

    /// Looks up the fact for an entity.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntity` if no fact is recorded.
    pub fn get(&self, entity: &str) -> Result<&str, EngineError> {
        self.facts
            .get(entity)
            .map(String::as_str)
            .ok_or_else(|| EngineError::UnknownEntity(entity.to_string()))
    }

    /// Returns the number of recorded facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Returns true if no facts are recorded.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
