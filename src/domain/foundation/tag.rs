//! Tag labels and per-message tag counts.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

/// Short label produced when a phrase is found in user text.
///
/// Tags classify intent or entities; decision functions branch
/// on their presence and counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Creates a tag label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Tag {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Tag {
    fn from(label: String) -> Self {
        Self(label)
    }
}

// Allows HashMap<Tag, _> lookups by plain &str.
impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Occurrence counts of tags found in a single message.
///
/// Produced fresh for every inbound message and discarded after the
/// decision function for the current state has run. Only presence
/// (count > 0) and count magnitude carry meaning; order does not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCounts(HashMap<Tag, u32>);

impl TagCounts {
    /// Creates an empty count set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments a tag's count by one.
    pub fn increment(&mut self, tag: Tag) {
        *self.0.entry(tag).or_insert(0) += 1;
    }

    /// Adds `occurrences` to a tag's count. A zero count is not recorded.
    pub fn add(&mut self, tag: Tag, occurrences: u32) {
        if occurrences > 0 {
            *self.0.entry(tag).or_insert(0) += occurrences;
        }
    }

    /// Returns the count for a tag; absent tags count zero.
    pub fn count(&self, tag: &str) -> u32 {
        self.0.get(tag).copied().unwrap_or(0)
    }

    /// Returns true if the tag was seen at least once.
    pub fn contains(&self, tag: &str) -> bool {
        self.count(tag) > 0
    }

    /// Returns the number of distinct tags seen.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no tags were seen.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over (tag, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Tag, u32)> {
        self.0.iter().map(|(tag, count)| (tag, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_tag_counts_zero() {
        let counts = TagCounts::new();
        assert_eq!(counts.count("weed"), 0);
        assert!(!counts.contains("weed"));
        assert!(counts.is_empty());
    }

    #[test]
    fn increment_accumulates() {
        let mut counts = TagCounts::new();
        counts.increment(Tag::new("yes"));
        counts.increment(Tag::new("yes"));
        counts.increment(Tag::new("no"));
        assert_eq!(counts.count("yes"), 2);
        assert_eq!(counts.count("no"), 1);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn add_zero_records_nothing() {
        let mut counts = TagCounts::new();
        counts.add(Tag::new("weed"), 0);
        assert!(counts.is_empty());
        assert!(!counts.contains("weed"));
    }

    #[test]
    fn add_sums_with_existing_count() {
        let mut counts = TagCounts::new();
        counts.increment(Tag::new("weed"));
        counts.add(Tag::new("weed"), 2);
        assert_eq!(counts.count("weed"), 3);
    }

    #[test]
    fn lookup_works_by_plain_str() {
        let mut counts = TagCounts::new();
        counts.increment(Tag::from("office-hours"));
        assert!(counts.contains("office-hours"));
    }
}
