//! Phrase table mapping literal phrases to tags.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::Tag;

/// Errors raised while building a phrase table.
///
/// Unlike handler-wiring problems, a malformed tag table would make
/// classification misbehave silently, so these are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhraseTableError {
    #[error("tags for phrase '{phrase}' must be a string or a list of strings, got {found}")]
    InvalidTagShape { phrase: String, found: String },

    #[error("failed to parse phrase table document: {0}")]
    InvalidDocument(String),
}

/// Raw tag value accepted for a phrase, before normalization.
///
/// A bare tag is observably equivalent, after normalization, to a
/// singleton list containing that tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSpec {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for TagSpec {
    fn from(tag: &str) -> Self {
        Self::One(tag.to_string())
    }
}

impl From<Vec<&str>> for TagSpec {
    fn from(tags: Vec<&str>) -> Self {
        Self::Many(tags.into_iter().map(str::to_string).collect())
    }
}

/// Ordered, immutable mapping from literal phrases to tags.
///
/// Built once by a bot definition and treated as read-only
/// configuration by the engine. Phrases are matched literally by the
/// extractor; they are never interpreted as patterns.
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    entries: Vec<(String, Vec<Tag>)>,
}

impl PhraseTable {
    /// Builds a table from (phrase, tags) pairs, preserving order.
    ///
    /// A later pair for an already-seen phrase replaces its tags in
    /// place, keeping mapping semantics.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTagShape` if any value normalizes to an empty
    /// tag list.
    pub fn from_pairs<P>(
        pairs: impl IntoIterator<Item = (P, TagSpec)>,
    ) -> Result<Self, PhraseTableError>
    where
        P: Into<String>,
    {
        let mut table = Self::default();
        for (phrase, spec) in pairs {
            table.insert(phrase.into(), spec)?;
        }
        Ok(table)
    }

    /// Builds a table from a JSON object mapping phrases to tag values.
    ///
    /// Each value must be a string or an array of strings; anything
    /// else is the fatal `InvalidTagShape`, since it indicates a
    /// malformed configuration that cannot be salvaged.
    pub fn from_json(doc: &serde_json::Value) -> Result<Self, PhraseTableError> {
        let object = doc.as_object().ok_or_else(|| {
            PhraseTableError::InvalidDocument(format!(
                "expected a mapping at the top level, got {}",
                value_kind(doc)
            ))
        })?;

        let mut table = Self::default();
        for (phrase, value) in object {
            let spec = match value {
                serde_json::Value::String(tag) => TagSpec::One(tag.clone()),
                serde_json::Value::Array(values) => {
                    let mut tags = Vec::with_capacity(values.len());
                    for item in values {
                        match item {
                            serde_json::Value::String(tag) => tags.push(tag.clone()),
                            other => {
                                return Err(PhraseTableError::InvalidTagShape {
                                    phrase: phrase.clone(),
                                    found: format!("a list containing {}", value_kind(other)),
                                })
                            }
                        }
                    }
                    TagSpec::Many(tags)
                }
                other => {
                    return Err(PhraseTableError::InvalidTagShape {
                        phrase: phrase.clone(),
                        found: value_kind(other).to_string(),
                    })
                }
            };
            table.insert(phrase.clone(), spec)?;
        }
        Ok(table)
    }

    /// Builds a table from a YAML document mapping phrases to tag values.
    pub fn from_yaml(doc: &str) -> Result<Self, PhraseTableError> {
        let value: serde_yaml::Value = serde_yaml::from_str(doc)
            .map_err(|e| PhraseTableError::InvalidDocument(e.to_string()))?;
        let json = serde_json::to_value(&value)
            .map_err(|e| PhraseTableError::InvalidDocument(e.to_string()))?;
        Self::from_json(&json)
    }

    /// Iterates over (phrase, tags) entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[Tag])> {
        self.entries
            .iter()
            .map(|(phrase, tags)| (phrase.as_str(), tags.as_slice()))
    }

    /// Returns the tags for a phrase, if declared.
    pub fn tags_for(&self, phrase: &str) -> Option<&[Tag]> {
        self.entries
            .iter()
            .find(|(p, _)| p == phrase)
            .map(|(_, tags)| tags.as_slice())
    }

    /// Returns the number of declared phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no phrases are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, phrase: String, spec: TagSpec) -> Result<(), PhraseTableError> {
        let tags = normalize(&phrase, spec)?;
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == phrase) {
            entry.1 = tags;
        } else {
            self.entries.push((phrase, tags));
        }
        Ok(())
    }
}

/// Promotes a bare tag to a singleton list; rejects empty lists.
fn normalize(phrase: &str, spec: TagSpec) -> Result<Vec<Tag>, PhraseTableError> {
    let tags = match spec {
        TagSpec::One(tag) => vec![tag],
        TagSpec::Many(tags) => tags,
    };
    if tags.is_empty() {
        return Err(PhraseTableError::InvalidTagShape {
            phrase: phrase.to_string(),
            found: "an empty list".to_string(),
        });
    }
    Ok(tags.into_iter().map(Tag::from).collect())
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "a mapping",
    }
}

impl fmt::Display for PhraseTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhraseTable({} phrases)", self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_string_normalizes_to_singleton_list() {
        let table = PhraseTable::from_pairs([("help", TagSpec::from("office-hours"))]).unwrap();
        assert_eq!(
            table.tags_for("help").unwrap(),
            &[Tag::new("office-hours")]
        );
    }

    #[test]
    fn bare_string_equivalent_to_explicit_singleton() {
        let bare = PhraseTable::from_pairs([("help", TagSpec::from("office-hours"))]).unwrap();
        let listed =
            PhraseTable::from_pairs([("help", TagSpec::from(vec!["office-hours"]))]).unwrap();
        assert_eq!(bare.tags_for("help"), listed.tags_for("help"));
    }

    #[test]
    fn phrase_may_carry_multiple_tags() {
        let table =
            PhraseTable::from_pairs([("leonard", TagSpec::from(vec!["kathryn", "faculty"]))])
                .unwrap();
        assert_eq!(table.tags_for("leonard").unwrap().len(), 2);
    }

    #[test]
    fn empty_tag_list_is_invalid_shape() {
        let err = PhraseTable::from_pairs([("help", TagSpec::Many(vec![]))]).unwrap_err();
        assert!(matches!(err, PhraseTableError::InvalidTagShape { .. }));
    }

    #[test]
    fn later_pair_replaces_earlier_phrase() {
        let table = PhraseTable::from_pairs([
            ("gum", TagSpec::from("alcohol")),
            ("gum", TagSpec::from("common")),
        ])
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.tags_for("gum").unwrap(), &[Tag::new("common")]);
    }

    #[test]
    fn from_json_accepts_strings_and_lists() {
        let doc = json!({
            "red eyes": ["weed"],
            "thanks": "thanks",
        });
        let table = PhraseTable::from_json(&doc).unwrap();
        assert_eq!(table.tags_for("red eyes").unwrap(), &[Tag::new("weed")]);
        assert_eq!(table.tags_for("thanks").unwrap(), &[Tag::new("thanks")]);
    }

    #[test]
    fn from_json_rejects_number_value() {
        let doc = json!({ "420": 420 });
        let err = PhraseTable::from_json(&doc).unwrap_err();
        assert_eq!(
            format!("{}", err),
            "tags for phrase '420' must be a string or a list of strings, got a number"
        );
    }

    #[test]
    fn from_json_rejects_mixed_list() {
        let doc = json!({ "bong": ["weed", 7] });
        let err = PhraseTable::from_json(&doc).unwrap_err();
        assert!(matches!(
            err,
            PhraseTableError::InvalidTagShape { ref phrase, .. } if phrase == "bong"
        ));
    }

    #[test]
    fn from_json_rejects_non_mapping_document() {
        let err = PhraseTable::from_json(&json!(["weed"])).unwrap_err();
        assert!(matches!(err, PhraseTableError::InvalidDocument(_)));
    }

    #[test]
    fn from_yaml_parses_mapping() {
        let table = PhraseTable::from_yaml(
            r#"
            red eyes: weed
            leonard: [kathryn, faculty]
            "#,
        )
        .unwrap();
        assert_eq!(table.tags_for("red eyes").unwrap(), &[Tag::new("weed")]);
        assert_eq!(table.tags_for("leonard").unwrap().len(), 2);
    }

    #[test]
    fn from_yaml_rejects_malformed_document() {
        let err = PhraseTable::from_yaml("- just\n- a list\n").unwrap_err();
        assert!(matches!(err, PhraseTableError::InvalidDocument(_)));
    }

    #[test]
    fn declaration_order_is_preserved() {
        let table = PhraseTable::from_pairs([
            ("office hours", TagSpec::from("office-hours")),
            ("thanks", TagSpec::from("thanks")),
            ("bye", TagSpec::from("success")),
        ])
        .unwrap();
        let phrases: Vec<&str> = table.entries().map(|(p, _)| p).collect();
        assert_eq!(phrases, vec!["office hours", "thanks", "bye"]);
    }
}
