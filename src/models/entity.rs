// file: src/models/entity.rs
// description: token-classification spans and the entity text to label mapping
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One record produced by a token-classification model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSpan {
    pub word: String,
    /// Label of the span. Aggregated responses name this `entity_group`.
    #[serde(alias = "entity_group", default)]
    pub entity: String,
    #[serde(default)]
    pub score: Option<f32>,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
}

impl TokenSpan {
    pub fn new(word: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            entity: entity.into(),
            score: None,
            start: None,
            end: None,
        }
    }
}

/// Entity text mapped to its type label.
///
/// When the same text is tagged more than once the later label replaces the
/// earlier one. Keys iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityMap(BTreeMap<String, String>);

impl EntityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spans(spans: impl IntoIterator<Item = TokenSpan>) -> Self {
        let mut map = Self::new();
        for span in spans {
            map.insert(span.word, span.entity);
        }
        map
    }

    pub fn insert(&mut self, text: String, label: String) -> Option<String> {
        self.0.insert(text, label)
    }

    pub fn get(&self, text: &str) -> Option<&str> {
        self.0.get(text).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
