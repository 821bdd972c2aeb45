//! Suggestion payloads returned by the lookup service

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One candidate location returned by the lookup service
///
/// Only `label` is interpreted. Every other field the server sends (coordinates,
/// postcode, source, ...) is kept in `extra` and handed back to the caller untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Suggestion {
    /// Create a suggestion with no opaque fields
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            extra: Map::new(),
        }
    }

    /// Builder method to attach an opaque field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Response body of the lookup endpoint: `{ "results": [...] }`
///
/// A body without `results`, or with `results: null`, is an empty result set.
#[derive(Debug, Default, Deserialize)]
pub struct SuggestionResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<Suggestion>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Suggestion>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Suggestion>>::deserialize(deserializer)?.unwrap_or_default())
}
