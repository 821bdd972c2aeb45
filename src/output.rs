//! Output printed after a submit

use serde_json::{Map, Value};

use crate::autocomplete::Suggestion;

/// JSON object mapping each field name to its suggestion (or null), in field order
///
/// Suggestions are written with every field the server sent, not just the label.
pub fn format_json(
    selections: &[(String, Option<Suggestion>)],
) -> Result<String, serde_json::Error> {
    let mut object = Map::new();
    for (name, suggestion) in selections {
        object.insert(name.clone(), serde_json::to_value(suggestion)?);
    }
    serde_json::to_string_pretty(&Value::Object(object))
}

/// One label per line, empty for fields without a selection
pub fn format_labels(selections: &[(String, Option<Suggestion>)]) -> String {
    selections
        .iter()
        .map(|(_, suggestion)| suggestion.as_ref().map_or("", |s| s.label.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}
