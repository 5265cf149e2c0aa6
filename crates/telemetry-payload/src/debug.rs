//! The raw property dump attached under `debugData`.

use mqtt_publisher_telemetry_core::{FieldSource, FieldValue};
use serde::Serialize;
use std::collections::BTreeMap;

const UNKNOWN_GAME: &str = "Unknown";

/// Every property discoverable on a snapshot, stringified.
///
/// Built independently of the structured sections. Per-field faults are
/// recorded inline; a failure to enumerate the snapshot at all replaces the
/// dump with a single `_Error` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebugDump {
    #[serde(rename = "_GameName", skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    #[serde(rename = "_GameRunning", skip_serializing_if = "Option::is_none")]
    pub game_running: Option<bool>,
    #[serde(rename = "AllProperties", skip_serializing_if = "Option::is_none")]
    pub all_properties: Option<BTreeMap<String, String>>,
    #[serde(rename = "_PropertyCount", skip_serializing_if = "Option::is_none")]
    pub property_count: Option<usize>,
    #[serde(rename = "_Error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DebugDump {
    pub fn capture(source: &dyn FieldSource) -> Self {
        let names = match source.field_names() {
            Ok(names) => names,
            Err(e) => {
                return Self {
                    error: Some(format!("Failed to extract telemetry: {e}")),
                    ..Self::default()
                };
            }
        };

        let properties: BTreeMap<String, String> = names
            .into_iter()
            .map(|name| {
                let rendered = render_field(source, &name);
                (name, rendered)
            })
            .collect();

        Self {
            game_name: Some(
                source
                    .game_name()
                    .unwrap_or_else(|| UNKNOWN_GAME.to_string()),
            ),
            game_running: Some(source.is_game_running()),
            property_count: Some(properties.len()),
            all_properties: Some(properties),
            error: None,
        }
    }
}

fn render_field(source: &dyn FieldSource, name: &str) -> String {
    match source.field(name) {
        Ok(Some(value)) => render_value(&value),
        Ok(None) => "null".to_string(),
        Err(e) => format!("ERROR: {e}"),
    }
}

/// Dump text for one value, in SimHub's own stringification.
///
/// Objects are never recursed into, at any depth. Lists are flattened to
/// `[a, b]` and booleans print as `True`/`False`.
pub fn render_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Object(tag) => format!("[Complex Object: {tag}]"),
        FieldValue::Boolean(true) => "True".to_string(),
        FieldValue::Boolean(false) => "False".to_string(),
        FieldValue::List(items) => {
            let items: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", items.join(", "))
        }
        other => other.to_string(),
    }
}
