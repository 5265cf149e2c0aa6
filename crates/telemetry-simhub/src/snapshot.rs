//! SimHub JSON property dumps as telemetry snapshots.
//!
//! Two shapes are accepted. A flat object whose members are the game data
//! properties:
//!
//! ```json
//! { "GameName": "IRacing", "SpeedKmh": 212.4, "Gear": "4", "Flag_Green": true }
//! ```
//!
//! or SimHub's `GameData` envelope, where the properties live under
//! `NewData` and the game name/running state sit beside it:
//!
//! ```json
//! { "GameName": "IRacing", "GameRunning": true, "NewData": { "SpeedKmh": 212.4 } }
//! ```
//!
//! Nested objects are not recursed into. They are kept as
//! [`FieldValue::Object`] tagged with their Json.NET `$type` member when
//! present, `"Object"` otherwise.

use mqtt_publisher_telemetry_core::{
    FieldError, FieldSource, FieldValue, GAME_NAME_FIELD, GAME_RUNNING_FIELDS,
};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;
use thiserror::Error;

const ENVELOPE_DATA_FIELD: &str = "NewData";
const TYPE_HINT_FIELD: &str = "$type";
const DEFAULT_OBJECT_TAG: &str = "Object";

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("SimHub packet is empty")]
    Empty,

    #[error("SimHub packet is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),

    #[error("Failed to parse SimHub JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("SimHub payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// One SimHub game data snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonSnapshot {
    game_name: Option<String>,
    game_running: Option<bool>,
    fields: BTreeMap<String, FieldValue>,
}

impl JsonSnapshot {
    /// Parse a raw UTF-8 JSON datagram.
    pub fn from_slice(data: &[u8]) -> Result<Self, SnapshotError> {
        if data.is_empty() {
            return Err(SnapshotError::Empty);
        }
        let text = std::str::from_utf8(data)?;
        Self::from_json_str(text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, SnapshotError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, SnapshotError> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(SnapshotError::NotAnObject(json_kind(&other))),
        }
    }

    fn from_map(mut root: Map<String, Value>) -> Self {
        let envelope = match root.remove(ENVELOPE_DATA_FIELD) {
            Some(Value::Object(data)) => Some(data),
            Some(other) => {
                root.insert(ENVELOPE_DATA_FIELD.to_string(), other);
                None
            }
            None => None,
        };

        match envelope {
            Some(data) => {
                let game_name = root
                    .get(GAME_NAME_FIELD)
                    .and_then(Value::as_str)
                    .map(str::to_string);
                let game_running = GAME_RUNNING_FIELDS
                    .iter()
                    .find_map(|name| root.get(*name).and_then(Value::as_bool));
                Self {
                    game_name,
                    game_running,
                    fields: convert_members(data),
                }
            }
            None => Self {
                game_name: None,
                game_running: None,
                fields: convert_members(root),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldSource for JsonSnapshot {
    fn field(&self, name: &str) -> Result<Option<Cow<'_, FieldValue>>, FieldError> {
        Ok(self.fields.get(name).map(Cow::Borrowed))
    }

    fn field_names(&self) -> Result<Vec<String>, FieldError> {
        Ok(self.fields.keys().cloned().collect())
    }

    fn game_name(&self) -> Option<String> {
        self.game_name
            .clone()
            .or_else(|| self.get_string(GAME_NAME_FIELD))
    }

    fn is_game_running(&self) -> bool {
        self.game_running.unwrap_or_else(|| {
            GAME_RUNNING_FIELDS
                .iter()
                .find_map(|name| self.get_bool(name))
                .unwrap_or(true)
        })
    }
}

fn convert_members(map: Map<String, Value>) -> BTreeMap<String, FieldValue> {
    map.into_iter()
        .map(|(name, value)| (name, convert_value(value)))
        .collect()
}

fn convert_value(value: Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Boolean(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => FieldValue::Integer(i),
            None => n.as_f64().map_or(FieldValue::Null, FieldValue::Float),
        },
        Value::String(s) => FieldValue::String(s),
        Value::Array(items) => FieldValue::List(items.into_iter().map(convert_value).collect()),
        Value::Object(map) => FieldValue::Object(object_tag(&map)),
    }
}

fn object_tag(map: &Map<String, Value>) -> String {
    map.get(TYPE_HINT_FIELD)
        .and_then(Value::as_str)
        .map(short_type_name)
        .unwrap_or(DEFAULT_OBJECT_TAG)
        .to_string()
}

/// `"GameReaderCommon.SessionData, GameReaderCommon"` -> `"SessionData"`.
fn short_type_name(hint: &str) -> &str {
    let qualified = hint.split(',').next().unwrap_or(hint).trim();
    qualified.rsplit('.').next().unwrap_or(qualified)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn full_packet() -> &'static [u8] {
        br#"{"GameName":"IRacing","SpeedKmh":212.4,"Rpms":7200,"Gear":"4","Throttle":98.5,"CarCoordinates":[12.5,0.3,-44.1],"SessionFlags":4,"SessionData":{"$type":"GameReaderCommon.SessionData, GameReaderCommon","Laps":12},"IsRunning":true}"#
    }

    #[test]
    fn test_parse_flat_packet() -> TestResult {
        let s = JsonSnapshot::from_slice(full_packet())?;
        assert_eq!(s.game_name().as_deref(), Some("IRacing"));
        assert_eq!(s.get_float("SpeedKmh"), Some(212.4));
        assert_eq!(s.get_float("Rpms"), Some(7200.0));
        assert_eq!(s.get_string("Gear").as_deref(), Some("4"));
        assert_eq!(s.get_int("SessionFlags"), Some(4));
        assert_eq!(s.get_float_list("CarCoordinates"), Some(vec![12.5, 0.3, -44.1]));
        assert!(s.is_game_running());
        Ok(())
    }

    #[test]
    fn test_nested_object_is_tagged_not_recursed() -> TestResult {
        let s = JsonSnapshot::from_slice(full_packet())?;
        let value = s.field("SessionData")?.ok_or("SessionData missing")?;
        assert_eq!(*value, FieldValue::Object("SessionData".to_string()));
        Ok(())
    }

    #[test]
    fn test_untyped_object_uses_default_tag() -> TestResult {
        let s = JsonSnapshot::from_json_str(r#"{"Weather":{"Rain":0.2}}"#)?;
        assert_eq!(
            s.field("Weather")?.map(Cow::into_owned),
            Some(FieldValue::Object("Object".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_parse_envelope() -> TestResult {
        let json = br#"{"GameName":"AssettoCorsaCompetizione","GameRunning":false,"NewData":{"SpeedKmh":88.0,"TrackName":"Spa"}}"#;
        let s = JsonSnapshot::from_slice(json)?;
        assert_eq!(s.game_name().as_deref(), Some("AssettoCorsaCompetizione"));
        assert!(!s.is_game_running());
        assert_eq!(s.get_float("SpeedKmh"), Some(88.0));
        assert_eq!(s.field_names()?, vec!["SpeedKmh", "TrackName"]);
        Ok(())
    }

    #[test]
    fn test_non_object_new_data_stays_a_field() -> TestResult {
        let s = JsonSnapshot::from_json_str(r#"{"NewData":3}"#)?;
        assert_eq!(s.get_int("NewData"), Some(3));
        Ok(())
    }

    #[test]
    fn test_empty_bytes_rejected() {
        assert!(matches!(
            JsonSnapshot::from_slice(&[]),
            Err(SnapshotError::Empty)
        ));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            JsonSnapshot::from_slice(b"{broken json"),
            Err(SnapshotError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_non_utf8_rejected() {
        assert!(matches!(
            JsonSnapshot::from_slice(&[0xFF, 0xFE, 0xFD]),
            Err(SnapshotError::NotUtf8(_))
        ));
    }

    #[test]
    fn test_array_root_rejected() {
        assert!(matches!(
            JsonSnapshot::from_slice(b"[1,2]"),
            Err(SnapshotError::NotAnObject("an array"))
        ));
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("A.B.SessionData, Asm"), "SessionData");
        assert_eq!(short_type_name("Plain"), "Plain");
    }

    #[test]
    fn test_large_unsigned_becomes_float() -> TestResult {
        let s = JsonSnapshot::from_json_str(r#"{"Big":18446744073709551615}"#)?;
        assert_eq!(s.get_int("Big"), None);
        assert!(s.get_float("Big").is_some());
        Ok(())
    }
}
