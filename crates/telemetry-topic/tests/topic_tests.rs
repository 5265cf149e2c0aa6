use mqtt_publisher_telemetry_core::{FieldError, FieldSource, FieldValue, MapSnapshot};
use mqtt_publisher_telemetry_topic::{TopicTemplate, resolve_topic, sanitize_segment};
use proptest::prelude::*;
use std::borrow::Cow;
use std::cell::RefCell;

/// Records every field name looked up.
#[derive(Default)]
struct RecordingSource {
    seen: RefCell<Vec<String>>,
}

impl FieldSource for RecordingSource {
    fn field(&self, name: &str) -> Result<Option<Cow<'_, FieldValue>>, FieldError> {
        self.seen.borrow_mut().push(name.to_string());
        Ok(None)
    }

    fn field_names(&self) -> Result<Vec<String>, FieldError> {
        Ok(Vec::new())
    }
}

#[test]
fn game_and_missing_car_resolve() {
    let s = MapSnapshot::new().with("GameName", "Assetto Corsa");
    assert_eq!(
        TopicTemplate::from("racing/{gameName}/{carName}").resolve(&s),
        "racing/Assetto_Corsa/Unknown"
    );
}

#[test]
fn only_present_placeholders_are_looked_up() {
    let source = RecordingSource::default();
    let topic = resolve_topic("live/{sessionType}", &source);
    assert_eq!(topic, "live/Unknown");
    assert_eq!(*source.seen.borrow(), vec!["SessionTypeName".to_string()]);
}

#[test]
fn plain_template_is_not_resolved_against_source() {
    let source = RecordingSource::default();
    assert_eq!(resolve_topic("racing/driver_name", &source), "racing/driver_name");
    assert!(source.seen.borrow().is_empty());
}

#[test]
fn faulting_source_falls_back_to_unknown() {
    let s = MapSnapshot::new()
        .with_fault("TrackName")
        .with("TrackDisplayName", "Monza");
    assert_eq!(resolve_topic("t/{trackName}", &s), "t/Monza");

    let down = MapSnapshot::new().unavailable("detached");
    assert_eq!(
        resolve_topic("{gameName}/{trackName}", &down),
        "Unknown/Unknown"
    );
}

#[test]
fn non_string_values_are_stringified() {
    let s = MapSnapshot::new().with("SessionTypeName", 3);
    assert_eq!(resolve_topic("{sessionType}", &s), "3");
}

proptest! {
    #[test]
    fn prop_sanitized_alphabet(input in ".*") {
        let out = sanitize_segment(&input);
        prop_assert!(!out.is_empty());
        prop_assert!(out.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    }

    #[test]
    fn prop_resolution_leaves_no_known_tokens(
        prefix in "[a-z/]{0,8}",
        game in ".{0,16}",
        car in ".{0,16}",
    ) {
        let s = MapSnapshot::new().with("GameName", game.as_str()).with("CarName", car.as_str());
        let template = format!("{prefix}{{gameName}}/{{carName}}/{{trackName}}");
        let topic = resolve_topic(&template, &s);
        prop_assert!(topic.starts_with(prefix.as_str()));
        for token in ["{gameName}", "{carName}", "{trackName}", "{sessionType}"] {
            prop_assert!(!topic.contains(token));
        }
    }
}
