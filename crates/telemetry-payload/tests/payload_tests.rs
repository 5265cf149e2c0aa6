//! End-to-end composition tests for the payload document.

use mqtt_publisher_telemetry_config::{InclusionPolicy, Preset, Toggle, ToggleGroup};
use mqtt_publisher_telemetry_core::{FieldError, FieldSource, FieldValue, MapSnapshot};
use mqtt_publisher_telemetry_payload::PayloadDocument;
use proptest::prelude::*;
use serde_json::Value;
use std::borrow::Cow;
use std::cell::Cell;
use uuid::Uuid;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Answers every lookup with `1` (a list for coordinates) and counts reads.
#[derive(Default)]
struct CountingSource {
    reads: Cell<usize>,
}

impl FieldSource for CountingSource {
    fn field(&self, name: &str) -> Result<Option<Cow<'_, FieldValue>>, FieldError> {
        self.reads.set(self.reads.get() + 1);
        let value = if name == "CarCoordinates" {
            FieldValue::from(vec![1.0, 2.0, 3.0])
        } else {
            FieldValue::Integer(1)
        };
        Ok(Some(Cow::Owned(value)))
    }

    fn field_names(&self) -> Result<Vec<String>, FieldError> {
        self.reads.set(self.reads.get() + 1);
        Ok(vec!["SpeedKmh".to_string(), "GameName".to_string()])
    }
}

fn to_value(doc: &PayloadDocument) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::from_str(&doc.to_json()?)?)
}

fn member_count(root: &Value, section: &str) -> usize {
    root.get(section)
        .and_then(Value::as_object)
        .map_or(0, serde_json::Map::len)
}

#[test]
fn disabled_policy_never_touches_the_source() -> TestResult {
    let source = CountingSource::default();
    let doc = PayloadDocument::compose(&source, &Uuid::new_v4(), &InclusionPolicy::empty());
    assert_eq!(source.reads.get(), 0);
    assert_eq!(doc.to_json()?, "{}");
    Ok(())
}

#[test]
fn every_toggle_enabled_emits_the_full_field_set() -> TestResult {
    let source = CountingSource::default();
    let policy = InclusionPolicy::full().with(Toggle::DebugMode, false);
    let root = to_value(&PayloadDocument::compose(&source, &Uuid::nil(), &policy))?;

    assert!(root.get("time").is_some());
    assert_eq!(root.get("userId"), Some(&Value::from(Uuid::nil().to_string())));
    assert_eq!(root.get("gameName"), Some(&Value::from("1")));

    assert_eq!(member_count(&root, "carState"), 12);
    assert_eq!(member_count(&root, "flagState"), 3);
    assert_eq!(member_count(&root, "trackInformation"), 4);
    assert_eq!(member_count(&root, "vehicleInformation"), 4);
    assert_eq!(member_count(&root, "sessionInfo"), 3);
    assert_eq!(member_count(&root, "positionData"), 23);
    assert_eq!(member_count(&root, "tireData"), 22);
    assert_eq!(member_count(&root, "fuelData"), 16);
    assert_eq!(member_count(&root, "weatherData"), 15);
    assert_eq!(member_count(&root, "damageData"), 20);
    assert_eq!(member_count(&root, "inputData"), 21);
    assert_eq!(member_count(&root, "safetyData"), 26);
    assert!(root.get("debugData").is_none());

    let debug_flags = root
        .pointer("/flagState/DebugFlags")
        .and_then(Value::as_object)
        .ok_or("DebugFlags missing")?;
    assert_eq!(debug_flags.len(), 9);
    Ok(())
}

#[test]
fn enabled_flags_default_to_zero_without_sources() -> TestResult {
    let policy = InclusionPolicy::empty().with(Toggle::Flags, true);
    let doc = PayloadDocument::compose_at(&MapSnapshot::new(), &Uuid::nil(), &policy, 0);
    assert_eq!(doc.to_json()?, r#"{"flagState":{"Flags":0}}"#);
    Ok(())
}

#[test]
fn enabled_but_absent_fields_are_omitted() -> TestResult {
    let policy = InclusionPolicy::empty()
        .with(Toggle::SpeedKmh, true)
        .with(Toggle::Position, true)
        .with(Toggle::TireWear, true);
    let s = MapSnapshot::new().with("Position", 4);
    let doc = PayloadDocument::compose_at(&s, &Uuid::nil(), &policy, 0);
    assert_eq!(
        doc.to_json()?,
        r#"{"carState":{},"positionData":{"Position":4},"tireData":{}}"#
    );
    Ok(())
}

#[test]
fn faulting_fields_degrade_instead_of_failing() -> TestResult {
    let s = MapSnapshot::new()
        .with("SpeedKmh", 90.0)
        .with_fault("Rpms")
        .with_fault("SessionFlags")
        .with("Flag_Red", true);
    let policy = InclusionPolicy::empty()
        .with(Toggle::SpeedKmh, true)
        .with(Toggle::Rpms, true)
        .with(Toggle::Flags, true);
    let doc = PayloadDocument::compose_at(&s, &Uuid::nil(), &policy, 0);
    assert_eq!(
        doc.to_json()?,
        r#"{"carState":{"SpeedKmh":90.0},"flagState":{"Flags":16}}"#
    );
    Ok(())
}

#[test]
fn debug_dump_is_independent_of_structured_toggles() -> TestResult {
    let s = MapSnapshot::new()
        .with("GameName", "RaceRoom")
        .with("SpeedKmh", 150.0);
    let policy = InclusionPolicy::empty().with(Toggle::DebugMode, true);
    let doc = PayloadDocument::compose_at(&s, &Uuid::nil(), &policy, 0);
    assert!(!doc.is_empty());
    assert!(doc.car_state.is_none());
    assert_eq!(
        doc.to_json()?,
        r#"{"debugData":{"_GameName":"RaceRoom","_GameRunning":true,"AllProperties":{"GameName":"RaceRoom","SpeedKmh":"150"},"_PropertyCount":2}}"#
    );
    Ok(())
}

#[test]
fn basic_preset_wire_shape() -> TestResult {
    let s = MapSnapshot::new()
        .with("GameName", "AssettoCorsaCompetizione")
        .with("SpeedKmh", 187.5)
        .with("Rpms", 7200.0)
        .with("Gear", "4")
        .with("Throttle", 0.85)
        .with("Brake", 0.0)
        .with("Clutch", 0.0)
        .with("CurrentLapTime", "00:01:23.5000000")
        .with("Flag_Yellow", true)
        .with("TyreTemperatureFL", 84.0);
    let policy = InclusionPolicy::preset(Preset::Basic);
    let doc = PayloadDocument::compose_at(&s, &Uuid::nil(), &policy, 0);

    insta::assert_snapshot!(doc.to_json_pretty()?, @r#"
    {
      "carState": {
        "SpeedKmh": 187.5,
        "Rpms": 7200.0,
        "Brake": 0.0,
        "Throttle": 0.85,
        "Gear": "4",
        "CurrentLapTime": 83500.0
      },
      "flagState": {
        "Flags": 8
      }
    }
    "#);
    Ok(())
}

fn arb_policy() -> impl Strategy<Value = InclusionPolicy> {
    proptest::collection::vec(any::<bool>(), Toggle::ALL.len()).prop_map(|flags| {
        Toggle::ALL
            .iter()
            .zip(flags)
            .fold(InclusionPolicy::empty(), |p, (t, on)| p.with(*t, on))
    })
}

proptest! {
    #[test]
    fn prop_sections_present_iff_group_enabled(policy in arb_policy()) {
        let source = CountingSource::default();
        let doc = PayloadDocument::compose_at(&source, &Uuid::nil(), &policy, 0);
        let root = to_value(&doc).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let sections = [
            ("carState", ToggleGroup::Car),
            ("flagState", ToggleGroup::Flags),
            ("positionData", ToggleGroup::Position),
            ("tireData", ToggleGroup::Tires),
            ("fuelData", ToggleGroup::Fuel),
            ("weatherData", ToggleGroup::Weather),
            ("damageData", ToggleGroup::Damage),
            ("inputData", ToggleGroup::Input),
            ("safetyData", ToggleGroup::Safety),
            ("trackInformation", ToggleGroup::Track),
            ("vehicleInformation", ToggleGroup::Vehicle),
            ("sessionInfo", ToggleGroup::Session),
        ];
        for (key, group) in sections {
            prop_assert_eq!(root.get(key).is_some(), policy.any_in(group), "{}", key);
        }
        prop_assert_eq!(root.get("debugData").is_some(), policy.is_enabled(Toggle::DebugMode));
        prop_assert_eq!(root.get("time").is_some(), policy.is_enabled(Toggle::Time));
    }

    #[test]
    fn prop_disabled_car_fields_never_emitted(
        policy in arb_policy(),
        speed in -500.0f64..500.0,
        rpms in 0.0f64..20_000.0,
    ) {
        let s = MapSnapshot::new().with("SpeedKmh", speed).with("Rpms", rpms);
        let doc = PayloadDocument::compose_at(&s, &Uuid::nil(), &policy, 0);
        let car = doc.car_state.unwrap_or_default();
        prop_assert_eq!(car.speed_kmh.is_some(), policy.is_enabled(Toggle::SpeedKmh));
        prop_assert_eq!(car.rpms.is_some(), policy.is_enabled(Toggle::Rpms));
    }
}
