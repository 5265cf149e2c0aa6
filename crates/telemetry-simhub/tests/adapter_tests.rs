//! Integration tests for the `mqtt-publisher-telemetry-simhub` crate.
//!
//! Tests cover JSON snapshot decoding and the UDP listener via the public API.

use mqtt_publisher_telemetry_simhub::{
    FieldSource, FieldValue, JsonSnapshot, SimHubListener, SnapshotError,
};
use proptest::prelude::*;
use std::time::Duration;
use tokio::net::UdpSocket;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn race_packet() -> &'static [u8] {
    br#"{"GameName":"AssettoCorsa","SpeedKmh":187.3,"Rpms":6800.0,"Gear":"5","Throttle":100.0,"Brake":0.0,"Flag_Yellow":1,"Flag_Green":0,"TyreTemperatureFrontLeft":"84.2","IsRunning":true}"#
}

#[test]
fn test_parse_race_packet() -> TestResult {
    let s = JsonSnapshot::from_slice(race_packet())?;
    assert_eq!(s.game_name().as_deref(), Some("AssettoCorsa"));
    assert_eq!(s.get_int("Gear"), Some(5));
    assert_eq!(s.get_bool("Flag_Yellow"), Some(true));
    assert_eq!(s.get_bool("Flag_Green"), Some(false));
    assert!(
        s.get_float("TyreTemperatureFrontLeft")
            .is_some_and(|t| (t - 84.2).abs() < 1e-9)
    );
    assert!(s.is_game_running());
    Ok(())
}

#[test]
fn test_missing_fields_are_absent() -> TestResult {
    let s = JsonSnapshot::from_slice(race_packet())?;
    assert_eq!(s.get_float("FuelPercent"), None);
    assert_eq!(s.field("FuelPercent")?, None);
    Ok(())
}

#[test]
fn test_null_members_are_absent_to_accessors() -> TestResult {
    let s = JsonSnapshot::from_json_str(r#"{"CarModel":null}"#)?;
    assert_eq!(s.get_string("CarModel"), None);
    assert_eq!(
        s.field("CarModel")?.map(|v| v.into_owned()),
        Some(FieldValue::Null)
    );
    Ok(())
}

#[test]
fn test_not_running_packet() -> TestResult {
    let s = JsonSnapshot::from_json_str(r#"{"GameRunning":false,"IsRunning":true}"#)?;
    assert!(!s.is_game_running());
    Ok(())
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SnapshotError::Empty.to_string(),
        "SimHub packet is empty"
    );
    assert!(matches!(
        JsonSnapshot::from_json_str("\"text\""),
        Err(SnapshotError::NotAnObject("a string"))
    ));
}

#[tokio::test]
async fn test_listener_forwards_valid_datagrams() -> TestResult {
    let server = UdpSocket::bind("127.0.0.1:0").await?;
    let addr = server.local_addr()?;
    let listener = SimHubListener::new().with_update_rate(Duration::from_millis(5));
    let mut rx = listener.spawn_on(server);

    let client = UdpSocket::bind("127.0.0.1:0").await?;
    client.send_to(b"garbage", addr).await?;
    client.send_to(race_packet(), addr).await?;

    let frame = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await?
        .ok_or("listener closed")?;
    assert_eq!(frame.sequence, 0);
    assert_eq!(frame.raw_size, race_packet().len());
    assert_eq!(frame.snapshot.get_int("Gear"), Some(5));
    Ok(())
}

#[tokio::test]
async fn test_listener_start_binds_requested_address() -> TestResult {
    let listener = SimHubListener::new().with_bind_addr("127.0.0.1:0".parse()?);
    let rx = listener.start().await?;
    drop(rx);
    Ok(())
}

proptest! {
    #[test]
    fn arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = JsonSnapshot::from_slice(&data);
    }

    #[test]
    fn flat_numeric_members_round_trip(name in "[A-Z][A-Za-z]{0,16}", value in -1_000_000i32..1_000_000) {
        let json = format!(r#"{{"{name}":{value}}}"#);
        let s = JsonSnapshot::from_json_str(&json).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(s.get_int(&name), Some(value));
    }
}
