//! SimHub game data snapshots for the MQTT publisher.
//!
//! SimHub exposes the running game's data as a property dump. This crate
//! reads those dumps as JSON, either from files or from a UDP stream on port
//! 5555, and presents each one as a [`FieldSource`].
//!
//! # Usage
//!
//! ```
//! use mqtt_publisher_telemetry_simhub::{FieldSource, JsonSnapshot};
//!
//! let snapshot = JsonSnapshot::from_json_str(r#"{"GameName":"IRacing","Gear":"3"}"#)?;
//! assert_eq!(snapshot.game_name().as_deref(), Some("IRacing"));
//! assert_eq!(snapshot.get_int("Gear"), Some(3));
//! # Ok::<(), mqtt_publisher_telemetry_simhub::SnapshotError>(())
//! ```

#![deny(static_mut_refs)]

pub mod listener;
pub mod snapshot;

pub use listener::{SIMHUB_PORT, SimHubListener, SnapshotFrame, decode_datagram};
pub use mqtt_publisher_telemetry_core::{FieldSource, FieldValue};
pub use snapshot::{JsonSnapshot, SnapshotError};
