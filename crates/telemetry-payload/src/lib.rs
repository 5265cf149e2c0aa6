//! Sparse, policy-gated telemetry payloads.
//!
//! A [`PayloadDocument`] is composed from one telemetry snapshot and an
//! [`InclusionPolicy`]. Each section is built only when at least one toggle
//! in its group is on, and each member is read only when its own toggle is
//! on, so disabled fields cost no lookups.
//!
//! - `extract` - toggle-gated reads and the [`Section`] contract
//! - `flags` - flag mask resolution and the `flagState` section
//! - `sections` - the remaining per-group sections
//! - `debug` - the raw property dump
//! - `document` - the root document
//!
//! # Example
//!
//! ```
//! use mqtt_publisher_telemetry_config::{InclusionPolicy, Toggle};
//! use mqtt_publisher_telemetry_core::MapSnapshot;
//! use mqtt_publisher_telemetry_payload::PayloadDocument;
//! use uuid::Uuid;
//!
//! let snapshot = MapSnapshot::new()
//!     .with("SpeedKmh", 187.5)
//!     .with("Flag_Green", true);
//! let policy = InclusionPolicy::empty()
//!     .with(Toggle::SpeedKmh, true)
//!     .with(Toggle::Flags, true);
//!
//! let doc = PayloadDocument::compose_at(&snapshot, &Uuid::nil(), &policy, 0);
//! assert_eq!(
//!     doc.to_json()?,
//!     r#"{"carState":{"SpeedKmh":187.5},"flagState":{"Flags":4}}"#
//! );
//! # Ok::<(), mqtt_publisher_telemetry_payload::PayloadError>(())
//! ```

#![deny(static_mut_refs)]

pub mod debug;
pub mod document;
pub mod extract;
pub mod flags;
pub mod sections;

pub use debug::DebugDump;
pub use document::{PayloadDocument, PayloadError};
pub use extract::{Extractor, Section};
pub use flags::{DebugFlags, FlagState, resolve_flags};
pub use sections::{
    CarState, DamageData, FuelData, InputData, PositionData, SafetyData, SessionInfo, TireData,
    TrackInformation, VehicleInformation, WeatherData,
};
