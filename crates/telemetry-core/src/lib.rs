//! Schema-agnostic telemetry access for the MQTT publisher.
//!
//! Simulators expose different, frame-varying field sets. This crate isolates
//! that instability behind one seam:
//!
//! - `value` - [`FieldValue`], a dynamically typed telemetry value
//! - `source` - the [`FieldSource`] capability and its never-failing typed accessors
//! - `coerce` - float/int/bool/string coercion rules
//! - `map` - [`MapSnapshot`], an in-memory source
//!
//! # Example
//!
//! ```
//! use mqtt_publisher_telemetry_core::{FieldSource, MapSnapshot};
//!
//! let snapshot = MapSnapshot::new().with("Rpms", "7200").with("Gear", "4");
//! assert_eq!(snapshot.get_float("Rpms"), Some(7200.0));
//! assert_eq!(snapshot.get_int("Gear"), Some(4));
//! assert_eq!(snapshot.get_bool("Missing"), None);
//! ```

#![deny(static_mut_refs)]

use std::time::Instant;

pub mod coerce;
pub mod map;
pub mod source;
pub mod value;

pub use map::MapSnapshot;
pub use source::{FieldError, FieldSource, GAME_NAME_FIELD, GAME_RUNNING_FIELDS};
pub use value::FieldValue;

/// Monotonic nanoseconds since the first call in this process.
pub fn telemetry_now_ns() -> u64 {
    static EPOCH: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();
    let epoch = EPOCH.get_or_init(Instant::now);
    Instant::now()
        .checked_duration_since(*epoch)
        .map(|d| d.as_nanos())
        .unwrap_or(0)
        .min(u64::MAX as u128) as u64
}
