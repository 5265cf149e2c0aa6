//! Race-control flag resolution.
//!
//! The combined mask follows iRacing's `SessionFlags` bit layout. When a
//! simulator reports that aggregate it is used verbatim; otherwise a mask is
//! rebuilt from SimHub's individual `Flag_*` properties.

use crate::extract::{Extractor, Section};
use mqtt_publisher_telemetry_config::{Toggle, ToggleGroup};
use mqtt_publisher_telemetry_core::FieldSource;
use serde::Serialize;

/// Bit values of the combined flag mask.
pub mod bits {
    pub const CHECKERED: i32 = 0x1;
    pub const WHITE: i32 = 0x2;
    pub const GREEN: i32 = 0x4;
    pub const YELLOW: i32 = 0x8;
    pub const RED: i32 = 0x10;
    pub const BLUE: i32 = 0x20;
    /// SimHub's orange flag, mapped onto iRacing's debris bit.
    pub const DEBRIS: i32 = 0x40;
    pub const BLACK: i32 = 0x1_0000;
}

/// Simulator-native combined mask.
pub const AGGREGATE_FLAGS_FIELD: &str = "SessionFlags";

pub const FLAG_NAME_FIELD: &str = "Flag_Name";

/// Individual flag properties and the bit each contributes, in check order.
pub const INDIVIDUAL_FLAG_SOURCES: [(&str, i32); 8] = [
    ("Flag_Checkered", bits::CHECKERED),
    ("Flag_White", bits::WHITE),
    ("Flag_Green", bits::GREEN),
    ("Flag_Yellow", bits::YELLOW),
    ("Flag_Red", bits::RED),
    ("Flag_Blue", bits::BLUE),
    ("Flag_Orange", bits::DEBRIS),
    ("Flag_Black", bits::BLACK),
];

/// The aggregate mask, when the snapshot carries one. Zero is a real value.
pub fn aggregate_flags(source: &dyn FieldSource) -> Option<i32> {
    source.get_int(AGGREGATE_FLAGS_FIELD)
}

/// Mask rebuilt from individual flags; `None` when no flag is set.
pub fn synthesize_flags(source: &dyn FieldSource) -> Option<i32> {
    let mask = INDIVIDUAL_FLAG_SOURCES
        .iter()
        .filter(|(field, _)| source.get_bool(field) == Some(true))
        .fold(0, |mask, (_, bit)| mask | bit);
    (mask != 0).then_some(mask)
}

/// Aggregate first, then the rebuilt mask, then `0`.
///
/// A snapshot with neither source and one whose flags are all clear both
/// resolve to `0`.
pub fn resolve_flags(source: &dyn FieldSource) -> i32 {
    aggregate_flags(source)
        .or_else(|| synthesize_flags(source))
        .unwrap_or(0)
}

/// The `flagState` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlagState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_flags: Option<DebugFlags>,
}

impl Section for FlagState {
    const GROUP: ToggleGroup = ToggleGroup::Flags;

    fn extract(x: &Extractor<'_>) -> Self {
        Self {
            flags: x.when(Toggle::Flags, |s| Some(resolve_flags(s))),
            flag_name: x.string(Toggle::FlagName, FLAG_NAME_FIELD),
            debug_flags: x.when(Toggle::DebugFlags, |s| Some(DebugFlags::read(s))),
        }
    }
}

/// Raw per-flag readings, for diagnosing a simulator's flag mapping.
///
/// Read as integers and never fed back into [`resolve_flags`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebugFlags {
    #[serde(rename = "Flag_Green", skip_serializing_if = "Option::is_none")]
    pub green: Option<i32>,
    #[serde(rename = "Flag_Yellow", skip_serializing_if = "Option::is_none")]
    pub yellow: Option<i32>,
    #[serde(rename = "Flag_Red", skip_serializing_if = "Option::is_none")]
    pub red: Option<i32>,
    #[serde(rename = "Flag_Blue", skip_serializing_if = "Option::is_none")]
    pub blue: Option<i32>,
    #[serde(rename = "Flag_White", skip_serializing_if = "Option::is_none")]
    pub white: Option<i32>,
    #[serde(rename = "Flag_Black", skip_serializing_if = "Option::is_none")]
    pub black: Option<i32>,
    #[serde(rename = "Flag_Checkered", skip_serializing_if = "Option::is_none")]
    pub checkered: Option<i32>,
    #[serde(rename = "Flag_Orange", skip_serializing_if = "Option::is_none")]
    pub orange: Option<i32>,
    #[serde(rename = "SessionFlags", skip_serializing_if = "Option::is_none")]
    pub session_flags: Option<i32>,
}

impl DebugFlags {
    pub fn read(source: &dyn FieldSource) -> Self {
        Self {
            green: source.get_int("Flag_Green"),
            yellow: source.get_int("Flag_Yellow"),
            red: source.get_int("Flag_Red"),
            blue: source.get_int("Flag_Blue"),
            white: source.get_int("Flag_White"),
            black: source.get_int("Flag_Black"),
            checkered: source.get_int("Flag_Checkered"),
            orange: source.get_int("Flag_Orange"),
            session_flags: source.get_int(AGGREGATE_FLAGS_FIELD),
        }
    }
}
