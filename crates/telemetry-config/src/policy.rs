//! [`InclusionPolicy`]: the set of enabled toggles, and its presets.

use crate::toggle::{Toggle, ToggleGroup};
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Which toggles are enabled.
///
/// Serialized as a flat map from settings key to bool, in catalogue order.
/// Deserialization starts from the factory defaults, overrides the keys it
/// recognises and ignores the rest, so it can be flattened into a wider
/// settings object.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InclusionPolicy {
    bits: u128,
}

impl InclusionPolicy {
    /// Every toggle disabled.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Every toggle enabled, diagnostics included.
    pub fn full() -> Self {
        Toggle::ALL.iter().fold(Self::empty(), |p, t| p.with(*t, true))
    }

    pub fn preset(preset: Preset) -> Self {
        preset
            .toggles()
            .iter()
            .fold(Self::empty(), |p, t| p.with(*t, true))
    }

    pub fn is_enabled(&self, toggle: Toggle) -> bool {
        self.bits & toggle.bit() != 0
    }

    pub fn set(&mut self, toggle: Toggle, enabled: bool) {
        if enabled {
            self.bits |= toggle.bit();
        } else {
            self.bits &= !toggle.bit();
        }
    }

    #[must_use]
    pub fn with(mut self, toggle: Toggle, enabled: bool) -> Self {
        self.set(toggle, enabled);
        self
    }

    /// Whether any toggle of `group` is enabled.
    pub fn any_in(&self, group: ToggleGroup) -> bool {
        group.toggles().any(|t| self.is_enabled(t))
    }

    /// Enabled toggles, in catalogue order.
    pub fn enabled(&self) -> impl Iterator<Item = Toggle> + '_ {
        Toggle::ALL.iter().copied().filter(|t| self.is_enabled(*t))
    }

    pub fn enabled_count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Replace every toggle with the preset's selection.
    pub fn apply_preset(&mut self, preset: Preset) {
        *self = Self::preset(preset);
    }
}

impl Default for InclusionPolicy {
    fn default() -> Self {
        Toggle::ALL
            .iter()
            .fold(Self::empty(), |p, t| p.with(*t, t.default_enabled()))
    }
}

impl fmt::Debug for InclusionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.enabled().map(Toggle::key)).finish()
    }
}

impl Serialize for InclusionPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Toggle::COUNT))?;
        for toggle in Toggle::ALL {
            map.serialize_entry(toggle.key(), &self.is_enabled(*toggle))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for InclusionPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PolicyVisitor)
    }
}

struct PolicyVisitor;

impl<'de> Visitor<'de> for PolicyVisitor {
    type Value = InclusionPolicy;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of inclusion toggles to booleans")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut policy = InclusionPolicy::default();
        while let Some(key) = map.next_key::<String>()? {
            match Toggle::from_key(&key) {
                Some(toggle) => policy.set(toggle, map.next_value::<bool>()?),
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(policy)
    }
}

/// Named toggle selections offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Everything off.
    None,
    /// Core car state and flags.
    Basic,
    /// Basic plus position, gaps, lap times, tire state and safety.
    Racing,
    /// Lap counting, tire life, fuel and pit planning.
    Strategy,
    /// Everything except the advanced diagnostics.
    All,
    /// Same selection as [`Preset::All`].
    Analysis,
}

const BASIC: &[Toggle] = &[
    Toggle::SpeedKmh,
    Toggle::Rpms,
    Toggle::Gear,
    Toggle::Throttle,
    Toggle::Brake,
    Toggle::CurrentLapTime,
    Toggle::Flags,
];

const RACING: &[Toggle] = &[
    Toggle::SpeedKmh,
    Toggle::Rpms,
    Toggle::Gear,
    Toggle::Throttle,
    Toggle::Brake,
    Toggle::CurrentLapTime,
    Toggle::Flags,
    Toggle::Position,
    Toggle::PositionInClass,
    Toggle::GapToLeader,
    Toggle::GapToAhead,
    Toggle::LastLapTime,
    Toggle::BestLapTime,
    Toggle::PersonalBestLapTime,
    Toggle::TireTemperatures,
    Toggle::TirePressures,
    Toggle::SafetyCarInfo,
    Toggle::PitInformation,
];

const STRATEGY: &[Toggle] = &[
    Toggle::SpeedKmh,
    Toggle::Gear,
    Toggle::CurrentLapTime,
    Toggle::Flags,
    Toggle::Position,
    Toggle::LastLapTime,
    Toggle::BestLapTime,
    Toggle::CurrentLap,
    Toggle::TotalLaps,
    Toggle::TireTemperatures,
    Toggle::TireWear,
    Toggle::TireCompound,
    Toggle::Fuel,
    Toggle::FuelPerLap,
    Toggle::FuelEstimatedLaps,
    Toggle::FuelToEnd,
    Toggle::SafetyCarInfo,
    Toggle::PitInformation,
];

/// Opt-in diagnostics left out of the "everything" presets.
const ADVANCED: &[Toggle] = &[Toggle::DebugFlags, Toggle::DebugMode];

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::None,
        Preset::Basic,
        Preset::Racing,
        Preset::Strategy,
        Preset::All,
        Preset::Analysis,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Preset::None => "none",
            Preset::Basic => "basic",
            Preset::Racing => "racing",
            Preset::Strategy => "strategy",
            Preset::All => "all",
            Preset::Analysis => "analysis",
        }
    }

    fn toggles(self) -> Vec<Toggle> {
        match self {
            Preset::None => Vec::new(),
            Preset::Basic => BASIC.to_vec(),
            Preset::Racing => RACING.to_vec(),
            Preset::Strategy => STRATEGY.to_vec(),
            Preset::All | Preset::Analysis => Toggle::ALL
                .iter()
                .copied()
                .filter(|t| !ADVANCED.contains(t))
                .collect(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = crate::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::ConfigError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn empty_and_full_are_complements() {
        let empty = InclusionPolicy::empty();
        let full = InclusionPolicy::full();
        assert!(empty.is_empty());
        assert_eq!(full.enabled_count(), Toggle::COUNT);
        for group in ToggleGroup::ALL {
            assert!(!empty.any_in(group));
            assert!(full.any_in(group));
        }
    }

    #[test]
    fn set_and_clear_single_toggle() {
        let mut policy = InclusionPolicy::empty();
        policy.set(Toggle::TireDirt, true);
        assert!(policy.is_enabled(Toggle::TireDirt));
        assert!(policy.any_in(ToggleGroup::Tires));
        assert!(!policy.any_in(ToggleGroup::Fuel));
        policy.set(Toggle::TireDirt, false);
        assert!(policy.is_empty());
    }

    #[test]
    fn basic_preset_matches_selection() {
        let keys: Vec<&str> = InclusionPolicy::preset(Preset::Basic)
            .enabled()
            .map(Toggle::key)
            .collect();
        assert_eq!(
            keys,
            vec![
                "Include_SpeedKmh",
                "Include_Rpms",
                "Include_Gear",
                "Include_Throttle",
                "Include_Brake",
                "Include_CurrentLapTime",
                "Include_Flags",
            ]
        );
    }

    #[test]
    fn racing_extends_basic() {
        let basic = InclusionPolicy::preset(Preset::Basic);
        let racing = InclusionPolicy::preset(Preset::Racing);
        assert!(basic.enabled().all(|t| racing.is_enabled(t)));
        assert_eq!(racing.enabled_count(), 18);
    }

    #[test]
    fn strategy_leaves_rpms_off() {
        let strategy = InclusionPolicy::preset(Preset::Strategy);
        assert!(!strategy.is_enabled(Toggle::Rpms));
        assert!(strategy.is_enabled(Toggle::FuelToEnd));
        assert_eq!(strategy.enabled_count(), 18);
    }

    #[test]
    fn all_presets_exclude_advanced_diagnostics() {
        for preset in [Preset::All, Preset::Analysis] {
            let policy = InclusionPolicy::preset(preset);
            assert!(!policy.is_enabled(Toggle::DebugFlags));
            assert!(!policy.is_enabled(Toggle::DebugMode));
            assert_eq!(policy.enabled_count(), Toggle::COUNT - 2);
        }
        assert_eq!(
            InclusionPolicy::preset(Preset::All),
            InclusionPolicy::preset(Preset::Analysis)
        );
    }

    #[test]
    fn preset_parse_is_case_insensitive() -> TestResult {
        assert_eq!("Racing".parse::<Preset>()?, Preset::Racing);
        assert_eq!(" ANALYSIS ".parse::<Preset>()?, Preset::Analysis);
        assert!("qualifying".parse::<Preset>().is_err());
        Ok(())
    }

    #[test]
    fn serializes_every_key_in_catalogue_order() -> TestResult {
        let json = serde_json::to_value(InclusionPolicy::preset(Preset::Basic))?;
        let map = json.as_object().ok_or("expected object")?;
        assert_eq!(map.len(), Toggle::COUNT);
        assert_eq!(map.get("Include_Gear"), Some(&serde_json::Value::Bool(true)));
        assert_eq!(map.get("EnableDebugMode"), Some(&serde_json::Value::Bool(false)));
        Ok(())
    }

    #[test]
    fn deserialize_overrides_defaults_and_ignores_unknown_keys() -> TestResult {
        let policy: InclusionPolicy = serde_json::from_str(
            r#"{"Include_Gear":false,"Include_TireWear":true,"Theme":"dark"}"#,
        )?;
        assert!(!policy.is_enabled(Toggle::Gear));
        assert!(policy.is_enabled(Toggle::TireWear));
        assert!(policy.is_enabled(Toggle::SpeedKmh));
        Ok(())
    }

    #[test]
    fn deserialize_rejects_non_boolean_toggle() {
        let result: Result<InclusionPolicy, _> = serde_json::from_str(r#"{"Include_Gear":"yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn debug_lists_enabled_keys() {
        let policy = InclusionPolicy::empty().with(Toggle::Humidity, true);
        assert_eq!(format!("{policy:?}"), r#"{"Include_Humidity"}"#);
    }
}
