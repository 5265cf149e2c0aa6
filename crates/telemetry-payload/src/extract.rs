//! Toggle-gated field reads and the [`Section`] contract.

use mqtt_publisher_telemetry_config::{InclusionPolicy, Toggle, ToggleGroup};
use mqtt_publisher_telemetry_core::{FieldSource, FieldValue};
use serde::Serialize;
use std::borrow::Cow;

/// Reads fields from a snapshot only when their governing toggle is on.
///
/// A disabled toggle short-circuits before the source is touched, so
/// disabled fields cost no lookups.
#[derive(Clone, Copy)]
pub struct Extractor<'a> {
    source: &'a dyn FieldSource,
    policy: &'a InclusionPolicy,
}

impl<'a> Extractor<'a> {
    pub fn new(source: &'a dyn FieldSource, policy: &'a InclusionPolicy) -> Self {
        Self { source, policy }
    }

    pub fn enabled(&self, toggle: Toggle) -> bool {
        self.policy.is_enabled(toggle)
    }

    /// Run `read` against the source if `toggle` is enabled.
    pub fn when<T>(
        &self,
        toggle: Toggle,
        read: impl FnOnce(&'a dyn FieldSource) -> Option<T>,
    ) -> Option<T> {
        if self.enabled(toggle) {
            read(self.source)
        } else {
            None
        }
    }

    pub fn float(&self, toggle: Toggle, field: &str) -> Option<f64> {
        self.when(toggle, |s| s.get_float(field))
    }

    pub fn int(&self, toggle: Toggle, field: &str) -> Option<i32> {
        self.when(toggle, |s| s.get_int(field))
    }

    pub fn bool(&self, toggle: Toggle, field: &str) -> Option<bool> {
        self.when(toggle, |s| s.get_bool(field))
    }

    pub fn string(&self, toggle: Toggle, field: &str) -> Option<String> {
        self.when(toggle, |s| s.get_string(field))
    }

    pub fn float_list(&self, toggle: Toggle, field: &str) -> Option<Vec<f64>> {
        self.when(toggle, |s| s.get_float_list(field))
    }

    pub fn duration_ms(&self, toggle: Toggle, field: &str) -> Option<f64> {
        self.when(toggle, |s| s.get_duration_ms(field))
    }

    /// Uncoerced non-null value.
    pub fn raw(&self, toggle: Toggle, field: &str) -> Option<FieldValue> {
        self.when(toggle, |s| s.get_raw(field).map(Cow::into_owned))
    }
}

/// One independently gated sub-object of the payload.
pub trait Section: Serialize + Sized {
    /// Toggles that decide whether the section is built at all.
    const GROUP: ToggleGroup;

    /// Populate every member whose toggle is enabled.
    fn extract(x: &Extractor<'_>) -> Self;

    /// Build the section, or `None` when its whole group is disabled.
    fn compose(source: &dyn FieldSource, policy: &InclusionPolicy) -> Option<Self> {
        if policy.any_in(Self::GROUP) {
            Some(Self::extract(&Extractor::new(source, policy)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mqtt_publisher_telemetry_core::MapSnapshot;

    #[test]
    fn disabled_toggle_reads_nothing() {
        let snapshot = MapSnapshot::new().with("Rpms", 7000.0);
        let policy = InclusionPolicy::empty();
        let x = Extractor::new(&snapshot, &policy);
        assert_eq!(x.float(Toggle::Rpms, "Rpms"), None);
    }

    #[test]
    fn enabled_toggle_reads_and_coerces() {
        let snapshot = MapSnapshot::new()
            .with("Rpms", "7000")
            .with("SessionTimeLeft", "00:10:00");
        let policy = InclusionPolicy::empty()
            .with(Toggle::Rpms, true)
            .with(Toggle::SessionTimeLeft, true);
        let x = Extractor::new(&snapshot, &policy);
        assert_eq!(x.float(Toggle::Rpms, "Rpms"), Some(7000.0));
        assert_eq!(
            x.raw(Toggle::SessionTimeLeft, "SessionTimeLeft"),
            Some(FieldValue::from("00:10:00"))
        );
        assert_eq!(x.int(Toggle::Rpms, "Missing"), None);
    }
}
