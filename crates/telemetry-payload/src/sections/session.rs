use crate::extract::{Extractor, Section};
use mqtt_publisher_telemetry_config::{Toggle, ToggleGroup};
use mqtt_publisher_telemetry_core::FieldValue;
use serde::Serialize;

/// The `sessionInfo` section.
///
/// Time left and lap count are passed through in whatever shape the
/// simulator reports them, since games disagree on both.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_time_left: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_laps: Option<FieldValue>,
}

impl Section for SessionInfo {
    const GROUP: ToggleGroup = ToggleGroup::Session;

    fn extract(x: &Extractor<'_>) -> Self {
        Self {
            session_type: x.string(Toggle::SessionType, "SessionTypeName"),
            session_time_left: x.raw(Toggle::SessionTimeLeft, "SessionTimeLeft"),
            session_laps: x.raw(Toggle::SessionLaps, "TotalLaps"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mqtt_publisher_telemetry_config::InclusionPolicy;
    use mqtt_publisher_telemetry_core::MapSnapshot;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn raw_values_pass_through_untouched() -> TestResult {
        let s = MapSnapshot::new()
            .with("SessionTypeName", "Race")
            .with("SessionTimeLeft", "00:42:10")
            .with("TotalLaps", 25);
        let policy = InclusionPolicy::empty()
            .with(Toggle::SessionType, true)
            .with(Toggle::SessionTimeLeft, true)
            .with(Toggle::SessionLaps, true);
        let session = SessionInfo::compose(&s, &policy).ok_or("sessionInfo missing")?;
        assert_eq!(
            serde_json::to_string(&session)?,
            r#"{"SessionType":"Race","SessionTimeLeft":"00:42:10","SessionLaps":25}"#
        );
        Ok(())
    }
}
