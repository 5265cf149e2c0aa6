use crate::extract::{Extractor, Section};
use mqtt_publisher_telemetry_config::{Toggle, ToggleGroup};
use serde::Serialize;

/// The `trackInformation` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_code: Option<String>,
    /// Metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_length: Option<f64>,
}

impl Section for TrackInformation {
    const GROUP: ToggleGroup = ToggleGroup::Track;

    fn extract(x: &Extractor<'_>) -> Self {
        Self {
            track_id: x.string(Toggle::TrackName, "TrackId"),
            track_config: x.string(Toggle::TrackConfiguration, "TrackConfig"),
            track_code: x.string(Toggle::TrackName, "TrackCode"),
            track_length: x.float(Toggle::TrackLength, "TrackLength"),
        }
    }
}
