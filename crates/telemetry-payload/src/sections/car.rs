use crate::extract::{Extractor, Section};
use mqtt_publisher_telemetry_config::{Toggle, ToggleGroup};
use serde::Serialize;

/// The `carState` section: live car state and driver inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CarState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_kmh: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brake: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clutch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gear: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_coordinates: Option<Vec<f64>>,
    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_lap_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_ignition_on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_started: Option<bool>,
}

impl Section for CarState {
    const GROUP: ToggleGroup = ToggleGroup::Car;

    fn extract(x: &Extractor<'_>) -> Self {
        Self {
            speed_kmh: x.float(Toggle::SpeedKmh, "SpeedKmh"),
            rpms: x.float(Toggle::Rpms, "Rpms"),
            brake: x.float(Toggle::Brake, "Brake"),
            throttle: x.float(Toggle::Throttle, "Throttle"),
            clutch: x.float(Toggle::Clutch, "Clutch"),
            gear: x.string(Toggle::Gear, "Gear"),
            car_coordinates: x.float_list(Toggle::CarCoordinates, "CarCoordinates"),
            current_lap_time: x.duration_ms(Toggle::CurrentLapTime, "CurrentLapTime"),
            car_model: x.string(Toggle::CarModel, "CarModel"),
            car_class: x.string(Toggle::CarClass, "CarClass"),
            engine_ignition_on: x.bool(Toggle::EngineIgnitionOn, "EngineIgnitionOn"),
            engine_started: x.bool(Toggle::EngineStarted, "EngineStarted"),
        }
    }
}
