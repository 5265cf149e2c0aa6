use crate::extract::{Extractor, Section};
use mqtt_publisher_telemetry_config::{Toggle, ToggleGroup};
use serde::Serialize;

/// The `weatherData` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeatherData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_wet_track: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_grip: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_wetness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_night: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sun_angle: Option<f64>,
}

impl Section for WeatherData {
    const GROUP: ToggleGroup = ToggleGroup::Weather;

    fn extract(x: &Extractor<'_>) -> Self {
        Self {
            air_temperature: x.float(Toggle::AirTemperature, "AirTemperature"),
            track_temperature: x.float(Toggle::TrackTemperature, "TrackTemperature"),
            road_temperature: x.float(Toggle::TrackTemperature, "RoadTemperature"),
            weather_type: x.string(Toggle::WeatherType, "WeatherType"),
            is_wet_track: x.bool(Toggle::WeatherType, "IsWetTrack"),
            rain_level: x.float(Toggle::RainLevel, "RainLevel"),
            humidity: x.float(Toggle::Humidity, "Humidity"),
            wind_speed: x.float(Toggle::WindData, "WindSpeed"),
            wind_direction: x.float(Toggle::WindData, "WindDirection"),
            track_grip: x.float(Toggle::TrackGrip, "TrackGrip"),
            track_wetness: x.float(Toggle::TrackGrip, "TrackWetness"),
            time_of_day: x.string(Toggle::TimeOfDay, "TimeOfDay"),
            day_time: x.float(Toggle::TimeOfDay, "DayTime"),
            is_night: x.bool(Toggle::TimeOfDay, "IsNight"),
            sun_angle: x.float(Toggle::TimeOfDay, "SunAngle"),
        }
    }
}
