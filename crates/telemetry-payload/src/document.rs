//! The root payload document.

use crate::debug::DebugDump;
use crate::extract::Section;
use crate::flags::FlagState;
use crate::sections::{
    CarState, DamageData, FuelData, InputData, PositionData, SafetyData, SessionInfo, TireData,
    TrackInformation, VehicleInformation, WeatherData,
};
use mqtt_publisher_telemetry_config::{InclusionPolicy, Toggle};
use mqtt_publisher_telemetry_core::FieldSource;
use serde::Serialize;
use thiserror::Error;
use tracing::trace;
use uuid::Uuid;

const UNKNOWN_GAME: &str = "Unknown";

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One tick's sparse telemetry document.
///
/// Members are present only when enabled and populated; absent members are
/// omitted from the JSON rather than written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadDocument {
    /// Unix epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_state: Option<CarState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_state: Option<FlagState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_information: Option<TrackInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_information: Option<VehicleInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_info: Option<SessionInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_data: Option<PositionData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tire_data: Option<TireData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_data: Option<FuelData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_data: Option<WeatherData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_data: Option<DamageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data: Option<InputData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_data: Option<SafetyData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_data: Option<DebugDump>,
}

impl PayloadDocument {
    /// Compose against the current wall clock.
    pub fn compose(source: &dyn FieldSource, user_id: &Uuid, policy: &InclusionPolicy) -> Self {
        Self::compose_at(
            source,
            user_id,
            policy,
            chrono::Utc::now().timestamp_millis(),
        )
    }

    /// Compose with an explicit timestamp.
    pub fn compose_at(
        source: &dyn FieldSource,
        user_id: &Uuid,
        policy: &InclusionPolicy,
        timestamp_ms: i64,
    ) -> Self {
        let doc = Self {
            time: policy.is_enabled(Toggle::Time).then_some(timestamp_ms),
            user_id: policy
                .is_enabled(Toggle::UserId)
                .then(|| user_id.to_string()),
            game_name: policy.is_enabled(Toggle::GameName).then(|| {
                source
                    .game_name()
                    .unwrap_or_else(|| UNKNOWN_GAME.to_string())
            }),
            car_state: CarState::compose(source, policy),
            flag_state: FlagState::compose(source, policy),
            track_information: TrackInformation::compose(source, policy),
            vehicle_information: VehicleInformation::compose(source, policy),
            session_info: SessionInfo::compose(source, policy),
            position_data: PositionData::compose(source, policy),
            tire_data: TireData::compose(source, policy),
            fuel_data: FuelData::compose(source, policy),
            weather_data: WeatherData::compose(source, policy),
            damage_data: DamageData::compose(source, policy),
            input_data: InputData::compose(source, policy),
            safety_data: SafetyData::compose(source, policy),
            debug_data: policy
                .is_enabled(Toggle::DebugMode)
                .then(|| DebugDump::capture(source)),
        };
        trace!(
            enabled = policy.enabled_count(),
            debug = doc.debug_data.is_some(),
            "payload composed"
        );
        doc
    }

    /// True when nothing at all would be serialised.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, PayloadError> {
        Ok(serde_json::to_vec(self)?)
    }
}
