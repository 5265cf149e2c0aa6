use crate::extract::{Extractor, Section};
use mqtt_publisher_telemetry_config::{Toggle, ToggleGroup};
use serde::Serialize;

/// The `safetyData` section: neutralisations, pit state and race control.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SafetyData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_car: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_car_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_safety_car: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_car_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yellow_flag_sector1: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yellow_flag_sector2: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yellow_flag_sector3: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_in_pit_lane: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_in_pit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pit_speed_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pit_limiter_on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pit_window_start: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pit_window_end: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandatory_pit_done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_started: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_finished: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_replay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_spectator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_penalty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formation_lap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warmup_lap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red_flag_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_stopped: Option<bool>,
}

impl Section for SafetyData {
    const GROUP: ToggleGroup = ToggleGroup::Safety;

    fn extract(x: &Extractor<'_>) -> Self {
        Self {
            safety_car: x.bool(Toggle::SafetyCarInfo, "SafetyCar"),
            safety_car_active: x.bool(Toggle::SafetyCarInfo, "SafetyCarActive"),
            virtual_safety_car: x.bool(Toggle::SafetyCarInfo, "VirtualSafetyCar"),
            safety_car_time: x.float(Toggle::SafetyCarInfo, "SafetyCarTime"),
            yellow_flag_sector1: x.bool(Toggle::FlagSectors, "YellowFlagSector1"),
            yellow_flag_sector2: x.bool(Toggle::FlagSectors, "YellowFlagSector2"),
            yellow_flag_sector3: x.bool(Toggle::FlagSectors, "YellowFlagSector3"),
            is_in_pit_lane: x.bool(Toggle::PitInformation, "IsInPitLane"),
            is_in_pit: x.bool(Toggle::PitInformation, "IsInPit"),
            pit_speed_limit: x.float(Toggle::PitInformation, "PitSpeedLimit"),
            pit_limiter_on: x.bool(Toggle::PitInformation, "PitLimiterOn"),
            pit_window_start: x.int(Toggle::PitInformation, "PitWindowStart"),
            pit_window_end: x.int(Toggle::PitInformation, "PitWindowEnd"),
            mandatory_pit_done: x.bool(Toggle::PitInformation, "MandatoryPitDone"),
            race_started: x.bool(Toggle::RaceControl, "RaceStarted"),
            race_finished: x.bool(Toggle::RaceControl, "RaceFinished"),
            session_paused: x.bool(Toggle::RaceControl, "SessionPaused"),
            is_replay: x.bool(Toggle::RaceControl, "IsReplay"),
            is_spectator: x.bool(Toggle::RaceControl, "IsSpectator"),
            has_penalty: x.bool(Toggle::Penalties, "HasPenalty"),
            penalty_time: x.float(Toggle::Penalties, "PenaltyTime"),
            penalty_count: x.int(Toggle::Penalties, "PenaltyCount"),
            formation_lap: x.bool(Toggle::FormationLap, "FormationLap"),
            warmup_lap: x.bool(Toggle::FormationLap, "WarmupLap"),
            red_flag_active: x.bool(Toggle::RaceControl, "RedFlagActive"),
            session_stopped: x.bool(Toggle::RaceControl, "SessionStopped"),
        }
    }
}
