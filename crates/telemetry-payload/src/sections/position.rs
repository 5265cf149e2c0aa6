use crate::extract::{Extractor, Section};
use mqtt_publisher_telemetry_config::{Toggle, ToggleGroup};
use serde::Serialize;

/// The `positionData` section: standings, gaps, lap and sector timing.
///
/// Every member reads the source field of the same name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PositionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_in_class: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_to_leader: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_to_ahead: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_to_behind: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_lap_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_lap_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_best_lap_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_best_lap_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_to_session_best: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_to_personal_best: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_to_optimal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector1_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector2_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector3_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector1_best_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector2_best_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector3_best_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_sector: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_lap: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_laps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_laps: Option<i32>,
}

impl Section for PositionData {
    const GROUP: ToggleGroup = ToggleGroup::Position;

    fn extract(x: &Extractor<'_>) -> Self {
        Self {
            position: x.int(Toggle::Position, "Position"),
            position_in_class: x.int(Toggle::PositionInClass, "PositionInClass"),
            gap: x.float(Toggle::Gap, "Gap"),
            gap_to_leader: x.float(Toggle::GapToLeader, "GapToLeader"),
            gap_to_ahead: x.float(Toggle::GapToAhead, "GapToAhead"),
            gap_to_behind: x.float(Toggle::GapToBehind, "GapToBehind"),
            last_lap_time: x.float(Toggle::LastLapTime, "LastLapTime"),
            best_lap_time: x.float(Toggle::BestLapTime, "BestLapTime"),
            personal_best_lap_time: x.float(Toggle::PersonalBestLapTime, "PersonalBestLapTime"),
            session_best_lap_time: x.float(Toggle::SessionBestLapTime, "SessionBestLapTime"),
            delta_to_session_best: x.float(Toggle::DeltaToSessionBest, "DeltaToSessionBest"),
            delta_to_personal_best: x.float(Toggle::DeltaToPersonalBest, "DeltaToPersonalBest"),
            delta_to_optimal: x.float(Toggle::DeltaToOptimal, "DeltaToOptimal"),
            sector1_time: x.float(Toggle::Sector1Time, "Sector1Time"),
            sector2_time: x.float(Toggle::Sector2Time, "Sector2Time"),
            sector3_time: x.float(Toggle::Sector3Time, "Sector3Time"),
            sector1_best_time: x.float(Toggle::Sector1BestTime, "Sector1BestTime"),
            sector2_best_time: x.float(Toggle::Sector2BestTime, "Sector2BestTime"),
            sector3_best_time: x.float(Toggle::Sector3BestTime, "Sector3BestTime"),
            current_sector: x.int(Toggle::CurrentSector, "CurrentSector"),
            current_lap: x.int(Toggle::CurrentLap, "CurrentLap"),
            total_laps: x.int(Toggle::TotalLaps, "TotalLaps"),
            completed_laps: x.int(Toggle::CompletedLaps, "CompletedLaps"),
        }
    }
}
