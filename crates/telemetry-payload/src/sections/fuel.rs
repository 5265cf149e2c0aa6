use crate::extract::{Extractor, Section};
use mqtt_publisher_telemetry_config::{Toggle, ToggleGroup};
use serde::Serialize;

/// SimHub's remaining-fuel property.
const FUEL_FIELD: &str = "Fuel";

/// The `fuelData` section: fuel, hybrid energy and DRS.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FuelData {
    #[serde(rename = "Fuel", skip_serializing_if = "Option::is_none")]
    pub fuel: Option<f64>,
    #[serde(rename = "FuelCapacity", skip_serializing_if = "Option::is_none")]
    pub fuel_capacity: Option<f64>,
    #[serde(rename = "FuelPerLap", skip_serializing_if = "Option::is_none")]
    pub fuel_per_lap: Option<f64>,
    /// Same reading as `Fuel`, under its own toggle.
    #[serde(rename = "FuelRemaining", skip_serializing_if = "Option::is_none")]
    pub fuel_remaining: Option<f64>,
    #[serde(rename = "FuelEstimatedLaps", skip_serializing_if = "Option::is_none")]
    pub fuel_estimated_laps: Option<f64>,
    #[serde(rename = "FuelToEnd", skip_serializing_if = "Option::is_none")]
    pub fuel_to_end: Option<f64>,
    #[serde(rename = "FuelLevel", skip_serializing_if = "Option::is_none")]
    pub fuel_level: Option<f64>,
    #[serde(rename = "ERS_DeployedThisLap", skip_serializing_if = "Option::is_none")]
    pub ers_deployed_this_lap: Option<f64>,
    #[serde(rename = "ERS_EnergyStore", skip_serializing_if = "Option::is_none")]
    pub ers_energy_store: Option<f64>,
    #[serde(rename = "ERS_MaxEnergyPerLap", skip_serializing_if = "Option::is_none")]
    pub ers_max_energy_per_lap: Option<f64>,
    #[serde(rename = "ERSStored", skip_serializing_if = "Option::is_none")]
    pub ers_stored: Option<f64>,
    #[serde(rename = "DRS_Available", skip_serializing_if = "Option::is_none")]
    pub drs_available: Option<bool>,
    #[serde(rename = "DRS_Enabled", skip_serializing_if = "Option::is_none")]
    pub drs_enabled: Option<bool>,
    #[serde(rename = "DRS_Count", skip_serializing_if = "Option::is_none")]
    pub drs_count: Option<i32>,
    #[serde(rename = "BatteryLevel", skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<f64>,
    #[serde(rename = "BatteryTemperature", skip_serializing_if = "Option::is_none")]
    pub battery_temperature: Option<f64>,
}

impl Section for FuelData {
    const GROUP: ToggleGroup = ToggleGroup::Fuel;

    fn extract(x: &Extractor<'_>) -> Self {
        Self {
            fuel: x.float(Toggle::Fuel, FUEL_FIELD),
            fuel_level: x.float(Toggle::Fuel, "FuelLevel"),
            fuel_capacity: x.float(Toggle::FuelCapacity, "MaxFuel"),
            fuel_per_lap: x.float(Toggle::FuelPerLap, "FuelPerLap"),
            fuel_remaining: x.float(Toggle::FuelRemaining, FUEL_FIELD),
            // Misspelt in SimHub itself.
            fuel_estimated_laps: x.float(Toggle::FuelEstimatedLaps, "EstimatedFuelRemaingLaps"),
            fuel_to_end: x.float(Toggle::FuelToEnd, "FuelToEnd"),
            ers_deployed_this_lap: x.float(Toggle::ErsData, "ERS_DeployedThisLap"),
            ers_energy_store: x.float(Toggle::ErsData, "ERS_EnergyStore"),
            ers_max_energy_per_lap: x.float(Toggle::ErsData, "ERS_MaxEnergyPerLap"),
            ers_stored: x.float(Toggle::ErsData, "ERSStored"),
            drs_available: x.bool(Toggle::DrsData, "DRS_Available"),
            drs_enabled: x.bool(Toggle::DrsData, "DRS_Enabled"),
            drs_count: x.int(Toggle::DrsData, "DRS_Count"),
            battery_level: x.float(Toggle::BatteryData, "BatteryLevel"),
            battery_temperature: x.float(Toggle::BatteryData, "BatteryTemperature"),
        }
    }
}
