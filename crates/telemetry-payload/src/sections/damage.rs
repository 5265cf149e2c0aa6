use crate::extract::{Extractor, Section};
use mqtt_publisher_telemetry_config::{Toggle, ToggleGroup};
use serde::Serialize;

/// The `damageData` section: damage, mechanical temperatures and wear.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DamageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aerodynamics: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brakes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clutch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oil_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oil_pressure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_temperature: Option<f64>,
    #[serde(rename = "BrakeTemperatureFL", skip_serializing_if = "Option::is_none")]
    pub brake_temperature_fl: Option<f64>,
    #[serde(rename = "BrakeTemperatureFR", skip_serializing_if = "Option::is_none")]
    pub brake_temperature_fr: Option<f64>,
    #[serde(rename = "BrakeTemperatureRL", skip_serializing_if = "Option::is_none")]
    pub brake_temperature_rl: Option<f64>,
    #[serde(rename = "BrakeTemperatureRR", skip_serializing_if = "Option::is_none")]
    pub brake_temperature_rr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbo_boost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhaust_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_wear: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gearbox_wear: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspension_wear: Option<f64>,
}

impl Section for DamageData {
    const GROUP: ToggleGroup = ToggleGroup::Damage;

    fn extract(x: &Extractor<'_>) -> Self {
        Self {
            engine: x.float(Toggle::CarDamage, "CarDamagesEngine"),
            transmission: x.float(Toggle::CarDamage, "CarDamagesTransmission"),
            aerodynamics: x.float(Toggle::CarDamage, "CarDamagesAero"),
            suspension: x.float(Toggle::CarDamage, "CarDamagesSuspension"),
            brakes: x.float(Toggle::CarDamage, "CarDamagesBrakes"),
            clutch: x.float(Toggle::CarDamage, "CarDamagesClutch"),
            water_temperature: x.float(Toggle::EngineTemperatures, "WaterTemperature"),
            oil_temperature: x.float(Toggle::EngineTemperatures, "OilTemperature"),
            oil_pressure: x.float(Toggle::EngineTemperatures, "OilPressure"),
            engine_temperature: x.float(Toggle::EngineTemperatures, "EngineTemperature"),
            brake_temperature_fl: x.float(Toggle::BrakeTemperatures, "BrakeTemperatureFL"),
            brake_temperature_fr: x.float(Toggle::BrakeTemperatures, "BrakeTemperatureFR"),
            brake_temperature_rl: x.float(Toggle::BrakeTemperatures, "BrakeTemperatureRL"),
            brake_temperature_rr: x.float(Toggle::BrakeTemperatures, "BrakeTemperatureRR"),
            turbo_boost: x.float(Toggle::TurboData, "TurboBoost"),
            manifold: x.float(Toggle::TurboData, "Manifold"),
            exhaust_temperature: x.float(Toggle::TurboData, "ExhaustTemperature"),
            engine_wear: x.float(Toggle::WearIndicators, "EngineWear"),
            gearbox_wear: x.float(Toggle::WearIndicators, "GearboxWear"),
            suspension_wear: x.float(Toggle::WearIndicators, "SuspensionWear"),
        }
    }
}
