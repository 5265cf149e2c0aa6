use crate::extract::{Extractor, Section};
use mqtt_publisher_telemetry_config::{Toggle, ToggleGroup};
use serde::Serialize;

// Source fields per corner, in FL, FR, RL, RR order.
const TEMPERATURE_FIELDS: [&str; 4] = [
    "TyreTemperatureFL",
    "TyreTemperatureFR",
    "TyreTemperatureRL",
    "TyreTemperatureRR",
];
const PRESSURE_FIELDS: [&str; 4] = [
    "TyrePressureFL",
    "TyrePressureFR",
    "TyrePressureRL",
    "TyrePressureRR",
];
const WEAR_FIELDS: [&str; 4] = ["TyreWearFL", "TyreWearFR", "TyreWearRL", "TyreWearRR"];
const GRIP_FIELDS: [&str; 4] = ["TyreGripFL", "TyreGripFR", "TyreGripRL", "TyreGripRR"];
const DIRT_FIELDS: [&str; 4] = [
    "TyreDirtFrontLeft",
    "TyreDirtFrontRight",
    "TyreDirtRearLeft",
    "TyreDirtRearRight",
];

/// The `tireData` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TireData {
    #[serde(rename = "TemperatureFL", skip_serializing_if = "Option::is_none")]
    pub temperature_fl: Option<f64>,
    #[serde(rename = "TemperatureFR", skip_serializing_if = "Option::is_none")]
    pub temperature_fr: Option<f64>,
    #[serde(rename = "TemperatureRL", skip_serializing_if = "Option::is_none")]
    pub temperature_rl: Option<f64>,
    #[serde(rename = "TemperatureRR", skip_serializing_if = "Option::is_none")]
    pub temperature_rr: Option<f64>,
    #[serde(rename = "PressureFL", skip_serializing_if = "Option::is_none")]
    pub pressure_fl: Option<f64>,
    #[serde(rename = "PressureFR", skip_serializing_if = "Option::is_none")]
    pub pressure_fr: Option<f64>,
    #[serde(rename = "PressureRL", skip_serializing_if = "Option::is_none")]
    pub pressure_rl: Option<f64>,
    #[serde(rename = "PressureRR", skip_serializing_if = "Option::is_none")]
    pub pressure_rr: Option<f64>,
    #[serde(rename = "WearFL", skip_serializing_if = "Option::is_none")]
    pub wear_fl: Option<f64>,
    #[serde(rename = "WearFR", skip_serializing_if = "Option::is_none")]
    pub wear_fr: Option<f64>,
    #[serde(rename = "WearRL", skip_serializing_if = "Option::is_none")]
    pub wear_rl: Option<f64>,
    #[serde(rename = "WearRR", skip_serializing_if = "Option::is_none")]
    pub wear_rr: Option<f64>,
    #[serde(rename = "GripFL", skip_serializing_if = "Option::is_none")]
    pub grip_fl: Option<f64>,
    #[serde(rename = "GripFR", skip_serializing_if = "Option::is_none")]
    pub grip_fr: Option<f64>,
    #[serde(rename = "GripRL", skip_serializing_if = "Option::is_none")]
    pub grip_rl: Option<f64>,
    #[serde(rename = "GripRR", skip_serializing_if = "Option::is_none")]
    pub grip_rr: Option<f64>,
    #[serde(rename = "Compound", skip_serializing_if = "Option::is_none")]
    pub compound: Option<String>,
    #[serde(rename = "CompoundShort", skip_serializing_if = "Option::is_none")]
    pub compound_short: Option<String>,
    #[serde(rename = "DirtFL", skip_serializing_if = "Option::is_none")]
    pub dirt_fl: Option<f64>,
    #[serde(rename = "DirtFR", skip_serializing_if = "Option::is_none")]
    pub dirt_fr: Option<f64>,
    #[serde(rename = "DirtRL", skip_serializing_if = "Option::is_none")]
    pub dirt_rl: Option<f64>,
    #[serde(rename = "DirtRR", skip_serializing_if = "Option::is_none")]
    pub dirt_rr: Option<f64>,
}

fn corners(x: &Extractor<'_>, toggle: Toggle, fields: [&str; 4]) -> [Option<f64>; 4] {
    fields.map(|field| x.float(toggle, field))
}

impl Section for TireData {
    const GROUP: ToggleGroup = ToggleGroup::Tires;

    fn extract(x: &Extractor<'_>) -> Self {
        let [temperature_fl, temperature_fr, temperature_rl, temperature_rr] =
            corners(x, Toggle::TireTemperatures, TEMPERATURE_FIELDS);
        let [pressure_fl, pressure_fr, pressure_rl, pressure_rr] =
            corners(x, Toggle::TirePressures, PRESSURE_FIELDS);
        let [wear_fl, wear_fr, wear_rl, wear_rr] = corners(x, Toggle::TireWear, WEAR_FIELDS);
        let [grip_fl, grip_fr, grip_rl, grip_rr] = corners(x, Toggle::TireGrip, GRIP_FIELDS);
        let [dirt_fl, dirt_fr, dirt_rl, dirt_rr] = corners(x, Toggle::TireDirt, DIRT_FIELDS);

        Self {
            temperature_fl,
            temperature_fr,
            temperature_rl,
            temperature_rr,
            pressure_fl,
            pressure_fr,
            pressure_rl,
            pressure_rr,
            wear_fl,
            wear_fr,
            wear_rl,
            wear_rr,
            grip_fl,
            grip_fr,
            grip_rl,
            grip_rr,
            compound: x.string(Toggle::TireCompound, "TyreCompound"),
            compound_short: x.string(Toggle::TireCompound, "TyreCompoundShort"),
            dirt_fl,
            dirt_fr,
            dirt_rl,
            dirt_rr,
        }
    }
}
