use crate::extract::{Extractor, Section};
use mqtt_publisher_telemetry_config::{Toggle, ToggleGroup};
use serde::Serialize;

/// The `inputData` section: steering, raw pedals, assists and device kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steering_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steering_input: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steering_wheel_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttle_raw: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brake_raw: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clutch_raw: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handbrake: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pit_limiter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traction_control: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traction_control_level: Option<i32>,
    #[serde(rename = "ABS", skip_serializing_if = "Option::is_none")]
    pub abs: Option<i32>,
    #[serde(rename = "ABSLevel", skip_serializing_if = "Option::is_none")]
    pub abs_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stability_control: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_clutch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_gear: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electronic_stability_program: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brake_bias: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traction_control_cut: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_keyboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_gamepad: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_wheel: Option<bool>,
}

impl Section for InputData {
    const GROUP: ToggleGroup = ToggleGroup::Input;

    fn extract(x: &Extractor<'_>) -> Self {
        Self {
            steering_angle: x.float(Toggle::SteeringInput, "SteeringAngle"),
            steering_input: x.float(Toggle::SteeringInput, "SteeringInput"),
            steering_wheel_angle: x.float(Toggle::SteeringInput, "SteeringWheelAngle"),
            throttle_raw: x.float(Toggle::PedalInputs, "ThrottleRaw"),
            brake_raw: x.float(Toggle::PedalInputs, "BrakeRaw"),
            clutch_raw: x.float(Toggle::PedalInputs, "ClutchRaw"),
            handbrake: x.float(Toggle::PedalInputs, "Handbrake"),
            pit_limiter: x.bool(Toggle::PedalInputs, "PitLimiter"),
            traction_control: x.int(Toggle::DriverAssists, "TractionControl"),
            traction_control_level: x.int(Toggle::DriverAssists, "TractionControlLevel"),
            abs: x.int(Toggle::DriverAssists, "ABS"),
            abs_level: x.int(Toggle::DriverAssists, "ABSLevel"),
            stability_control: x.int(Toggle::DriverAssists, "StabilityControl"),
            auto_clutch: x.bool(Toggle::DriverAssists, "AutoClutch"),
            auto_gear: x.bool(Toggle::DriverAssists, "AutoGear"),
            electronic_stability_program: x
                .bool(Toggle::ElectronicSystems, "ElectronicStabilityProgram"),
            brake_bias: x.float(Toggle::ElectronicSystems, "BrakeBias"),
            traction_control_cut: x.float(Toggle::ElectronicSystems, "TractionControlCut"),
            is_keyboard: x.bool(Toggle::InputDeviceInfo, "IsKeyboard"),
            is_gamepad: x.bool(Toggle::InputDeviceInfo, "IsGamepad"),
            is_wheel: x.bool(Toggle::InputDeviceInfo, "IsWheel"),
        }
    }
}
