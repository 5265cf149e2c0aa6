use crate::extract::{Extractor, Section};
use mqtt_publisher_telemetry_config::{Toggle, ToggleGroup};
use serde::Serialize;

/// The `vehicleInformation` section.
///
/// `CarModel` and `CarClass` also appear in `carState` under their own
/// toggles; the two copies are gated independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rpm: Option<f64>,
}

impl Section for VehicleInformation {
    const GROUP: ToggleGroup = ToggleGroup::Vehicle;

    fn extract(x: &Extractor<'_>) -> Self {
        Self {
            car_model: x.string(Toggle::VehicleModel, "CarModel"),
            car_class: x.string(Toggle::VehicleClass, "CarClass"),
            car_id: x.string(Toggle::VehicleModel, "CarId"),
            max_rpm: x.float(Toggle::MaxRpm, "MaxRpm"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mqtt_publisher_telemetry_config::InclusionPolicy;
    use mqtt_publisher_telemetry_core::MapSnapshot;

    #[test]
    fn model_toggle_covers_model_and_id() {
        let s = MapSnapshot::new()
            .with("CarModel", "Porsche 911 GT3 R")
            .with("CarId", "porsche_992_gt3r")
            .with("CarClass", "GT3")
            .with("MaxRpm", 9400);
        let policy = InclusionPolicy::empty().with(Toggle::VehicleModel, true);
        let vehicle = VehicleInformation::compose(&s, &policy).unwrap_or_default();
        assert_eq!(vehicle.car_model.as_deref(), Some("Porsche 911 GT3 R"));
        assert_eq!(vehicle.car_id.as_deref(), Some("porsche_992_gt3r"));
        assert_eq!(vehicle.car_class, None);
        assert_eq!(vehicle.max_rpm, None);
    }
}
