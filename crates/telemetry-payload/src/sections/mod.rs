//! Per-group payload sections.

mod car;
mod damage;
mod fuel;
mod input;
mod position;
mod safety;
mod session;
mod tires;
mod track;
mod vehicle;
mod weather;

pub use car::CarState;
pub use damage::DamageData;
pub use fuel::FuelData;
pub use input::InputData;
pub use position::PositionData;
pub use safety::SafetyData;
pub use session::SessionInfo;
pub use tires::TireData;
pub use track::TrackInformation;
pub use vehicle::VehicleInformation;
pub use weather::WeatherData;
