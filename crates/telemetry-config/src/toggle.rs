//! The inclusion toggle catalogue.
//!
//! Every toggle carries its persisted settings key, the payload domain it
//! governs and its factory default. The catalogue order is the order used
//! when settings are written out.

use std::fmt;

/// Payload domain a toggle belongs to.
///
/// Groups are conceptual: a section of the payload is built when any toggle
/// of its group is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToggleGroup {
    Root,
    Car,
    Flags,
    Position,
    Tires,
    Fuel,
    Weather,
    Damage,
    Input,
    Safety,
    Track,
    Vehicle,
    Session,
    Debug,
}

impl ToggleGroup {
    pub const ALL: [ToggleGroup; 14] = [
        ToggleGroup::Root,
        ToggleGroup::Car,
        ToggleGroup::Flags,
        ToggleGroup::Position,
        ToggleGroup::Tires,
        ToggleGroup::Fuel,
        ToggleGroup::Weather,
        ToggleGroup::Damage,
        ToggleGroup::Input,
        ToggleGroup::Safety,
        ToggleGroup::Track,
        ToggleGroup::Vehicle,
        ToggleGroup::Session,
        ToggleGroup::Debug,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ToggleGroup::Root => "Root",
            ToggleGroup::Car => "Car State",
            ToggleGroup::Flags => "Flags",
            ToggleGroup::Position => "Position & Timing",
            ToggleGroup::Tires => "Tires",
            ToggleGroup::Fuel => "Fuel & Energy",
            ToggleGroup::Weather => "Weather & Conditions",
            ToggleGroup::Damage => "Damage & Mechanical",
            ToggleGroup::Input => "Driver Input",
            ToggleGroup::Safety => "Safety & Race Control",
            ToggleGroup::Track => "Track Information",
            ToggleGroup::Vehicle => "Vehicle Information",
            ToggleGroup::Session => "Session Information",
            ToggleGroup::Debug => "Debug",
        }
    }

    /// Toggles of this group, in catalogue order.
    pub fn toggles(self) -> impl Iterator<Item = Toggle> {
        Toggle::ALL.iter().copied().filter(move |t| t.group() == self)
    }
}

impl fmt::Display for ToggleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! toggle_catalogue {
    ($( $variant:ident => $key:literal, $group:ident, $default:literal; )+) => {
        /// One named inclusion switch.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Toggle {
            $( $variant, )+
        }

        impl Toggle {
            /// Every toggle, in catalogue order.
            pub const ALL: &'static [Toggle] = &[ $( Toggle::$variant, )+ ];

            /// Persisted settings key.
            pub const fn key(self) -> &'static str {
                match self {
                    $( Toggle::$variant => $key, )+
                }
            }

            pub const fn group(self) -> ToggleGroup {
                match self {
                    $( Toggle::$variant => ToggleGroup::$group, )+
                }
            }

            /// Factory default when a settings file does not mention the key.
            pub const fn default_enabled(self) -> bool {
                match self {
                    $( Toggle::$variant => $default, )+
                }
            }

            /// Case-sensitive lookup by persisted key.
            pub fn from_key(key: &str) -> Option<Toggle> {
                match key {
                    $( $key => Some(Toggle::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

toggle_catalogue! {
    Time => "Include_Time", Root, true;
    UserId => "Include_UserId", Root, true;
    GameName => "Include_GameName", Root, false;

    SpeedKmh => "Include_SpeedKmh", Car, true;
    Rpms => "Include_Rpms", Car, true;
    Gear => "Include_Gear", Car, true;
    Throttle => "Include_Throttle", Car, true;
    Brake => "Include_Brake", Car, true;
    Clutch => "Include_Clutch", Car, true;
    CarCoordinates => "Include_CarCoordinates", Car, false;
    CurrentLapTime => "Include_CurrentLapTime", Car, true;
    CarModel => "Include_CarModel", Car, true;
    CarClass => "Include_CarClass", Car, true;
    EngineIgnitionOn => "Include_EngineIgnitionOn", Car, false;
    EngineStarted => "Include_EngineStarted", Car, false;

    Flags => "Include_Flags", Flags, true;
    FlagName => "Include_FlagName", Flags, false;
    DebugFlags => "Include_DebugFlags", Flags, false;

    Position => "Include_Position", Position, false;
    PositionInClass => "Include_PositionInClass", Position, false;
    Gap => "Include_Gap", Position, false;
    GapToLeader => "Include_GapToLeader", Position, false;
    GapToAhead => "Include_GapToAhead", Position, false;
    GapToBehind => "Include_GapToBehind", Position, false;
    LastLapTime => "Include_LastLapTime", Position, false;
    BestLapTime => "Include_BestLapTime", Position, false;
    PersonalBestLapTime => "Include_PersonalBestLapTime", Position, false;
    SessionBestLapTime => "Include_SessionBestLapTime", Position, false;
    DeltaToSessionBest => "Include_DeltaToSessionBest", Position, false;
    DeltaToPersonalBest => "Include_DeltaToPersonalBest", Position, false;
    DeltaToOptimal => "Include_DeltaToOptimal", Position, false;
    Sector1Time => "Include_Sector1Time", Position, false;
    Sector2Time => "Include_Sector2Time", Position, false;
    Sector3Time => "Include_Sector3Time", Position, false;
    Sector1BestTime => "Include_Sector1BestTime", Position, false;
    Sector2BestTime => "Include_Sector2BestTime", Position, false;
    Sector3BestTime => "Include_Sector3BestTime", Position, false;
    CurrentSector => "Include_CurrentSector", Position, false;
    CurrentLap => "Include_CurrentLap", Position, false;
    TotalLaps => "Include_TotalLaps", Position, false;
    CompletedLaps => "Include_CompletedLaps", Position, false;

    TireTemperatures => "Include_TireTemperatures", Tires, false;
    TirePressures => "Include_TirePressures", Tires, false;
    TireWear => "Include_TireWear", Tires, false;
    TireGrip => "Include_TireGrip", Tires, false;
    TireCompound => "Include_TireCompound", Tires, false;
    TireDirt => "Include_TireDirt", Tires, false;

    Fuel => "Include_Fuel", Fuel, false;
    FuelCapacity => "Include_FuelCapacity", Fuel, false;
    FuelPerLap => "Include_FuelPerLap", Fuel, false;
    FuelRemaining => "Include_FuelRemaining", Fuel, false;
    FuelEstimatedLaps => "Include_FuelEstimatedLaps", Fuel, false;
    FuelToEnd => "Include_FuelToEnd", Fuel, false;
    ErsData => "Include_ERS_Data", Fuel, false;
    DrsData => "Include_DRS_Data", Fuel, false;
    BatteryData => "Include_BatteryData", Fuel, false;

    AirTemperature => "Include_AirTemperature", Weather, false;
    TrackTemperature => "Include_TrackTemperature", Weather, false;
    WeatherType => "Include_WeatherType", Weather, false;
    RainLevel => "Include_RainLevel", Weather, false;
    Humidity => "Include_Humidity", Weather, false;
    WindData => "Include_WindData", Weather, false;
    TrackGrip => "Include_TrackGrip", Weather, false;
    TimeOfDay => "Include_TimeOfDay", Weather, false;

    CarDamage => "Include_CarDamage", Damage, false;
    EngineTemperatures => "Include_EngineTemperatures", Damage, false;
    BrakeTemperatures => "Include_BrakeTemperatures", Damage, false;
    TurboData => "Include_TurboData", Damage, false;
    WearIndicators => "Include_WearIndicators", Damage, false;

    SteeringInput => "Include_SteeringInput", Input, false;
    PedalInputs => "Include_PedalInputs", Input, false;
    DriverAssists => "Include_DriverAssists", Input, false;
    ElectronicSystems => "Include_ElectronicSystems", Input, false;
    InputDeviceInfo => "Include_InputDeviceInfo", Input, false;

    SafetyCarInfo => "Include_SafetyCarInfo", Safety, false;
    FlagSectors => "Include_FlagSectors", Safety, false;
    PitInformation => "Include_PitInformation", Safety, false;
    RaceControl => "Include_RaceControl", Safety, false;
    Penalties => "Include_Penalties", Safety, false;
    FormationLap => "Include_FormationLap", Safety, false;

    TrackName => "Include_TrackName", Track, false;
    TrackLength => "Include_TrackLength", Track, false;
    TrackConfiguration => "Include_TrackConfiguration", Track, false;

    VehicleModel => "Include_VehicleModel", Vehicle, false;
    VehicleClass => "Include_VehicleClass", Vehicle, false;
    MaxRpm => "Include_MaxRpm", Vehicle, false;

    SessionType => "Include_SessionType", Session, false;
    SessionTimeLeft => "Include_SessionTimeLeft", Session, false;
    SessionLaps => "Include_SessionLaps", Session, false;

    DebugMode => "EnableDebugMode", Debug, false;
}

impl Toggle {
    /// Number of toggles in the catalogue.
    pub const COUNT: usize = Toggle::ALL.len();

    pub(crate) const fn bit(self) -> u128 {
        1u128 << (self as u8)
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
