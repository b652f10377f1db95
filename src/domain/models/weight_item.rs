//! Catalogue of every weight item a calculator can produce.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single named weight item.
///
/// The serialized names match the leaf keys of the breakdown record, so the same
/// spelling is used for prescribed overrides, error messages and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightItem {
    Engines,
    ThrustReversers,
    Miscellaneous,
    FuelSystem,
    Battery,
    Wing,
    HorizontalTail,
    VerticalTail,
    Fuselage,
    MainLandingGear,
    NoseLandingGear,
    Nacelle,
    Paint,
    ControlSystems,
    Apu,
    Electrical,
    Avionics,
    Hydraulics,
    Furnish,
    AirConditioner,
    Instruments,
    Passengers,
    Baggage,
    Cargo,
    OperatingItemsLessCrew,
    FlightCrew,
    FlightAttendants,
    Fuel,
}

impl WeightItem {
    /// Every item, in record order followed by fuel.
    pub const ALL: [Self; 28] = [
        Self::Engines,
        Self::ThrustReversers,
        Self::Miscellaneous,
        Self::FuelSystem,
        Self::Battery,
        Self::Wing,
        Self::HorizontalTail,
        Self::VerticalTail,
        Self::Fuselage,
        Self::MainLandingGear,
        Self::NoseLandingGear,
        Self::Nacelle,
        Self::Paint,
        Self::ControlSystems,
        Self::Apu,
        Self::Electrical,
        Self::Avionics,
        Self::Hydraulics,
        Self::Furnish,
        Self::AirConditioner,
        Self::Instruments,
        Self::Passengers,
        Self::Baggage,
        Self::Cargo,
        Self::OperatingItemsLessCrew,
        Self::FlightCrew,
        Self::FlightAttendants,
        Self::Fuel,
    ];

    /// Record key of this item.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Engines => "engines",
            Self::ThrustReversers => "thrust_reversers",
            Self::Miscellaneous => "miscellaneous",
            Self::FuelSystem => "fuel_system",
            Self::Battery => "battery",
            Self::Wing => "wing",
            Self::HorizontalTail => "horizontal_tail",
            Self::VerticalTail => "vertical_tail",
            Self::Fuselage => "fuselage",
            Self::MainLandingGear => "main_landing_gear",
            Self::NoseLandingGear => "nose_landing_gear",
            Self::Nacelle => "nacelle",
            Self::Paint => "paint",
            Self::ControlSystems => "control_systems",
            Self::Apu => "apu",
            Self::Electrical => "electrical",
            Self::Avionics => "avionics",
            Self::Hydraulics => "hydraulics",
            Self::Furnish => "furnish",
            Self::AirConditioner => "air_conditioner",
            Self::Instruments => "instruments",
            Self::Passengers => "passengers",
            Self::Baggage => "baggage",
            Self::Cargo => "cargo",
            Self::OperatingItemsLessCrew => "operating_items_less_crew",
            Self::FlightCrew => "flight_crew",
            Self::FlightAttendants => "flight_attendants",
            Self::Fuel => "fuel",
        }
    }
}

impl fmt::Display for WeightItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
