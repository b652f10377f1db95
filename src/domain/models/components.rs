//! Flat set of calculator outputs for one iteration pass.

use serde::{Deserialize, Serialize};

use super::weight_item::WeightItem;

/// Every calculator output of a single pass, in kilograms unless scaled.
///
/// This is the aggregator's input. It is rebuilt from scratch on every pass and never
/// mutated once the pass is complete.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub engines: f64,
    pub thrust_reversers: f64,
    pub miscellaneous: f64,
    pub fuel_system: f64,
    pub battery: f64,
    pub wing: f64,
    pub horizontal_tail: f64,
    pub vertical_tail: f64,
    pub fuselage: f64,
    pub main_landing_gear: f64,
    pub nose_landing_gear: f64,
    pub nacelle: f64,
    pub paint: f64,
    pub control_systems: f64,
    pub apu: f64,
    pub electrical: f64,
    pub avionics: f64,
    pub hydraulics: f64,
    pub furnish: f64,
    pub air_conditioner: f64,
    pub instruments: f64,
    pub passengers: f64,
    pub baggage: f64,
    pub cargo: f64,
    pub operating_items_less_crew: f64,
    pub flight_crew: f64,
    pub flight_attendants: f64,
    pub fuel: f64,
}

impl ComponentWeights {
    /// Build from `(item, weight)` pairs. Items not present stay at zero.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (WeightItem, f64)>,
    {
        let mut weights = Self::default();
        for (item, value) in pairs {
            *weights.slot_mut(item) = value;
        }
        weights
    }

    pub fn get(&self, item: WeightItem) -> f64 {
        match item {
            WeightItem::Engines => self.engines,
            WeightItem::ThrustReversers => self.thrust_reversers,
            WeightItem::Miscellaneous => self.miscellaneous,
            WeightItem::FuelSystem => self.fuel_system,
            WeightItem::Battery => self.battery,
            WeightItem::Wing => self.wing,
            WeightItem::HorizontalTail => self.horizontal_tail,
            WeightItem::VerticalTail => self.vertical_tail,
            WeightItem::Fuselage => self.fuselage,
            WeightItem::MainLandingGear => self.main_landing_gear,
            WeightItem::NoseLandingGear => self.nose_landing_gear,
            WeightItem::Nacelle => self.nacelle,
            WeightItem::Paint => self.paint,
            WeightItem::ControlSystems => self.control_systems,
            WeightItem::Apu => self.apu,
            WeightItem::Electrical => self.electrical,
            WeightItem::Avionics => self.avionics,
            WeightItem::Hydraulics => self.hydraulics,
            WeightItem::Furnish => self.furnish,
            WeightItem::AirConditioner => self.air_conditioner,
            WeightItem::Instruments => self.instruments,
            WeightItem::Passengers => self.passengers,
            WeightItem::Baggage => self.baggage,
            WeightItem::Cargo => self.cargo,
            WeightItem::OperatingItemsLessCrew => self.operating_items_less_crew,
            WeightItem::FlightCrew => self.flight_crew,
            WeightItem::FlightAttendants => self.flight_attendants,
            WeightItem::Fuel => self.fuel,
        }
    }

    fn slot_mut(&mut self, item: WeightItem) -> &mut f64 {
        match item {
            WeightItem::Engines => &mut self.engines,
            WeightItem::ThrustReversers => &mut self.thrust_reversers,
            WeightItem::Miscellaneous => &mut self.miscellaneous,
            WeightItem::FuelSystem => &mut self.fuel_system,
            WeightItem::Battery => &mut self.battery,
            WeightItem::Wing => &mut self.wing,
            WeightItem::HorizontalTail => &mut self.horizontal_tail,
            WeightItem::VerticalTail => &mut self.vertical_tail,
            WeightItem::Fuselage => &mut self.fuselage,
            WeightItem::MainLandingGear => &mut self.main_landing_gear,
            WeightItem::NoseLandingGear => &mut self.nose_landing_gear,
            WeightItem::Nacelle => &mut self.nacelle,
            WeightItem::Paint => &mut self.paint,
            WeightItem::ControlSystems => &mut self.control_systems,
            WeightItem::Apu => &mut self.apu,
            WeightItem::Electrical => &mut self.electrical,
            WeightItem::Avionics => &mut self.avionics,
            WeightItem::Hydraulics => &mut self.hydraulics,
            WeightItem::Furnish => &mut self.furnish,
            WeightItem::AirConditioner => &mut self.air_conditioner,
            WeightItem::Instruments => &mut self.instruments,
            WeightItem::Passengers => &mut self.passengers,
            WeightItem::Baggage => &mut self.baggage,
            WeightItem::Cargo => &mut self.cargo,
            WeightItem::OperatingItemsLessCrew => &mut self.operating_items_less_crew,
            WeightItem::FlightCrew => &mut self.flight_crew,
            WeightItem::FlightAttendants => &mut self.flight_attendants,
            WeightItem::Fuel => &mut self.fuel,
        }
    }

    /// Multiply every item by `factor` (unit conversion).
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::from_pairs(WeightItem::ALL.iter().map(|&item| (item, self.get(item) * factor)))
    }
}
