//! Component weight calculators.
//!
//! Every weight item is produced by exactly one [`Calculator`]. The equation variant
//! is chosen once per run by the configuration selector and never changes between
//! iterations; within a pass each calculator only reads the shared [`DesignSnapshot`],
//! so a pass can be evaluated in any order, or in parallel, with identical results.

pub mod fuel;
pub mod operational;
pub mod payload;
pub mod propulsion;
pub mod structural;
pub mod systems;

use rayon::prelude::*;

use crate::domain::errors::{EstimationError, EstimationResult};
use crate::domain::models::{CabinClass, ComponentWeights, DesignState, EngineMount, WeightItem};

/// Read-only view of the design evaluated at one gross-mass estimate.
#[derive(Debug, Clone, Copy)]
pub struct DesignSnapshot<'a> {
    pub design: &'a DesignState,
    /// Current gross-weight estimate (kg)
    pub gross_mass: f64,
}

impl<'a> DesignSnapshot<'a> {
    pub fn new(design: &'a DesignState, gross_mass: f64) -> Self {
        Self { design, gross_mass }
    }
}

// ---------------------------------------------------------------------------
// Equation variants
// ---------------------------------------------------------------------------

/// Closed set of equation variants.
///
/// Parameters that depend only on the configuration are bound into the variant at
/// selection time; everything else is read from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Equation {
    CantileverWing,
    HorizontalTail,
    VerticalTail { t_tail: bool },
    Fuselage { pressurized: bool },
    MainLandingGear { wing_factor: f64, tail_wheel: bool },
    NoseLandingGear,
    Nacelle { mount: EngineMount },
    Paint,
    Turbofan,
    ThrustReversers,
    ControlsAndStarter,
    FuelSystem,
    Battery,
    FlightControls { powered: bool },
    Apu,
    Electrical,
    Avionics { class: CabinClass },
    Hydraulics,
    Furnishings,
    AirConditioning,
    Instruments,
    Passengers,
    Baggage,
    Cargo,
    OperatingItems { class: CabinClass },
    FlightCrew,
    FlightAttendants,
    FuelFraction { fraction: f64 },
    BreguetFuel {
        range: f64,
        cruise_speed: f64,
        tsfc: f64,
        lift_to_drag: f64,
        reserve_fraction: f64,
    },
}

impl Equation {
    /// Stable name used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CantileverWing => "cantilever_wing",
            Self::HorizontalTail => "horizontal_tail",
            Self::VerticalTail { t_tail: true } => "vertical_tail_t_tail",
            Self::VerticalTail { t_tail: false } => "vertical_tail",
            Self::Fuselage { .. } => "fuselage_tube",
            Self::MainLandingGear { .. } => "torenbeek_main_gear",
            Self::NoseLandingGear => "torenbeek_nose_gear",
            Self::Nacelle { .. } => "nacelle",
            Self::Paint => "paint",
            Self::Turbofan => "turbofan",
            Self::ThrustReversers => "thrust_reversers",
            Self::ControlsAndStarter => "engine_controls_and_starter",
            Self::FuelSystem => "fuel_system",
            Self::Battery => "battery_specific_energy",
            Self::FlightControls { powered: true } => "powered_flight_controls",
            Self::FlightControls { powered: false } => "aerodynamic_flight_controls",
            Self::Apu => "apu",
            Self::Electrical => "electrical",
            Self::Avionics { .. } => "avionics",
            Self::Hydraulics => "hydraulics",
            Self::Furnishings => "furnishings",
            Self::AirConditioning => "air_conditioning",
            Self::Instruments => "instruments",
            Self::Passengers => "passengers",
            Self::Baggage => "baggage",
            Self::Cargo => "cargo",
            Self::OperatingItems { .. } => "operating_items",
            Self::FlightCrew => "flight_crew",
            Self::FlightAttendants => "flight_attendants",
            Self::FuelFraction { .. } => "fuel_fraction",
            Self::BreguetFuel { .. } => "breguet_fuel",
        }
    }

    /// Evaluate in kilograms. No validation happens here.
    pub fn compute(&self, s: &DesignSnapshot<'_>) -> f64 {
        match *self {
            Self::CantileverWing => structural::cantilever_wing(s),
            Self::HorizontalTail => structural::horizontal_tail(s),
            Self::VerticalTail { t_tail } => structural::vertical_tail(s, t_tail),
            Self::Fuselage { pressurized } => structural::fuselage(s, pressurized),
            Self::MainLandingGear {
                wing_factor,
                tail_wheel,
            } => structural::main_landing_gear(s, wing_factor, tail_wheel),
            Self::NoseLandingGear => structural::nose_landing_gear(s),
            Self::Nacelle { mount } => structural::nacelle(s, mount),
            Self::Paint => structural::paint(s),
            Self::Turbofan => propulsion::turbofan(s),
            Self::ThrustReversers => propulsion::thrust_reversers(s),
            Self::ControlsAndStarter => propulsion::controls_and_starter(s),
            Self::FuelSystem => propulsion::fuel_system(s),
            Self::Battery => propulsion::battery(s),
            Self::FlightControls { powered } => systems::flight_controls(s, powered),
            Self::Apu => systems::apu(s),
            Self::Electrical => systems::electrical(s),
            Self::Avionics { class } => systems::avionics(class),
            Self::Hydraulics => systems::hydraulics(s),
            Self::Furnishings => systems::furnishings(s),
            Self::AirConditioning => systems::air_conditioning(s),
            Self::Instruments => systems::instruments(s),
            Self::Passengers => payload::passengers(s),
            Self::Baggage => payload::baggage(s),
            Self::Cargo => payload::cargo(s),
            Self::OperatingItems { class } => operational::operating_items(s, class),
            Self::FlightCrew => operational::flight_crew(s),
            Self::FlightAttendants => operational::flight_attendants(s),
            Self::FuelFraction { fraction } => fuel::fraction_of_gross(s, fraction),
            Self::BreguetFuel {
                range,
                cruise_speed,
                tsfc,
                lift_to_drag,
                reserve_fraction,
            } => fuel::breguet(s, range, cruise_speed, tsfc, lift_to_drag, reserve_fraction),
        }
    }
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

/// How a weight item is obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    /// Feature not installed; always exactly zero.
    Absent,
    /// Caller-supplied mass, used at every iteration.
    Prescribed(f64),
    Equation(Equation),
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Prescribed(_) => "prescribed",
            Self::Equation(equation) => equation.name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculator {
    pub item: WeightItem,
    pub method: Method,
}

impl Calculator {
    pub fn new(item: WeightItem, method: Method) -> Self {
        Self { item, method }
    }

    /// Compute this item's weight, rejecting negative or non-finite output.
    pub fn evaluate(&self, snapshot: &DesignSnapshot<'_>) -> EstimationResult<f64> {
        let value = match self.method {
            Method::Absent => return Ok(0.0),
            Method::Prescribed(value) => value,
            Method::Equation(equation) => equation.compute(snapshot),
        };

        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(EstimationError::InvalidEquationResult {
                item: self.item,
                equation: self.method.name(),
                value,
            })
        }
    }
}

/// One calculator per weight item, fixed for the lifetime of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorSet {
    calculators: Vec<Calculator>,
}

impl CalculatorSet {
    /// Build from calculators covering every item in [`WeightItem::ALL`] once.
    pub fn new(mut calculators: Vec<Calculator>) -> EstimationResult<Self> {
        calculators.sort_by_key(|c| c.item);
        for item in WeightItem::ALL {
            let count = calculators.iter().filter(|c| c.item == item).count();
            if count != 1 {
                return Err(EstimationError::UnsupportedConfiguration(format!(
                    "expected exactly one calculator for {item}, found {count}"
                )));
            }
        }
        Ok(Self { calculators })
    }

    pub fn get(&self, item: WeightItem) -> Option<&Calculator> {
        self.calculators.iter().find(|c| c.item == item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Calculator> {
        self.calculators.iter()
    }

    /// Evaluate every calculator against one snapshot.
    ///
    /// With `parallel` set the pass runs on the rayon pool. The outputs are identical
    /// either way; only which error is reported may differ when several fail.
    pub fn evaluate(
        &self,
        snapshot: &DesignSnapshot<'_>,
        parallel: bool,
    ) -> EstimationResult<ComponentWeights> {
        let outputs: Vec<(WeightItem, f64)> = if parallel {
            self.calculators
                .par_iter()
                .map(|c| c.evaluate(snapshot).map(|value| (c.item, value)))
                .collect::<EstimationResult<_>>()?
        } else {
            self.calculators
                .iter()
                .map(|c| c.evaluate(snapshot).map(|value| (c.item, value)))
                .collect::<EstimationResult<_>>()?
        };
        Ok(ComponentWeights::from_pairs(outputs))
    }
}
