//! Design-state record consumed by the engine.
//!
//! All dimensional inputs are SI: meters, square meters, kilograms, newtons, pascals,
//! joules, seconds. Angles are in degrees.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::configuration::ConfigurationDescriptor;
use super::convergence::ConvergenceControls;
use super::units::LB;
use super::weight_item::WeightItem;
use crate::domain::errors::{EstimationError, EstimationResult};

/// Static design inputs plus the initial gross-weight guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct DesignState {
    /// Free-form label used in logs
    #[serde(default = "default_design_name")]
    pub name: String,

    pub configuration: ConfigurationDescriptor,

    pub envelope: Envelope,

    pub main_wing: WingGeometry,

    pub horizontal_tail: TailGeometry,

    pub vertical_tail: TailGeometry,

    pub fuselage: FuselageGeometry,

    pub propulsion: PropulsionInputs,

    pub payload: PayloadInputs,

    /// Design maximum zero-fuel mass, used by the wing and fuselage load indices
    pub max_zero_fuel_mass: f64,

    pub fuel: FuelRequirement,

    /// Seed for the gross-weight iteration
    pub initial_gross_mass: f64,

    /// Paint mass per unit wetted area (kg/m^2)
    #[serde(default = "default_paint_areal_density")]
    pub paint_areal_density: f64,

    /// Component masses supplied in place of their regressions
    #[serde(default)]
    pub prescribed: BTreeMap<WeightItem, f64>,

    /// Per-design convergence controls; engine defaults apply when absent
    #[serde(default)]
    pub convergence: Option<ConvergenceControls>,
}

fn default_design_name() -> String {
    "unnamed".to_string()
}

fn default_paint_areal_density() -> f64 {
    0.073
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    pub ultimate_load: f64,
    pub limit_load: f64,
    /// Maximum operating Mach number
    pub max_mach: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WingGeometry {
    pub reference_area: f64,
    pub span: f64,
    pub taper: f64,
    pub sweep_quarter_chord_deg: f64,
    pub thickness_to_chord: f64,
    pub mean_aerodynamic_chord: f64,
    pub wetted_area: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TailGeometry {
    pub reference_area: f64,
    pub span: f64,
    pub sweep_quarter_chord_deg: f64,
    pub thickness_to_chord: f64,
    /// Elevator or rudder area as a fraction of the surface area
    #[serde(default = "default_control_surface_fraction")]
    pub control_surface_fraction: f64,
    /// Distance from wing to tail quarter-chord
    pub moment_arm: f64,
    pub wetted_area: f64,
}

fn default_control_surface_fraction() -> f64 {
    0.25
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FuselageGeometry {
    pub total_length: f64,
    pub nose_length: f64,
    pub width: f64,
    pub height: f64,
    pub wetted_area: f64,
    /// Cabin pressure differential at cruise (Pa)
    #[serde(default)]
    pub differential_pressure: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropulsionInputs {
    /// Sea-level static thrust of one engine (N)
    pub sea_level_static_thrust: f64,
    pub nacelle_diameter: f64,
    pub nacelle_length: f64,
    /// Usable fuel capacity (kg)
    pub fuel_capacity: f64,
    #[serde(default)]
    pub battery: Option<BatteryInputs>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatteryInputs {
    /// Stored energy (J)
    pub energy: f64,
    /// Pack-level specific energy (J/kg)
    pub specific_energy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PayloadInputs {
    pub passengers: u32,
    #[serde(default = "default_mass_per_passenger")]
    pub mass_per_passenger: f64,
    #[serde(default = "default_baggage_per_passenger")]
    pub baggage_per_passenger: f64,
    #[serde(default)]
    pub cargo: f64,
    #[serde(default)]
    pub total: PayloadTotal,
}

fn default_mass_per_passenger() -> f64 {
    165.0 * LB
}

fn default_baggage_per_passenger() -> f64 {
    44.0 * LB
}

/// How the authoritative payload total is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "rule", deny_unknown_fields)]
pub enum PayloadTotal {
    /// passengers + baggage + cargo
    #[default]
    SumOfMembers,
    /// Independently supplied design payload; the members are informational
    Design { mass: f64 },
}

impl PayloadTotal {
    pub fn resolve(self, member_sum: f64) -> f64 {
        match self {
            Self::SumOfMembers => member_sum,
            Self::Design { mass } => mass,
        }
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        match self {
            Self::SumOfMembers => Self::SumOfMembers,
            Self::Design { mass } => Self::Design {
                mass: mass * factor,
            },
        }
    }
}

/// Fuel required for the design mission, the gross-weight dependent part of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "method", deny_unknown_fields)]
pub enum FuelRequirement {
    /// Fuel is a fixed fraction of gross mass
    Fraction { fraction: f64 },
    /// Breguet range fuel fraction with a reserve allowance
    Breguet {
        /// Design range (m)
        range: f64,
        /// Cruise true airspeed (m/s)
        cruise_speed: f64,
        /// Thrust-specific fuel consumption on a weight basis (1/s)
        tsfc: f64,
        lift_to_drag: f64,
        #[serde(default)]
        reserve_fraction: f64,
    },
    /// Fuel mass independent of gross mass
    Fixed { mass: f64 },
}

fn require_positive(field: &str, value: f64) -> EstimationResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(EstimationError::InvalidDesignState(format!(
            "{field} must be positive and finite, got {value}"
        )))
    }
}

fn require_non_negative(field: &str, value: f64) -> EstimationResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(EstimationError::InvalidDesignState(format!(
            "{field} must be non-negative and finite, got {value}"
        )))
    }
}

impl DesignState {
    /// Reject inputs no equation variant can be evaluated with.
    pub fn validate(&self) -> EstimationResult<()> {
        require_positive("initial_gross_mass", self.initial_gross_mass)?;
        require_positive("max_zero_fuel_mass", self.max_zero_fuel_mass)?;
        require_positive("envelope.ultimate_load", self.envelope.ultimate_load)?;
        require_positive("envelope.limit_load", self.envelope.limit_load)?;
        require_positive("envelope.max_mach", self.envelope.max_mach)?;

        require_positive("main_wing.reference_area", self.main_wing.reference_area)?;
        require_positive("main_wing.span", self.main_wing.span)?;
        require_positive("main_wing.thickness_to_chord", self.main_wing.thickness_to_chord)?;
        require_non_negative("main_wing.taper", self.main_wing.taper)?;

        for (name, tail) in [
            ("horizontal_tail", &self.horizontal_tail),
            ("vertical_tail", &self.vertical_tail),
        ] {
            require_positive(&format!("{name}.reference_area"), tail.reference_area)?;
            require_positive(&format!("{name}.span"), tail.span)?;
            require_positive(&format!("{name}.thickness_to_chord"), tail.thickness_to_chord)?;
            require_non_negative(
                &format!("{name}.control_surface_fraction"),
                tail.control_surface_fraction,
            )?;
        }

        require_positive("fuselage.height", self.fuselage.height)?;
        require_positive("fuselage.width", self.fuselage.width)?;
        require_non_negative(
            "fuselage.differential_pressure",
            self.fuselage.differential_pressure,
        )?;
        if self.fuselage.nose_length > self.fuselage.total_length {
            return Err(EstimationError::InvalidDesignState(format!(
                "fuselage.nose_length {} exceeds total_length {}",
                self.fuselage.nose_length, self.fuselage.total_length
            )));
        }

        require_non_negative(
            "propulsion.sea_level_static_thrust",
            self.propulsion.sea_level_static_thrust,
        )?;
        require_non_negative("propulsion.fuel_capacity", self.propulsion.fuel_capacity)?;
        require_non_negative("payload.cargo", self.payload.cargo)?;
        require_non_negative("paint_areal_density", self.paint_areal_density)?;

        if let PayloadTotal::Design { mass } = self.payload.total {
            require_non_negative("payload.total.mass", mass)?;
        }

        match self.fuel {
            FuelRequirement::Fraction { fraction } => {
                if !(0.0..1.0).contains(&fraction) {
                    return Err(EstimationError::InvalidDesignState(format!(
                        "fuel.fraction must be in [0, 1), got {fraction}"
                    )));
                }
            }
            FuelRequirement::Breguet {
                range,
                cruise_speed,
                tsfc,
                lift_to_drag,
                reserve_fraction,
            } => {
                require_non_negative("fuel.range", range)?;
                require_positive("fuel.cruise_speed", cruise_speed)?;
                require_non_negative("fuel.tsfc", tsfc)?;
                require_positive("fuel.lift_to_drag", lift_to_drag)?;
                require_non_negative("fuel.reserve_fraction", reserve_fraction)?;
            }
            FuelRequirement::Fixed { mass } => require_non_negative("fuel.mass", mass)?,
        }

        Ok(())
    }
}
