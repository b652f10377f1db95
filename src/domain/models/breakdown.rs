//! Breakdown record: the engine's principal output.
//!
//! Key names and nesting are a compatibility contract with recorded fixtures, so every
//! struct rejects unknown fields on deserialization and serializes with exactly the
//! field names declared here.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropulsionBreakdown {
    /// Members plus the structural nacelle charge.
    pub total: f64,
    pub engines: f64,
    pub thrust_reversers: f64,
    pub miscellaneous: f64,
    pub fuel_system: f64,
    pub battery: f64,
}

impl PropulsionBreakdown {
    /// Sum of the propulsion members alone, without the nacelle charge.
    pub fn member_sum(&self) -> f64 {
        self.engines + self.thrust_reversers + self.miscellaneous + self.fuel_system + self.battery
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructuralBreakdown {
    pub wing: f64,
    pub horizontal_tail: f64,
    pub vertical_tail: f64,
    pub fuselage: f64,
    pub main_landing_gear: f64,
    pub nose_landing_gear: f64,
    pub nacelle: f64,
    pub paint: f64,
    pub total: f64,
}

impl StructuralBreakdown {
    pub fn member_sum(&self) -> f64 {
        self.wing
            + self.horizontal_tail
            + self.vertical_tail
            + self.fuselage
            + self.main_landing_gear
            + self.nose_landing_gear
            + self.nacelle
            + self.paint
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemsBreakdown {
    pub control_systems: f64,
    pub apu: f64,
    pub electrical: f64,
    pub avionics: f64,
    pub hydraulics: f64,
    pub furnish: f64,
    pub air_conditioner: f64,
    pub instruments: f64,
    pub total: f64,
}

impl SystemsBreakdown {
    pub fn member_sum(&self) -> f64 {
        self.control_systems
            + self.apu
            + self.electrical
            + self.avionics
            + self.hydraulics
            + self.furnish
            + self.air_conditioner
            + self.instruments
    }
}

/// Payload group. `total` is authoritative and need not equal the member sum.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PayloadBreakdown {
    pub total: f64,
    pub passengers: f64,
    pub baggage: f64,
    pub cargo: f64,
}

impl PayloadBreakdown {
    pub fn member_sum(&self) -> f64 {
        self.passengers + self.baggage + self.cargo
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperationalItems {
    pub operating_items_less_crew: f64,
    pub flight_crew: f64,
    pub flight_attendants: f64,
    pub total: f64,
}

impl OperationalItems {
    pub fn member_sum(&self) -> f64 {
        self.operating_items_less_crew + self.flight_crew + self.flight_attendants
    }
}

/// Full weight breakdown for one evaluation of the design.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BreakdownRecord {
    pub propulsion_breakdown: PropulsionBreakdown,
    pub structural_breakdown: StructuralBreakdown,
    pub systems_breakdown: SystemsBreakdown,
    pub payload_breakdown: PayloadBreakdown,
    pub operational_items: OperationalItems,
    pub empty: f64,
    pub operating_empty: f64,
    pub zero_fuel_weight: f64,
    pub max_takeoff: f64,
}

/// First invariant a record fails.
#[derive(Debug, Clone, PartialEq)]
pub enum RollupViolation {
    /// A leaf or total that is negative, NaN or infinite
    InvalidValue { field: &'static str, value: f64 },
    /// A total that does not match the sum it rolls up
    SumMismatch {
        field: &'static str,
        expected: f64,
        recorded: f64,
    },
}

impl RollupViolation {
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidValue { field, .. } | Self::SumMismatch { field, .. } => field,
        }
    }
}

impl fmt::Display for RollupViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, value } => {
                write!(f, "{field} is {value}, expected a finite non-negative mass")
            }
            Self::SumMismatch {
                field,
                expected,
                recorded,
            } => write!(
                f,
                "{field} is {recorded} but the roll-up gives {expected} (difference {:e})",
                recorded - expected
            ),
        }
    }
}

impl BreakdownRecord {
    /// Every numeric entry of the record with its dotted key.
    pub fn entries(&self) -> [(&'static str, f64); 36] {
        let p = &self.propulsion_breakdown;
        let s = &self.structural_breakdown;
        let y = &self.systems_breakdown;
        let l = &self.payload_breakdown;
        let o = &self.operational_items;
        [
            ("propulsion_breakdown.total", p.total),
            ("propulsion_breakdown.engines", p.engines),
            ("propulsion_breakdown.thrust_reversers", p.thrust_reversers),
            ("propulsion_breakdown.miscellaneous", p.miscellaneous),
            ("propulsion_breakdown.fuel_system", p.fuel_system),
            ("propulsion_breakdown.battery", p.battery),
            ("structural_breakdown.wing", s.wing),
            ("structural_breakdown.horizontal_tail", s.horizontal_tail),
            ("structural_breakdown.vertical_tail", s.vertical_tail),
            ("structural_breakdown.fuselage", s.fuselage),
            ("structural_breakdown.main_landing_gear", s.main_landing_gear),
            ("structural_breakdown.nose_landing_gear", s.nose_landing_gear),
            ("structural_breakdown.nacelle", s.nacelle),
            ("structural_breakdown.paint", s.paint),
            ("structural_breakdown.total", s.total),
            ("systems_breakdown.control_systems", y.control_systems),
            ("systems_breakdown.apu", y.apu),
            ("systems_breakdown.electrical", y.electrical),
            ("systems_breakdown.avionics", y.avionics),
            ("systems_breakdown.hydraulics", y.hydraulics),
            ("systems_breakdown.furnish", y.furnish),
            ("systems_breakdown.air_conditioner", y.air_conditioner),
            ("systems_breakdown.instruments", y.instruments),
            ("systems_breakdown.total", y.total),
            ("payload_breakdown.total", l.total),
            ("payload_breakdown.passengers", l.passengers),
            ("payload_breakdown.baggage", l.baggage),
            ("payload_breakdown.cargo", l.cargo),
            ("operational_items.operating_items_less_crew", o.operating_items_less_crew),
            ("operational_items.flight_crew", o.flight_crew),
            ("operational_items.flight_attendants", o.flight_attendants),
            ("operational_items.total", o.total),
            ("empty", self.empty),
            ("operating_empty", self.operating_empty),
            ("zero_fuel_weight", self.zero_fuel_weight),
            ("max_takeoff", self.max_takeoff),
        ]
    }

    /// Check every entry is a finite non-negative mass, then every summation rule
    /// against `tolerance` (absolute, in the record's unit).
    ///
    /// The payload total is not checked against its members because it may be an
    /// independently supplied design payload.
    pub fn check_rollup(&self, tolerance: f64) -> Result<(), RollupViolation> {
        for (field, value) in self.entries() {
            if !(value.is_finite() && value >= 0.0) {
                return Err(RollupViolation::InvalidValue { field, value });
            }
        }

        let checks = [
            (
                "structural_breakdown.total",
                self.structural_breakdown.member_sum(),
                self.structural_breakdown.total,
            ),
            (
                "propulsion_breakdown.total",
                self.propulsion_breakdown.member_sum() + self.structural_breakdown.nacelle,
                self.propulsion_breakdown.total,
            ),
            (
                "systems_breakdown.total",
                self.systems_breakdown.member_sum(),
                self.systems_breakdown.total,
            ),
            (
                "operational_items.total",
                self.operational_items.member_sum(),
                self.operational_items.total,
            ),
            (
                "empty",
                self.structural_breakdown.total
                    + self.propulsion_breakdown.total
                    + self.systems_breakdown.total,
                self.empty,
            ),
            (
                "operating_empty",
                self.empty + self.operational_items.total,
                self.operating_empty,
            ),
            (
                "zero_fuel_weight",
                self.operating_empty + self.payload_breakdown.total,
                self.zero_fuel_weight,
            ),
        ];

        for (field, expected, recorded) in checks {
            if (expected - recorded).abs() > tolerance {
                return Err(RollupViolation::SumMismatch {
                    field,
                    expected,
                    recorded,
                });
            }
        }
        Ok(())
    }

    /// Takeoff weight covers zero-fuel weight.
    pub fn is_physically_valid(&self) -> bool {
        self.max_takeoff >= self.zero_fuel_weight
    }
}
