//! Unit constants and the configured output mass unit.
//!
//! Design inputs are SI. Several regressions were fitted in imperial units, so the
//! calculators convert on the way in and back to kilograms on the way out using the
//! constants below.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One pound mass in kilograms.
pub const LB: f64 = 0.453_592_37;

/// One foot in meters.
pub const FT: f64 = 0.3048;

/// One square foot in square meters.
pub const FT2: f64 = FT * FT;

/// One pound force in newtons.
pub const LBF: f64 = 4.448_221_615_260_5;

/// One pound force per square foot in pascals.
pub const PSF: f64 = LBF / FT2;

/// Mass unit used for every numeric leaf of an emitted breakdown record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    #[default]
    Kilogram,
    Pound,
}

impl MassUnit {
    /// Multiplier converting a mass in kilograms into this unit.
    pub fn per_kilogram(self) -> f64 {
        match self {
            Self::Kilogram => 1.0,
            Self::Pound => 1.0 / LB,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Kilogram => "kg",
            Self::Pound => "lb",
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kilogram => write!(f, "kilogram"),
            Self::Pound => write!(f, "pound"),
        }
    }
}

impl std::str::FromStr for MassUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kilogram" | "kg" => Ok(Self::Kilogram),
            "pound" | "lb" | "lbs" => Ok(Self::Pound),
            other => Err(format!("unknown mass unit: {other}")),
        }
    }
}
