//! Convergence controls, driver states and per-iteration diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::breakdown::BreakdownRecord;
use super::components::ComponentWeights;

/// Numerical controls for the gross-weight fixed-point iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ConvergenceControls {
    /// Relative change in the gross-weight estimate below which the run converges
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Damping factor applied to each update, in (0, 1]
    #[serde(default = "default_relaxation_factor")]
    pub relaxation_factor: f64,

    /// Iteration cap
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Candidate growth ratio that counts toward divergence
    #[serde(default = "default_divergence_growth_factor")]
    pub divergence_growth_factor: f64,

    /// Consecutive growing iterations after which the run is declared diverged
    #[serde(default = "default_divergence_window")]
    pub divergence_window: u32,

    /// Sanity bound on any candidate gross mass, in kilograms
    #[serde(default = "default_max_gross_mass")]
    pub max_gross_mass: f64,
}

const fn default_tolerance() -> f64 {
    1.0e-6
}

const fn default_relaxation_factor() -> f64 {
    1.0
}

const fn default_max_iterations() -> u32 {
    50
}

const fn default_divergence_growth_factor() -> f64 {
    1.5
}

const fn default_divergence_window() -> u32 {
    3
}

const fn default_max_gross_mass() -> f64 {
    5.0e6
}

impl Default for ConvergenceControls {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            relaxation_factor: default_relaxation_factor(),
            max_iterations: default_max_iterations(),
            divergence_growth_factor: default_divergence_growth_factor(),
            divergence_window: default_divergence_window(),
            max_gross_mass: default_max_gross_mass(),
        }
    }
}

/// Convergence control validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlsError {
    #[error("Invalid tolerance: {0}. Must be in (0, 1)")]
    InvalidTolerance(f64),

    #[error("Invalid relaxation_factor: {0}. Must be in (0, 1]")]
    InvalidRelaxation(f64),

    #[error("Invalid max_iterations: {0}. Must be at least 1")]
    InvalidMaxIterations(u32),

    #[error("Invalid divergence_growth_factor: {0}. Must be greater than 1")]
    InvalidGrowthFactor(f64),

    #[error("Invalid divergence_window: {0}. Must be at least 1")]
    InvalidDivergenceWindow(u32),

    #[error("Invalid max_gross_mass: {0}. Must be positive and finite")]
    InvalidSanityBound(f64),
}

impl ConvergenceControls {
    pub fn validate(&self) -> Result<(), ControlsError> {
        if !(self.tolerance > 0.0 && self.tolerance < 1.0) {
            return Err(ControlsError::InvalidTolerance(self.tolerance));
        }
        if !(self.relaxation_factor > 0.0 && self.relaxation_factor <= 1.0) {
            return Err(ControlsError::InvalidRelaxation(self.relaxation_factor));
        }
        if self.max_iterations == 0 {
            return Err(ControlsError::InvalidMaxIterations(self.max_iterations));
        }
        if !(self.divergence_growth_factor > 1.0 && self.divergence_growth_factor.is_finite()) {
            return Err(ControlsError::InvalidGrowthFactor(
                self.divergence_growth_factor,
            ));
        }
        if self.divergence_window == 0 {
            return Err(ControlsError::InvalidDivergenceWindow(
                self.divergence_window,
            ));
        }
        if !(self.max_gross_mass > 0.0 && self.max_gross_mass.is_finite()) {
            return Err(ControlsError::InvalidSanityBound(self.max_gross_mass));
        }
        Ok(())
    }
}

/// States of the convergence driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum DriverState {
    Initializing,
    Iterating { iteration: u32 },
    Converged,
    Diverged,
    MaxIterationsExceeded,
    Cancelled,
}

impl DriverState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Initializing | Self::Iterating { .. })
    }
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initializing => write!(f, "initializing"),
            Self::Iterating { iteration } => write!(f, "iterating ({iteration})"),
            Self::Converged => write!(f, "converged"),
            Self::Diverged => write!(f, "diverged"),
            Self::MaxIterationsExceeded => write!(f, "max iterations exceeded"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Why the driver declared divergence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum DivergenceReason {
    NonFinite,
    NonPositive { candidate: f64 },
    ExceedsBound { candidate: f64, bound: f64 },
    UnboundedGrowth { factor: f64, window: u32 },
}

impl fmt::Display for DivergenceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "candidate gross mass is not finite"),
            Self::NonPositive { candidate } => {
                write!(f, "candidate gross mass {candidate} is not positive")
            }
            Self::ExceedsBound { candidate, bound } => {
                write!(f, "candidate gross mass {candidate} exceeds sanity bound {bound}")
            }
            Self::UnboundedGrowth { factor, window } => write!(
                f,
                "candidate grew by more than x{factor} for {window} consecutive iterations"
            ),
        }
    }
}

/// Everything the driver learned in one iteration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationSnapshot {
    /// 1-based iteration number
    pub iteration: u32,
    /// Gross-weight estimate the calculators were evaluated at
    pub gross_mass: f64,
    /// operating_empty + payload + fuel
    pub candidate: f64,
    /// Relaxed estimate handed to the next iteration
    pub next_estimate: f64,
    /// |next_estimate - gross_mass| / gross_mass
    pub residual: f64,
    pub components: ComponentWeights,
    pub record: BreakdownRecord,
}

/// Compact per-iteration history entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationSummary {
    pub iteration: u32,
    pub gross_mass: f64,
    pub candidate: f64,
    pub residual: f64,
}

impl From<&IterationSnapshot> for IterationSummary {
    fn from(snapshot: &IterationSnapshot) -> Self {
        Self {
            iteration: snapshot.iteration,
            gross_mass: snapshot.gross_mass,
            candidate: snapshot.candidate,
            residual: snapshot.residual,
        }
    }
}
