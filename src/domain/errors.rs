//! Domain errors for the weight engine.

use thiserror::Error;

use super::models::convergence::{ControlsError, DivergenceReason, IterationSnapshot};
use super::models::weight_item::WeightItem;

#[allow(clippy::ref_option)]
fn format_residual(residual: &Option<f64>) -> String {
    residual
        .as_ref()
        .map_or_else(|| "n/a".to_string(), |r| format!("{r:e}"))
}

/// Failures of a weight estimation run.
///
/// Every variant aborts the run. Convergence failures carry the iteration state needed
/// to report or restart with adjusted controls.
#[derive(Debug, Error)]
pub enum EstimationError {
    #[error("{item} equation '{equation}' produced an invalid weight: {value}")]
    InvalidEquationResult {
        item: WeightItem,
        equation: &'static str,
        value: f64,
    },

    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("Invalid design state: {0}")]
    InvalidDesignState(String),

    #[error("Invalid convergence controls: {0}")]
    InvalidControls(#[from] ControlsError),

    #[error(
        "Convergence diverged after {iterations} iteration(s): {reason} (last residual {})",
        format_residual(.last_residual)
    )]
    ConvergenceDiverged {
        iterations: u32,
        reason: DivergenceReason,
        last_residual: Option<f64>,
        last_finite: Option<Box<IterationSnapshot>>,
    },

    #[error(
        "Convergence did not meet tolerance within {iterations} iteration(s) (last residual {})",
        format_residual(.last_residual)
    )]
    ConvergenceTimeout {
        iterations: u32,
        last_residual: Option<f64>,
        best: Option<Box<IterationSnapshot>>,
    },

    #[error(
        "Convergence cancelled after {iterations} iteration(s) (last residual {})",
        format_residual(.last_residual)
    )]
    ConvergenceCancelled {
        iterations: u32,
        last_residual: Option<f64>,
        last: Option<Box<IterationSnapshot>>,
    },

    #[error("Estimation worker failed: {0}")]
    WorkerFailed(String),
}

pub type EstimationResult<T> = Result<T, EstimationError>;

impl EstimationError {
    /// Iteration snapshot attached for diagnostics, if any.
    pub fn diagnostic_snapshot(&self) -> Option<&IterationSnapshot> {
        match self {
            Self::ConvergenceDiverged { last_finite, .. } => last_finite.as_deref(),
            Self::ConvergenceTimeout { best, .. } => best.as_deref(),
            Self::ConvergenceCancelled { last, .. } => last.as_deref(),
            _ => None,
        }
    }

    /// Number of completed iterations for convergence failures.
    pub fn iterations(&self) -> Option<u32> {
        match self {
            Self::ConvergenceDiverged { iterations, .. }
            | Self::ConvergenceTimeout { iterations, .. }
            | Self::ConvergenceCancelled { iterations, .. } => Some(*iterations),
            _ => None,
        }
    }
}
