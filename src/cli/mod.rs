//! Command-line interface

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use crate::domain::errors::EstimationError;

/// Exit code for a design or configuration the engine refuses to evaluate.
pub const EXIT_INVALID_INPUT: i32 = 2;
/// Exit code for a run that did not converge.
pub const EXIT_NOT_CONVERGED: i32 = 3;

/// Map an error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<EstimationError>() {
        Some(
            EstimationError::InvalidDesignState(_)
            | EstimationError::UnsupportedConfiguration(_)
            | EstimationError::InvalidControls(_),
        ) => EXIT_INVALID_INPUT,
        Some(
            EstimationError::ConvergenceDiverged { .. }
            | EstimationError::ConvergenceTimeout { .. }
            | EstimationError::ConvergenceCancelled { .. },
        ) => EXIT_NOT_CONVERGED,
        _ => 1,
    }
}

/// Report an error on stderr (or as JSON on stdout) and exit.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let snapshot = err
        .downcast_ref::<EstimationError>()
        .and_then(EstimationError::diagnostic_snapshot);

    if json_mode {
        let diagnostic = snapshot.map(|s| {
            serde_json::json!({
                "iteration": s.iteration,
                "gross_mass": s.gross_mass,
                "candidate": s.candidate,
                "residual": s.residual,
                "record": s.record,
            })
        });
        let body = serde_json::json!({
            "error": format!("{err:#}"),
            "diagnostic": diagnostic,
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
        if let Some(s) = snapshot {
            eprintln!(
                "  iteration {}: gross mass {:.2} kg, candidate {:.2} kg, residual {:.3e}",
                s.iteration, s.gross_mass, s.candidate, s.residual
            );
        }
    }

    std::process::exit(exit_code(&err))
}
