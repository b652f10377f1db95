//! Implementation of the `heft estimate` command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

use crate::application::{Estimate, WeightEstimator};
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{EngineConfig, MassUnit};
use crate::infrastructure::design_file::load_design;

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Design state file (YAML, or JSON when the extension is .json)
    pub design: PathBuf,

    /// Mass unit of the emitted breakdown (kg or lb)
    #[arg(short, long)]
    pub unit: Option<MassUnit>,

    /// Relative convergence tolerance
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Relaxation factor in (0, 1]
    #[arg(long)]
    pub relaxation: Option<f64>,

    /// Iteration cap
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Evaluate calculators in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Wall-clock limit in milliseconds; the run is cancelled when it elapses
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Include the iteration history table in human output
    #[arg(long)]
    pub history: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct EstimateOutput {
    #[serde(flatten)]
    pub estimate: Estimate,
    #[serde(skip)]
    pub show_history: bool,
}

impl CommandOutput for EstimateOutput {
    fn to_human(&self) -> String {
        let estimate = &self.estimate;
        let formatter = TableFormatter::new();
        let unit = estimate.mass_unit;

        let mut lines = vec![format!(
            "Design '{}' converged in {} iteration(s), residual {:.3e}",
            estimate.design, estimate.iterations, estimate.residual
        )];
        lines.push(formatter.format_breakdown(&estimate.record, unit));
        lines.push(format!(
            "Mission fuel: {:.2} {}",
            estimate.fuel_mass,
            unit.symbol()
        ));
        if !estimate.physically_valid {
            lines.push(format!(
                "Warning: max_takeoff {:.2} is below zero_fuel_weight {:.2}",
                estimate.record.max_takeoff, estimate.record.zero_fuel_weight
            ));
        }
        if self.show_history {
            lines.push(formatter.format_history(&estimate.history, unit));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Apply command-line overrides on top of the loaded engine config.
fn build_estimator(args: &EstimateArgs, mut config: EngineConfig) -> WeightEstimator {
    if let Some(unit) = args.unit {
        config.mass_unit = unit;
    }
    if args.parallel {
        config.parallel_calculators = true;
    }
    WeightEstimator::new(config)
}

pub async fn execute(args: EstimateArgs, config: EngineConfig, json_mode: bool) -> Result<()> {
    let design = load_design(&args.design)?;
    let mut estimator = build_estimator(&args, config);

    if args.tolerance.is_some() || args.relaxation.is_some() || args.max_iterations.is_some() {
        let mut controls = estimator.controls_for(&design);
        if let Some(tolerance) = args.tolerance {
            controls.tolerance = tolerance;
        }
        if let Some(relaxation) = args.relaxation {
            controls.relaxation_factor = relaxation;
        }
        if let Some(max_iterations) = args.max_iterations {
            controls.max_iterations = max_iterations;
        }
        estimator = estimator.with_controls(controls);
    }

    let estimate = match args.timeout_ms {
        Some(ms) => {
            estimator
                .estimate_with_timeout(design, Duration::from_millis(ms))
                .await?
        }
        None => estimator.estimate_blocking(design).await?,
    };

    output(
        &EstimateOutput {
            estimate,
            show_history: args.history,
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> EstimateArgs {
        EstimateArgs {
            design: PathBuf::from("design.yaml"),
            unit: Some(MassUnit::Pound),
            tolerance: None,
            relaxation: None,
            max_iterations: None,
            parallel: true,
            timeout_ms: None,
            history: false,
        }
    }

    #[test]
    fn test_overrides_applied_to_config() {
        let estimator = build_estimator(&args(), EngineConfig::default());
        assert_eq!(estimator.config().mass_unit, MassUnit::Pound);
        assert!(estimator.config().parallel_calculators);
    }

    #[test]
    fn test_config_kept_without_overrides() {
        let args = EstimateArgs {
            unit: None,
            parallel: false,
            ..args()
        };
        let config = EngineConfig {
            parallel_calculators: true,
            ..Default::default()
        };
        let estimator = build_estimator(&args, config);
        assert_eq!(estimator.config().mass_unit, MassUnit::Kilogram);
        assert!(estimator.config().parallel_calculators);
    }
}
