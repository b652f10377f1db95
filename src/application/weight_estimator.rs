//! Weight estimation use case: validate, select, iterate, convert.

use serde::Serialize;
use std::time::Duration;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::errors::{EstimationError, EstimationResult};
use crate::domain::models::{
    BreakdownRecord, ComponentWeights, ConvergenceControls, DesignState, EngineConfig,
    IterationSummary, MassUnit, PayloadTotal,
};
use crate::services::aggregator::aggregate;
use crate::services::configuration_selector::ConfigurationSelector;
use crate::services::convergence_driver::{ConvergedEstimate, ConvergenceDriver};

/// Converged weight estimate expressed in the requested mass unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub run_id: Uuid,
    pub design: String,
    pub mass_unit: MassUnit,
    pub record: BreakdownRecord,
    pub components: ComponentWeights,
    /// Mission fuel at the converged gross weight
    pub fuel_mass: f64,
    pub next_estimate: f64,
    pub iterations: u32,
    pub residual: f64,
    pub physically_valid: bool,
    pub history: Vec<IterationSummary>,
}

impl Estimate {
    /// Scale a kilogram result into `unit` and rebuild the record from the scaled
    /// components, so every roll-up holds exactly in the output unit.
    fn from_converged(
        design: &DesignState,
        converged: ConvergedEstimate,
        payload_total: PayloadTotal,
        unit: MassUnit,
    ) -> Self {
        let factor = unit.per_kilogram();
        let components = converged.components.scaled(factor);
        let record = aggregate(
            &components,
            payload_total.scaled(factor),
            converged.gross_mass * factor,
        );
        let history = converged
            .history
            .iter()
            .map(|entry| IterationSummary {
                gross_mass: entry.gross_mass * factor,
                candidate: entry.candidate * factor,
                ..*entry
            })
            .collect();

        Self {
            run_id: converged.run_id,
            design: design.name.clone(),
            mass_unit: unit,
            physically_valid: record.is_physically_valid(),
            record,
            fuel_mass: components.fuel,
            components,
            next_estimate: converged.next_estimate * factor,
            iterations: converged.iterations,
            residual: converged.residual,
            history,
        }
    }
}

/// Entry point for running the engine on a design state.
#[derive(Debug, Clone, Default)]
pub struct WeightEstimator {
    config: EngineConfig,
    controls_override: Option<ConvergenceControls>,
}

impl WeightEstimator {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            controls_override: None,
        }
    }

    /// Use these controls regardless of what the design or engine config carry.
    #[must_use]
    pub fn with_controls(mut self, controls: ConvergenceControls) -> Self {
        self.controls_override = Some(controls);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Effective controls: explicit override, then the design's own, then engine defaults.
    pub fn controls_for(&self, design: &DesignState) -> ConvergenceControls {
        self.controls_override
            .clone()
            .or_else(|| design.convergence.clone())
            .unwrap_or_else(|| self.config.convergence.clone())
    }

    /// Run the full estimation synchronously on the calling thread.
    #[instrument(skip_all, fields(design = %design.name))]
    pub fn estimate(
        &self,
        design: &DesignState,
        cancel: &CancellationToken,
    ) -> EstimationResult<Estimate> {
        design.validate()?;
        let calculators = ConfigurationSelector::new().select(design)?;
        let payload_total = design.payload.total;
        let driver = ConvergenceDriver::new(calculators, self.controls_for(design), payload_total)?
            .parallel(self.config.parallel_calculators);

        let converged = driver.run(design, cancel)?;
        Ok(Estimate::from_converged(
            design,
            converged,
            payload_total,
            self.config.mass_unit,
        ))
    }

    /// Run on the blocking pool without a time limit.
    pub async fn estimate_blocking(&self, design: DesignState) -> EstimationResult<Estimate> {
        let estimator = self.clone();
        tokio::task::spawn_blocking(move || estimator.estimate(&design, &CancellationToken::new()))
            .await
            .map_err(|e| EstimationError::WorkerFailed(e.to_string()))?
    }

    /// Run on the blocking pool with a wall-clock limit.
    ///
    /// When the limit elapses the run is cancelled and allowed to finish its current
    /// pass, so the caller receives `ConvergenceCancelled` with the last completed
    /// iteration attached.
    pub async fn estimate_with_timeout(
        &self,
        design: DesignState,
        limit: Duration,
    ) -> EstimationResult<Estimate> {
        let token = CancellationToken::new();
        let worker_token = token.clone();
        let estimator = self.clone();
        let mut handle =
            tokio::task::spawn_blocking(move || estimator.estimate(&design, &worker_token));

        match timeout(limit, &mut handle).await {
            Ok(joined) => joined.map_err(|e| EstimationError::WorkerFailed(e.to_string()))?,
            Err(_) => {
                tracing::warn!(
                    limit_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                    "Estimation exceeded its time limit, cancelling"
                );
                token.cancel();
                handle
                    .await
                    .map_err(|e| EstimationError::WorkerFailed(e.to_string()))?
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::units::LB;
    use crate::services::calculators::test_support::transport_design;

    #[test]
    fn test_estimate_in_kilograms() {
        let estimator = WeightEstimator::default();
        let estimate = estimator
            .estimate(&transport_design(), &CancellationToken::new())
            .unwrap();
        assert_eq!(estimate.mass_unit, MassUnit::Kilogram);
        assert!(estimate.physically_valid);
        assert!(estimate.record.check_rollup(1e-6).is_ok());
        assert_eq!(estimate.history.len() as u32, estimate.iterations);
        assert_eq!(estimate.fuel_mass, estimate.components.fuel);
    }

    #[test]
    fn test_pound_output_scales_consistently() {
        let design = transport_design();
        let kg = WeightEstimator::default()
            .estimate(&design, &CancellationToken::new())
            .unwrap();
        let config = EngineConfig {
            mass_unit: MassUnit::Pound,
            ..Default::default()
        };
        let lb = WeightEstimator::new(config)
            .estimate(&design, &CancellationToken::new())
            .unwrap();

        let expected = kg.record.zero_fuel_weight / LB;
        assert!((lb.record.zero_fuel_weight - expected).abs() / expected < 1e-12);
        assert!(lb.record.check_rollup(1e-6).is_ok());
        assert_eq!(lb.iterations, kg.iterations);
    }

    #[test]
    fn test_controls_precedence() {
        let mut design = transport_design();
        let estimator = WeightEstimator::default();
        assert_eq!(estimator.controls_for(&design).max_iterations, 50);

        design.convergence = Some(ConvergenceControls {
            max_iterations: 7,
            ..Default::default()
        });
        assert_eq!(estimator.controls_for(&design).max_iterations, 7);

        let estimator = estimator.with_controls(ConvergenceControls {
            max_iterations: 3,
            ..Default::default()
        });
        assert_eq!(estimator.controls_for(&design).max_iterations, 3);
    }

    #[test]
    fn test_invalid_design_rejected_before_iteration() {
        let mut design = transport_design();
        design.main_wing.span = -1.0;
        assert!(matches!(
            WeightEstimator::default().estimate(&design, &CancellationToken::new()),
            Err(EstimationError::InvalidDesignState(_))
        ));
    }

    #[tokio::test]
    async fn test_generous_timeout_completes() {
        let estimate = WeightEstimator::default()
            .estimate_with_timeout(transport_design(), Duration::from_secs(30))
            .await
            .unwrap();
        assert!(estimate.iterations > 0);
    }

    #[tokio::test]
    async fn test_blocking_pool_matches_inline_estimate() {
        let design = transport_design();
        let inline = WeightEstimator::default()
            .estimate(&design, &CancellationToken::new())
            .unwrap();
        let pooled = WeightEstimator::default()
            .estimate_blocking(design)
            .await
            .unwrap();
        assert_eq!(pooled.record, inline.record);
        assert_eq!(pooled.iterations, inline.iterations);
    }

    #[tokio::test]
    async fn test_blocking_pool_reports_invalid_design() {
        let mut design = transport_design();
        design.initial_gross_mass = 0.0;
        let err = WeightEstimator::default()
            .estimate_blocking(design)
            .await
            .unwrap_err();
        assert!(matches!(err, EstimationError::InvalidDesignState(_)));
    }
}
