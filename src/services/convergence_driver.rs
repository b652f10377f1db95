//! Gross-weight fixed-point iteration.
//!
//! Each iteration evaluates every calculator at the current gross-mass estimate,
//! aggregates the breakdown and forms the candidate
//! `operating_empty + payload.total + fuel`. The estimate moves toward the candidate
//! by the relaxation factor until the relative change drops below tolerance.
//!
//! ```text
//! Initializing -> Iterating(1) -> ... -> Iterating(n) -> Converged
//!                                                    \-> Diverged
//!                                                    \-> MaxIterationsExceeded
//!                                                    \-> Cancelled
//! ```
//!
//! The record returned on convergence is the one evaluated at the final estimate, so
//! re-seeding with its `max_takeoff` reproduces it in a single iteration.

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::domain::errors::{EstimationError, EstimationResult};
use crate::domain::models::{
    BreakdownRecord, ComponentWeights, ConvergenceControls, DesignState, DivergenceReason,
    DriverState, IterationSnapshot, IterationSummary, PayloadTotal,
};
use crate::services::aggregator::aggregate;
use crate::services::calculators::{CalculatorSet, DesignSnapshot};

/// Successful outcome of a driver run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergedEstimate {
    pub run_id: Uuid,
    /// Breakdown evaluated at `gross_mass`
    pub record: BreakdownRecord,
    /// Calculator outputs the record was built from, fuel included
    pub components: ComponentWeights,
    pub iterations: u32,
    pub residual: f64,
    /// Estimate the final pass was evaluated at; equals `record.max_takeoff`
    pub gross_mass: f64,
    /// Relaxed update computed from the final pass
    pub next_estimate: f64,
    pub history: Vec<IterationSummary>,
}

/// Drives the calculators to a self-consistent gross weight.
#[derive(Debug, Clone)]
pub struct ConvergenceDriver {
    calculators: CalculatorSet,
    controls: ConvergenceControls,
    payload_total: PayloadTotal,
    parallel: bool,
}

impl ConvergenceDriver {
    pub fn new(
        calculators: CalculatorSet,
        controls: ConvergenceControls,
        payload_total: PayloadTotal,
    ) -> EstimationResult<Self> {
        controls.validate()?;
        Ok(Self {
            calculators,
            controls,
            payload_total,
            parallel: false,
        })
    }

    /// Evaluate each pass on the rayon pool.
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn controls(&self) -> &ConvergenceControls {
        &self.controls
    }

    /// Run from the design's own initial gross mass.
    pub fn run(
        &self,
        design: &DesignState,
        cancel: &CancellationToken,
    ) -> EstimationResult<ConvergedEstimate> {
        self.run_from(design, design.initial_gross_mass, cancel)
    }

    /// Run from an explicit seed.
    ///
    /// Cancellation is observed between passes and after the last one; a pass in progress
    /// always completes.
    pub fn run_from(
        &self,
        design: &DesignState,
        seed: f64,
        cancel: &CancellationToken,
    ) -> EstimationResult<ConvergedEstimate> {
        if !(seed.is_finite() && seed > 0.0) {
            return Err(EstimationError::InvalidDesignState(format!(
                "initial gross mass must be positive and finite, got {seed}"
            )));
        }

        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("convergence", %run_id, design = %design.name);
        let _guard = span.enter();

        let controls = &self.controls;
        let mut state = DriverState::Initializing;
        tracing::info!(
            seed,
            tolerance = controls.tolerance,
            relaxation = controls.relaxation_factor,
            max_iterations = controls.max_iterations,
            parallel = self.parallel,
            "Starting gross-weight iteration"
        );

        let mut current = seed;
        let mut history = Vec::new();
        let mut best: Option<IterationSnapshot> = None;
        let mut last: Option<IterationSnapshot> = None;
        let mut previous_candidate: Option<f64> = None;
        let mut growth_streak = 0_u32;

        for iteration in 1..=controls.max_iterations {
            if cancel.is_cancelled() {
                transition(&mut state, DriverState::Cancelled);
                return Err(EstimationError::ConvergenceCancelled {
                    iterations: iteration - 1,
                    last_residual: last.as_ref().map(|s| s.residual),
                    last: last.map(Box::new),
                });
            }
            transition(&mut state, DriverState::Iterating { iteration });

            let snapshot = DesignSnapshot::new(design, current);
            let components = self.calculators.evaluate(&snapshot, self.parallel)?;
            let record = aggregate(&components, self.payload_total, current);
            let candidate =
                record.operating_empty + record.payload_breakdown.total + components.fuel;

            if let Some(reason) =
                self.check_divergence(candidate, previous_candidate, &mut growth_streak)
            {
                transition(&mut state, DriverState::Diverged);
                tracing::warn!(iteration, candidate, %reason, "Gross-weight iteration diverged");
                return Err(EstimationError::ConvergenceDiverged {
                    iterations: iteration,
                    reason,
                    last_residual: last.as_ref().map(|s| s.residual),
                    last_finite: last.map(Box::new),
                });
            }
            previous_candidate = Some(candidate);

            let next_estimate = current + controls.relaxation_factor * (candidate - current);
            let residual = (next_estimate - current).abs() / current;
            tracing::debug!(
                iteration,
                gross_mass = current,
                candidate,
                next_estimate,
                residual,
                "Iteration complete"
            );

            let snapshot = IterationSnapshot {
                iteration,
                gross_mass: current,
                candidate,
                next_estimate,
                residual,
                components,
                record,
            };
            history.push(IterationSummary::from(&snapshot));

            if residual < controls.tolerance {
                transition(&mut state, DriverState::Converged);
                if !record.is_physically_valid() {
                    tracing::warn!(
                        max_takeoff = record.max_takeoff,
                        zero_fuel_weight = record.zero_fuel_weight,
                        "Converged takeoff weight is below zero-fuel weight"
                    );
                }
                tracing::info!(
                    iterations = iteration,
                    residual,
                    gross_mass = current,
                    zero_fuel_weight = record.zero_fuel_weight,
                    "Gross-weight iteration converged"
                );
                return Ok(ConvergedEstimate {
                    run_id,
                    record,
                    components,
                    iterations: iteration,
                    residual,
                    gross_mass: current,
                    next_estimate,
                    history,
                });
            }

            if best.as_ref().map_or(true, |b| residual < b.residual) {
                best = Some(snapshot.clone());
            }
            last = Some(snapshot);
            current = next_estimate;
        }

        Err(self.exhausted(cancel, &mut state, last, best))
    }

    /// Terminal error once every allowed iteration has run.
    ///
    /// A cancellation that lands during the final pass still wins over the cap.
    fn exhausted(
        &self,
        cancel: &CancellationToken,
        state: &mut DriverState,
        last: Option<IterationSnapshot>,
        best: Option<IterationSnapshot>,
    ) -> EstimationError {
        let max_iterations = self.controls.max_iterations;
        if cancel.is_cancelled() {
            transition(state, DriverState::Cancelled);
            return EstimationError::ConvergenceCancelled {
                iterations: max_iterations,
                last_residual: last.as_ref().map(|s| s.residual),
                last: last.map(Box::new),
            };
        }

        transition(state, DriverState::MaxIterationsExceeded);
        tracing::warn!(
            max_iterations,
            best_residual = best.as_ref().map(|b| b.residual),
            "Gross-weight iteration hit the iteration cap"
        );
        EstimationError::ConvergenceTimeout {
            iterations: max_iterations,
            last_residual: last.as_ref().map(|s| s.residual),
            best: best.map(Box::new),
        }
    }

    fn check_divergence(
        &self,
        candidate: f64,
        previous: Option<f64>,
        growth_streak: &mut u32,
    ) -> Option<DivergenceReason> {
        let controls = &self.controls;
        if !candidate.is_finite() {
            return Some(DivergenceReason::NonFinite);
        }
        if candidate <= 0.0 {
            return Some(DivergenceReason::NonPositive { candidate });
        }
        if candidate > controls.max_gross_mass {
            return Some(DivergenceReason::ExceedsBound {
                candidate,
                bound: controls.max_gross_mass,
            });
        }

        match previous {
            Some(prev) if candidate > prev * controls.divergence_growth_factor => {
                *growth_streak += 1;
            }
            _ => *growth_streak = 0,
        }
        (*growth_streak >= controls.divergence_window).then_some(DivergenceReason::UnboundedGrowth {
            factor: controls.divergence_growth_factor,
            window: controls.divergence_window,
        })
    }
}

fn transition(state: &mut DriverState, next: DriverState) {
    if next.is_terminal() {
        tracing::info!(from = %state, to = %next, "Driver state transition");
    } else {
        tracing::trace!(from = %state, to = %next, "Driver state transition");
    }
    *state = next;
}
