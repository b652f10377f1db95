//! Heft - conceptual-design aircraft weight estimation
//!
//! Heft estimates the weight breakdown of a transport aircraft from a design state:
//! component regressions for structure, propulsion, systems, payload and operating
//! items are evaluated at a gross-weight estimate, aggregated into a breakdown record,
//! and iterated until the gross weight is self-consistent.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Design state, breakdown record, errors
//! - **Service Layer** (`services`): Calculators, configuration selector, aggregator,
//!   convergence driver
//! - **Application Layer** (`application`): The estimation use case
//! - **Infrastructure Layer** (`infrastructure`): Config, logging, design files
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use heft::{WeightEstimator, EngineConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! let design = heft::infrastructure::design_file::load_design("design.yaml")?;
//! let estimate = WeightEstimator::new(EngineConfig::default())
//!     .estimate(&design, &CancellationToken::new())?;
//! println!("{}", estimate.record.zero_fuel_weight);
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::{Estimate, WeightEstimator};
pub use domain::models::{
    BreakdownRecord, ComponentWeights, ConfigurationDescriptor, ConvergenceControls,
    DesignState, EngineConfig, MassUnit, PayloadTotal, WeightItem,
};
pub use domain::{EstimationError, EstimationResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    aggregate, CalculatorSet, ConfigurationSelector, ConvergedEstimate, ConvergenceDriver,
};
