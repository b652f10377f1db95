pub mod aggregator;
pub mod calculators;
pub mod configuration_selector;
pub mod convergence_driver;

pub use aggregator::{aggregate, nacelle_cross_charge};
pub use calculators::{Calculator, CalculatorSet, DesignSnapshot, Equation, Method};
pub use configuration_selector::ConfigurationSelector;
pub use convergence_driver::{ConvergedEstimate, ConvergenceDriver};
