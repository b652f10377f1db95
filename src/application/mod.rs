pub mod weight_estimator;

pub use weight_estimator::{Estimate, WeightEstimator};
