//! Domain layer for the weight engine
//!
//! This module contains the data model (design state, configuration, component
//! weights, breakdown record, convergence controls) and the domain error taxonomy.

pub mod errors;
pub mod models;

// Re-export error types for convenient access
pub use errors::{EstimationError, EstimationResult};
