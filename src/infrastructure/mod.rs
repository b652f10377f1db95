//! Infrastructure layer module
//!
//! Everything that touches the outside world:
//! - Configuration management
//! - Logging infrastructure
//! - Design-state and breakdown files

pub mod config;
pub mod design_file;
pub mod logging;
