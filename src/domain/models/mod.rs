pub mod breakdown;
pub mod components;
pub mod config;
pub mod configuration;
pub mod convergence;
pub mod design_state;
pub mod units;
pub mod weight_item;

pub use breakdown::{
    BreakdownRecord, OperationalItems, PayloadBreakdown, PropulsionBreakdown, RollupViolation,
    StructuralBreakdown, SystemsBreakdown,
};
pub use components::ComponentWeights;
pub use config::{EngineConfig, LoggingConfig};
pub use configuration::{
    CabinClass, ConfigurationDescriptor, ControlSystemType, EngineMount, GearArrangement,
    PropulsionKind, TailArrangement, WingPosition,
};
pub use convergence::{
    ControlsError, ConvergenceControls, DivergenceReason, DriverState, IterationSnapshot,
    IterationSummary,
};
pub use design_state::{
    BatteryInputs, DesignState, Envelope, FuelRequirement, FuselageGeometry, PayloadInputs,
    PayloadTotal, PropulsionInputs, TailGeometry, WingGeometry,
};
pub use units::MassUnit;
pub use weight_item::WeightItem;
