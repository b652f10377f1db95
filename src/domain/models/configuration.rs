//! Vehicle configuration descriptor: the discrete design choices that select which
//! equation variant applies to each weight item.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EngineMount {
    /// Pod-mounted under the wing.
    #[default]
    Wing,
    /// Pod-mounted on the aft fuselage.
    AftFuselage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PropulsionKind {
    #[default]
    Turbofan,
    /// Turbofan with battery-backed electric assist.
    HybridTurbofan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WingPosition {
    #[default]
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TailArrangement {
    #[default]
    Conventional,
    TTail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GearArrangement {
    #[default]
    Tricycle,
    /// Main gear plus tail wheel; no nose gear is installed.
    Taildragger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ControlSystemType {
    #[default]
    FullyPowered,
    PartiallyPowered,
    FullyAerodynamic,
}

/// Cabin/accessory class, used by the avionics and operating-items tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    ShortRange,
    #[default]
    MediumRange,
    LongRange,
    Business,
    Cargo,
    Commuter,
    Supersonic,
}

/// Discrete configuration of the vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ConfigurationDescriptor {
    pub engine_count: u32,

    #[serde(default)]
    pub engine_mount: EngineMount,

    #[serde(default)]
    pub propulsion: PropulsionKind,

    #[serde(default)]
    pub wing_position: WingPosition,

    #[serde(default)]
    pub tail: TailArrangement,

    #[serde(default)]
    pub landing_gear: GearArrangement,

    #[serde(default = "default_true")]
    pub thrust_reversers: bool,

    #[serde(default = "default_true")]
    pub apu: bool,

    #[serde(default)]
    pub battery: bool,

    #[serde(default)]
    pub paint: bool,

    #[serde(default = "default_true")]
    pub pressurized: bool,

    #[serde(default)]
    pub flight_controls: ControlSystemType,

    #[serde(default)]
    pub cabin_class: CabinClass,
}

const fn default_true() -> bool {
    true
}

impl Default for ConfigurationDescriptor {
    fn default() -> Self {
        Self {
            engine_count: 2,
            engine_mount: EngineMount::default(),
            propulsion: PropulsionKind::default(),
            wing_position: WingPosition::default(),
            tail: TailArrangement::default(),
            landing_gear: GearArrangement::default(),
            thrust_reversers: true,
            apu: true,
            battery: false,
            paint: false,
            pressurized: true,
            flight_controls: ControlSystemType::default(),
            cabin_class: CabinClass::default(),
        }
    }
}

impl fmt::Display for ConfigurationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {:?} on {:?}, {:?} gear, {:?} tail",
            self.engine_count, self.propulsion, self.engine_mount, self.landing_gear, self.tail
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_defaults() {
        let yaml = "engine_count: 3\nengine_mount: aft_fuselage\ntail: t_tail\n";
        let descriptor: ConfigurationDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(descriptor.engine_count, 3);
        assert_eq!(descriptor.engine_mount, EngineMount::AftFuselage);
        assert_eq!(descriptor.tail, TailArrangement::TTail);
        assert!(descriptor.thrust_reversers);
        assert!(descriptor.apu);
        assert!(!descriptor.battery);
        assert!(!descriptor.paint);
        assert_eq!(descriptor.cabin_class, CabinClass::MediumRange);
    }
}
