//! Maps a configuration descriptor onto one calculator per weight item.

use crate::domain::errors::{EstimationError, EstimationResult};
use crate::domain::models::{
    ConfigurationDescriptor, ControlSystemType, DesignState, EngineMount, FuelRequirement,
    GearArrangement, PropulsionKind, TailArrangement, WeightItem, WingPosition,
};
use crate::services::calculators::{Calculator, CalculatorSet, Equation, Method};

/// Main-gear factor for a high wing, whose gear hangs from the fuselage.
pub const HIGH_WING_GEAR_FACTOR: f64 = 1.08;

/// Chooses the equation variant for every weight item from the design configuration.
///
/// Selection happens once per run. Unknown or contradictory descriptor combinations
/// are rejected here instead of silently defaulting to some variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationSelector;

fn unsupported(reason: String) -> EstimationResult<()> {
    Err(EstimationError::UnsupportedConfiguration(reason))
}

impl ConfigurationSelector {
    pub fn new() -> Self {
        Self
    }

    pub fn select(&self, design: &DesignState) -> EstimationResult<CalculatorSet> {
        let config = &design.configuration;
        Self::check_configuration(design)?;

        let mut calculators: Vec<Calculator> = WeightItem::ALL
            .iter()
            .map(|&item| Calculator::new(item, Self::method_for(item, config, &design.fuel)))
            .collect();

        for (&item, &mass) in &design.prescribed {
            let Some(calculator) = calculators.iter_mut().find(|c| c.item == item) else {
                continue;
            };
            if calculator.method == Method::Absent {
                return Err(EstimationError::UnsupportedConfiguration(format!(
                    "{item} is prescribed but not installed in configuration ({config})"
                )));
            }
            calculator.method = Method::Prescribed(mass);
        }

        for calculator in &calculators {
            tracing::debug!(
                item = %calculator.item,
                method = calculator.method.name(),
                "Selected calculator"
            );
        }
        tracing::info!(
            design = %design.name,
            configuration = %config,
            prescribed = design.prescribed.len(),
            "Configuration selected"
        );

        CalculatorSet::new(calculators)
    }

    fn check_configuration(design: &DesignState) -> EstimationResult<()> {
        let config = &design.configuration;

        match (config.engine_count, config.engine_mount) {
            (0, _) => return unsupported("engine_count must be at least 1".to_string()),
            (n, EngineMount::Wing) if n % 2 == 1 => {
                return unsupported(format!(
                    "{n} wing-mounted engines cannot be split symmetrically"
                ));
            }
            (n, EngineMount::AftFuselage) if !(2..=3).contains(&n) => {
                return unsupported(format!(
                    "aft-fuselage mounting supports 2 or 3 engines, got {n}"
                ));
            }
            _ => {}
        }

        let hybrid = config.propulsion == PropulsionKind::HybridTurbofan;
        if hybrid != config.battery {
            return unsupported(format!(
                "battery = {} is inconsistent with {:?} propulsion",
                config.battery, config.propulsion
            ));
        }

        if config.battery {
            let Some(battery) = design.propulsion.battery else {
                return Err(EstimationError::InvalidDesignState(
                    "battery is installed but propulsion.battery inputs are missing".to_string(),
                ));
            };
            if !(battery.specific_energy > 0.0 && battery.specific_energy.is_finite())
                || !(battery.energy >= 0.0 && battery.energy.is_finite())
            {
                return Err(EstimationError::InvalidDesignState(format!(
                    "battery energy {} J and specific energy {} J/kg must be non-negative and positive",
                    battery.energy, battery.specific_energy
                )));
            }
        }

        Ok(())
    }

    fn method_for(
        item: WeightItem,
        config: &ConfigurationDescriptor,
        fuel: &FuelRequirement,
    ) -> Method {
        let equation = match item {
            WeightItem::Engines => Equation::Turbofan,
            WeightItem::ThrustReversers if config.thrust_reversers => Equation::ThrustReversers,
            WeightItem::Miscellaneous => Equation::ControlsAndStarter,
            WeightItem::FuelSystem => Equation::FuelSystem,
            WeightItem::Battery if config.battery => Equation::Battery,

            WeightItem::Wing => Equation::CantileverWing,
            WeightItem::HorizontalTail => Equation::HorizontalTail,
            WeightItem::VerticalTail => Equation::VerticalTail {
                t_tail: config.tail == TailArrangement::TTail,
            },
            WeightItem::Fuselage => Equation::Fuselage {
                pressurized: config.pressurized,
            },
            WeightItem::MainLandingGear => Equation::MainLandingGear {
                wing_factor: match config.wing_position {
                    WingPosition::Low => 1.0,
                    WingPosition::High => HIGH_WING_GEAR_FACTOR,
                },
                tail_wheel: config.landing_gear == GearArrangement::Taildragger,
            },
            WeightItem::NoseLandingGear if config.landing_gear == GearArrangement::Tricycle => {
                Equation::NoseLandingGear
            }
            WeightItem::Nacelle => Equation::Nacelle {
                mount: config.engine_mount,
            },
            WeightItem::Paint if config.paint => Equation::Paint,

            WeightItem::ControlSystems => Equation::FlightControls {
                powered: config.flight_controls != ControlSystemType::FullyAerodynamic,
            },
            WeightItem::Apu if config.apu => Equation::Apu,
            WeightItem::Electrical => Equation::Electrical,
            WeightItem::Avionics => Equation::Avionics {
                class: config.cabin_class,
            },
            WeightItem::Hydraulics => Equation::Hydraulics,
            WeightItem::Furnish => Equation::Furnishings,
            WeightItem::AirConditioner if config.pressurized => Equation::AirConditioning,
            WeightItem::Instruments => Equation::Instruments,

            WeightItem::Passengers => Equation::Passengers,
            WeightItem::Baggage => Equation::Baggage,
            WeightItem::Cargo => Equation::Cargo,

            WeightItem::OperatingItemsLessCrew => Equation::OperatingItems {
                class: config.cabin_class,
            },
            WeightItem::FlightCrew => Equation::FlightCrew,
            WeightItem::FlightAttendants => Equation::FlightAttendants,

            WeightItem::Fuel => match *fuel {
                FuelRequirement::Fraction { fraction } => Equation::FuelFraction { fraction },
                FuelRequirement::Breguet {
                    range,
                    cruise_speed,
                    tsfc,
                    lift_to_drag,
                    reserve_fraction,
                } => Equation::BreguetFuel {
                    range,
                    cruise_speed,
                    tsfc,
                    lift_to_drag,
                    reserve_fraction,
                },
                FuelRequirement::Fixed { mass } => return Method::Prescribed(mass),
            },

            WeightItem::ThrustReversers
            | WeightItem::Battery
            | WeightItem::NoseLandingGear
            | WeightItem::Paint
            | WeightItem::Apu
            | WeightItem::AirConditioner => return Method::Absent,
        };
        Method::Equation(equation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::BatteryInputs;
    use crate::services::calculators::test_support::transport_design;

    fn method(set: &CalculatorSet, item: WeightItem) -> Method {
        set.get(item).map(|c| c.method).unwrap()
    }

    #[test]
    fn test_default_transport_selection() {
        let set = ConfigurationSelector::new().select(&transport_design()).unwrap();
        assert_eq!(
            method(&set, WeightItem::Wing),
            Method::Equation(Equation::CantileverWing)
        );
        assert_eq!(method(&set, WeightItem::Paint), Method::Absent);
        assert_eq!(method(&set, WeightItem::Battery), Method::Absent);
        assert_eq!(
            method(&set, WeightItem::Fuel),
            Method::Equation(Equation::FuelFraction { fraction: 0.2 })
        );
        assert_eq!(set.iter().count(), WeightItem::ALL.len());
    }

    #[test]
    fn test_zero_engines_rejected() {
        let mut design = transport_design();
        design.configuration.engine_count = 0;
        assert!(matches!(
            ConfigurationSelector::new().select(&design),
            Err(EstimationError::UnsupportedConfiguration(_))
        ));
    }

    #[test]
    fn test_odd_wing_mounted_engines_rejected() {
        let mut design = transport_design();
        design.configuration.engine_count = 3;
        assert!(ConfigurationSelector::new().select(&design).is_err());

        design.configuration.engine_mount = EngineMount::AftFuselage;
        let set = ConfigurationSelector::new().select(&design).unwrap();
        assert_eq!(
            method(&set, WeightItem::Nacelle),
            Method::Equation(Equation::Nacelle {
                mount: EngineMount::AftFuselage
            })
        );
    }

    #[test]
    fn test_four_aft_engines_rejected() {
        let mut design = transport_design();
        design.configuration.engine_count = 4;
        design.configuration.engine_mount = EngineMount::AftFuselage;
        assert!(matches!(
            ConfigurationSelector::new().select(&design),
            Err(EstimationError::UnsupportedConfiguration(_))
        ));
    }

    #[test]
    fn test_battery_requires_hybrid_propulsion() {
        let mut design = transport_design();
        design.configuration.battery = true;
        assert!(matches!(
            ConfigurationSelector::new().select(&design),
            Err(EstimationError::UnsupportedConfiguration(_))
        ));

        design.configuration.propulsion = PropulsionKind::HybridTurbofan;
        assert!(matches!(
            ConfigurationSelector::new().select(&design),
            Err(EstimationError::InvalidDesignState(_))
        ));

        design.propulsion.battery = Some(BatteryInputs {
            energy: 1.8e9,
            specific_energy: 9.0e5,
        });
        let set = ConfigurationSelector::new().select(&design).unwrap();
        assert_eq!(
            method(&set, WeightItem::Battery),
            Method::Equation(Equation::Battery)
        );
    }

    #[test]
    fn test_taildragger_has_no_nose_gear() {
        let mut design = transport_design();
        design.configuration.landing_gear = GearArrangement::Taildragger;
        design.configuration.wing_position = WingPosition::High;
        let set = ConfigurationSelector::new().select(&design).unwrap();
        assert_eq!(method(&set, WeightItem::NoseLandingGear), Method::Absent);
        assert_eq!(
            method(&set, WeightItem::MainLandingGear),
            Method::Equation(Equation::MainLandingGear {
                wing_factor: HIGH_WING_GEAR_FACTOR,
                tail_wheel: true
            })
        );
    }

    #[test]
    fn test_prescribed_override() {
        let mut design = transport_design();
        design.prescribed.insert(WeightItem::Wing, 6_129.985_979_314_519);
        let set = ConfigurationSelector::new().select(&design).unwrap();
        assert_eq!(
            method(&set, WeightItem::Wing),
            Method::Prescribed(6_129.985_979_314_519)
        );
    }

    #[test]
    fn test_prescribed_absent_feature_rejected() {
        let mut design = transport_design();
        design.prescribed.insert(WeightItem::Paint, 120.0);
        assert!(matches!(
            ConfigurationSelector::new().select(&design),
            Err(EstimationError::UnsupportedConfiguration(_))
        ));
    }

    #[test]
    fn test_fixed_fuel_is_prescribed() {
        let mut design = transport_design();
        design.fuel = FuelRequirement::Fixed { mass: 15_000.0 };
        let set = ConfigurationSelector::new().select(&design).unwrap();
        assert_eq!(method(&set, WeightItem::Fuel), Method::Prescribed(15_000.0));
    }

    #[test]
    fn test_unpressurized_aerodynamic_controls() {
        let mut design = transport_design();
        design.configuration.pressurized = false;
        design.configuration.flight_controls = ControlSystemType::FullyAerodynamic;
        let set = ConfigurationSelector::new().select(&design).unwrap();
        assert_eq!(method(&set, WeightItem::AirConditioner), Method::Absent);
        assert_eq!(
            method(&set, WeightItem::ControlSystems),
            Method::Equation(Equation::FlightControls { powered: false })
        );
    }
}
