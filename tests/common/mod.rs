//! Common test utilities for integration tests
//!
//! Provides the reference transport design, the recorded breakdown fixture and
//! helpers to build prescribed-weight designs from it.

#![allow(dead_code)]

use std::collections::BTreeMap;

use heft::domain::models::units::LB;
use heft::domain::models::{
    BreakdownRecord, ConfigurationDescriptor, DesignState, Envelope, FuelRequirement,
    FuselageGeometry, PayloadInputs, PayloadTotal, PropulsionInputs, TailGeometry, WeightItem,
    WingGeometry,
};

/// Recorded breakdown of the reference transport at a 79,015.8 kg gross weight.
pub const FIXTURE_JSON: &str = include_str!("../fixtures/transport_breakdown.json");

pub const FIXTURE_MAX_TAKEOFF: f64 = 79_015.8;
pub const FIXTURE_DESIGN_PAYLOAD: f64 = 38_162.363_124_587_76;
pub const FIXTURE_ZERO_FUEL_WEIGHT: f64 = 80_170.359_225_429_29;

pub fn load_fixture() -> BreakdownRecord {
    serde_json::from_str(FIXTURE_JSON).expect("fixture should parse")
}

/// Setup test logging
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Single-aisle twin in the 737-800 class, evaluated with the built-in regressions.
pub fn transport_design() -> DesignState {
    DesignState {
        name: "reference-transport".to_string(),
        configuration: ConfigurationDescriptor::default(),
        envelope: Envelope {
            ultimate_load: 3.75,
            limit_load: 2.5,
            max_mach: 0.82,
        },
        main_wing: WingGeometry {
            reference_area: 124.862,
            span: 35.66,
            taper: 0.1,
            sweep_quarter_chord_deg: 25.0,
            thickness_to_chord: 0.1,
            mean_aerodynamic_chord: 4.235,
            wetted_area: 225.08,
        },
        horizontal_tail: TailGeometry {
            reference_area: 32.488,
            span: 14.2,
            sweep_quarter_chord_deg: 30.0,
            thickness_to_chord: 0.08,
            control_surface_fraction: 0.25,
            moment_arm: 16.764,
            wetted_area: 58.5,
        },
        vertical_tail: TailGeometry {
            reference_area: 26.4,
            span: 7.78,
            sweep_quarter_chord_deg: 35.0,
            thickness_to_chord: 0.08,
            control_surface_fraction: 0.25,
            moment_arm: 15.0,
            wetted_area: 53.0,
        },
        fuselage: FuselageGeometry {
            total_length: 38.02,
            nose_length: 6.4,
            width: 3.74,
            height: 3.74,
            wetted_area: 446.7,
            differential_pressure: 5.0e4,
        },
        propulsion: PropulsionInputs {
            sea_level_static_thrust: 121_000.0,
            nacelle_diameter: 2.05,
            nacelle_length: 4.3,
            fuel_capacity: 20_894.0,
            battery: None,
        },
        payload: PayloadInputs {
            passengers: 170,
            mass_per_passenger: 165.0 * LB,
            baggage_per_passenger: 44.0 * LB,
            cargo: 10_000.0,
            total: PayloadTotal::SumOfMembers,
        },
        max_zero_fuel_mass: 62_732.0,
        fuel: FuelRequirement::Fraction { fraction: 0.2 },
        initial_gross_mass: 79_015.8,
        paint_areal_density: 0.073,
        prescribed: BTreeMap::new(),
        convergence: None,
    }
}

/// Every structural, propulsion, systems and operational leaf of the fixture.
///
/// Paint and battery are recorded as zero and are not installed, so they are left
/// to the selector as absent features.
pub fn fixture_prescriptions(record: &BreakdownRecord) -> BTreeMap<WeightItem, f64> {
    let s = &record.structural_breakdown;
    let p = &record.propulsion_breakdown;
    let y = &record.systems_breakdown;
    let o = &record.operational_items;
    BTreeMap::from([
        (WeightItem::Wing, s.wing),
        (WeightItem::HorizontalTail, s.horizontal_tail),
        (WeightItem::VerticalTail, s.vertical_tail),
        (WeightItem::Fuselage, s.fuselage),
        (WeightItem::MainLandingGear, s.main_landing_gear),
        (WeightItem::NoseLandingGear, s.nose_landing_gear),
        (WeightItem::Nacelle, s.nacelle),
        (WeightItem::Engines, p.engines),
        (WeightItem::ThrustReversers, p.thrust_reversers),
        (WeightItem::Miscellaneous, p.miscellaneous),
        (WeightItem::FuelSystem, p.fuel_system),
        (WeightItem::ControlSystems, y.control_systems),
        (WeightItem::Apu, y.apu),
        (WeightItem::Electrical, y.electrical),
        (WeightItem::Avionics, y.avionics),
        (WeightItem::Hydraulics, y.hydraulics),
        (WeightItem::Furnish, y.furnish),
        (WeightItem::AirConditioner, y.air_conditioner),
        (WeightItem::Instruments, y.instruments),
        (WeightItem::OperatingItemsLessCrew, o.operating_items_less_crew),
        (WeightItem::FlightCrew, o.flight_crew),
        (WeightItem::FlightAttendants, o.flight_attendants),
        (WeightItem::Passengers, record.payload_breakdown.passengers),
        (WeightItem::Baggage, record.payload_breakdown.baggage),
        (WeightItem::Cargo, record.payload_breakdown.cargo),
    ])
}

/// Reference transport with every fixture leaf prescribed and the fixture's design payload.
pub fn fixture_design() -> DesignState {
    let record = load_fixture();
    let mut design = transport_design();
    design.name = "fixture-transport".to_string();
    design.prescribed = fixture_prescriptions(&record);
    design.payload.total = PayloadTotal::Design {
        mass: FIXTURE_DESIGN_PAYLOAD,
    };
    design.initial_gross_mass = FIXTURE_MAX_TAKEOFF;
    design
}

pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        actual.abs()
    } else {
        ((actual - expected) / expected).abs()
    }
}
