//! Breakdown aggregation.
//!
//! Pure function of one pass's component weights: groups them, totals each group and
//! derives the empty, operating-empty and zero-fuel roll-ups.

use crate::domain::models::{
    BreakdownRecord, ComponentWeights, OperationalItems, PayloadBreakdown, PayloadTotal,
    PropulsionBreakdown, StructuralBreakdown, SystemsBreakdown,
};

/// Structural member charged a second time to the propulsion total.
///
/// The nacelle is reported under structure and also counted in the propulsion group
/// total. Since `empty` is the sum of group totals, it carries the nacelle twice;
/// recorded breakdowns follow the same bookkeeping.
pub fn nacelle_cross_charge(structural: &StructuralBreakdown) -> f64 {
    structural.nacelle
}

/// Assemble the breakdown record for `max_takeoff` from one set of component weights.
///
/// `max_takeoff` is recorded as given; it is the gross-mass estimate the components
/// were evaluated at.
pub fn aggregate(
    components: &ComponentWeights,
    payload_total: PayloadTotal,
    max_takeoff: f64,
) -> BreakdownRecord {
    let mut structural = StructuralBreakdown {
        wing: components.wing,
        horizontal_tail: components.horizontal_tail,
        vertical_tail: components.vertical_tail,
        fuselage: components.fuselage,
        main_landing_gear: components.main_landing_gear,
        nose_landing_gear: components.nose_landing_gear,
        nacelle: components.nacelle,
        paint: components.paint,
        total: 0.0,
    };
    structural.total = structural.member_sum();

    let propulsion_members = PropulsionBreakdown {
        total: 0.0,
        engines: components.engines,
        thrust_reversers: components.thrust_reversers,
        miscellaneous: components.miscellaneous,
        fuel_system: components.fuel_system,
        battery: components.battery,
    };
    let propulsion = PropulsionBreakdown {
        total: propulsion_members.member_sum() + nacelle_cross_charge(&structural),
        ..propulsion_members
    };

    let mut systems = SystemsBreakdown {
        control_systems: components.control_systems,
        apu: components.apu,
        electrical: components.electrical,
        avionics: components.avionics,
        hydraulics: components.hydraulics,
        furnish: components.furnish,
        air_conditioner: components.air_conditioner,
        instruments: components.instruments,
        total: 0.0,
    };
    systems.total = systems.member_sum();

    let mut operational = OperationalItems {
        operating_items_less_crew: components.operating_items_less_crew,
        flight_crew: components.flight_crew,
        flight_attendants: components.flight_attendants,
        total: 0.0,
    };
    operational.total = operational.member_sum();

    let mut payload = PayloadBreakdown {
        total: 0.0,
        passengers: components.passengers,
        baggage: components.baggage,
        cargo: components.cargo,
    };
    payload.total = payload_total.resolve(payload.member_sum());

    let empty = structural.total + propulsion.total + systems.total;
    let operating_empty = empty + operational.total;
    let zero_fuel_weight = operating_empty + payload.total;

    BreakdownRecord {
        propulsion_breakdown: propulsion,
        structural_breakdown: structural,
        systems_breakdown: systems,
        payload_breakdown: payload,
        operational_items: operational,
        empty,
        operating_empty,
        zero_fuel_weight,
        max_takeoff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::WeightItem;

    fn components() -> ComponentWeights {
        ComponentWeights::from_pairs([
            (WeightItem::Engines, 4_000.0),
            (WeightItem::ThrustReversers, 900.0),
            (WeightItem::Wing, 6_000.0),
            (WeightItem::Fuselage, 8_000.0),
            (WeightItem::Nacelle, 500.0),
            (WeightItem::Avionics, 400.0),
            (WeightItem::FlightCrew, 250.0),
            (WeightItem::Passengers, 12_000.0),
            (WeightItem::Cargo, 3_000.0),
            (WeightItem::Fuel, 15_000.0),
        ])
    }

    #[test]
    fn test_nacelle_counted_in_both_groups() {
        let record = aggregate(&components(), PayloadTotal::SumOfMembers, 60_000.0);
        assert_eq!(record.structural_breakdown.total, 14_500.0);
        assert_eq!(record.propulsion_breakdown.total, 5_400.0);
        assert_eq!(record.empty, 14_500.0 + 5_400.0 + 400.0);
        assert_eq!(record.operating_empty, record.empty + 250.0);
        assert_eq!(record.zero_fuel_weight, record.operating_empty + 15_000.0);
        assert_eq!(record.max_takeoff, 60_000.0);
        assert!(record.check_rollup(1e-9).is_ok());
    }

    #[test]
    fn test_design_payload_overrides_members() {
        let record = aggregate(
            &components(),
            PayloadTotal::Design { mass: 20_000.0 },
            60_000.0,
        );
        assert_eq!(record.payload_breakdown.total, 20_000.0);
        assert_eq!(record.payload_breakdown.member_sum(), 15_000.0);
        assert_eq!(
            record.zero_fuel_weight,
            record.operating_empty + 20_000.0
        );
    }

    #[test]
    fn test_fuel_not_in_record() {
        let with_fuel = aggregate(&components(), PayloadTotal::SumOfMembers, 60_000.0);
        let mut dry = components();
        dry.fuel = 0.0;
        let without_fuel = aggregate(&dry, PayloadTotal::SumOfMembers, 60_000.0);
        assert_eq!(with_fuel, without_fuel);
    }

    #[test]
    fn test_all_zero_components() {
        let record = aggregate(&ComponentWeights::default(), PayloadTotal::SumOfMembers, 1.0);
        assert_eq!(record.zero_fuel_weight, 0.0);
        assert!(record.check_rollup(0.0).is_ok());
    }
}
