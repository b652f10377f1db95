//! Fixed equipment and systems equations.

use super::operational::flight_crew_count;
use super::DesignSnapshot;
use crate::domain::models::units::{FT, FT2, LB};
use crate::domain::models::{CabinClass, EngineMount};

fn seats(s: &DesignSnapshot<'_>) -> f64 {
    f64::from(s.design.payload.passengers)
}

fn wing_area_ft2(s: &DesignSnapshot<'_>) -> f64 {
    s.design.main_wing.reference_area / FT2
}

/// Flight control system. `powered` selects the hydraulically boosted regression.
pub fn flight_controls(s: &DesignSnapshot<'_>, powered: bool) -> f64 {
    let area = wing_area_ft2(s);
    let weight = if powered {
        1.08 * area.powf(0.7)
    } else {
        0.4 * area
    };
    weight * LB
}

pub fn apu(s: &DesignSnapshot<'_>) -> f64 {
    (7.0 * seats(s)).max(70.0) * LB
}

pub fn electrical(s: &DesignSnapshot<'_>) -> f64 {
    13.0 * seats(s) * LB
}

/// Avionics suite by accessory class.
pub fn avionics(class: CabinClass) -> f64 {
    let pounds = match class {
        CabinClass::ShortRange | CabinClass::Commuter => 800.0,
        CabinClass::MediumRange | CabinClass::Cargo => 900.0,
        CabinClass::LongRange | CabinClass::Business | CabinClass::Supersonic => 1_200.0,
    };
    pounds * LB
}

pub fn hydraulics(s: &DesignSnapshot<'_>) -> f64 {
    let tails = (s.design.horizontal_tail.reference_area + s.design.vertical_tail.reference_area) / FT2;
    (0.65 * wing_area_ft2(s) + 0.28 * tails) * LB
}

/// Seats, galleys, lavatories and linings.
pub fn furnishings(s: &DesignSnapshot<'_>) -> f64 {
    let n = seats(s);
    let weight = if n >= 6.0 {
        (43.7 - 0.037 * n.min(300.0)) * n + 46.0 * n
    } else {
        46.0 * n
    };
    weight * LB
}

pub fn air_conditioning(s: &DesignSnapshot<'_>) -> f64 {
    15.0 * seats(s) * LB
}

/// Cockpit instruments, scaled by flight-deck planform area and engine placement.
pub fn instruments(s: &DesignSnapshot<'_>) -> f64 {
    let d = s.design;
    let planform = (d.fuselage.width / FT) * (d.fuselage.total_length / FT);
    let crew = f64::from(flight_crew_count(d.payload.passengers));
    let engines = f64::from(d.configuration.engine_count);
    let (wing_engines, fuselage_engines) = match d.configuration.engine_mount {
        EngineMount::Wing => (engines, 0.0),
        EngineMount::AftFuselage => (0.0, engines),
    };
    0.48 * planform.powf(0.57)
        * d.envelope.max_mach.sqrt()
        * (10.0 + 2.5 * crew + wing_engines + 1.5 * fuselage_engines)
        * LB
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calculators::test_support::transport_design;

    #[test]
    fn test_apu_floor() {
        let mut design = transport_design();
        design.payload.passengers = 4;
        let mass = apu(&DesignSnapshot::new(&design, 5_000.0));
        assert!((mass - 70.0 * LB).abs() < 1e-12);
    }

    #[test]
    fn test_furnishings_small_cabin() {
        let mut design = transport_design();
        design.payload.passengers = 5;
        let mass = furnishings(&DesignSnapshot::new(&design, 5_000.0));
        assert!((mass - 230.0 * LB).abs() < 1e-9);
    }

    #[test]
    fn test_furnishings_cap_at_300_seats() {
        let mut design = transport_design();
        design.payload.passengers = 400;
        let mass = furnishings(&DesignSnapshot::new(&design, 300_000.0)) / LB;
        let expected = (43.7 - 0.037 * 300.0) * 400.0 + 46.0 * 400.0;
        assert!((mass - expected).abs() < 1e-6);
    }

    #[test]
    fn test_powered_controls_lighter_than_aerodynamic_on_large_wing() {
        let design = transport_design();
        let s = DesignSnapshot::new(&design, 79_015.8);
        assert!(flight_controls(&s, true) < flight_controls(&s, false));
    }

    #[test]
    fn test_avionics_by_class() {
        assert!(avionics(CabinClass::LongRange) > avionics(CabinClass::MediumRange));
        assert!(avionics(CabinClass::MediumRange) > avionics(CabinClass::ShortRange));
    }
}
