//! Mission fuel. Along with the structure this is what ties the loop to gross mass.

use super::DesignSnapshot;

pub fn fraction_of_gross(s: &DesignSnapshot<'_>, fraction: f64) -> f64 {
    s.gross_mass * fraction
}

/// Breguet cruise fuel with a reserve allowance on top.
pub fn breguet(
    s: &DesignSnapshot<'_>,
    range: f64,
    cruise_speed: f64,
    tsfc: f64,
    lift_to_drag: f64,
    reserve_fraction: f64,
) -> f64 {
    let burn = 1.0 - (-range * tsfc / (cruise_speed * lift_to_drag)).exp();
    s.gross_mass * burn * (1.0 + reserve_fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calculators::test_support::transport_design;

    #[test]
    fn test_zero_range_burns_nothing() {
        let design = transport_design();
        let s = DesignSnapshot::new(&design, 79_015.8);
        assert_eq!(breguet(&s, 0.0, 230.0, 1.6e-4, 17.0, 0.05), 0.0);
    }

    #[test]
    fn test_breguet_reasonable_fraction() {
        let design = transport_design();
        let s = DesignSnapshot::new(&design, 100_000.0);
        // 5,000 km at M0.78 with a 0.6 lb/lbf/h engine and L/D 17
        let fuel = breguet(&s, 5.0e6, 230.0, 0.6 / 3600.0, 17.0, 0.0);
        assert!((15_000.0..25_000.0).contains(&fuel), "fuel {fuel}");
    }
}
