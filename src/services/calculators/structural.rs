//! Airframe structure weight equations.
//!
//! Transport-category correlations in the Torenbeek/SUAVE form. Each function converts
//! the SI snapshot into the regression's imperial units and returns kilograms.

use super::DesignSnapshot;
use crate::domain::models::units::{FT, FT2, LB, LBF, PSF};
use crate::domain::models::EngineMount;

/// Extra nacelle structure for pods on the aft fuselage (thrust beam, firewall).
pub const AFT_FUSELAGE_NACELLE_FACTOR: f64 = 1.1;

/// Weight penalty on the fin of a T-tail carrying the stabilizer loads.
pub const T_TAIL_FACTOR: f64 = 1.25;

fn gross_lb(s: &DesignSnapshot<'_>) -> f64 {
    s.gross_mass / LB
}

/// Cantilever transport wing, bending-material term scaled by sqrt(MTOW * MZFW).
pub fn cantilever_wing(s: &DesignSnapshot<'_>) -> f64 {
    let wing = &s.design.main_wing;
    let area = wing.reference_area / FT2;
    let span = wing.span / FT;
    let taper = wing.taper;
    let cos_sweep = wing.sweep_quarter_chord_deg.to_radians().cos();
    let n_ult = s.design.envelope.ultimate_load;
    let zfw = s.design.max_zero_fuel_mass / LB;

    let bending = 1.642e-6 * n_ult * span.powi(3) * (gross_lb(s) * zfw).sqrt() * (1.0 + 2.0 * taper)
        / (wing.thickness_to_chord * cos_sweep.powi(2) * area * (1.0 + taper));

    (4.22 * area + bending) * LB
}

/// Horizontal stabilizer including elevator.
pub fn horizontal_tail(s: &DesignSnapshot<'_>) -> f64 {
    let tail = &s.design.horizontal_tail;
    let area = tail.reference_area / FT2;
    let span = tail.span / FT;
    let cos_sweep = tail.sweep_quarter_chord_deg.to_radians().cos();
    let mac_w = s.design.main_wing.mean_aerodynamic_chord / FT;
    let arm = tail.moment_arm / FT;
    let elevator = area * tail.control_surface_fraction;
    let n_ult = s.design.envelope.ultimate_load;

    let weight = 5.25 * area
        + 0.8e-6 * n_ult * span.powi(3) * gross_lb(s) * mac_w * elevator.sqrt()
            / (tail.thickness_to_chord * cos_sweep.powi(2) * arm * area.powf(1.5));

    weight * LB
}

/// Fin plus rudder. A T-tail fin carries the stabilizer and is heavier.
pub fn vertical_tail(s: &DesignSnapshot<'_>, t_tail: bool) -> f64 {
    let tail = &s.design.vertical_tail;
    let area = tail.reference_area / FT2;
    let span = tail.span / FT;
    let cos_sweep = tail.sweep_quarter_chord_deg.to_radians().cos();
    let wing_area = s.design.main_wing.reference_area / FT2;
    let n_ult = s.design.envelope.ultimate_load;
    let factor = if t_tail { T_TAIL_FACTOR } else { 1.0 };

    let fin = factor
        * (2.62 * area
            + 1.5e-5 * n_ult * span.powi(3) * (8.0 + 0.44 * gross_lb(s) / wing_area)
                / (tail.thickness_to_chord * cos_sweep.powi(2)));
    let rudder = fin * tail.control_surface_fraction * 1.6;

    (fin + rudder) * LB
}

/// Semi-monocoque tube sized by the larger of the pressure and bending indices.
pub fn fuselage(s: &DesignSnapshot<'_>, pressurized: bool) -> f64 {
    let body = &s.design.fuselage;
    let width = body.width / FT;
    let height = body.height / FT;
    let length = (body.total_length - body.nose_length) / FT;
    let wetted = body.wetted_area / FT2;
    let carried = s.design.max_zero_fuel_mass / LB;
    let diff_p = if pressurized {
        body.differential_pressure / PSF
    } else {
        0.0
    };

    let pressure_index = 1.5e-3 * diff_p * width;
    let bending_index =
        1.91e-4 * s.design.envelope.limit_load * carried * length / height.powi(2);

    let index = if pressure_index > bending_index {
        pressure_index
    } else {
        (pressure_index.powi(2) + bending_index.powi(2)) / (2.0 * bending_index)
    };

    (1.051 + 0.102 * index) * wetted * LB
}

/// Torenbeek gear form `A + B W^0.75 + C W + D W^1.5` with W in pounds.
fn torenbeek_gear(gross_lb: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    a + b * gross_lb.powf(0.75) + c * gross_lb + d * gross_lb.powf(1.5)
}

/// Main gear, scaled by the wing-position factor. A taildragger also carries the tail
/// wheel assembly here since it has no nose gear.
pub fn main_landing_gear(s: &DesignSnapshot<'_>, wing_factor: f64, tail_wheel: bool) -> f64 {
    let w = gross_lb(s);
    let mut weight = wing_factor * torenbeek_gear(w, 40.0, 0.16, 0.019, 1.5e-5);
    if tail_wheel {
        weight += torenbeek_gear(w, 5.0, 0.0, 0.0024, 0.0);
    }
    weight * LB
}

pub fn nose_landing_gear(s: &DesignSnapshot<'_>) -> f64 {
    torenbeek_gear(gross_lb(s), 20.0, 0.10, 0.0, 2.0e-6) * LB
}

/// Nacelle group for all engines, FLOPS form.
pub fn nacelle(s: &DesignSnapshot<'_>, mount: EngineMount) -> f64 {
    let propulsion = &s.design.propulsion;
    let count = f64::from(s.design.configuration.engine_count);
    let diameter = propulsion.nacelle_diameter / FT;
    let length = propulsion.nacelle_length / FT;
    let thrust = propulsion.sea_level_static_thrust / LBF;
    let factor = match mount {
        EngineMount::Wing => 1.0,
        EngineMount::AftFuselage => AFT_FUSELAGE_NACELLE_FACTOR,
    };

    0.25 * count * diameter * length * thrust.powf(0.36) * factor * LB
}

/// Paint over the total wetted area, SI throughout.
pub fn paint(s: &DesignSnapshot<'_>) -> f64 {
    let d = s.design;
    let nacelles = f64::from(d.configuration.engine_count)
        * std::f64::consts::PI
        * d.propulsion.nacelle_diameter
        * d.propulsion.nacelle_length;
    let wetted = d.main_wing.wetted_area
        + d.horizontal_tail.wetted_area
        + d.vertical_tail.wetted_area
        + d.fuselage.wetted_area
        + nacelles;
    d.paint_areal_density * wetted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calculators::test_support::transport_design;

    #[test]
    fn test_wing_grows_with_gross_mass() {
        let design = transport_design();
        let light = cantilever_wing(&DesignSnapshot::new(&design, 70_000.0));
        let heavy = cantilever_wing(&DesignSnapshot::new(&design, 80_000.0));
        assert!(light > 0.0);
        assert!(heavy > light);
    }

    #[test]
    fn test_t_tail_heavier_than_conventional() {
        let design = transport_design();
        let s = DesignSnapshot::new(&design, 79_015.8);
        let conventional = vertical_tail(&s, false);
        let t_tail = vertical_tail(&s, true);
        assert!((t_tail / conventional - T_TAIL_FACTOR).abs() < 1e-12);
    }

    #[test]
    fn test_unpressurized_fuselage_uses_bending_index_only() {
        let design = transport_design();
        let s = DesignSnapshot::new(&design, 79_015.8);
        assert!(fuselage(&s, true) >= fuselage(&s, false));
    }

    #[test]
    fn test_main_gear_magnitude() {
        // Torenbeek transport gear at 174,200 lb is roughly 5,800 lb.
        let design = transport_design();
        let s = DesignSnapshot::new(&design, 79_015.8);
        let main = main_landing_gear(&s, 1.0, false) / LB;
        assert!((5_700.0..5_900.0).contains(&main), "main gear {main} lb");
    }

    #[test]
    fn test_tail_wheel_adds_weight() {
        let design = transport_design();
        let s = DesignSnapshot::new(&design, 79_015.8);
        assert!(main_landing_gear(&s, 1.0, true) > main_landing_gear(&s, 1.0, false));
    }

    #[test]
    fn test_aft_mounted_nacelle_factor() {
        let design = transport_design();
        let s = DesignSnapshot::new(&design, 79_015.8);
        let ratio = nacelle(&s, EngineMount::AftFuselage) / nacelle(&s, EngineMount::Wing);
        assert!((ratio - AFT_FUSELAGE_NACELLE_FACTOR).abs() < 1e-12);
    }

    #[test]
    fn test_paint_scales_with_density() {
        let mut design = transport_design();
        design.paint_areal_density = 0.1;
        let s = DesignSnapshot::new(&design, 79_015.8);
        let thin = paint(&s);
        let mut heavy = design.clone();
        heavy.paint_areal_density = 0.2;
        let thick = paint(&DesignSnapshot::new(&heavy, 79_015.8));
        assert!((thick - 2.0 * thin).abs() < 1e-9);
    }
}
