//! Propulsion group equations (FLOPS-style, per installed engine count).

use super::DesignSnapshot;
use crate::domain::models::units::{FT, LB, LBF};

fn engine_count(s: &DesignSnapshot<'_>) -> f64 {
    f64::from(s.design.configuration.engine_count)
}

fn thrust_lbf(s: &DesignSnapshot<'_>) -> f64 {
    s.design.propulsion.sea_level_static_thrust / LBF
}

/// Dry turbofan weight from sea-level static thrust.
pub fn turbofan(s: &DesignSnapshot<'_>) -> f64 {
    engine_count(s) * 0.4054 * thrust_lbf(s).powf(0.9255) * LB
}

pub fn thrust_reversers(s: &DesignSnapshot<'_>) -> f64 {
    0.034 * thrust_lbf(s) * engine_count(s) * LB
}

/// Engine controls and starters.
pub fn controls_and_starter(s: &DesignSnapshot<'_>) -> f64 {
    let n = engine_count(s);
    let mach = s.design.envelope.max_mach;
    let diameter = s.design.propulsion.nacelle_diameter / FT;
    let controls = 0.26 * n * thrust_lbf(s).sqrt();
    let starter = 11.0 * n * mach.powf(0.32) * diameter.powf(1.6);
    (controls + starter) * LB
}

/// Tanks, lines and pumps sized by usable fuel capacity.
pub fn fuel_system(s: &DesignSnapshot<'_>) -> f64 {
    let capacity = s.design.propulsion.fuel_capacity / LB;
    let mach = s.design.envelope.max_mach;
    1.07 * capacity.powf(0.58) * engine_count(s).powf(0.43) * mach.powf(0.34) * LB
}

/// Pack mass from stored energy and specific energy. NaN without battery inputs.
pub fn battery(s: &DesignSnapshot<'_>) -> f64 {
    s.design
        .propulsion
        .battery
        .map_or(f64::NAN, |b| b.energy / b.specific_energy)
}
