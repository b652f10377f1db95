//! Operating items and crew.

use super::DesignSnapshot;
use crate::domain::models::units::LB;
use crate::domain::models::CabinClass;

const FLIGHT_CREW_MASS_LB: f64 = 190.0;
const ATTENDANT_MASS_LB: f64 = 200.0;

/// Three-person flight deck from 150 seats upward.
pub fn flight_crew_count(seats: u32) -> u32 {
    if seats >= 150 {
        3
    } else {
        2
    }
}

/// One attendant up to 50 seats, otherwise one plus one per full 40 seats counted
/// over the whole cabin. No cabin, no attendants.
pub fn attendant_count(seats: u32) -> u32 {
    match seats {
        0 => 0,
        1..=50 => 1,
        n => 1 + n / 40,
    }
}

/// Oil, unusable fuel, water, catering and documents. Cargo aircraft carry a flat allowance.
pub fn operating_items(s: &DesignSnapshot<'_>, class: CabinClass) -> f64 {
    let seats = f64::from(s.design.payload.passengers);
    let pounds = match class {
        CabinClass::ShortRange | CabinClass::Commuter => 17.0 * seats,
        CabinClass::MediumRange | CabinClass::LongRange | CabinClass::Business => 28.0 * seats,
        CabinClass::Supersonic => 40.0 * seats,
        CabinClass::Cargo => 56.0,
    };
    pounds * LB
}

pub fn flight_crew(s: &DesignSnapshot<'_>) -> f64 {
    f64::from(flight_crew_count(s.design.payload.passengers)) * FLIGHT_CREW_MASS_LB * LB
}

pub fn flight_attendants(s: &DesignSnapshot<'_>) -> f64 {
    f64::from(attendant_count(s.design.payload.passengers)) * ATTENDANT_MASS_LB * LB
}
