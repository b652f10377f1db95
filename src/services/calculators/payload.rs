//! Payload member equations.

use super::DesignSnapshot;

pub fn passengers(s: &DesignSnapshot<'_>) -> f64 {
    let payload = &s.design.payload;
    f64::from(payload.passengers) * payload.mass_per_passenger
}

pub fn baggage(s: &DesignSnapshot<'_>) -> f64 {
    let payload = &s.design.payload;
    f64::from(payload.passengers) * payload.baggage_per_passenger
}

pub fn cargo(s: &DesignSnapshot<'_>) -> f64 {
    s.design.payload.cargo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calculators::test_support::transport_design;

    #[test]
    fn test_reference_cabin_payload() {
        let design = transport_design();
        let s = DesignSnapshot::new(&design, 79_015.8);
        assert!((passengers(&s) - 12_723.265_978_5).abs() < 1e-6);
        assert!((baggage(&s) - 3_392.870_927_6).abs() < 1e-6);
        assert_eq!(cargo(&s), 10_000.0);
    }
}
