// ─────────────────────────────────────────────────────────────────────
// RadMap — Property-Based Tests (proptest) for radmap-shielding
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for the attenuation model.

use proptest::prelude::*;
use radmap_shielding::attenuation::{
    half_value_layer, mu, required_thickness, transmission,
};
use radmap_shielding::materials::material_keys;

fn any_material() -> impl Strategy<Value = &'static str> {
    prop::sample::select(material_keys())
}

proptest! {
    /// µ is finite and positive for any positive energy.
    #[test]
    fn mu_positive(key in any_material(), e in 1e-4f64..1e3) {
        let m = mu(key, e).unwrap();
        prop_assert!(m.is_finite() && m > 0.0, "{}: mu({}) = {}", key, e, m);
    }

    /// No shielding when the source is already at or below the target.
    #[test]
    fn thickness_zero_below_target(key in any_material(), target in 0.01f64..100.0, frac in 0.0f64..=1.0) {
        let x = required_thickness(key, target * frac, target, 1.0).unwrap();
        prop_assert_eq!(x, 0.0);
    }

    /// Thickness grows with the attenuation ratio.
    #[test]
    fn thickness_monotonic(key in any_material(), e in 0.1f64..10.0, s in 1.0f64..1e4, k in 1.01f64..100.0) {
        let x1 = required_thickness(key, s, 0.5, e).unwrap();
        let x2 = required_thickness(key, s * k, 0.5, e).unwrap();
        prop_assert!(x1 > 0.0);
        prop_assert!(x2 > x1, "{}: {} !> {}", key, x2, x1);
    }

    /// Shielding of the required thickness transmits exactly target/source.
    #[test]
    fn thickness_transmission_consistent(key in any_material(), e in 0.1f64..10.0, s in 1.0f64..1e4) {
        let x = required_thickness(key, s, 0.5, e).unwrap();
        let t = transmission(key, x, e).unwrap();
        prop_assert!((t * s - 0.5).abs() < 1e-9 * s, "{}: {} * {} != 0.5", key, t, s);
    }

    /// One HVL halves the dose at any energy.
    #[test]
    fn hvl_halves(key in any_material(), e in 0.05f64..20.0) {
        let hvl = half_value_layer(key, e).unwrap();
        let t = transmission(key, hvl, e).unwrap();
        prop_assert!((t - 0.5).abs() < 1e-12);
    }
}
