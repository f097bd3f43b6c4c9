// ─────────────────────────────────────────────────────────────────────
// RadMap — Property-Based Tests (proptest) for radmap-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for radmap-types using proptest.
//!
//! Covers: SurveyGrid construction invariants, measurement bounding boxes,
//! zone limit validation.

use proptest::prelude::*;
use radmap_types::config::ZoneLimits;
use radmap_types::state::{Bounds, Measurement, SurveyGrid};

// ── SurveyGrid Construction Invariants ───────────────────────────────

proptest! {
    /// Grid dimensions match constructor arguments.
    #[test]
    fn grid_dimensions_match(
        nx in 2usize..128,
        ny in 2usize..128,
    ) {
        let grid = SurveyGrid::new(nx, ny, 0.0, 50.0, 0.0, 30.0);

        prop_assert_eq!(grid.nx, nx);
        prop_assert_eq!(grid.ny, ny);
        prop_assert_eq!(grid.x.len(), nx);
        prop_assert_eq!(grid.y.len(), ny);
        prop_assert_eq!(grid.xx.shape(), &[ny, nx]);
        prop_assert_eq!(grid.yy.shape(), &[ny, nx]);
        prop_assert_eq!(grid.len(), nx * ny);
    }

    /// Grid corners reproduce the requested bounds.
    #[test]
    fn grid_boundary_values(
        res in 3usize..64,
        x_min in -100.0f64..100.0,
        y_min in -100.0f64..100.0,
        width in 1.0f64..200.0,
        height in 1.0f64..200.0,
    ) {
        let bounds = Bounds { x_min, x_max: x_min + width, y_min, y_max: y_min + height };
        let grid = SurveyGrid::from_bounds(&bounds, res);

        prop_assert!((grid.x[0] - x_min).abs() < 1e-9);
        prop_assert!((grid.x[res - 1] - bounds.x_max).abs() < 1e-9);
        prop_assert!((grid.y[0] - y_min).abs() < 1e-9);
        prop_assert!((grid.y[res - 1] - bounds.y_max).abs() < 1e-9);
        prop_assert!((grid.xx[[res - 1, res - 1]] - bounds.x_max).abs() < 1e-9);
        prop_assert!((grid.yy[[res - 1, 0]] - bounds.y_max).abs() < 1e-9);
    }

    /// X spacing is uniform.
    #[test]
    fn grid_x_uniform_spacing(nx in 4usize..64) {
        let grid = SurveyGrid::new(nx, 10, -5.0, 55.0, -5.0, 35.0);
        for i in 1..nx {
            let delta = grid.x[i] - grid.x[i - 1];
            prop_assert!((delta - grid.dx).abs() < 1e-10,
                "Non-uniform X spacing at {}: delta={}, dx={}", i, delta, grid.dx);
        }
    }

    /// Every node inside a query interval is covered by the index range.
    #[test]
    fn index_range_is_conservative(
        lo in -10.0f64..60.0,
        span in 0.0f64..30.0,
    ) {
        let grid = SurveyGrid::new(51, 51, 0.0, 50.0, 0.0, 50.0);
        let hi = lo + span;
        let inside: Vec<usize> = (0..grid.nx)
            .filter(|&i| grid.x[i] >= lo && grid.x[i] <= hi)
            .collect();
        match grid.x_index_range(lo, hi) {
            Some((first, last)) => {
                for i in inside {
                    prop_assert!(i >= first && i <= last);
                }
            }
            None => prop_assert!(inside.is_empty()),
        }
    }
}

// ── Bounds Invariants ────────────────────────────────────────────────

proptest! {
    /// Every measurement lies inside its own bounding box.
    #[test]
    fn bounds_contain_all_points(
        pts in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0, 0.0f64..100.0), 1..40),
    ) {
        let measurements: Vec<Measurement> = pts
            .iter()
            .map(|&(x, y, d)| Measurement::new(x, y, d))
            .collect();
        let b = Bounds::of(&measurements).unwrap();
        for m in &measurements {
            prop_assert!(m.x >= b.x_min && m.x <= b.x_max);
            prop_assert!(m.y >= b.y_min && m.y <= b.y_max);
        }
        prop_assert!(b.width() >= 0.0);
        prop_assert!(b.height() >= 0.0);
    }

    /// Strictly increasing positive limits validate; swapped ones do not.
    #[test]
    fn zone_limit_ordering(
        public in 0.01f64..5.0,
        gap1 in 0.01f64..20.0,
        gap2 in 0.01f64..50.0,
    ) {
        let ok = ZoneLimits { public, supervised: public + gap1, controlled: public + gap1 + gap2 };
        prop_assert!(ok.validate().is_ok());

        let swapped = ZoneLimits { public: ok.supervised, supervised: ok.public, controlled: ok.controlled };
        prop_assert!(swapped.validate().is_err());
    }
}
