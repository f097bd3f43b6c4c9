// ─────────────────────────────────────────────────────────────────────
// RadMap — Property-Based Tests (proptest) for radmap-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for radmap-math using proptest.
//!
//! Covers: log-log table interpolation, Delaunay triangulation, scatter
//! kernels with nearest back-fill, descriptive statistics.

use proptest::prelude::*;
use radmap_math::delaunay::{orient, triangulate};
use radmap_math::interp::loglog_interp;
use radmap_math::scatter::{
    backfill_nearest, CubicInterpolator, IdwInterpolator, LinearInterpolator,
    NearestInterpolator, ScatterInterpolator,
};
use radmap_math::stats::summarize;
use radmap_types::state::SurveyGrid;

const E: [f64; 7] = [0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0];
const MU_LEAD: [f64; 7] = [62.93, 11.33, 1.826, 0.805, 0.518, 0.483, 0.559];

/// Random cloud plus three fixed corners so the set is never collinear.
fn cloud() -> impl Strategy<Value = (Vec<[f64; 2]>, Vec<f64>)> {
    prop::collection::vec((0.0f64..50.0, 0.0f64..30.0, 0.0f64..200.0), 0..25).prop_map(|raw| {
        let mut pts = vec![[0.0, 0.0], [50.0, 0.0], [0.0, 30.0]];
        let mut vals = vec![0.2, 3.0, 40.0];
        for (x, y, d) in raw {
            pts.push([x, y]);
            vals.push(d);
        }
        (pts, vals)
    })
}

// ── Log-Log Interpolation Properties ─────────────────────────────────

proptest! {
    /// Inside the table the result lies between the bracketing ordinates.
    #[test]
    fn loglog_bracketed(e in 0.1f64..10.0) {
        let mu = loglog_interp(&E, &MU_LEAD, e);
        let hi = E.partition_point(|&v| v <= e).min(E.len() - 1);
        let lo = hi.saturating_sub(1);
        let (a, b) = (MU_LEAD[lo], MU_LEAD[hi]);
        prop_assert!(mu >= a.min(b) * (1.0 - 1e-12) && mu <= a.max(b) * (1.0 + 1e-12),
            "mu({}) = {} not within [{}, {}]", e, mu, a.min(b), a.max(b));
    }

    /// Below and above the table the boundary value is held.
    #[test]
    fn loglog_clamped(low in 1e-6f64..0.1, high in 10.0f64..1e3) {
        prop_assert_eq!(loglog_interp(&E, &MU_LEAD, low), MU_LEAD[0]);
        prop_assert_eq!(loglog_interp(&E, &MU_LEAD, high), MU_LEAD[6]);
    }

    /// Always positive and finite for positive energies.
    #[test]
    fn loglog_positive(e in 1e-6f64..1e6) {
        let mu = loglog_interp(&E, &MU_LEAD, e);
        prop_assert!(mu.is_finite() && mu > 0.0);
    }
}

// ── Triangulation Properties ─────────────────────────────────────────

proptest! {
    /// Every triangle is counter-clockwise with valid vertex indices.
    #[test]
    fn triangles_ccw((pts, _vals) in cloud()) {
        let tri = triangulate(&pts);
        prop_assert!(!tri.triangles.is_empty());
        for t in &tri.triangles {
            for &v in &t.v {
                prop_assert!(v < pts.len());
            }
            let [a, b, c] = tri.corners(t);
            prop_assert!(orient(a, b, c) > 0.0);
        }
    }

    /// Triangulated area never exceeds the bounding box area.
    #[test]
    fn triangulated_area_bounded((pts, _vals) in cloud()) {
        let tri = triangulate(&pts);
        let area: f64 = tri.triangles.iter().map(|t| {
            let [a, b, c] = tri.corners(t);
            0.5 * orient(a, b, c)
        }).sum();
        prop_assert!(area <= 50.0 * 30.0 + 1e-6, "area = {}", area);
    }
}

// ── Scatter Kernel Properties ────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// After nearest back-fill no kernel leaves an undefined node.
    #[test]
    fn kernels_no_nan_after_backfill((pts, vals) in cloud(), buffer in 0.0f64..10.0) {
        let grid = SurveyGrid::new(24, 24, -buffer, 50.0 + buffer, -buffer, 30.0 + buffer);
        let kernels: [&dyn ScatterInterpolator; 4] = [
            &LinearInterpolator,
            &CubicInterpolator,
            &NearestInterpolator,
            &IdwInterpolator::default(),
        ];
        for kernel in kernels {
            let mut field = kernel.interpolate(&pts, &vals, &grid);
            backfill_nearest(&mut field, &pts, &vals, &grid);
            prop_assert!(field.iter().all(|v| v.is_finite()),
                "{} left non-finite nodes", kernel.name());
        }
    }

    /// Linear, nearest and IDW are convex combinations of the samples.
    #[test]
    fn convex_kernels_bounded((pts, vals) in cloud()) {
        let grid = SurveyGrid::new(16, 16, -3.0, 53.0, -3.0, 33.0);
        let lo = vals.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = vals.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let kernels: [&dyn ScatterInterpolator; 3] = [
            &LinearInterpolator,
            &NearestInterpolator,
            &IdwInterpolator::default(),
        ];
        for kernel in kernels {
            let mut field = kernel.interpolate(&pts, &vals, &grid);
            backfill_nearest(&mut field, &pts, &vals, &grid);
            for &v in field.iter() {
                prop_assert!(v >= lo - 1e-6 && v <= hi + 1e-6,
                    "{}: {} outside [{}, {}]", kernel.name(), v, lo, hi);
            }
        }
    }
}

// ── Statistics Properties ────────────────────────────────────────────

proptest! {
    /// min <= median <= max and min <= mean <= max.
    #[test]
    fn summary_ordering(values in prop::collection::vec(0.0f64..1e4, 1..60)) {
        let s = summarize(&values).unwrap();
        prop_assert_eq!(s.count, values.len());
        prop_assert!(s.min <= s.median && s.median <= s.max);
        prop_assert!(s.min <= s.mean + 1e-9 && s.mean <= s.max + 1e-9);
        prop_assert!(s.std_dev >= 0.0);
    }
}
