// ─────────────────────────────────────────────────────────────────────
// RadMap — Scatter Interpolation Kernels
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Scattered-point to regular-grid interpolation kernels.
//!
//! Every kernel implements [`ScatterInterpolator`] and marks nodes it cannot
//! define with NaN. Triangulation-based kernels (linear, cubic) are only
//! defined inside the convex hull; nearest and IDW are defined everywhere.
//! [`backfill_nearest`] closes the gaps.

use ndarray::Array2;
use radmap_types::state::SurveyGrid;

use crate::delaunay::{triangulate, Triangulation};

/// Barycentric slack when testing whether a node is inside a triangle.
const INSIDE_TOL: f64 = 1e-10;

/// Squared distance below which an IDW node is taken to coincide with a sample.
const COINCIDENT_D2: f64 = 1e-24;

/// Shared contract: sample values at `points` → field over `grid` nodes.
pub trait ScatterInterpolator {
    fn name(&self) -> &'static str;

    /// Field of shape `[ny, nx]`; NaN where the kernel is undefined.
    fn interpolate(&self, points: &[[f64; 2]], values: &[f64], grid: &SurveyGrid)
        -> Array2<f64>;
}

/// Piecewise-linear (barycentric) interpolation on the Delaunay triangulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearInterpolator;

/// Piecewise-cubic interpolation: one cubic Bézier patch per Delaunay triangle,
/// built from vertex values and area-weighted vertex gradient estimates.
/// Reproduces linear fields exactly and is continuous across edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubicInterpolator;

/// Value of the closest sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestInterpolator;

/// Inverse-distance weighting `w = 1 / d^power` over all samples.
#[derive(Debug, Clone, Copy)]
pub struct IdwInterpolator {
    pub power: f64,
}

impl Default for IdwInterpolator {
    fn default() -> Self {
        IdwInterpolator { power: 2.0 }
    }
}

impl ScatterInterpolator for LinearInterpolator {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn interpolate(
        &self,
        points: &[[f64; 2]],
        values: &[f64],
        grid: &SurveyGrid,
    ) -> Array2<f64> {
        debug_assert_eq!(points.len(), values.len());
        let mut field = Array2::from_elem((grid.ny, grid.nx), f64::NAN);
        let tri = triangulate(points);

        for t in &tri.triangles {
            let corners = tri.corners(t);
            let [a, b, c] = t.v;
            rasterize(&corners, grid, |iy, ix, l| {
                field[[iy, ix]] = l[0] * values[a] + l[1] * values[b] + l[2] * values[c];
            });
        }
        field
    }
}

impl ScatterInterpolator for CubicInterpolator {
    fn name(&self) -> &'static str {
        "cubic"
    }

    fn interpolate(
        &self,
        points: &[[f64; 2]],
        values: &[f64],
        grid: &SurveyGrid,
    ) -> Array2<f64> {
        debug_assert_eq!(points.len(), values.len());
        let mut field = Array2::from_elem((grid.ny, grid.nx), f64::NAN);
        let tri = triangulate(points);
        let gradients = vertex_gradients(&tri, values);

        for t in &tri.triangles {
            let corners = tri.corners(t);
            let patch = BezierPatch::new(&corners, t.v.map(|i| values[i]), t.v.map(|i| gradients[i]));
            rasterize(&corners, grid, |iy, ix, l| {
                field[[iy, ix]] = patch.eval(l);
            });
        }
        field
    }
}

impl ScatterInterpolator for NearestInterpolator {
    fn name(&self) -> &'static str {
        "nearest"
    }

    fn interpolate(
        &self,
        points: &[[f64; 2]],
        values: &[f64],
        grid: &SurveyGrid,
    ) -> Array2<f64> {
        debug_assert_eq!(points.len(), values.len());
        let mut field = Array2::from_elem((grid.ny, grid.nx), f64::NAN);
        if points.is_empty() {
            return field;
        }
        for iy in 0..grid.ny {
            for ix in 0..grid.nx {
                let k = nearest_index(points, grid.x[ix], grid.y[iy]);
                field[[iy, ix]] = values[k];
            }
        }
        field
    }
}

impl ScatterInterpolator for IdwInterpolator {
    fn name(&self) -> &'static str {
        "idw"
    }

    fn interpolate(
        &self,
        points: &[[f64; 2]],
        values: &[f64],
        grid: &SurveyGrid,
    ) -> Array2<f64> {
        debug_assert_eq!(points.len(), values.len());
        let mut field = Array2::from_elem((grid.ny, grid.nx), f64::NAN);
        if points.is_empty() {
            return field;
        }
        let half_power = 0.5 * self.power;

        for iy in 0..grid.ny {
            for ix in 0..grid.nx {
                let (x, y) = (grid.x[ix], grid.y[iy]);
                let mut num = 0.0;
                let mut den = 0.0;
                let mut exact = None;
                for (p, &v) in points.iter().zip(values) {
                    let d2 = (p[0] - x).powi(2) + (p[1] - y).powi(2);
                    if d2 < COINCIDENT_D2 {
                        exact = Some(v);
                        break;
                    }
                    let w = if self.power == 2.0 {
                        1.0 / d2
                    } else {
                        d2.powf(-half_power)
                    };
                    num += w * v;
                    den += w;
                }
                field[[iy, ix]] = exact.unwrap_or(num / den);
            }
        }
        field
    }
}

/// Index of the sample closest to `(x, y)`; ties go to the lowest index.
pub fn nearest_index(points: &[[f64; 2]], x: f64, y: f64) -> usize {
    let mut best = 0;
    let mut best_d2 = f64::INFINITY;
    for (k, p) in points.iter().enumerate() {
        let d2 = (p[0] - x).powi(2) + (p[1] - y).powi(2);
        if d2 < best_d2 {
            best_d2 = d2;
            best = k;
        }
    }
    best
}

/// Replace every NaN node with the value of the nearest sample.
/// Returns the number of nodes filled.
pub fn backfill_nearest(
    field: &mut Array2<f64>,
    points: &[[f64; 2]],
    values: &[f64],
    grid: &SurveyGrid,
) -> usize {
    if points.is_empty() {
        return 0;
    }
    let mut filled = 0;
    for iy in 0..grid.ny {
        for ix in 0..grid.nx {
            if field[[iy, ix]].is_nan() {
                let k = nearest_index(points, grid.x[ix], grid.y[iy]);
                field[[iy, ix]] = values[k];
                filled += 1;
            }
        }
    }
    filled
}

/// Visit every grid node inside triangle `corners` with its barycentric weights.
fn rasterize<F>(corners: &[[f64; 2]; 3], grid: &SurveyGrid, mut visit: F)
where
    F: FnMut(usize, usize, [f64; 3]),
{
    let [p0, p1, p2] = *corners;
    let det = (p1[1] - p2[1]) * (p0[0] - p2[0]) + (p2[0] - p1[0]) * (p0[1] - p2[1]);
    if det.abs() < f64::EPSILON {
        return;
    }

    let x_lo = p0[0].min(p1[0]).min(p2[0]);
    let x_hi = p0[0].max(p1[0]).max(p2[0]);
    let y_lo = p0[1].min(p1[1]).min(p2[1]);
    let y_hi = p0[1].max(p1[1]).max(p2[1]);
    let (Some((ix0, ix1)), Some((iy0, iy1))) =
        (grid.x_index_range(x_lo, x_hi), grid.y_index_range(y_lo, y_hi))
    else {
        return;
    };

    for iy in iy0..=iy1 {
        let y = grid.y[iy];
        for ix in ix0..=ix1 {
            let x = grid.x[ix];
            let l0 = ((p1[1] - p2[1]) * (x - p2[0]) + (p2[0] - p1[0]) * (y - p2[1])) / det;
            let l1 = ((p2[1] - p0[1]) * (x - p2[0]) + (p0[0] - p2[0]) * (y - p2[1])) / det;
            let l2 = 1.0 - l0 - l1;
            if l0 >= -INSIDE_TOL && l1 >= -INSIDE_TOL && l2 >= -INSIDE_TOL {
                visit(iy, ix, [l0, l1, l2]);
            }
        }
    }
}

/// Area-weighted average of the planar gradients of incident triangles.
fn vertex_gradients(tri: &Triangulation, values: &[f64]) -> Vec<[f64; 2]> {
    let n = tri.points.len();
    let mut sum = vec![[0.0, 0.0]; n];
    let mut weight = vec![0.0; n];

    for t in &tri.triangles {
        let [a, b, c] = t.v;
        let [p0, p1, p2] = tri.corners(t);
        let det = (p1[0] - p0[0]) * (p2[1] - p0[1]) - (p2[0] - p0[0]) * (p1[1] - p0[1]);
        if det.abs() < f64::EPSILON {
            continue;
        }
        let dv1 = values[b] - values[a];
        let dv2 = values[c] - values[a];
        let gx = (dv1 * (p2[1] - p0[1]) - dv2 * (p1[1] - p0[1])) / det;
        let gy = (dv2 * (p1[0] - p0[0]) - dv1 * (p2[0] - p0[0])) / det;
        let area = 0.5 * det.abs();
        for v in t.v {
            sum[v][0] += area * gx;
            sum[v][1] += area * gy;
            weight[v] += area;
        }
    }

    sum.iter()
        .zip(&weight)
        .map(|(s, &w)| if w > 0.0 { [s[0] / w, s[1] / w] } else { [0.0, 0.0] })
        .collect()
}

/// Cubic Bézier triangle. Control net indices follow `b[i][j][k]` with
/// i + j + k = 3, weights on corners 0, 1, 2.
struct BezierPatch {
    b300: f64,
    b030: f64,
    b003: f64,
    b210: f64,
    b201: f64,
    b120: f64,
    b021: f64,
    b102: f64,
    b012: f64,
    b111: f64,
}

impl BezierPatch {
    fn new(p: &[[f64; 2]; 3], f: [f64; 3], g: [[f64; 2]; 3]) -> Self {
        // Directional derivative of vertex i toward vertex j, one third of the edge.
        let edge = |i: usize, j: usize| {
            f[i] + (g[i][0] * (p[j][0] - p[i][0]) + g[i][1] * (p[j][1] - p[i][1])) / 3.0
        };
        let b210 = edge(0, 1);
        let b201 = edge(0, 2);
        let b120 = edge(1, 0);
        let b021 = edge(1, 2);
        let b102 = edge(2, 0);
        let b012 = edge(2, 1);
        let e = (b210 + b201 + b120 + b021 + b102 + b012) / 6.0;
        let v = (f[0] + f[1] + f[2]) / 3.0;

        BezierPatch {
            b300: f[0],
            b030: f[1],
            b003: f[2],
            b210,
            b201,
            b120,
            b021,
            b102,
            b012,
            b111: e + 0.5 * (e - v),
        }
    }

    fn eval(&self, l: [f64; 3]) -> f64 {
        let [u, v, w] = l;
        self.b300 * u * u * u
            + self.b030 * v * v * v
            + self.b003 * w * w * w
            + 3.0 * self.b210 * u * u * v
            + 3.0 * self.b201 * u * u * w
            + 3.0 * self.b120 * u * v * v
            + 3.0 * self.b021 * v * v * w
            + 3.0 * self.b102 * u * w * w
            + 3.0 * self.b012 * v * w * w
            + 6.0 * self.b111 * u * v * w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_samples(f: impl Fn(f64, f64) -> f64) -> (Vec<[f64; 2]>, Vec<f64>) {
        let mut pts = Vec::new();
        for i in 0..5 {
            for j in 0..5 {
                pts.push([i as f64 * 2.5, j as f64 * 2.5]);
            }
        }
        let vals = pts.iter().map(|p| f(p[0], p[1])).collect();
        (pts, vals)
    }

    #[test]
    fn test_linear_reproduces_plane() {
        let (pts, vals) = square_samples(|x, y| 1.0 + 0.3 * x + 0.7 * y);
        let grid = SurveyGrid::new(21, 21, 0.0, 10.0, 0.0, 10.0);
        let field = LinearInterpolator.interpolate(&pts, &vals, &grid);
        for iy in 0..21 {
            for ix in 0..21 {
                let expected = 1.0 + 0.3 * grid.x[ix] + 0.7 * grid.y[iy];
                assert!(
                    (field[[iy, ix]] - expected).abs() < 1e-9,
                    "({iy},{ix}) = {} vs {expected}",
                    field[[iy, ix]]
                );
            }
        }
    }

    #[test]
    fn test_cubic_reproduces_plane() {
        let (pts, vals) = square_samples(|x, y| 2.0 - 0.1 * x + 0.4 * y);
        let grid = SurveyGrid::new(17, 17, 0.0, 10.0, 0.0, 10.0);
        let field = CubicInterpolator.interpolate(&pts, &vals, &grid);
        for iy in 0..17 {
            for ix in 0..17 {
                let expected = 2.0 - 0.1 * grid.x[ix] + 0.4 * grid.y[iy];
                assert!((field[[iy, ix]] - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_triangulated_kernels_undefined_outside_hull() {
        let pts = [[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]];
        let vals = [0.3, 5.0, 30.0];
        let grid = SurveyGrid::new(11, 11, -5.0, 15.0, -5.0, 15.0);
        for field in [
            LinearInterpolator.interpolate(&pts, &vals, &grid),
            CubicInterpolator.interpolate(&pts, &vals, &grid),
        ] {
            // Grid corners (-5, -5) and (15, 15) lie outside the hull.
            assert!(field[[0, 0]].is_nan());
            assert!(field[[10, 10]].is_nan());
            assert!(field.iter().any(|v| !v.is_nan()));
        }
    }

    #[test]
    fn test_nearest_and_idw_defined_everywhere() {
        let pts = [[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]];
        let vals = [0.3, 5.0, 30.0];
        let grid = SurveyGrid::new(9, 9, -5.0, 15.0, -5.0, 15.0);
        let near = NearestInterpolator.interpolate(&pts, &vals, &grid);
        let idw = IdwInterpolator::default().interpolate(&pts, &vals, &grid);
        assert!(near.iter().all(|v| v.is_finite()));
        assert!(idw.iter().all(|v| v.is_finite()));
        assert_eq!(near[[0, 0]], 0.3);
        for &v in idw.iter() {
            assert!((0.3..=30.0).contains(&v));
        }
    }

    #[test]
    fn test_idw_exact_at_sample() {
        let pts = [[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]];
        let vals = [0.3, 5.0, 30.0];
        let grid = SurveyGrid::new(3, 3, 0.0, 10.0, 0.0, 10.0);
        let idw = IdwInterpolator::default().interpolate(&pts, &vals, &grid);
        assert_eq!(idw[[0, 0]], 0.3);
        assert_eq!(idw[[0, 2]], 5.0);
        assert_eq!(idw[[2, 0]], 30.0);
    }

    #[test]
    fn test_backfill_closes_gaps() {
        let pts = [[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]];
        let vals = [0.3, 5.0, 30.0];
        let grid = SurveyGrid::new(11, 11, -5.0, 15.0, -5.0, 15.0);
        let mut field = LinearInterpolator.interpolate(&pts, &vals, &grid);
        let gaps = field.iter().filter(|v| v.is_nan()).count();
        let filled = backfill_nearest(&mut field, &pts, &vals, &grid);
        assert_eq!(gaps, filled);
        assert!(field.iter().all(|v| v.is_finite()));
        assert_eq!(field[[0, 0]], 0.3);
    }

    #[test]
    fn test_nearest_tie_breaks_low_index() {
        let pts = [[0.0, 0.0], [2.0, 0.0]];
        assert_eq!(nearest_index(&pts, 1.0, 0.0), 0);
        assert_eq!(nearest_index(&pts, 1.5, 0.0), 1);
    }
}
