// ─────────────────────────────────────────────────────────────────────
// RadMap — Delaunay Triangulation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bowyer-Watson Delaunay triangulation of scattered survey points.
//!
//! Incremental insertion into an enclosing super-triangle. Triangles that
//! touch a super-triangle vertex are discarded at the end, so the result
//! covers (up to thin slivers along a nearly straight hull) the convex hull
//! of the input.

/// Super-triangle size relative to the point cloud span.
const SUPER_SCALE: f64 = 50.0;

/// Relative tolerance for treating three points as collinear.
const COLLINEAR_TOL: f64 = 1e-10;

/// Triangle as indices into the point list, counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub v: [usize; 3],
}

/// Triangulation result.
#[derive(Debug, Clone)]
pub struct Triangulation {
    pub points: Vec<[f64; 2]>,
    pub triangles: Vec<Triangle>,
}

impl Triangulation {
    /// Vertex coordinates of triangle `t`.
    pub fn corners(&self, t: &Triangle) -> [[f64; 2]; 3] {
        [
            self.points[t.v[0]],
            self.points[t.v[1]],
            self.points[t.v[2]],
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Twice the signed area of (a, b, c); positive when counter-clockwise.
pub fn orient(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
    (b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])
}

/// True when `d` lies strictly inside the circumcircle of ccw triangle (a, b, c).
fn in_circumcircle(a: [f64; 2], b: [f64; 2], c: [f64; 2], d: [f64; 2]) -> bool {
    let (adx, ady) = (a[0] - d[0], a[1] - d[1]);
    let (bdx, bdy) = (b[0] - d[0], b[1] - d[1]);
    let (cdx, cdy) = (c[0] - d[0], c[1] - d[1]);
    let ad = adx * adx + ady * ady;
    let bd = bdx * bdx + bdy * bdy;
    let cd = cdx * cdx + cdy * cdy;
    let det = adx * (bdy * cd - bd * cdy) - ady * (bdx * cd - bd * cdx)
        + ad * (bdx * cdy - bdy * cdx);
    det > 0.0
}

/// True when every point lies on one straight line (or there are < 3 points).
///
/// Uses the farthest pair as a baseline and compares the largest
/// perpendicular offset against the cloud span.
pub fn all_collinear(points: &[[f64; 2]]) -> bool {
    if points.len() < 3 {
        return true;
    }
    let p0 = points[0];
    let (far_idx, far_d2) = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, (p[0] - p0[0]).powi(2) + (p[1] - p0[1]).powi(2)))
        .fold((0, 0.0), |acc, cur| if cur.1 > acc.1 { cur } else { acc });
    if far_d2 == 0.0 {
        return true;
    }
    let p1 = points[far_idx];
    let base = far_d2.sqrt();
    let max_offset = points
        .iter()
        .map(|&p| orient(p0, p1, p).abs() / base)
        .fold(0.0, f64::max);
    max_offset <= COLLINEAR_TOL * base
}

/// Delaunay triangulation of `points`.
///
/// Exact duplicates are skipped silently (a duplicate never falls strictly
/// inside any circumcircle). Collinear input yields no triangles.
pub fn triangulate(points: &[[f64; 2]]) -> Triangulation {
    let n = points.len();
    let mut result = Triangulation {
        points: points.to_vec(),
        triangles: Vec::new(),
    };
    if n < 3 {
        return result;
    }

    let (mut x_min, mut x_max, mut y_min, mut y_max) = (
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
    );
    for p in points {
        x_min = x_min.min(p[0]);
        x_max = x_max.max(p[0]);
        y_min = y_min.min(p[1]);
        y_max = y_max.max(p[1]);
    }
    let span = (x_max - x_min).max(y_max - y_min).max(1e-12);
    let cx = 0.5 * (x_min + x_max);
    let cy = 0.5 * (y_min + y_max);

    let mut pts = points.to_vec();
    pts.push([cx - SUPER_SCALE * span, cy - SUPER_SCALE * span]);
    pts.push([cx + SUPER_SCALE * span, cy - SUPER_SCALE * span]);
    pts.push([cx, cy + SUPER_SCALE * span]);

    let mut tris: Vec<[usize; 3]> = vec![[n, n + 1, n + 2]];
    let mut edges: Vec<(usize, usize)> = Vec::new();

    for i in 0..n {
        let p = pts[i];
        edges.clear();

        let mut k = 0;
        while k < tris.len() {
            let [a, b, c] = tris[k];
            if in_circumcircle(pts[a], pts[b], pts[c], p) {
                edges.push((a, b));
                edges.push((b, c));
                edges.push((c, a));
                tris.swap_remove(k);
            } else {
                k += 1;
            }
        }

        // Cavity boundary: edges not shared (in reverse) by another bad triangle.
        for &(a, b) in &edges {
            if edges.contains(&(b, a)) {
                continue;
            }
            if orient(pts[a], pts[b], p) > 0.0 {
                tris.push([a, b, i]);
            }
        }
    }

    result.triangles = tris
        .into_iter()
        .filter(|t| t.iter().all(|&v| v < n))
        .filter(|t| {
            let area2 = orient(pts[t[0]], pts[t[1]], pts[t[2]]);
            area2 > COLLINEAR_TOL * span * span
        })
        .map(|v| Triangle { v })
        .collect();
    result
}
