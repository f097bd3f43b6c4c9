// ─────────────────────────────────────────────────────────────────────
// RadMap — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Single survey reading: position (m) and ambient dose rate (µSv/hr).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub x: f64,
    pub y: f64,
    pub dose_rate: f64,
}

impl Measurement {
    pub fn new(x: f64, y: f64, dose_rate: f64) -> Self {
        Measurement { x, y, dose_rate }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.dose_rate.is_finite()
    }

    pub fn position(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// Axis-aligned rectangle in survey coordinates (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Bounding box of a measurement set. `None` when empty.
    pub fn of(measurements: &[Measurement]) -> Option<Self> {
        let first = measurements.first()?;
        let mut b = Bounds {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        for m in &measurements[1..] {
            b.x_min = b.x_min.min(m.x);
            b.x_max = b.x_max.max(m.x);
            b.y_min = b.y_min.min(m.y);
            b.y_max = b.y_max.max(m.y);
        }
        Some(b)
    }

    pub fn expanded(&self, margin: f64) -> Self {
        Bounds {
            x_min: self.x_min - margin,
            x_max: self.x_max + margin,
            y_min: self.y_min - margin,
            y_max: self.y_max + margin,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// True when (x, y) lies within `margin` of any edge (inclusive).
    pub fn near_edge(&self, x: f64, y: f64, margin: f64) -> bool {
        (x >= self.x_min && x <= self.x_min + margin)
            || (x >= self.x_max - margin && x <= self.x_max)
            || (y >= self.y_min && y <= self.y_min + margin)
            || (y >= self.y_max - margin && y <= self.y_max)
    }
}

/// Regular interpolation grid with precomputed node coordinates.
/// Arrays are `[ny, nx]`: rows follow Y, columns follow X.
#[derive(Debug, Clone)]
pub struct SurveyGrid {
    pub nx: usize,
    pub ny: usize,
    pub x: Array1<f64>,  // X coordinates [nx] - linspace(x_min, x_max, nx)
    pub y: Array1<f64>,  // Y coordinates [ny] - linspace(y_min, y_max, ny)
    pub dx: f64,
    pub dy: f64,
    pub xx: Array2<f64>, // Meshgrid X [ny, nx]
    pub yy: Array2<f64>, // Meshgrid Y [ny, nx]
}

impl SurveyGrid {
    pub fn new(nx: usize, ny: usize, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        let x = Array1::linspace(x_min, x_max, nx);
        let y = Array1::linspace(y_min, y_max, ny);
        let dx = if nx > 1 { x[1] - x[0] } else { x_max - x_min };
        let dy = if ny > 1 { y[1] - y[0] } else { y_max - y_min };

        let mut xx = Array2::zeros((ny, nx));
        let mut yy = Array2::zeros((ny, nx));
        for iy in 0..ny {
            for ix in 0..nx {
                xx[[iy, ix]] = x[ix];
                yy[[iy, ix]] = y[iy];
            }
        }

        SurveyGrid {
            nx,
            ny,
            x,
            y,
            dx,
            dy,
            xx,
            yy,
        }
    }

    /// Square `resolution × resolution` grid spanning `bounds`.
    pub fn from_bounds(bounds: &Bounds, resolution: usize) -> Self {
        Self::new(
            resolution,
            resolution,
            bounds.x_min,
            bounds.x_max,
            bounds.y_min,
            bounds.y_max,
        )
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x_min: self.x[0],
            x_max: self.x[self.nx - 1],
            y_min: self.y[0],
            y_max: self.y[self.ny - 1],
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inclusive column range of nodes whose X lies in `[lo, hi]`.
    pub fn x_index_range(&self, lo: f64, hi: f64) -> Option<(usize, usize)> {
        axis_index_range(self.x[0], self.dx, self.nx, lo, hi)
    }

    /// Inclusive row range of nodes whose Y lies in `[lo, hi]`.
    pub fn y_index_range(&self, lo: f64, hi: f64) -> Option<(usize, usize)> {
        axis_index_range(self.y[0], self.dy, self.ny, lo, hi)
    }
}

fn axis_index_range(
    origin: f64,
    step: f64,
    n: usize,
    lo: f64,
    hi: f64,
) -> Option<(usize, usize)> {
    if n == 0 || hi < lo {
        return None;
    }
    if n == 1 || step <= 0.0 {
        return if origin >= lo && origin <= hi {
            Some((0, 0))
        } else {
            None
        };
    }
    // One node of slack on each side; callers re-test containment exactly.
    let first = ((lo - origin) / step).floor() as isize - 1;
    let last = ((hi - origin) / step).ceil() as isize + 1;
    let first = first.max(0);
    let last = last.min(n as isize - 1);
    if first > last {
        return None;
    }
    Some((first as usize, last as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation_200() {
        let grid = SurveyGrid::new(200, 200, -5.0, 55.0, -5.0, 35.0);
        assert_eq!(grid.nx, 200);
        assert_eq!(grid.ny, 200);
        assert!((grid.dx - 60.0 / 199.0).abs() < 1e-10);
        assert!((grid.dy - 40.0 / 199.0).abs() < 1e-10);
        assert!((grid.xx[[0, 0]] + 5.0).abs() < 1e-10);
        assert!((grid.xx[[0, 199]] - 55.0).abs() < 1e-10);
        assert!((grid.yy[[0, 0]] + 5.0).abs() < 1e-10);
        assert!((grid.yy[[199, 0]] - 35.0).abs() < 1e-10);
    }

    #[test]
    fn test_bounds_of_measurements() {
        let pts = [
            Measurement::new(0.0, 0.0, 0.3),
            Measurement::new(10.0, 0.0, 5.0),
            Measurement::new(0.0, 10.0, 30.0),
        ];
        let b = Bounds::of(&pts).unwrap();
        assert_eq!(b.x_min, 0.0);
        assert_eq!(b.x_max, 10.0);
        assert_eq!(b.y_min, 0.0);
        assert_eq!(b.y_max, 10.0);
        assert!(Bounds::of(&[]).is_none());

        let e = b.expanded(5.0);
        assert_eq!(e.x_min, -5.0);
        assert_eq!(e.y_max, 15.0);
        assert!((e.width() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_near_edge() {
        let b = Bounds {
            x_min: 0.0,
            x_max: 20.0,
            y_min: 0.0,
            y_max: 20.0,
        };
        assert!(b.near_edge(0.0, 10.0, 2.0));
        assert!(b.near_edge(2.0, 10.0, 2.0));
        assert!(b.near_edge(10.0, 19.0, 2.0));
        assert!(!b.near_edge(10.0, 10.0, 2.0));
        assert!(!b.near_edge(2.5, 17.5, 2.0));
    }

    #[test]
    fn test_index_range_covers_span() {
        let grid = SurveyGrid::new(11, 11, 0.0, 10.0, 0.0, 10.0);
        let (lo, hi) = grid.x_index_range(2.5, 4.5).unwrap();
        assert!(lo <= 3 && hi >= 4);
        assert!(grid.x_index_range(20.0, 30.0).is_none());
        assert_eq!(grid.y_index_range(-1.0, 100.0), Some((0, 10)));
    }
}
