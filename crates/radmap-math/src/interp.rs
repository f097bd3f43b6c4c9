//! One-dimensional table lookup and bilinear sampling on SurveyGrid.

use ndarray::Array2;
use radmap_types::error::{RadMapError, RadMapResult};
use radmap_types::state::SurveyGrid;

/// Check that `(xs, ys)` can be used with [`loglog_interp`]:
/// equal non-zero lengths, strictly increasing positive abscissae and
/// positive ordinates, all finite.
pub fn validate_loglog_table(xs: &[f64], ys: &[f64]) -> RadMapResult<()> {
    if xs.is_empty() || xs.len() != ys.len() {
        return Err(RadMapError::Config(format!(
            "log-log table needs matching non-empty columns, got {} and {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite() || *v <= 0.0) {
        return Err(RadMapError::Config(
            "log-log table entries must be finite and positive".to_string(),
        ));
    }
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(RadMapError::Config(
            "log-log table abscissae must be strictly increasing".to_string(),
        ));
    }
    Ok(())
}

/// Piecewise-linear interpolation in `ln(x)`/`ln(y)` space.
///
/// Outside `[xs[0], xs[n-1]]` the boundary ordinate is held (no slope
/// extrapolation). Tabulated abscissae return the tabulated ordinate
/// exactly. The table must satisfy [`validate_loglog_table`] and `x > 0`.
pub fn loglog_interp(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert!(validate_loglog_table(xs, ys).is_ok());
    debug_assert!(x > 0.0);

    let n = xs.len();
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    // First index with xs[i] > x; x is strictly inside so 1 <= hi <= n-1.
    let hi = xs.partition_point(|&v| v <= x);
    let lo = hi - 1;
    if xs[lo] == x {
        return ys[lo];
    }

    let (lx0, lx1) = (xs[lo].ln(), xs[hi].ln());
    let (ly0, ly1) = (ys[lo].ln(), ys[hi].ln());
    let t = (x.ln() - lx0) / (lx1 - lx0);
    (ly0 + t * (ly1 - ly0)).exp()
}

/// Bilinear interpolation on a SurveyGrid.
///
/// Returns the interpolated value of `field` at position `(x, y)`.
/// Clamps to grid boundaries if outside.
pub fn interp2d(field: &Array2<f64>, grid: &SurveyGrid, x: f64, y: f64) -> f64 {
    if grid.nx < 2 || grid.ny < 2 {
        return field[[0, 0]];
    }

    let fx = (x - grid.x[0]) / grid.dx;
    let fy = (y - grid.y[0]) / grid.dy;

    let ix0 = (fx.floor() as isize).clamp(0, (grid.nx as isize) - 2) as usize;
    let iy0 = (fy.floor() as isize).clamp(0, (grid.ny as isize) - 2) as usize;
    let ix1 = ix0 + 1;
    let iy1 = iy0 + 1;

    let tx = (fx - ix0 as f64).clamp(0.0, 1.0);
    let ty = (fy - iy0 as f64).clamp(0.0, 1.0);

    let v00 = field[[iy0, ix0]];
    let v10 = field[[iy1, ix0]];
    let v01 = field[[iy0, ix1]];
    let v11 = field[[iy1, ix1]];

    (1.0 - ty) * ((1.0 - tx) * v00 + tx * v01) + ty * ((1.0 - tx) * v10 + tx * v11)
}
