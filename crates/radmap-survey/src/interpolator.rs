// ─────────────────────────────────────────────────────────────────────
// RadMap — Spatial Interpolator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sparse survey points → dense dose-rate field.
//!
//! The grid spans the measurement bounding box grown by a buffer on every
//! side. Whatever kernel is chosen, nodes it leaves undefined are back-filled
//! from the nearest measurement, so the resulting field has no NaN.

use ndarray::Array2;
use radmap_math::delaunay::all_collinear;
use radmap_math::interp::interp2d;
use radmap_math::scatter::{
    backfill_nearest, CubicInterpolator, IdwInterpolator, LinearInterpolator,
    NearestInterpolator, ScatterInterpolator,
};
use radmap_types::config::{InterpolationConfig, InterpolationMethod};
use radmap_types::error::{RadMapError, RadMapResult};
use radmap_types::state::{Bounds, Measurement, SurveyGrid};
use tracing::debug;

/// Dose rate (µSv/hr) at every node of `grid`, shape `[ny, nx]`.
#[derive(Debug, Clone)]
pub struct DoseField {
    pub grid: SurveyGrid,
    pub dose: Array2<f64>,
}

impl DoseField {
    /// Bilinear lookup at (x, y), clamped to the grid edge.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        interp2d(&self.dose, &self.grid, x, y)
    }

    pub fn max(&self) -> f64 {
        self.dose.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min(&self) -> f64 {
        self.dose.iter().cloned().fold(f64::INFINITY, f64::min)
    }
}

/// Configured scatter-to-grid interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialInterpolator {
    method: InterpolationMethod,
    resolution: usize,
    buffer_m: f64,
}

impl SpatialInterpolator {
    pub fn new(method: InterpolationMethod, resolution: usize, buffer_m: f64) -> RadMapResult<Self> {
        if resolution < 2 {
            return Err(RadMapError::Config(format!(
                "interpolation resolution must be at least 2, got {resolution}"
            )));
        }
        if !buffer_m.is_finite() || buffer_m < 0.0 {
            return Err(RadMapError::Config(format!(
                "interpolation buffer must be finite and non-negative, got {buffer_m}"
            )));
        }
        Ok(SpatialInterpolator {
            method,
            resolution,
            buffer_m,
        })
    }

    pub fn from_config(cfg: &InterpolationConfig) -> RadMapResult<Self> {
        Self::new(cfg.method, cfg.resolution, cfg.buffer_m)
    }

    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    fn kernel(&self) -> Box<dyn ScatterInterpolator> {
        match self.method {
            InterpolationMethod::Linear => Box::new(LinearInterpolator),
            InterpolationMethod::Cubic => Box::new(CubicInterpolator),
            InterpolationMethod::Nearest => Box::new(NearestInterpolator),
            InterpolationMethod::Idw => Box::new(IdwInterpolator::default()),
        }
    }

    pub fn interpolate(&self, measurements: &[Measurement]) -> RadMapResult<DoseField> {
        if measurements.len() < 3 {
            return Err(RadMapError::InsufficientData(format!(
                "need at least 3 measurements, got {}",
                measurements.len()
            )));
        }
        for m in measurements {
            if !m.x.is_finite() || !m.y.is_finite() {
                return Err(RadMapError::MalformedInput(format!(
                    "non-finite measurement position ({}, {})",
                    m.x, m.y
                )));
            }
            if !m.dose_rate.is_finite() || m.dose_rate < 0.0 {
                return Err(RadMapError::invalid_dose(m.dose_rate));
            }
        }

        let points: Vec<[f64; 2]> = measurements.iter().map(Measurement::position).collect();
        let values: Vec<f64> = measurements.iter().map(|m| m.dose_rate).collect();
        if all_collinear(&points) {
            return Err(RadMapError::InsufficientData(
                "all measurement points are collinear".to_string(),
            ));
        }

        let bounds = Bounds::of(measurements)
            .ok_or_else(|| RadMapError::InsufficientData("no measurements".to_string()))?
            .expanded(self.buffer_m);
        let grid = SurveyGrid::from_bounds(&bounds, self.resolution);

        let kernel = self.kernel();
        let mut dose = kernel.interpolate(&points, &values, &grid);
        let filled = backfill_nearest(&mut dose, &points, &values, &grid);
        if self.method == InterpolationMethod::Cubic {
            dose.mapv_inplace(|v| v.max(0.0));
        }
        debug!(
            method = kernel.name(),
            nodes = grid.len(),
            backfilled = filled,
            "interpolated dose field"
        );

        Ok(DoseField { grid, dose })
    }
}

/// One-shot interpolation of `measurements` onto a `resolution²` grid.
pub fn interpolate(
    measurements: &[Measurement],
    method: InterpolationMethod,
    resolution: usize,
    buffer_m: f64,
) -> RadMapResult<DoseField> {
    SpatialInterpolator::new(method, resolution, buffer_m)?.interpolate(measurements)
}
