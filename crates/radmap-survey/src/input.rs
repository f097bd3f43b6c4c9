//! Measurement input: CSV tables, sanitation, geographic count-rate readings.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use radmap_types::constants::{CPM_PER_USV_H, METRES_PER_DEGREE};
use radmap_types::error::{RadMapError, RadMapResult};
use radmap_types::state::Measurement;
use serde::Deserialize;
use tracing::{debug, warn};

/// Geo readings at or above this dose rate are treated as sensor faults (µSv/hr).
const GEO_DOSE_CEILING_USV_H: f64 = 1000.0;

pub(crate) fn csv_error(e: csv::Error) -> RadMapError {
    RadMapError::Csv(e.to_string())
}

fn column(headers: &csv::StringRecord, name: &str) -> RadMapResult<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            RadMapError::MalformedInput(format!(
                "missing required column '{name}' (found: {})",
                headers.iter().collect::<Vec<_>>().join(", ")
            ))
        })
}

fn cell(record: &csv::StringRecord, idx: usize, name: &str, row: usize) -> RadMapResult<f64> {
    let raw = record.get(idx).unwrap_or("");
    if raw.is_empty() {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>().map_err(|_| {
        RadMapError::MalformedInput(format!("row {row}: cannot parse {name} value '{raw}'"))
    })
}

/// Read a measurement table with `x`, `y` and `dose_rate` columns.
///
/// Column order is free and extra columns are ignored. Empty cells become NaN
/// and are dropped later by [`sanitize`].
pub fn read_measurements_csv<R: Read>(reader: R) -> RadMapResult<Vec<Measurement>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers().map_err(csv_error)?.clone();
    let ix = column(&headers, "x")?;
    let iy = column(&headers, "y")?;
    let id = column(&headers, "dose_rate")?;

    let mut out = Vec::new();
    for (n, record) in rdr.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let row = n + 1;
        out.push(Measurement::new(
            cell(&record, ix, "x", row)?,
            cell(&record, iy, "y", row)?,
            cell(&record, id, "dose_rate", row)?,
        ));
    }
    debug!(rows = out.len(), "read measurement table");
    Ok(out)
}

pub fn read_measurements_path(path: impl AsRef<Path>) -> RadMapResult<Vec<Measurement>> {
    read_measurements_csv(File::open(path)?)
}

/// Cleaned measurement set plus what was removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Sanitized {
    pub measurements: Vec<Measurement>,
    pub dropped_non_finite: usize,
    pub dropped_duplicates: usize,
}

/// Drop rows with non-finite fields and repeated positions (first kept).
///
/// A negative finite dose rate is an error, not a dropped row.
pub fn sanitize(measurements: Vec<Measurement>) -> RadMapResult<Sanitized> {
    let mut seen: HashSet<(u64, u64)> = HashSet::with_capacity(measurements.len());
    let mut kept = Vec::with_capacity(measurements.len());
    let mut dropped_non_finite = 0;
    let mut dropped_duplicates = 0;

    for m in measurements {
        if !m.is_finite() {
            dropped_non_finite += 1;
            continue;
        }
        if m.dose_rate < 0.0 {
            return Err(RadMapError::invalid_dose(m.dose_rate));
        }
        // +0.0 folds -0.0 onto 0.0.
        let key = ((m.x + 0.0).to_bits(), (m.y + 0.0).to_bits());
        if !seen.insert(key) {
            dropped_duplicates += 1;
            continue;
        }
        kept.push(m);
    }

    if dropped_non_finite > 0 || dropped_duplicates > 0 {
        warn!(
            dropped_non_finite,
            dropped_duplicates,
            kept = kept.len(),
            "sanitized measurement set"
        );
    }
    Ok(Sanitized {
        measurements: kept,
        dropped_non_finite,
        dropped_duplicates,
    })
}

/// Crowd-sourced count-rate reading at a geographic position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeoReading {
    pub latitude: f64,
    pub longitude: f64,
    /// Raw instrument value in `unit`.
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Local-frame origin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoOrigin {
    pub latitude: f64,
    pub longitude: f64,
}

/// Parse a JSON array of readings.
pub fn read_geo_readings_json<R: Read>(reader: R) -> RadMapResult<Vec<GeoReading>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Convert readings to local metric measurements around `origin`.
///
/// Only `cpm` readings (or readings without a unit) are used; counts are
/// converted at 334 cpm per µSv/hr and kept when `0 < dose < 1000`.
/// Equirectangular projection: 111 km per degree, longitude scaled by
/// cos(origin latitude).
pub fn from_geo_readings(readings: &[GeoReading], origin: GeoOrigin) -> Vec<Measurement> {
    let lon_scale = METRES_PER_DEGREE * origin.latitude.to_radians().cos();
    let out: Vec<Measurement> = readings
        .iter()
        .filter(|r| r.unit.as_deref().map_or(true, |u| u.eq_ignore_ascii_case("cpm")))
        .map(|r| {
            Measurement::new(
                (r.longitude - origin.longitude) * lon_scale,
                (r.latitude - origin.latitude) * METRES_PER_DEGREE,
                r.value / CPM_PER_USV_H,
            )
        })
        .filter(|m| m.dose_rate > 0.0 && m.dose_rate < GEO_DOSE_CEILING_USV_H)
        .collect();
    debug!(readings = readings.len(), kept = out.len(), "converted geo readings");
    out
}
