// ─────────────────────────────────────────────────────────────────────
// RadMap — Zone Classifier
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Regulatory zone bands (CERN Safety Code F / IAEA).
//!
//! Bands partition `[0, ∞)`: lower bound inclusive, upper bound exclusive,
//! so a dose exactly on a threshold belongs to the higher band.

use std::fmt;

use ndarray::Array2;
use radmap_types::config::ZoneLimits;
use radmap_types::error::{RadMapError, RadMapResult};
use serde::{Deserialize, Serialize};

use crate::interpolator::DoseField;

/// Radiation area classification, in increasing severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    Public,
    Supervised,
    Controlled,
    Restricted,
}

impl Zone {
    pub const ALL: [Zone; 4] = [
        Zone::Public,
        Zone::Supervised,
        Zone::Controlled,
        Zone::Restricted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Zone::Public => "Public",
            Zone::Supervised => "Supervised",
            Zone::Controlled => "Controlled",
            Zone::Restricted => "Restricted",
        }
    }

    /// Map colour (hex).
    pub fn color(&self) -> &'static str {
        match self {
            Zone::Public => "#2ECC71",
            Zone::Supervised => "#F1C40F",
            Zone::Controlled => "#E67E22",
            Zone::Restricted => "#E74C3C",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One band `[lower, upper)` in µSv/hr.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneBand {
    pub zone: Zone,
    pub lower: f64,
    /// `f64::INFINITY` for the last band.
    pub upper: f64,
}

impl ZoneBand {
    pub fn contains(&self, dose_rate: f64) -> bool {
        dose_rate >= self.lower && dose_rate < self.upper
    }
}

/// Ordered, contiguous partition of non-negative dose rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneScheme {
    bands: [ZoneBand; 4],
}

impl ZoneScheme {
    /// CERN thresholds 0.5 / 7.5 / 25 µSv/hr.
    pub fn cern() -> Self {
        Self::from_valid_limits(ZoneLimits::CERN)
    }

    /// Site-conservative thresholds 0.5 / 3 / 10 µSv/hr.
    pub fn conservative() -> Self {
        Self::from_valid_limits(ZoneLimits::CONSERVATIVE)
    }

    /// Scheme from the three finite upper limits. Limits must be positive and
    /// strictly increasing.
    pub fn from_limits(public: f64, supervised: f64, controlled: f64) -> RadMapResult<Self> {
        let limits = ZoneLimits {
            public,
            supervised,
            controlled,
        };
        limits.validate()?;
        Ok(Self::from_valid_limits(limits))
    }

    fn from_valid_limits(l: ZoneLimits) -> Self {
        ZoneScheme {
            bands: [
                ZoneBand {
                    zone: Zone::Public,
                    lower: 0.0,
                    upper: l.public,
                },
                ZoneBand {
                    zone: Zone::Supervised,
                    lower: l.public,
                    upper: l.supervised,
                },
                ZoneBand {
                    zone: Zone::Controlled,
                    lower: l.supervised,
                    upper: l.controlled,
                },
                ZoneBand {
                    zone: Zone::Restricted,
                    lower: l.controlled,
                    upper: f64::INFINITY,
                },
            ],
        }
    }

    pub fn bands(&self) -> &[ZoneBand; 4] {
        &self.bands
    }

    pub fn band(&self, zone: Zone) -> &ZoneBand {
        &self.bands[zone.index()]
    }

    pub fn limits(&self) -> ZoneLimits {
        ZoneLimits {
            public: self.bands[0].upper,
            supervised: self.bands[1].upper,
            controlled: self.bands[2].upper,
        }
    }

    /// Upper bound of the Public band (µSv/hr).
    pub fn public_limit(&self) -> f64 {
        self.bands[0].upper
    }

    /// Zone of a single dose rate.
    pub fn classify(&self, dose_rate: f64) -> RadMapResult<Zone> {
        if !dose_rate.is_finite() || dose_rate < 0.0 {
            return Err(RadMapError::invalid_dose(dose_rate));
        }
        Ok(self
            .bands
            .iter()
            .find(|b| dose_rate < b.upper)
            .map_or(Zone::Restricted, |b| b.zone))
    }
}

impl Default for ZoneScheme {
    fn default() -> Self {
        ZoneScheme::cern()
    }
}

impl TryFrom<ZoneLimits> for ZoneScheme {
    type Error = RadMapError;

    fn try_from(l: ZoneLimits) -> RadMapResult<Self> {
        ZoneScheme::from_limits(l.public, l.supervised, l.controlled)
    }
}

/// Zone label of every grid node, shape `[ny, nx]`.
pub fn classify_field(field: &DoseField, scheme: &ZoneScheme) -> RadMapResult<Array2<Zone>> {
    let mut zones = Array2::from_elem(field.dose.raw_dim(), Zone::Public);
    for (z, &d) in zones.iter_mut().zip(field.dose.iter()) {
        *z = scheme.classify(d)?;
    }
    Ok(zones)
}

/// Share of the mapped area in one zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneCoverage {
    pub zone: Zone,
    pub cells: usize,
    pub fraction: f64,
    /// `fraction` × mapped area (m²).
    pub area_m2: f64,
}

/// Per-zone node counts and area fractions of the interpolated map, in zone
/// order. Every zone is listed, including empty ones.
pub fn zone_coverage(field: &DoseField, scheme: &ZoneScheme) -> RadMapResult<Vec<ZoneCoverage>> {
    let mut counts = [0usize; 4];
    for &d in field.dose.iter() {
        counts[scheme.classify(d)?.index()] += 1;
    }
    let total = field.dose.len().max(1) as f64;
    let b = field.grid.bounds();
    let mapped_area = b.width() * b.height();
    Ok(Zone::ALL
        .iter()
        .map(|&zone| {
            let cells = counts[zone.index()];
            let fraction = cells as f64 / total;
            ZoneCoverage {
                zone,
                cells,
                fraction,
                area_m2: fraction * mapped_area,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use radmap_types::state::SurveyGrid;

    #[test]
    fn test_cern_thresholds() {
        let s = ZoneScheme::cern();
        assert_eq!(s.classify(0.0).unwrap(), Zone::Public);
        assert_eq!(s.classify(0.49).unwrap(), Zone::Public);
        assert_eq!(s.classify(0.5).unwrap(), Zone::Supervised);
        assert_eq!(s.classify(7.49).unwrap(), Zone::Supervised);
        assert_eq!(s.classify(7.5).unwrap(), Zone::Controlled);
        assert_eq!(s.classify(25.0).unwrap(), Zone::Restricted);
        assert_eq!(s.classify(1e9).unwrap(), Zone::Restricted);
    }

    #[test]
    fn test_conservative_thresholds() {
        let s = ZoneScheme::conservative();
        assert_eq!(s.classify(5.0).unwrap(), Zone::Controlled);
        assert_eq!(s.classify(10.0).unwrap(), Zone::Restricted);
    }

    #[test]
    fn test_invalid_dose_rejected() {
        let s = ZoneScheme::cern();
        for d in [-0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(s.classify(d), Err(RadMapError::InvalidDose { .. })), "{d}");
        }
    }

    #[test]
    fn test_from_limits_validation() {
        assert!(ZoneScheme::from_limits(1.0, 2.0, 3.0).is_ok());
        assert!(ZoneScheme::from_limits(1.0, 1.0, 3.0).is_err());
        assert!(ZoneScheme::from_limits(0.0, 2.0, 3.0).is_err());
        assert!(ZoneScheme::from_limits(1.0, 2.0, f64::NAN).is_err());
        let s = ZoneScheme::try_from(ZoneLimits::CONSERVATIVE).unwrap();
        assert_eq!(s, ZoneScheme::conservative());
    }

    #[test]
    fn test_bands_contiguous() {
        let s = ZoneScheme::cern();
        let bands = s.bands();
        assert_eq!(bands[0].lower, 0.0);
        for w in bands.windows(2) {
            assert_eq!(w[0].upper, w[1].lower);
        }
        assert!(bands[3].upper.is_infinite());
        assert_eq!(s.limits(), ZoneLimits::CERN);
    }

    #[test]
    fn test_coverage_sums_to_one() {
        let grid = SurveyGrid::new(4, 2, 0.0, 3.0, 0.0, 1.0);
        let dose = ndarray::arr2(&[[0.1, 0.2, 1.0, 30.0], [0.3, 8.0, 8.0, 0.4]]);
        let field = DoseField { grid, dose };
        let cov = zone_coverage(&field, &ZoneScheme::cern()).unwrap();
        assert_eq!(cov.iter().map(|c| c.cells).collect::<Vec<_>>(), vec![4, 1, 2, 1]);
        let total: f64 = cov.iter().map(|c| c.fraction).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!((cov[0].area_m2 - 1.5).abs() < 1e-12);

        let zones = classify_field(&field, &ZoneScheme::cern()).unwrap();
        assert_eq!(zones[[0, 3]], Zone::Restricted);
        assert_eq!(zones[[1, 1]], Zone::Controlled);
    }
}
