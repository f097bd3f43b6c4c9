// ─────────────────────────────────────────────────────────────────────
// RadMap — Synthetic Survey Scenarios
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Seeded synthetic surveys for demos, benches and regression tests.
//!
//! Point sources follow the inverse-square law with a 0.5 m near-field
//! cut-off; instrument noise is Gaussian.

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use radmap_types::error::{RadMapError, RadMapResult};
use radmap_types::state::Measurement;

pub const DEFAULT_SEED: u64 = 42;

/// Distances below this are clamped for inverse-square sources (m).
const NEAR_FIELD_CUTOFF_M: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// 12 × 10 lattice over 50 × 30 m around an 800 µSv·m²/hr beam-loss hotspot.
    BeamlineHotspot,
    /// 40 random points of near-background dose.
    UniformLow,
    /// 80 random points around three point sources.
    ScatteredSources,
    /// 50 points behind a wall, exponential fall-off along X.
    ShieldingTest,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::BeamlineHotspot,
        Scenario::UniformLow,
        Scenario::ScatteredSources,
        Scenario::ShieldingTest,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::BeamlineHotspot => "beamline_hotspot",
            Scenario::UniformLow => "uniform_low",
            Scenario::ScatteredSources => "scattered_sources",
            Scenario::ShieldingTest => "shielding_test",
        }
    }

    /// Deterministic measurement set for `seed`.
    pub fn generate(&self, seed: u64) -> RadMapResult<Vec<Measurement>> {
        let mut rng = StdRng::seed_from_u64(seed);
        match self {
            Scenario::BeamlineHotspot => beamline_hotspot(&mut rng),
            Scenario::UniformLow => uniform_low(&mut rng),
            Scenario::ScatteredSources => scattered_sources(&mut rng),
            Scenario::ShieldingTest => shielding_test(&mut rng),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = RadMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Scenario::ALL
            .into_iter()
            .find(|sc| sc.name() == wanted)
            .ok_or_else(|| {
                RadMapError::Config(format!(
                    "unknown scenario '{s}' (expected one of: {})",
                    Scenario::ALL.map(|sc| sc.name()).join(", ")
                ))
            })
    }
}

fn normal(mean: f64, std_dev: f64) -> RadMapResult<Normal<f64>> {
    Normal::new(mean, std_dev)
        .map_err(|e| RadMapError::Config(format!("noise distribution N({mean}, {std_dev}): {e}")))
}

fn inverse_square(x: f64, y: f64, sx: f64, sy: f64, intensity: f64) -> f64 {
    let d = ((x - sx).powi(2) + (y - sy).powi(2))
        .sqrt()
        .max(NEAR_FIELD_CUTOFF_M);
    intensity / (d * d)
}

fn beamline_hotspot(rng: &mut StdRng) -> RadMapResult<Vec<Measurement>> {
    const HOTSPOT: (f64, f64, f64) = (25.0, 15.0, 800.0);
    let noise = normal(0.2, 0.05)?;
    let mut out = Vec::with_capacity(120);
    for &x in Array1::linspace(0.0, 50.0, 12).iter() {
        for &y in Array1::linspace(0.0, 30.0, 10).iter() {
            let dose = inverse_square(x, y, HOTSPOT.0, HOTSPOT.1, HOTSPOT.2) + noise.sample(rng);
            out.push(Measurement::new(x, y, dose.max(0.05)));
        }
    }
    Ok(out)
}

fn uniform_low(rng: &mut StdRng) -> RadMapResult<Vec<Measurement>> {
    let noise = normal(0.3, 0.1)?;
    Ok((0..40)
        .map(|_| {
            let x = rng.gen_range(0.0..30.0);
            let y = rng.gen_range(0.0..20.0);
            let dose: f64 = noise.sample(rng);
            Measurement::new(x, y, dose.clamp(0.1, 0.5))
        })
        .collect())
}

fn scattered_sources(rng: &mut StdRng) -> RadMapResult<Vec<Measurement>> {
    const BACKGROUND: f64 = 0.15;
    const SOURCES: [(f64, f64, f64); 3] = [(10.0, 10.0, 50.0), (30.0, 15.0, 80.0), (20.0, 25.0, 120.0)];
    let noise = normal(0.0, 0.1)?;
    Ok((0..80)
        .map(|_| {
            let x = rng.gen_range(0.0..40.0);
            let y = rng.gen_range(0.0..35.0);
            let dose = BACKGROUND
                + SOURCES
                    .iter()
                    .map(|&(sx, sy, i)| inverse_square(x, y, sx, sy, i))
                    .sum::<f64>()
                + noise.sample(rng);
            Measurement::new(x, y, dose.max(0.1))
        })
        .collect())
}

fn shielding_test(rng: &mut StdRng) -> RadMapResult<Vec<Measurement>> {
    let noise = normal(0.0, 0.5)?;
    Ok(Array1::<f64>::linspace(0.0, 20.0, 50)
        .iter()
        .map(|&x| {
            let y = rng.gen_range(0.0..10.0);
            let dose = 100.0 * (-0.3 * x).exp() + noise.sample(rng);
            Measurement::new(x, y, dose.clamp(0.1, 200.0))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        let sizes: Vec<usize> = Scenario::ALL
            .iter()
            .map(|s| s.generate(DEFAULT_SEED).unwrap().len())
            .collect();
        assert_eq!(sizes, vec![120, 40, 80, 50]);
    }

    #[test]
    fn test_seeded_reproducible() {
        for s in Scenario::ALL {
            assert_eq!(s.generate(7).unwrap(), s.generate(7).unwrap(), "{s}");
        }
        assert_ne!(
            Scenario::UniformLow.generate(1).unwrap(),
            Scenario::UniformLow.generate(2).unwrap()
        );
    }

    #[test]
    fn test_value_ranges() {
        let low = Scenario::UniformLow.generate(DEFAULT_SEED).unwrap();
        assert!(low.iter().all(|m| (0.1..=0.5).contains(&m.dose_rate)));

        let hot = Scenario::BeamlineHotspot.generate(DEFAULT_SEED).unwrap();
        let max = hot.iter().map(|m| m.dose_rate).fold(0.0, f64::max);
        assert!(max > 25.0, "hotspot should reach Restricted, max = {max}");
        assert!(hot.iter().all(|m| m.dose_rate >= 0.05));

        let wall = Scenario::ShieldingTest.generate(DEFAULT_SEED).unwrap();
        assert!(wall[0].dose_rate > 95.0 && wall[49].dose_rate < 3.0);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("beamline-hotspot".parse::<Scenario>().unwrap(), Scenario::BeamlineHotspot);
        assert_eq!("Shielding_Test".parse::<Scenario>().unwrap(), Scenario::ShieldingTest);
        assert!("volcano".parse::<Scenario>().is_err());
    }
}
