// ─────────────────────────────────────────────────────────────────────
// RadMap — Attenuation Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Narrow-beam photon attenuation: I(x) = I₀·exp(−µx).
//!
//! µ(E) is interpolated linearly in ln(E)/ln(µ) space between the tabulated
//! NIST points and held at the boundary value outside the table.

use radmap_math::interp::loglog_interp;
use radmap_types::error::{RadMapError, RadMapResult};
use serde::Serialize;
use tracing::debug;

use crate::materials::{material, materials, Material};

/// Per-material summary at a single photon energy.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialSummary {
    pub key: &'static str,
    pub display_name: &'static str,
    /// Linear attenuation coefficient [1/cm].
    pub mu: f64,
    /// µ/ρ [cm²/g].
    pub mass_attenuation: f64,
    /// Half-value layer [cm].
    pub hvl: f64,
    /// Tenth-value layer [cm].
    pub tvl: f64,
    pub density: f64,
    pub h_fraction: f64,
    pub cost_per_m3: f64,
    pub role: &'static str,
}

/// One tabulated row of a material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MuTableRow {
    pub energy_mev: f64,
    pub mu: f64,
    pub mass_attenuation: f64,
}

fn check_energy(energy_mev: f64) -> RadMapResult<()> {
    if energy_mev.is_finite() && energy_mev > 0.0 {
        Ok(())
    } else {
        Err(RadMapError::InvalidEnergy { energy_mev })
    }
}

fn check_dose(value: f64) -> RadMapResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RadMapError::invalid_dose(value))
    }
}

fn material_mu(m: &Material, energy_mev: f64) -> f64 {
    loglog_interp(m.energies_mev, m.mu_per_cm, energy_mev)
}

/// Linear attenuation coefficient µ [1/cm] of `key` at `energy_mev`.
pub fn mu(key: &str, energy_mev: f64) -> RadMapResult<f64> {
    let m = material(key)?;
    check_energy(energy_mev)?;
    Ok(material_mu(m, energy_mev))
}

/// Half-value layer ln2/µ [cm].
pub fn half_value_layer(key: &str, energy_mev: f64) -> RadMapResult<f64> {
    Ok(std::f64::consts::LN_2 / mu(key, energy_mev)?)
}

/// Tenth-value layer ln10/µ [cm].
pub fn tenth_value_layer(key: &str, energy_mev: f64) -> RadMapResult<f64> {
    Ok(std::f64::consts::LN_10 / mu(key, energy_mev)?)
}

/// Fraction of the incident dose rate passing `thickness_cm` of `key`.
pub fn transmission(key: &str, thickness_cm: f64, energy_mev: f64) -> RadMapResult<f64> {
    if !(thickness_cm.is_finite() && thickness_cm >= 0.0) {
        return Err(RadMapError::MalformedInput(format!(
            "thickness must be finite and non-negative, got {thickness_cm}"
        )));
    }
    Ok((-mu(key, energy_mev)? * thickness_cm).exp())
}

/// Thickness [cm] bringing `source` down to `target` (both µSv/hr).
///
/// Exactly 0.0 when no shielding is needed (`source <= target`).
pub fn required_thickness(
    key: &str,
    source: f64,
    target: f64,
    energy_mev: f64,
) -> RadMapResult<f64> {
    let mu = mu(key, energy_mev)?;
    check_dose(source)?;
    check_dose(target)?;
    if source <= target {
        return Ok(0.0);
    }
    if target == 0.0 {
        return Err(RadMapError::InvalidDose {
            value: target,
            reason: "a zero target is unreachable by exponential attenuation".to_string(),
        });
    }
    let x = -(target / source).ln() / mu;
    debug!(material = key, source, target, energy_mev, thickness_cm = x, "required thickness");
    Ok(x)
}

/// Tabulated (E, µ, µ/ρ) rows of `key`.
pub fn mu_table(key: &str) -> RadMapResult<Vec<MuTableRow>> {
    let m = material(key)?;
    Ok(m.energies_mev
        .iter()
        .zip(m.mu_per_cm)
        .map(|(&energy_mev, &mu)| MuTableRow {
            energy_mev,
            mu,
            mass_attenuation: mu / m.density,
        })
        .collect())
}

/// Summaries of `keys` (or the whole catalog) at `energy_mev`, sorted by µ
/// descending.
pub fn compare_materials_at_energy(
    energy_mev: f64,
    keys: Option<&[&str]>,
) -> RadMapResult<Vec<MaterialSummary>> {
    check_energy(energy_mev)?;
    let selected: Vec<&'static Material> = match keys {
        Some(keys) => keys.iter().map(|k| material(k)).collect::<RadMapResult<_>>()?,
        None => materials().iter().collect(),
    };

    let mut rows: Vec<MaterialSummary> = selected
        .into_iter()
        .map(|m| {
            let mu = material_mu(m, energy_mev);
            MaterialSummary {
                key: m.key,
                display_name: m.display_name,
                mu,
                mass_attenuation: mu / m.density,
                hvl: std::f64::consts::LN_2 / mu,
                tvl: std::f64::consts::LN_10 / mu,
                density: m.density,
                h_fraction: m.h_fraction,
                cost_per_m3: m.cost_per_m3,
                role: m.role,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.mu.total_cmp(&a.mu));
    Ok(rows)
}
