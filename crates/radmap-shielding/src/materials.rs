// ─────────────────────────────────────────────────────────────────────
// RadMap — Shielding Materials
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Photon linear attenuation coefficients for common shielding materials.
//!
//! Source: NIST XCOM photon cross sections and X-ray mass attenuation tables
//! (narrow-beam "good geometry"). Linear coefficients are µ/ρ × ρ. Valid for
//! 0.1-10 MeV; broad-beam thick-wall design additionally needs build-up
//! factors (ANSI/ANS-6.4.3), which are not applied here.

use radmap_types::error::{RadMapError, RadMapResult};

/// Tabulated photon energies shared by every catalog entry [MeV].
pub const NIST_ENERGIES_MEV: [f64; 7] = [0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0];

/// Shielding material record. Read-only reference data.
#[derive(Debug)]
pub struct Material {
    pub key: &'static str,
    pub display_name: &'static str,
    /// Density [g/cm³].
    pub density: f64,
    /// Strictly increasing photon energies [MeV].
    pub energies_mev: &'static [f64],
    /// Linear attenuation coefficient at each energy [1/cm].
    pub mu_per_cm: &'static [f64],
    /// Hydrogen mass fraction (fast neutron moderation).
    pub h_fraction: f64,
    /// Boron mass fraction (thermal neutron capture).
    pub b_fraction: f64,
    /// Indicative installed cost [USD/m³].
    pub cost_per_m3: f64,
    pub role: &'static str,
    /// Plot colour, hex.
    pub color: &'static str,
}

impl Material {
    /// Mass attenuation coefficients µ/ρ [cm²/g] at the tabulated energies.
    pub fn mass_attenuation(&self) -> impl Iterator<Item = f64> + '_ {
        self.mu_per_cm.iter().map(move |mu| mu / self.density)
    }

    pub fn energy_range(&self) -> (f64, f64) {
        (
            self.energies_mev[0],
            self.energies_mev[self.energies_mev.len() - 1],
        )
    }
}

static MATERIALS: &[Material] = &[
    Material {
        key: "concrete",
        display_name: "Ordinary Concrete",
        density: 2.35,
        energies_mev: &NIST_ENERGIES_MEV,
        mu_per_cm: &[0.402, 0.287, 0.211, 0.153, 0.116, 0.078, 0.059],
        h_fraction: 0.010,
        b_fraction: 0.000,
        cost_per_m3: 190.0,
        role: "Gamma attenuation - standard structural shielding",
        color: "#95A5A6",
    },
    Material {
        key: "heavy_concrete",
        display_name: "Heavy Concrete (Barite)",
        density: 3.45,
        energies_mev: &NIST_ENERGIES_MEV,
        mu_per_cm: &[1.029, 0.518, 0.319, 0.211, 0.164, 0.111, 0.087],
        h_fraction: 0.008,
        b_fraction: 0.000,
        cost_per_m3: 1200.0,
        role: "High-density gamma shielding - thinner walls than ordinary concrete",
        color: "#717D7E",
    },
    Material {
        key: "steel",
        display_name: "Steel (Iron)",
        density: 7.9,
        energies_mev: &NIST_ENERGIES_MEV,
        mu_per_cm: &[2.912, 1.149, 0.662, 0.474, 0.336, 0.248, 0.236],
        h_fraction: 0.000,
        b_fraction: 0.000,
        cost_per_m3: 8000.0,
        role: "High-Z gamma shielding - compact but expensive",
        color: "#AAB7B8",
    },
    Material {
        key: "lead",
        display_name: "Lead",
        density: 11.34,
        energies_mev: &NIST_ENERGIES_MEV,
        // Pair production pushes µ back up above ~4 MeV.
        mu_per_cm: &[62.93, 11.33, 1.826, 0.805, 0.518, 0.483, 0.559],
        h_fraction: 0.000,
        b_fraction: 0.000,
        cost_per_m3: 21000.0,
        role: "Very high-Z gamma shielding - best at low energies (<0.5 MeV)",
        color: "#566573",
    },
    Material {
        key: "bentonite_slurry",
        display_name: "Bentonite Slurry (~60% water)",
        density: 1.45,
        energies_mev: &NIST_ENERGIES_MEV,
        mu_per_cm: &[0.248, 0.199, 0.140, 0.103, 0.071, 0.044, 0.032],
        h_fraction: 0.067,
        b_fraction: 0.002,
        cost_per_m3: 160.0,
        role: "Neutron moderation (primary) + low-cost gamma complement",
        color: "#A9784E",
    },
    Material {
        key: "borated_bentonite",
        display_name: "Borated Bentonite (+5% borax)",
        density: 1.50,
        energies_mev: &NIST_ENERGIES_MEV,
        mu_per_cm: &[0.257, 0.206, 0.145, 0.106, 0.074, 0.045, 0.033],
        h_fraction: 0.068,
        b_fraction: 0.022,
        cost_per_m3: 650.0,
        role: "Neutron moderation + thermal neutron capture via B-10",
        color: "#7D6608",
    },
    Material {
        key: "polyethylene",
        display_name: "High-Density Polyethylene (HDPE)",
        density: 0.95,
        energies_mev: &NIST_ENERGIES_MEV,
        mu_per_cm: &[0.186, 0.138, 0.092, 0.069, 0.042, 0.027, 0.019],
        h_fraction: 0.143,
        b_fraction: 0.000,
        cost_per_m3: 900.0,
        role: "Best solid neutron moderator - benchmark comparison material",
        color: "#F7DC6F",
    },
    Material {
        key: "earth_soil",
        display_name: "Compacted Earth / Soil",
        density: 1.80,
        energies_mev: &NIST_ENERGIES_MEV,
        mu_per_cm: &[0.308, 0.220, 0.161, 0.120, 0.089, 0.060, 0.045],
        h_fraction: 0.020,
        b_fraction: 0.000,
        cost_per_m3: 15.0,
        role: "Earth berm shielding - cheapest bulk option",
        color: "#6E2C00",
    },
];

/// Full catalog in declaration order.
pub fn materials() -> &'static [Material] {
    MATERIALS
}

/// Catalog keys in declaration order.
pub fn material_keys() -> Vec<&'static str> {
    MATERIALS.iter().map(|m| m.key).collect()
}

/// Look up a material by key (exact, lowercase).
pub fn material(key: &str) -> RadMapResult<&'static Material> {
    MATERIALS
        .iter()
        .find(|m| m.key == key)
        .ok_or_else(|| RadMapError::UnknownMaterial {
            key: key.to_string(),
            available: material_keys().join(", "),
        })
}
