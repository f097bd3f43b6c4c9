// ─────────────────────────────────────────────────────────────────────
// RadMap — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    APPRENTICE_ANNUAL_LIMIT_MSV, BOUNDARY_MARGIN_M, CONSERVATIVE_CONTROLLED_LIMIT_USV_H,
    CONSERVATIVE_SUPERVISED_LIMIT_USV_H, CONTROLLED_LIMIT_USV_H, DEFAULT_BUFFER_M,
    DEFAULT_PHOTON_ENERGY_MEV, DEFAULT_RESOLUTION, FULL_TIME_OCCUPANCY_H,
    PUBLIC_ANNUAL_LIMIT_MSV, PUBLIC_LIMIT_USV_H, SUPERVISED_LIMIT_USV_H,
    WORKER_ANNUAL_LIMIT_MSV,
};
use crate::error::{RadMapError, RadMapResult};

/// Top-level survey analysis configuration.
///
/// Every section is optional in JSON; missing sections fall back to the
/// CERN Safety Code F defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfig {
    #[serde(default = "default_area_name")]
    pub area_name: String,
    /// Regulatory standard label printed in the report header.
    #[serde(default = "default_standard")]
    pub standard: String,
    #[serde(default)]
    pub zone_limits: ZoneLimits,
    #[serde(default)]
    pub interpolation: InterpolationConfig,
    /// Annual occupancy assumption (hours/year).
    #[serde(default = "default_occupancy_hours")]
    pub occupancy_hours: f64,
    #[serde(default)]
    pub annual_limits: AnnualLimits,
    /// Width of the boundary strip used for the containment check (m).
    #[serde(default = "default_boundary_margin")]
    pub boundary_margin_m: f64,
    #[serde(default)]
    pub shielding: ShieldingConfig,
}

/// Upper bounds of the first three zone bands (µSv/hr). Restricted is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneLimits {
    pub public: f64,
    pub supervised: f64,
    pub controlled: f64,
}

impl ZoneLimits {
    /// CERN/IAEA thresholds 0.5 / 7.5 / 25 µSv/hr.
    pub const CERN: ZoneLimits = ZoneLimits {
        public: PUBLIC_LIMIT_USV_H,
        supervised: SUPERVISED_LIMIT_USV_H,
        controlled: CONTROLLED_LIMIT_USV_H,
    };

    /// Tighter site thresholds 0.5 / 3 / 10 µSv/hr.
    pub const CONSERVATIVE: ZoneLimits = ZoneLimits {
        public: PUBLIC_LIMIT_USV_H,
        supervised: CONSERVATIVE_SUPERVISED_LIMIT_USV_H,
        controlled: CONSERVATIVE_CONTROLLED_LIMIT_USV_H,
    };

    pub fn validate(&self) -> RadMapResult<()> {
        let limits = [self.public, self.supervised, self.controlled];
        if limits.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(RadMapError::Config(format!(
                "zone limits must be finite and positive: {limits:?}"
            )));
        }
        if !(self.public < self.supervised && self.supervised < self.controlled) {
            return Err(RadMapError::Config(format!(
                "zone limits must be strictly increasing: {limits:?}"
            )));
        }
        Ok(())
    }
}

impl Default for ZoneLimits {
    fn default() -> Self {
        ZoneLimits::CERN
    }
}

/// Scatter-to-grid interpolation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMethod {
    Linear,
    Cubic,
    Nearest,
    Idw,
}

impl InterpolationMethod {
    pub const ALL: [InterpolationMethod; 4] = [
        InterpolationMethod::Linear,
        InterpolationMethod::Cubic,
        InterpolationMethod::Nearest,
        InterpolationMethod::Idw,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationMethod::Linear => "linear",
            InterpolationMethod::Cubic => "cubic",
            InterpolationMethod::Nearest => "nearest",
            InterpolationMethod::Idw => "idw",
        }
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterpolationMethod {
    type Err = RadMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(InterpolationMethod::Linear),
            "cubic" => Ok(InterpolationMethod::Cubic),
            "nearest" => Ok(InterpolationMethod::Nearest),
            "idw" => Ok(InterpolationMethod::Idw),
            other => Err(RadMapError::Config(format!(
                "unknown interpolation method '{other}' (expected linear, cubic, nearest or idw)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpolationConfig {
    #[serde(default = "default_method")]
    pub method: InterpolationMethod,
    /// Nodes per axis.
    #[serde(default = "default_resolution")]
    pub resolution: usize,
    /// Margin around the measurement bounding box (m).
    #[serde(default = "default_buffer")]
    pub buffer_m: f64,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        InterpolationConfig {
            method: default_method(),
            resolution: default_resolution(),
            buffer_m: default_buffer(),
        }
    }
}

/// Annual effective dose limits (mSv/yr).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualLimits {
    #[serde(default = "default_worker_limit")]
    pub worker: f64,
    #[serde(default = "default_public_limit")]
    pub public: f64,
    #[serde(default = "default_apprentice_limit")]
    pub apprentice: f64,
}

impl Default for AnnualLimits {
    fn default() -> Self {
        AnnualLimits {
            worker: default_worker_limit(),
            public: default_public_limit(),
            apprentice: default_apprentice_limit(),
        }
    }
}

/// Shielding remediation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShieldingConfig {
    /// Photon energy used for attenuation lookups (MeV).
    #[serde(default = "default_energy")]
    pub energy_mev: f64,
    /// Dose rate the hotspot must be brought down to (µSv/hr).
    /// When absent, the Public zone limit is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_dose: Option<f64>,
    /// Candidate material keys.
    #[serde(default = "default_materials")]
    pub materials: Vec<String>,
}

impl Default for ShieldingConfig {
    fn default() -> Self {
        ShieldingConfig {
            energy_mev: default_energy(),
            target_dose: None,
            materials: default_materials(),
        }
    }
}

fn default_area_name() -> String {
    "Survey Area".to_string()
}
fn default_standard() -> String {
    "CERN".to_string()
}
fn default_occupancy_hours() -> f64 {
    FULL_TIME_OCCUPANCY_H
}
fn default_boundary_margin() -> f64 {
    BOUNDARY_MARGIN_M
}
fn default_method() -> InterpolationMethod {
    InterpolationMethod::Cubic
}
fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}
fn default_buffer() -> f64 {
    DEFAULT_BUFFER_M
}
fn default_worker_limit() -> f64 {
    WORKER_ANNUAL_LIMIT_MSV
}
fn default_public_limit() -> f64 {
    PUBLIC_ANNUAL_LIMIT_MSV
}
fn default_apprentice_limit() -> f64 {
    APPRENTICE_ANNUAL_LIMIT_MSV
}
fn default_energy() -> f64 {
    DEFAULT_PHOTON_ENERGY_MEV
}
fn default_materials() -> Vec<String> {
    vec![
        "concrete".to_string(),
        "steel".to_string(),
        "lead".to_string(),
    ]
}

impl Default for SurveyConfig {
    fn default() -> Self {
        SurveyConfig {
            area_name: default_area_name(),
            standard: default_standard(),
            zone_limits: ZoneLimits::default(),
            interpolation: InterpolationConfig::default(),
            occupancy_hours: default_occupancy_hours(),
            annual_limits: AnnualLimits::default(),
            boundary_margin_m: default_boundary_margin(),
            shielding: ShieldingConfig::default(),
        }
    }
}

impl SurveyConfig {
    /// Load from a JSON file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> RadMapResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RadMapResult<()> {
        self.zone_limits.validate()?;
        if self.interpolation.resolution < 2 {
            return Err(RadMapError::Config(format!(
                "interpolation resolution must be at least 2, got {}",
                self.interpolation.resolution
            )));
        }
        if !self.interpolation.buffer_m.is_finite() || self.interpolation.buffer_m < 0.0 {
            return Err(RadMapError::Config(format!(
                "interpolation buffer must be finite and non-negative, got {}",
                self.interpolation.buffer_m
            )));
        }
        if !self.occupancy_hours.is_finite() || self.occupancy_hours < 0.0 {
            return Err(RadMapError::Config(format!(
                "occupancy hours must be finite and non-negative, got {}",
                self.occupancy_hours
            )));
        }
        if !self.boundary_margin_m.is_finite() || self.boundary_margin_m < 0.0 {
            return Err(RadMapError::Config(format!(
                "boundary margin must be finite and non-negative, got {}",
                self.boundary_margin_m
            )));
        }
        if !self.shielding.energy_mev.is_finite() || self.shielding.energy_mev <= 0.0 {
            return Err(RadMapError::Config(format!(
                "shielding energy must be finite and positive, got {}",
                self.shielding.energy_mev
            )));
        }
        if let Some(target) = self.shielding.target_dose {
            if !target.is_finite() || target <= 0.0 {
                return Err(RadMapError::Config(format!(
                    "shielding target dose must be finite and positive, got {target}"
                )));
            }
        }
        Ok(())
    }

    /// Dose rate the remediation step designs for (µSv/hr).
    pub fn remediation_target(&self) -> f64 {
        self.shielding
            .target_dose
            .unwrap_or(self.zone_limits.public)
    }
}
