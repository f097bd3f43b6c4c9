// ─────────────────────────────────────────────────────────────────────
// RadMap — Compliance Engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Point-based compliance assessment of a survey.
//!
//! Statistics, projections and the boundary check are taken over the raw
//! measurements, never over the interpolated map.

use radmap_math::stats::{summarize, Summary};
use radmap_shielding::attenuation::required_thickness;
use radmap_shielding::materials::material;
use radmap_types::config::{AnnualLimits, SurveyConfig, ZoneLimits};
use radmap_types::constants::{BOUNDARY_MARGIN_M, FULL_TIME_OCCUPANCY_H, USV_PER_MSV};
use radmap_types::error::{RadMapError, RadMapResult};
use radmap_types::state::{Bounds, Measurement};
use serde::Serialize;
use tracing::info;

use crate::zones::{Zone, ZoneScheme};

/// Annual dose (mSv/yr) from a dose rate (µSv/hr) and occupancy (h/yr).
pub fn annual_dose(dose_rate: f64, occupancy_hours: f64) -> f64 {
    dose_rate * occupancy_hours / USV_PER_MSV
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneStatistics {
    pub zone: Zone,
    pub count: usize,
    /// Share of all measurement points, 0-100.
    pub percentage: f64,
    /// Absent when no point falls in the zone.
    pub dose: Option<Summary>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnnualProjection {
    pub occupancy_hours: f64,
    pub max_annual_msv: f64,
    pub mean_annual_msv: f64,
    pub limits: AnnualLimits,
}

impl AnnualProjection {
    pub fn max_exceeds_worker_limit(&self) -> bool {
        self.max_annual_msv > self.limits.worker
    }

    pub fn mean_exceeds_worker_limit(&self) -> bool {
        self.mean_annual_msv > self.limits.worker
    }
}

/// Containment check along the survey perimeter.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BoundaryCheck {
    pub margin_m: f64,
    pub edge_points: usize,
    pub max_edge_dose: f64,
    pub public_limit: f64,
    pub leakage: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Warning,
    Caution,
    Info,
    Ok,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Caution => "CAUTION",
            Severity::Info => "INFO",
            Severity::Ok => "OK",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionItem {
    pub severity: Severity,
    pub zone: Zone,
    /// Points in `zone`; 0 for the all-Public item.
    pub points: usize,
    pub message: String,
    pub actions: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemediationOption {
    pub material: &'static str,
    pub display_name: &'static str,
    pub thickness_cm: f64,
    /// Wall cost per m² of face area (USD).
    pub cost_per_m2: f64,
}

/// Shielding needed to bring the hotspot down to the target.
#[derive(Debug, Clone, Serialize)]
pub struct RemediationPlan {
    pub hotspot_dose: f64,
    pub target_dose: f64,
    pub energy_mev: f64,
    pub options: Vec<RemediationOption>,
}

/// Immutable result of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceReport {
    pub area_name: String,
    pub standard: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub survey_date: Option<String>,
    pub total_points: usize,
    pub zone_limits: ZoneLimits,
    pub zones: Vec<ZoneStatistics>,
    pub overall: Summary,
    pub annual: AnnualProjection,
    pub boundary: BoundaryCheck,
    pub actions: Vec<ActionItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<RemediationPlan>,
}

impl ComplianceReport {
    pub fn zone(&self, zone: Zone) -> &ZoneStatistics {
        &self.zones[zone as usize]
    }

    pub fn to_json(&self) -> RadMapResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone)]
struct RemediationSettings {
    energy_mev: f64,
    target_dose: Option<f64>,
    materials: Vec<&'static str>,
}

/// Survey-level settings applied to every analysis.
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    scheme: ZoneScheme,
    area_name: String,
    standard: String,
    survey_date: Option<String>,
    occupancy_hours: f64,
    annual_limits: AnnualLimits,
    boundary_margin_m: f64,
    remediation: Option<RemediationSettings>,
}

fn resolve_materials<S: AsRef<str>>(keys: &[S]) -> RadMapResult<Vec<&'static str>> {
    keys.iter()
        .map(|k| material(k.as_ref()).map(|m| m.key))
        .collect()
}

impl ComplianceEngine {
    /// Engine with default occupancy, limits, margin and remediation
    /// (concrete, steel, lead at 1 MeV down to the Public limit).
    pub fn new(scheme: ZoneScheme) -> Self {
        let defaults = SurveyConfig::default();
        ComplianceEngine {
            scheme,
            area_name: defaults.area_name,
            standard: defaults.standard,
            survey_date: None,
            occupancy_hours: FULL_TIME_OCCUPANCY_H,
            annual_limits: AnnualLimits::default(),
            boundary_margin_m: BOUNDARY_MARGIN_M,
            remediation: Some(RemediationSettings {
                energy_mev: defaults.shielding.energy_mev,
                target_dose: None,
                materials: vec!["concrete", "steel", "lead"],
            }),
        }
    }

    pub fn from_config(cfg: &SurveyConfig) -> RadMapResult<Self> {
        cfg.validate()?;
        let scheme = ZoneScheme::try_from(cfg.zone_limits)?;
        Ok(ComplianceEngine {
            scheme,
            area_name: cfg.area_name.clone(),
            standard: cfg.standard.clone(),
            survey_date: None,
            occupancy_hours: cfg.occupancy_hours,
            annual_limits: cfg.annual_limits,
            boundary_margin_m: cfg.boundary_margin_m,
            remediation: Some(RemediationSettings {
                energy_mev: cfg.shielding.energy_mev,
                target_dose: cfg.shielding.target_dose,
                materials: resolve_materials(&cfg.shielding.materials)?,
            }),
        })
    }

    pub fn with_area(mut self, area_name: impl Into<String>, standard: impl Into<String>) -> Self {
        self.area_name = area_name.into();
        self.standard = standard.into();
        self
    }

    pub fn with_survey_date(mut self, date: impl Into<String>) -> Self {
        self.survey_date = Some(date.into());
        self
    }

    pub fn with_occupancy_hours(mut self, hours: f64) -> RadMapResult<Self> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(RadMapError::Config(format!(
                "occupancy hours must be finite and non-negative, got {hours}"
            )));
        }
        self.occupancy_hours = hours;
        Ok(self)
    }

    pub fn with_boundary_margin(mut self, margin_m: f64) -> RadMapResult<Self> {
        if !margin_m.is_finite() || margin_m < 0.0 {
            return Err(RadMapError::Config(format!(
                "boundary margin must be finite and non-negative, got {margin_m}"
            )));
        }
        self.boundary_margin_m = margin_m;
        Ok(self)
    }

    /// Replace the remediation candidates. `None` disables the remediation step.
    pub fn with_remediation(
        mut self,
        energy_mev: f64,
        target_dose: Option<f64>,
        materials: Option<&[&str]>,
    ) -> RadMapResult<Self> {
        self.remediation = match materials {
            None => None,
            Some(keys) => {
                if !energy_mev.is_finite() || energy_mev <= 0.0 {
                    return Err(RadMapError::InvalidEnergy { energy_mev });
                }
                if let Some(t) = target_dose {
                    if !t.is_finite() || t <= 0.0 {
                        return Err(RadMapError::Config(format!(
                            "remediation target must be finite and positive, got {t}"
                        )));
                    }
                }
                Some(RemediationSettings {
                    energy_mev,
                    target_dose,
                    materials: resolve_materials(keys)?,
                })
            }
        };
        Ok(self)
    }

    pub fn scheme(&self) -> &ZoneScheme {
        &self.scheme
    }

    pub fn analyze(&self, measurements: &[Measurement]) -> RadMapResult<ComplianceReport> {
        if measurements.is_empty() {
            return Err(RadMapError::InsufficientData(
                "no measurements to assess".to_string(),
            ));
        }

        let mut by_zone: [Vec<f64>; 4] = Default::default();
        for m in measurements {
            if !m.is_finite() {
                return Err(RadMapError::MalformedInput(format!(
                    "non-finite measurement ({}, {}, {})",
                    m.x, m.y, m.dose_rate
                )));
            }
            let zone = self.scheme.classify(m.dose_rate)?;
            by_zone[zone as usize].push(m.dose_rate);
        }

        let total = measurements.len();
        let zones: Vec<ZoneStatistics> = Zone::ALL
            .iter()
            .map(|&zone| {
                let doses = &by_zone[zone as usize];
                ZoneStatistics {
                    zone,
                    count: doses.len(),
                    percentage: 100.0 * doses.len() as f64 / total as f64,
                    dose: summarize(doses),
                }
            })
            .collect();

        let all: Vec<f64> = measurements.iter().map(|m| m.dose_rate).collect();
        let overall = summarize(&all)
            .ok_or_else(|| RadMapError::InsufficientData("no dose values".to_string()))?;

        let annual = AnnualProjection {
            occupancy_hours: self.occupancy_hours,
            max_annual_msv: annual_dose(overall.max, self.occupancy_hours),
            mean_annual_msv: annual_dose(overall.mean, self.occupancy_hours),
            limits: self.annual_limits,
        };

        let boundary = self.boundary_check(measurements);
        let actions = action_items(&zones);
        let remediation = self.remediation_plan(overall.max)?;

        info!(
            area = %self.area_name,
            points = total,
            max_dose = overall.max,
            restricted = zones[Zone::Restricted as usize].count,
            leakage = boundary.leakage,
            "compliance analysis complete"
        );

        Ok(ComplianceReport {
            area_name: self.area_name.clone(),
            standard: self.standard.clone(),
            survey_date: self.survey_date.clone(),
            total_points: total,
            zone_limits: self.scheme.limits(),
            zones,
            overall,
            annual,
            boundary,
            actions,
            remediation,
        })
    }

    fn boundary_check(&self, measurements: &[Measurement]) -> BoundaryCheck {
        let public_limit = self.scheme.public_limit();
        let mut edge_points = 0;
        let mut max_edge_dose = 0.0f64;
        if let Some(bounds) = Bounds::of(measurements) {
            for m in measurements {
                if bounds.near_edge(m.x, m.y, self.boundary_margin_m) {
                    edge_points += 1;
                    max_edge_dose = max_edge_dose.max(m.dose_rate);
                }
            }
        }
        BoundaryCheck {
            margin_m: self.boundary_margin_m,
            edge_points,
            max_edge_dose,
            public_limit,
            leakage: max_edge_dose > public_limit,
        }
    }

    fn remediation_plan(&self, hotspot_dose: f64) -> RadMapResult<Option<RemediationPlan>> {
        let Some(settings) = &self.remediation else {
            return Ok(None);
        };
        let target_dose = settings
            .target_dose
            .unwrap_or_else(|| self.scheme.public_limit());
        if hotspot_dose <= target_dose {
            return Ok(None);
        }

        let mut options = Vec::with_capacity(settings.materials.len());
        for &key in &settings.materials {
            let m = material(key)?;
            let thickness_cm =
                required_thickness(key, hotspot_dose, target_dose, settings.energy_mev)?;
            options.push(RemediationOption {
                material: m.key,
                display_name: m.display_name,
                thickness_cm,
                cost_per_m2: thickness_cm / 100.0 * m.cost_per_m3,
            });
        }
        Ok(Some(RemediationPlan {
            hotspot_dose,
            target_dose,
            energy_mev: settings.energy_mev,
            options,
        }))
    }
}

/// Ordered by severity; a single all-Public item when nothing else applies.
fn action_items(zones: &[ZoneStatistics]) -> Vec<ActionItem> {
    let mut items = Vec::new();
    let restricted = zones[Zone::Restricted as usize].count;
    if restricted > 0 {
        items.push(ActionItem {
            severity: Severity::Warning,
            zone: Zone::Restricted,
            points: restricted,
            message: format!("{restricted} restricted area points detected"),
            actions: vec![
                "Install physical barriers and access controls",
                "Post radiation warning signs",
                "Implement dosimetry requirements",
                "Establish work permits for entry",
            ],
        });
    }
    let controlled = zones[Zone::Controlled as usize].count;
    if controlled > 0 {
        items.push(ActionItem {
            severity: Severity::Caution,
            zone: Zone::Controlled,
            points: controlled,
            message: format!("{controlled} controlled area points detected"),
            actions: vec![
                "Designate as controlled area",
                "Implement access restrictions",
                "Provide dosimetry for workers",
            ],
        });
    }
    let supervised = zones[Zone::Supervised as usize].count;
    if supervised > 0 {
        items.push(ActionItem {
            severity: Severity::Info,
            zone: Zone::Supervised,
            points: supervised,
            message: format!("{supervised} supervised area points detected"),
            actions: vec![
                "Designate as supervised area",
                "Monitor access and occupancy",
            ],
        });
    }
    if items.is_empty() {
        items.push(ActionItem {
            severity: Severity::Ok,
            zone: Zone::Public,
            points: 0,
            message: "All areas classified as Public - no special controls required".to_string(),
            actions: Vec::new(),
        });
    }
    items
}

/// Analyze with the default engine for `scheme` at the given occupancy.
pub fn analyze(
    measurements: &[Measurement],
    scheme: &ZoneScheme,
    occupancy_hours: f64,
) -> RadMapResult<ComplianceReport> {
    ComplianceEngine::new(*scheme)
        .with_occupancy_hours(occupancy_hours)?
        .analyze(measurements)
}
