//! Plain-text compliance report.
//!
//! Output is a pure function of the [`ComplianceReport`]; no clock is read.

use std::fmt;

use crate::compliance::{ComplianceReport, Severity};

const RULE_WIDTH: usize = 70;

/// Render `report` as the fixed-layout text narrative.
pub fn render_report(report: &ComplianceReport) -> String {
    TextReport(report).to_string()
}

struct TextReport<'a>(&'a ComplianceReport);

fn heavy(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))
}

fn verdict(exceeded: bool) -> &'static str {
    if exceeded {
        "EXCEEDED"
    } else {
        "OK"
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;

        heavy(f)?;
        writeln!(f, "RADIATION ZONE CLASSIFICATION REPORT")?;
        heavy(f)?;
        writeln!(f)?;
        writeln!(f, "Area: {}", r.area_name)?;
        if let Some(date) = &r.survey_date {
            writeln!(f, "Survey Date: {date}")?;
        }
        writeln!(f, "Standard: {} Safety Code", r.standard)?;
        writeln!(f, "Total Measurement Points: {}", r.total_points)?;

        section(f, "ZONE STATISTICS")?;
        for z in &r.zones {
            writeln!(f)?;
            writeln!(f, "{} Area:", z.zone)?;
            writeln!(f, "  Measurement Points: {} ({:.1}%)", z.count, z.percentage)?;
            if let Some(s) = &z.dose {
                writeln!(f, "  Dose Rate Range: {:.2} - {:.2} µSv/hr", s.min, s.max)?;
                writeln!(f, "  Mean Dose Rate: {:.2} µSv/hr", s.mean)?;
            }
        }

        section(f, "OVERALL STATISTICS")?;
        let o = &r.overall;
        writeln!(f, "Maximum Dose Rate: {:.2} µSv/hr", o.max)?;
        writeln!(f, "Minimum Dose Rate: {:.2} µSv/hr", o.min)?;
        writeln!(f, "Mean Dose Rate: {:.2} µSv/hr", o.mean)?;
        writeln!(f, "Median Dose Rate: {:.2} µSv/hr", o.median)?;
        writeln!(f, "Standard Deviation: {:.2} µSv/hr", o.std_dev)?;

        section(f, "ANNUAL DOSE PROJECTIONS")?;
        let a = &r.annual;
        writeln!(f, "Occupancy Assumption: {} hours/year", a.occupancy_hours)?;
        writeln!(f)?;
        writeln!(f, "Maximum Annual Dose: {:.2} mSv/year", a.max_annual_msv)?;
        writeln!(
            f,
            "  Worker Limit ({} mSv/year): {}",
            a.limits.worker,
            verdict(a.max_exceeds_worker_limit())
        )?;
        writeln!(f)?;
        writeln!(f, "Mean Annual Dose: {:.2} mSv/year", a.mean_annual_msv)?;
        writeln!(
            f,
            "  Worker Limit ({} mSv/year): {}",
            a.limits.worker,
            verdict(a.mean_exceeds_worker_limit())
        )?;

        section(f, "COMPLIANCE ASSESSMENT")?;
        for item in &r.actions {
            writeln!(f)?;
            match item.severity {
                Severity::Warning | Severity::Caution => {
                    writeln!(f, "⚠ {}: {}", item.severity.label(), item.message)?
                }
                Severity::Info => writeln!(f, "ℹ {}: {}", item.severity.label(), item.message)?,
                Severity::Ok => writeln!(f, "✓ {}", item.message)?,
            }
            if !item.actions.is_empty() {
                writeln!(f, "  Action Required:")?;
                for action in &item.actions {
                    writeln!(f, "  - {action}")?;
                }
            }
        }

        let b = &r.boundary;
        writeln!(f)?;
        writeln!(
            f,
            "Boundary Containment ({} m edge strip, {} points):",
            b.margin_m, b.edge_points
        )?;
        if b.leakage {
            writeln!(
                f,
                "  ⚠ LEAKAGE DETECTED: max boundary dose {:.2} µSv/hr exceeds Public limit ({} µSv/hr)",
                b.max_edge_dose, b.public_limit
            )?;
        } else {
            writeln!(
                f,
                "  ✓ CONTAINMENT SECURE: boundary levels within Public limit ({} µSv/hr)",
                b.public_limit
            )?;
        }

        if let Some(plan) = &r.remediation {
            writeln!(f)?;
            writeln!(
                f,
                "Shielding Remediation (hotspot {:.2} -> {:.2} µSv/hr at {:.2} MeV):",
                plan.hotspot_dose, plan.target_dose, plan.energy_mev
            )?;
            for o in &plan.options {
                writeln!(
                    f,
                    "  - {}: {:.2} cm (approx. USD {:.0}/m²)",
                    o.display_name, o.thickness_cm, o.cost_per_m2
                )?;
            }
            writeln!(f, "  Narrow-beam attenuation, no build-up factor or safety margin.")?;
        }

        writeln!(f)?;
        heavy(f)?;
        writeln!(f, "END OF REPORT")?;
        heavy(f)
    }
}
