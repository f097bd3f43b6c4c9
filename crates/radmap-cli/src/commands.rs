//! Subcommand implementations.

use std::fs::{self, File};
use std::io::BufWriter;

use anyhow::{Context, Result};
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};
use tracing::info;

use radmap_shielding::attenuation::{
    compare_materials_at_energy, half_value_layer, mu, mu_table, required_thickness,
    tenth_value_layer,
};
use radmap_shielding::materials::material;
use radmap_survey::compliance::ComplianceEngine;
use radmap_survey::export::{export_rows, write_grid_csv, write_measurements_csv};
use radmap_survey::input::{read_measurements_path, sanitize};
use radmap_survey::interpolator::SpatialInterpolator;
use radmap_survey::report::render_report;
use radmap_survey::scenarios::Scenario;
use radmap_survey::zones::{zone_coverage, ZoneScheme};
use radmap_types::config::{InterpolationMethod, SurveyConfig};

use crate::{AnalyzeArgs, MaterialsArgs, SampleArgs, ShieldArgs};

/// Material comparison row
#[derive(Tabled)]
struct MaterialRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Material")]
    name: String,
    #[tabled(rename = "ρ (g/cm³)")]
    density: String,
    #[tabled(rename = "µ (1/cm)")]
    mu: String,
    #[tabled(rename = "µ/ρ (cm²/g)")]
    mass_attenuation: String,
    #[tabled(rename = "HVL (cm)")]
    hvl: String,
    #[tabled(rename = "TVL (cm)")]
    tvl: String,
    #[tabled(rename = "H frac")]
    h_fraction: String,
    #[tabled(rename = "USD/m³")]
    cost: String,
}

/// Tabulated attenuation row
#[derive(Tabled)]
struct MuRow {
    #[tabled(rename = "E (MeV)")]
    energy: String,
    #[tabled(rename = "µ (1/cm)")]
    mu: String,
    #[tabled(rename = "µ/ρ (cm²/g)")]
    mass_attenuation: String,
}

fn load_config(args: &AnalyzeArgs) -> Result<SurveyConfig> {
    let mut cfg = match &args.config {
        Some(path) => SurveyConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SurveyConfig::default(),
    };
    if let Some(method) = &args.method {
        cfg.interpolation.method = method.parse::<InterpolationMethod>()?;
    }
    if let Some(resolution) = args.resolution {
        cfg.interpolation.resolution = resolution;
    }
    if let Some(buffer) = args.buffer {
        cfg.interpolation.buffer_m = buffer;
    }
    if let Some(hours) = args.occupancy {
        cfg.occupancy_hours = hours;
    }
    if let Some(area) = &args.area {
        cfg.area_name = area.clone();
    }
    cfg.validate().context("invalid survey configuration")?;
    Ok(cfg)
}

pub fn analyze(args: AnalyzeArgs) -> Result<()> {
    let cfg = load_config(&args)?;

    let raw = read_measurements_path(&args.input)
        .with_context(|| format!("reading measurements from {}", args.input.display()))?;
    let clean = sanitize(raw)?;
    info!(
        points = clean.measurements.len(),
        dropped = clean.dropped_non_finite + clean.dropped_duplicates,
        "loaded survey"
    );

    let scheme = ZoneScheme::try_from(cfg.zone_limits)?;
    let field = SpatialInterpolator::from_config(&cfg.interpolation)?
        .interpolate(&clean.measurements)
        .context("interpolating dose field")?;
    for c in zone_coverage(&field, &scheme)? {
        info!(
            zone = %c.zone,
            area_m2 = c.area_m2,
            fraction = c.fraction,
            "mapped coverage"
        );
    }

    let mut engine = ComplianceEngine::from_config(&cfg)?;
    if let Some(date) = &args.date {
        engine = engine.with_survey_date(date.clone());
    }
    let report = engine.analyze(&clean.measurements)?;
    let text = render_report(&report);
    println!("{text}");

    if let Some(path) = &args.report {
        fs::write(path, &text).with_context(|| format!("writing report {}", path.display()))?;
        println!("{} Report saved: {}", "[OK]".green().bold(), path.display());
    }
    if let Some(path) = &args.json {
        fs::write(path, report.to_json()?)
            .with_context(|| format!("writing JSON report {}", path.display()))?;
        println!("{} JSON report saved: {}", "[OK]".green().bold(), path.display());
    }
    if let Some(path) = &args.grid_out {
        let rows = export_rows(&field, &scheme)?;
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_grid_csv(&rows, BufWriter::new(file))?;
        println!(
            "{} Zone grid exported: {} ({} nodes)",
            "[OK]".green().bold(),
            path.display(),
            rows.len()
        );
    }

    if report.boundary.leakage {
        println!(
            "{} boundary dose {:.2} µSv/hr exceeds the Public limit",
            "[LEAKAGE]".red().bold(),
            report.boundary.max_edge_dose
        );
    }
    Ok(())
}

pub fn shield(args: ShieldArgs) -> Result<()> {
    let m = material(&args.material)?;
    let thickness = required_thickness(m.key, args.source, args.target, args.energy)?;
    let mu = mu(m.key, args.energy)?;
    let hvl = half_value_layer(m.key, args.energy)?;
    let tvl = tenth_value_layer(m.key, args.energy)?;

    println!("{}", format!("{} at {} MeV", m.display_name, args.energy).bold());
    println!("  µ:   {mu:.4} 1/cm");
    println!("  HVL: {hvl:.2} cm");
    println!("  TVL: {tvl:.2} cm");
    if thickness == 0.0 {
        println!(
            "{} {} µSv/hr is already at or below {} µSv/hr; no shielding required",
            "[OK]".green().bold(),
            args.source,
            args.target
        );
    } else {
        println!(
            "  Required thickness: {} ({:.2} m) for {} → {} µSv/hr",
            format!("{thickness:.2} cm").yellow().bold(),
            thickness / 100.0,
            args.source,
            args.target
        );
        println!(
            "  Approx. cost: USD {:.0} per m² of wall",
            thickness / 100.0 * m.cost_per_m3
        );
    }
    Ok(())
}

pub fn materials(args: MaterialsArgs) -> Result<()> {
    if let Some(key) = &args.table {
        let m = material(key)?;
        let rows: Vec<MuRow> = mu_table(key)?
            .into_iter()
            .map(|r| MuRow {
                energy: format!("{}", r.energy_mev),
                mu: format!("{:.4}", r.mu),
                mass_attenuation: format!("{:.5}", r.mass_attenuation),
            })
            .collect();
        println!("{} ({}, ρ = {} g/cm³)", m.display_name.bold(), m.role, m.density);
        println!("{}", Table::new(rows).with(Style::rounded()).to_string());
        return Ok(());
    }

    let rows: Vec<MaterialRow> = compare_materials_at_energy(args.energy, None)?
        .into_iter()
        .map(|s| MaterialRow {
            key: s.key.to_string(),
            name: s.display_name.to_string(),
            density: format!("{:.2}", s.density),
            mu: format!("{:.4}", s.mu),
            mass_attenuation: format!("{:.5}", s.mass_attenuation),
            hvl: format!("{:.2}", s.hvl),
            tvl: format!("{:.2}", s.tvl),
            h_fraction: format!("{:.3}", s.h_fraction),
            cost: format!("{:.0}", s.cost_per_m3),
        })
        .collect();
    println!("{}", format!("Photon attenuation at {} MeV", args.energy).bold());
    println!("{}", Table::new(rows).with(Style::rounded()).to_string());
    Ok(())
}

pub fn sample(args: SampleArgs) -> Result<()> {
    let scenario: Scenario = args.scenario.parse()?;
    let measurements = scenario.generate(args.seed)?;
    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_measurements_csv(&measurements, BufWriter::new(file))?;
    println!(
        "{} {} points ({}, seed {}) written to {}",
        "[OK]".green().bold(),
        measurements.len(),
        scenario,
        args.seed,
        args.output.display()
    );
    Ok(())
}
