//! End-to-end survey pipeline: CSV in, report and grid CSV out.

use radmap_survey::compliance::{ComplianceEngine, Severity};
use radmap_survey::export::{export_rows, write_grid_csv};
use radmap_survey::input::{read_measurements_csv, sanitize};
use radmap_survey::interpolator::SpatialInterpolator;
use radmap_survey::report::render_report;
use radmap_survey::scenarios::{Scenario, DEFAULT_SEED};
use radmap_survey::zones::{zone_coverage, Zone, ZoneScheme};
use radmap_types::config::{InterpolationMethod, SurveyConfig};

#[test]
fn three_point_survey() {
    let csv = "x,y,dose_rate\n0,0,0.3\n10,0,5.0\n0,10,30.0\n";
    let raw = read_measurements_csv(csv.as_bytes()).unwrap();
    let clean = sanitize(raw).unwrap().measurements;

    let field = SpatialInterpolator::new(InterpolationMethod::Linear, 50, 5.0)
        .unwrap()
        .interpolate(&clean)
        .unwrap();
    assert!(field.dose.iter().all(|v| v.is_finite()));

    let report = ComplianceEngine::new(ZoneScheme::cern()).analyze(&clean).unwrap();
    let counts: Vec<(Zone, usize)> = report.zones.iter().map(|z| (z.zone, z.count)).collect();
    assert_eq!(
        counts,
        vec![
            (Zone::Public, 1),
            (Zone::Supervised, 1),
            (Zone::Controlled, 0),
            (Zone::Restricted, 1)
        ]
    );
    for z in [Zone::Public, Zone::Supervised, Zone::Restricted] {
        assert!((report.zone(z).percentage - 33.333_333).abs() < 1e-4);
    }

    let text = render_report(&report);
    assert!(text.contains("Total Measurement Points: 3"));
    assert!(text.contains("Supervised Area:\n  Measurement Points: 1 (33.3%)"));
}

#[test]
fn beamline_scenario_with_default_config() {
    let cfg = SurveyConfig::default();
    let pts = Scenario::BeamlineHotspot.generate(DEFAULT_SEED).unwrap();
    let clean = sanitize(pts).unwrap();
    assert_eq!(clean.dropped_duplicates, 0);

    let mut interp = cfg.interpolation.clone();
    interp.resolution = 60;
    let field = SpatialInterpolator::from_config(&interp)
        .unwrap()
        .interpolate(&clean.measurements)
        .unwrap();
    let scheme = ZoneScheme::try_from(cfg.zone_limits).unwrap();

    let coverage = zone_coverage(&field, &scheme).unwrap();
    let cells: usize = coverage.iter().map(|c| c.cells).sum();
    assert_eq!(cells, 60 * 60);
    assert!(coverage[Zone::Restricted as usize].cells > 0);

    let report = ComplianceEngine::from_config(&cfg)
        .unwrap()
        .analyze(&clean.measurements)
        .unwrap();
    assert_eq!(report.actions[0].severity, Severity::Warning);
    let plan = report.remediation.as_ref().unwrap();
    let lead = plan.options.iter().find(|o| o.material == "lead").unwrap();
    let concrete = plan.options.iter().find(|o| o.material == "concrete").unwrap();
    assert!(lead.thickness_cm < concrete.thickness_cm);

    let rows = export_rows(&field, &scheme).unwrap();
    let mut buf = Vec::new();
    write_grid_csv(&rows, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 60 * 60 + 1);
}

#[test]
fn uniform_low_is_all_public() {
    let pts = Scenario::UniformLow.generate(DEFAULT_SEED).unwrap();
    let report = ComplianceEngine::new(ZoneScheme::cern())
        .analyze(&pts)
        .unwrap();
    // Clipped to [0.1, 0.5]; a point exactly at 0.5 would be Supervised.
    let supervised = report.zone(Zone::Supervised).count;
    assert_eq!(report.zone(Zone::Public).count + supervised, 40);
    assert_eq!(report.zone(Zone::Restricted).count, 0);
    assert_eq!(report.zone(Zone::Controlled).count, 0);
}
