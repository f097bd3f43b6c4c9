//! CSV export of classified grids and measurement tables.

use std::io::Write;

use radmap_types::error::RadMapResult;
use radmap_types::state::Measurement;
use serde::Serialize;

use crate::input::csv_error;
use crate::interpolator::DoseField;
use crate::zones::{Zone, ZoneScheme};

/// One grid node of the exported map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridExportRow {
    pub x: f64,
    pub y: f64,
    pub dose_rate: f64,
    pub zone: Zone,
}

/// Flatten `field` row by row (Y outer, X inner) and classify every node.
pub fn export_rows(field: &DoseField, scheme: &ZoneScheme) -> RadMapResult<Vec<GridExportRow>> {
    let g = &field.grid;
    let mut rows = Vec::with_capacity(g.len());
    for iy in 0..g.ny {
        for ix in 0..g.nx {
            let dose_rate = field.dose[[iy, ix]];
            rows.push(GridExportRow {
                x: g.x[ix],
                y: g.y[iy],
                dose_rate,
                zone: scheme.classify(dose_rate)?,
            });
        }
    }
    Ok(rows)
}

/// Write rows as `x,y,dose_rate,zone`.
pub fn write_grid_csv<W: Write>(rows: &[GridExportRow], writer: W) -> RadMapResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row).map_err(csv_error)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write measurements as `x,y,dose_rate`.
pub fn write_measurements_csv<W: Write>(measurements: &[Measurement], writer: W) -> RadMapResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for m in measurements {
        wtr.serialize(m).map_err(csv_error)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::read_measurements_csv;
    use crate::interpolator::interpolate;
    use radmap_types::config::InterpolationMethod;

    #[test]
    fn test_grid_csv_layout() {
        let pts = vec![
            Measurement::new(0.0, 0.0, 0.3),
            Measurement::new(10.0, 0.0, 5.0),
            Measurement::new(0.0, 10.0, 30.0),
        ];
        let field = interpolate(&pts, InterpolationMethod::Nearest, 3, 0.0).unwrap();
        let rows = export_rows(&field, &ZoneScheme::cern()).unwrap();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].zone, Zone::Public);
        assert_eq!((rows[2].x, rows[2].y), (10.0, 0.0));
        assert_eq!(rows[6].zone, Zone::Restricted);

        let mut buf = Vec::new();
        write_grid_csv(&rows, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("x,y,dose_rate,zone"));
        assert_eq!(lines.next(), Some("0.0,0.0,0.3,Public"));
        assert_eq!(text.lines().count(), 10);
    }

    #[test]
    fn test_measurements_csv_reads_back() {
        let pts = vec![Measurement::new(1.5, -2.0, 0.25), Measurement::new(3.0, 4.0, 12.0)];
        let mut buf = Vec::new();
        write_measurements_csv(&pts, &mut buf).unwrap();
        assert!(String::from_utf8_lossy(&buf).starts_with("x,y,dose_rate\n"));
        assert_eq!(read_measurements_csv(buf.as_slice()).unwrap(), pts);
    }
}
