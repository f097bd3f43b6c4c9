//! RadMap CLI
//!
//! Radiation survey zoning, compliance reporting and shielding design from
//! the command line.
//!
//! # Usage
//!
//! ```bash
//! # Classify a survey and write the report, JSON and zoned grid
//! radmap analyze --input survey.csv --config configs/cern_default.json \
//!     --report report.txt --json report.json --grid-out zones.csv
//!
//! # Wall thickness to bring a 50 µSv/hr hotspot down to the Public limit
//! radmap shield --material lead --source 50 --target 0.5 --energy 1.0
//!
//! # Material comparison at 0.662 MeV (Cs-137)
//! radmap materials --energy 0.662
//!
//! # Synthetic survey
//! radmap sample --scenario beamline_hotspot --output sample.csv
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod commands;

/// RadMap command line interface
#[derive(Parser, Debug)]
#[command(name = "radmap")]
#[command(author, version, about = "Radiation zone mapping and shielding design")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interpolate a survey, classify zones and assess compliance
    Analyze(AnalyzeArgs),

    /// Shielding thickness for one material
    Shield(ShieldArgs),

    /// Compare catalog materials at one photon energy
    Materials(MaterialsArgs),

    /// Generate a synthetic survey
    Sample(SampleArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Measurement CSV with x, y, dose_rate columns
    #[arg(short, long)]
    pub input: PathBuf,

    /// JSON survey configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interpolation method: linear, cubic, nearest, idw
    #[arg(short, long)]
    pub method: Option<String>,

    /// Grid nodes per axis
    #[arg(short, long)]
    pub resolution: Option<usize>,

    /// Margin around the survey bounding box (m)
    #[arg(short, long)]
    pub buffer: Option<f64>,

    /// Annual occupancy (hours/year)
    #[arg(short, long)]
    pub occupancy: Option<f64>,

    /// Area name printed in the report header
    #[arg(long)]
    pub area: Option<String>,

    /// Survey date printed in the report header
    #[arg(long)]
    pub date: Option<String>,

    /// Write the text report here
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Write the JSON report here
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the classified grid (x, y, dose_rate, zone) here
    #[arg(long)]
    pub grid_out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ShieldArgs {
    /// Material key (see `radmap materials`)
    #[arg(short, long)]
    pub material: String,

    /// Unshielded dose rate (µSv/hr)
    #[arg(short, long)]
    pub source: f64,

    /// Design dose rate behind the wall (µSv/hr)
    #[arg(short, long)]
    pub target: f64,

    /// Photon energy (MeV)
    #[arg(short, long, default_value = "1.0")]
    pub energy: f64,
}

#[derive(Args, Debug)]
pub struct MaterialsArgs {
    /// Photon energy (MeV)
    #[arg(short, long, default_value = "1.0")]
    pub energy: f64,

    /// Print the tabulated attenuation data of one material instead
    #[arg(short, long)]
    pub table: Option<String>,
}

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// beamline_hotspot, uniform_low, scattered_sources or shielding_test
    #[arg(short = 'c', long, default_value = "beamline_hotspot")]
    pub scenario: String,

    /// Random seed
    #[arg(short, long, default_value = "42")]
    pub seed: u64,

    /// Output CSV
    #[arg(short, long)]
    pub output: PathBuf,
}
