//! RadMap CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use radmap_cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => commands::analyze(args)?,
        Commands::Shield(args) => commands::shield(args)?,
        Commands::Materials(args) => commands::materials(args)?,
        Commands::Sample(args) => commands::sample(args)?,
    }

    Ok(())
}
