//! CLI entry point for procedural city grid generation

use citygrid::io::cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> citygrid::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run().map(|_| ())
}
