// crates/dvf/src/main.rs

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Enrich DVF property transactions with the number of schools per postal code.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the property transactions dataset (comma separated, headered)
    #[arg(short, long)]
    full: PathBuf,

    /// Path to the school locations dataset (semicolon separated, headered)
    #[arg(short, long)]
    school: PathBuf,

    /// Destination path for the parquet output
    #[arg(short, long)]
    output: PathBuf,

    /// Replace the output file if it already exists
    #[arg(long)]
    overwrite: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let summary = dvf_core::pipeline::run(&cli.full, &cli.school, &cli.output, cli.overwrite)?;
    info!("pipeline finished");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
