//! purge-calc - CLI tool to preview filament purge volumes.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use purge_calc_rs::PurgeMatrix;

/// Default color set, matching the usual five-slot MMU preview.
const DEFAULT_COLORS: [&str; 5] = ["#FF8000", "#DB5182", "#3EC0FF", "#FF4F4F", "#FBEB7D"];

/// Preview purge volumes for every ordered pair of a filament color set.
#[derive(Parser, Debug)]
#[command(name = "purge-calc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Filament colors as hex tokens (repeatable); defaults to five
    /// sample colors
    #[arg(short, long = "color")]
    colors: Vec<String>,

    /// Purge volume multiplier
    #[arg(short, long, default_value = "1.0")]
    multiplier: f64,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output the matrix as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let colors: Vec<String> = if args.colors.is_empty() {
        DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()
    } else {
        args.colors
    };

    info!(
        "Computing purge matrix for {} color(s), multiplier {}",
        colors.len(),
        args.multiplier
    );

    let matrix = PurgeMatrix::compute(&colors, args.multiplier)
        .context("Failed to compute purge matrix")?;

    let rendered = if args.json {
        let mut json = serde_json::to_string_pretty(&matrix)?;
        json.push('\n');
        json
    } else {
        matrix.render_table()
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote: {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
