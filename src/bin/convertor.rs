use clap::Parser;
use salescan::engine::ingest::csv_convert;
use salescan::shared::config::CONFIG;
use std::path::PathBuf;
use tracing::info;

/// Convert the raw sales CSV export into the JSON dataset file served by the
/// query engine.
#[derive(Parser, Debug)]
#[command(name = "convertor")]
struct Args {
    /// CSV input; defaults to the configured dataset.csv_path.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// JSON output; defaults to the configured dataset.json_path.
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let csv = args
        .csv
        .unwrap_or_else(|| PathBuf::from(&CONFIG.dataset.csv_path));
    let json = args
        .json
        .unwrap_or_else(|| PathBuf::from(&CONFIG.dataset.json_path));

    let count = csv_convert::convert(&csv, &json)?;
    info!(count, "wrote {}", json.display());
    Ok(())
}
