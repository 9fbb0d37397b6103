use salescan::engine::ingest::load_records;
use salescan::engine::query::QueryEngine;
use salescan::engine::source::MemorySource;
use salescan::frontend;
use salescan::logging;
use salescan::shared::config::CONFIG;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;
    info!("Starting salescan");

    // Load-then-serve: the snapshot is complete before the listener starts,
    // so queries never race ingestion.
    let records = match load_records(Path::new(&CONFIG.dataset.json_path)) {
        Ok(records) => records,
        Err(e) => {
            warn!("dataset not loaded ({e}), serving an empty snapshot");
            Vec::new()
        }
    };

    let source = Arc::new(MemorySource::new(records));
    let engine = Arc::new(QueryEngine::new(source));
    frontend::start(engine).await
}
