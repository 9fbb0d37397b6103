use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

use crate::engine::errors::IngestError;
use crate::engine::record::SaleRecord;

/// Load the pre-converted JSON dataset into memory. This runs once at
/// startup, before the first query is served; the snapshot is immutable
/// afterwards.
pub fn load_records(path: &Path) -> Result<Vec<SaleRecord>, IngestError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let records: Vec<SaleRecord> = serde_json::from_reader(reader)?;

    info!(
        target: "salescan::ingest",
        count = records.len(),
        path = %path.display(),
        "loaded sales dataset"
    );
    Ok(records)
}
