use thiserror::Error;

/// Errors surfaced by a sale data source.
///
/// `Unavailable` never reaches callers of the query engine: it is resolved to
/// a well-formed empty result. `Store` propagates untouched so the caller can
/// decide on retry policy.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("dataset not loaded")]
    Unavailable,

    #[error("store request failed: {0}")]
    Store(String),
}

/// Errors raised while materializing the dataset, before any query is served.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV input has no header row")]
    MissingHeader,
}
