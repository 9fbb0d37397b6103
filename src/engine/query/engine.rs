use std::sync::Arc;
use tracing::{debug, warn};

use crate::engine::errors::SourceError;
use crate::engine::query::normalize::normalize;
use crate::engine::query::options::FilterOptions;
use crate::engine::query::paginate::ResultPage;
use crate::engine::query::raw::RawQuery;
use crate::engine::source::SaleSource;

/// Entry point for all queries. Owns an injected data-source handle rather
/// than any global dataset state; any number of calls may run concurrently
/// against the same snapshot.
pub struct QueryEngine {
    source: Arc<dyn SaleSource>,
}

impl QueryEngine {
    pub fn new(source: Arc<dyn SaleSource>) -> Self {
        Self { source }
    }

    /// Normalize raw input once and execute against the source. An
    /// unavailable dataset resolves to a well-formed empty page; store
    /// failures propagate so the caller can decide on retry.
    pub async fn search(&self, raw: &RawQuery) -> Result<ResultPage, SourceError> {
        let query = normalize(raw);
        debug!(target: "salescan::query", ?query, "executing search");

        match self.source.search(&query).await {
            Ok(page) => Ok(page),
            Err(SourceError::Unavailable) => {
                warn!(target: "salescan::query", "dataset unavailable, returning empty result");
                Ok(ResultPage::empty(&query))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn filter_options(&self) -> Result<FilterOptions, SourceError> {
        match self.source.filter_options().await {
            Ok(options) => Ok(options),
            Err(SourceError::Unavailable) => {
                warn!(target: "salescan::query", "dataset unavailable, returning empty options");
                Ok(FilterOptions::default())
            }
            Err(e) => Err(e),
        }
    }
}
