use async_trait::async_trait;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

use crate::engine::errors::SourceError;
use crate::engine::query::normalize::CanonicalQuery;
use crate::engine::query::options::{self, FilterOptions};
use crate::engine::query::paginate::{self, ResultPage};
use crate::engine::query::{aggregate, predicate, sort};
use crate::engine::record::SaleRecord;
use crate::engine::source::SaleSource;

/// Scan engine over an immutable in-process snapshot. Every query filters,
/// sorts and slices the full sequence; cost is O(dataset) per call and
/// unbounded by page size.
pub struct MemorySource {
    records: Arc<[SaleRecord]>,
}

impl MemorySource {
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl SaleSource for MemorySource {
    async fn search(&self, query: &CanonicalQuery) -> Result<ResultPage, SourceError> {
        // The predicate is pure, so the scan parallelizes; collect preserves
        // dataset order, which the stable sort then relies on.
        let mut filtered: Vec<&SaleRecord> = self
            .records
            .par_iter()
            .filter(|r| predicate::matches(r, query))
            .collect();

        sort::sort_records(&mut filtered, query.sort_by, query.sort_order);

        // Aggregation and pagination observe the identical filtered set.
        let summary = aggregate::summarize(filtered.iter().copied());
        let page = paginate::paginate(&filtered, query, summary);

        debug!(
            target: "salescan::source",
            matched = page.total_items,
            returned = page.items.len(),
            "memory scan complete"
        );
        Ok(page)
    }

    async fn filter_options(&self) -> Result<FilterOptions, SourceError> {
        Ok(options::resolve(&self.records))
    }
}
