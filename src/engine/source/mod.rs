pub mod indexed;
pub mod memory;


use async_trait::async_trait;

use crate::engine::errors::SourceError;
use crate::engine::query::normalize::CanonicalQuery;
use crate::engine::query::options::FilterOptions;
use crate::engine::query::paginate::ResultPage;

pub use indexed::{IndexedSource, SaleIndex};
pub use memory::MemorySource;

/// Backing strategy for the query contract. Both the in-memory scan engine
/// and the indexed-store adapter implement this; query semantics must not
/// depend on which one is plugged in.
#[async_trait]
pub trait SaleSource: Send + Sync {
    async fn search(&self, query: &CanonicalQuery) -> Result<ResultPage, SourceError>;
    async fn filter_options(&self) -> Result<FilterOptions, SourceError>;
}
