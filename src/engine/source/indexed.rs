use async_trait::async_trait;

use crate::engine::errors::SourceError;
use crate::engine::query::aggregate::Summary;
use crate::engine::query::normalize::CanonicalQuery;
use crate::engine::query::options::FilterOptions;
use crate::engine::query::paginate::ResultPage;
use crate::engine::record::{Field, SaleRecord};
use crate::engine::source::SaleSource;

/// Primitives an external indexed store must offer: predicate-count,
/// sum-aggregation, sorted skip/limit fetch, and distinct values. Each call
/// must observe one consistent view of the canonical query's filtered set.
#[async_trait]
pub trait SaleIndex: Send + Sync {
    async fn count(&self, query: &CanonicalQuery) -> Result<usize, SourceError>;
    async fn summarize(&self, query: &CanonicalQuery) -> Result<Summary, SourceError>;
    async fn fetch_page(&self, query: &CanonicalQuery) -> Result<Vec<SaleRecord>, SourceError>;
    async fn distinct(&self, field: Field) -> Result<Vec<String>, SourceError>;
}

/// Adapter that translates the query contract into store primitives. The
/// sub-operations of one search run concurrently and are joined before
/// responding; if any of them fails the whole call fails, so a partial or
/// stale result is never returned.
pub struct IndexedSource<I> {
    index: I,
}

impl<I: SaleIndex> IndexedSource<I> {
    pub fn new(index: I) -> Self {
        Self { index }
    }
}

#[async_trait]
impl<I: SaleIndex> SaleSource for IndexedSource<I> {
    async fn search(&self, query: &CanonicalQuery) -> Result<ResultPage, SourceError> {
        let (total_items, summary, items) = tokio::try_join!(
            self.index.count(query),
            self.index.summarize(query),
            self.index.fetch_page(query),
        )?;

        let page = query.page.max(1);
        let size = query.page_size.max(1);
        Ok(ResultPage {
            items,
            page,
            page_size: size,
            total_items,
            total_pages: total_items.div_ceil(size),
            summary,
        })
    }

    async fn filter_options(&self) -> Result<FilterOptions, SourceError> {
        let (regions, genders, categories, tags, payment_methods) = tokio::try_join!(
            self.index.distinct(Field::CustomerRegion),
            self.index.distinct(Field::Gender),
            self.index.distinct(Field::ProductCategory),
            self.index.distinct(Field::Tags),
            self.index.distinct(Field::PaymentMethod),
        )?;

        Ok(FilterOptions {
            regions,
            genders,
            categories,
            tags,
            payment_methods,
        })
    }
}
