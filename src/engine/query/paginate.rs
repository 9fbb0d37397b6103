use serde::{Deserialize, Serialize};

use crate::engine::query::aggregate::Summary;
use crate::engine::query::normalize::CanonicalQuery;
use crate::engine::record::SaleRecord;

/// One page of results plus totals computed over the whole filtered set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub items: Vec<SaleRecord>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub summary: Summary,
}

impl ResultPage {
    /// Well-formed empty result: callers never need defensive shape checks
    /// when the dataset is unavailable.
    pub fn empty(query: &CanonicalQuery) -> Self {
        ResultPage {
            items: Vec::new(),
            page: query.page.max(1),
            page_size: query.page_size.max(1),
            total_items: 0,
            total_pages: 0,
            summary: Summary::default(),
        }
    }
}

/// Slice the requested window out of the sorted filtered sequence. An
/// out-of-range page yields an empty item list, never an error.
pub fn paginate(sorted: &[&SaleRecord], query: &CanonicalQuery, summary: Summary) -> ResultPage {
    let page = query.page.max(1);
    let size = query.page_size.max(1);

    let total_items = sorted.len();
    let total_pages = total_items.div_ceil(size);

    let start = (page - 1).saturating_mul(size);
    let items = if start >= total_items {
        Vec::new()
    } else {
        let end = (start + size).min(total_items);
        sorted[start..end].iter().map(|r| (*r).clone()).collect()
    };

    ResultPage {
        items,
        page,
        page_size: size,
        total_items,
        total_pages,
        summary,
    }
}
