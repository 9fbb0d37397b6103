use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::engine::record::SaleRecord;

/// Distinct values of each categorical dimension, for filter UIs. Always
/// computed over the unfiltered dataset so every selectable value stays
/// visible regardless of the current filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub payment_methods: Vec<String>,
}

/// Deduplicated, ascending, empty values skipped. An empty dataset yields
/// five empty lists.
pub fn resolve(records: &[SaleRecord]) -> FilterOptions {
    FilterOptions {
        regions: distinct(records, |r| Some(r.customer_region.as_str())),
        genders: distinct(records, |r| Some(r.gender.as_str())),
        categories: distinct(records, |r| Some(r.product_category.as_str())),
        tags: distinct_tags(records),
        payment_methods: distinct(records, |r| Some(r.payment_method.as_str())),
    }
}

fn distinct<'a, F>(records: &'a [SaleRecord], value: F) -> Vec<String>
where
    F: Fn(&'a SaleRecord) -> Option<&'a str>,
{
    records
        .iter()
        .filter_map(value)
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn distinct_tags(records: &[SaleRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.tags.iter())
        .filter(|t| !t.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
