use serde::{Deserialize, Serialize};

use crate::engine::record::SaleRecord;

/// Running totals over the full filtered set, not the returned page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub units_sold: f64,
    pub gross_amount: f64,
    pub discount_amount: f64,
}

/// Single linear reduction. Missing numeric fields count as 0.
pub fn summarize<'a>(records: impl IntoIterator<Item = &'a SaleRecord>) -> Summary {
    records.into_iter().fold(Summary::default(), |mut acc, r| {
        acc.units_sold += r.quantity.unwrap_or(0.0);
        acc.gross_amount += r.total_amount.unwrap_or(0.0);
        acc.discount_amount += r.discount();
        acc
    })
}
