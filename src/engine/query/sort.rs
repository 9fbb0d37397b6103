use std::cmp::Ordering;

use crate::engine::record::SaleRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Quantity,
    CustomerName,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<SortKey> {
        match s.trim() {
            "date" => Some(SortKey::Date),
            "quantity" => Some(SortKey::Quantity),
            "customerName" => Some(SortKey::CustomerName),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Quantity => "quantity",
            SortKey::CustomerName => "customerName",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Option<SortOrder> {
        match s.trim() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn default_for(key: SortKey) -> SortOrder {
        match key {
            SortKey::Date => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

/// Total order over two records for the given key and direction.
///
/// Records whose date fails to parse sort after all valid dates under both
/// directions; direction reversal applies only between two valid dates.
/// Missing quantity compares as 0. Name comparison is case-insensitive.
pub fn compare(a: &SaleRecord, b: &SaleRecord, key: SortKey, order: SortOrder) -> Ordering {
    match key {
        SortKey::Date => match (a.parsed_date(), b.parsed_date()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => order.apply(x.cmp(&y)),
        },
        SortKey::Quantity => order.apply(
            a.quantity
                .unwrap_or(0.0)
                .total_cmp(&b.quantity.unwrap_or(0.0)),
        ),
        SortKey::CustomerName => order.apply(
            a.customer_name
                .to_lowercase()
                .cmp(&b.customer_name.to_lowercase()),
        ),
    }
}

/// Stable sort: records with equal keys keep their original relative order.
pub fn sort_records(records: &mut [&SaleRecord], key: SortKey, order: SortOrder) {
    records.sort_by(|a, b| compare(a, b, key, order));
}
