use chrono::NaiveDate;
use serde_json::Value;
use std::collections::BTreeSet;

use crate::engine::query::raw::RawQuery;
use crate::engine::query::sort::{SortKey, SortOrder};
use crate::shared::time::TimeParser;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Fully-typed filter/sort/page request. Built fresh per request, never
/// persisted. An empty set or `None` on a dimension means "no filter".
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalQuery {
    pub search: Option<String>,
    pub regions: BTreeSet<String>,
    pub genders: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub payment_methods: BTreeSet<String>,
    pub age_min: Option<f64>,
    pub age_max: Option<f64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub page: usize,
    pub page_size: usize,
}

impl Default for CanonicalQuery {
    fn default() -> Self {
        normalize(&RawQuery::default())
    }
}

/// Turn raw input into a canonical query. Unparsable values never error:
/// they fall back to the documented default for the parameter.
pub fn normalize(raw: &RawQuery) -> CanonicalQuery {
    let sort_by = scalar_text(raw.sort_by.as_ref())
        .and_then(|s| SortKey::parse(&s))
        .unwrap_or(SortKey::Date);
    // Most-recent-first is the natural default on the date axis; everything
    // else defaults to ascending unless the caller overrides it.
    let sort_order = scalar_text(raw.sort_order.as_ref())
        .and_then(|s| SortOrder::parse(&s))
        .unwrap_or_else(|| SortOrder::default_for(sort_by));

    CanonicalQuery {
        search: trimmed_text(raw.search.as_ref()),
        regions: string_set(raw.region.as_ref()),
        genders: string_set(raw.gender.as_ref()),
        categories: string_set(raw.category.as_ref()),
        tags: string_set(raw.tags.as_ref()),
        payment_methods: string_set(raw.payment_method.as_ref()),
        age_min: number(raw.age_min.as_ref()),
        age_max: number(raw.age_max.as_ref()),
        date_from: date(raw.date_from.as_ref()),
        date_to: date(raw.date_to.as_ref()),
        sort_by,
        sort_order,
        page: positive_int(raw.page.as_ref(), DEFAULT_PAGE),
        page_size: positive_int(raw.page_size.as_ref(), DEFAULT_PAGE_SIZE),
    }
}

fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn trimmed_text(value: Option<&Value>) -> Option<String> {
    let s = scalar_text(value)?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Coerce scalar / list / comma-joined input into a set of trimmed non-empty
/// strings. Absent or empty input yields the empty set.
fn string_set(value: Option<&Value>) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    match value {
        None | Some(Value::Null) => {}
        Some(Value::Array(items)) => {
            for item in items {
                if let Some(s) = scalar_text(Some(item)) {
                    insert_atoms(&mut out, &s);
                }
            }
        }
        Some(other) => {
            if let Some(s) = scalar_text(Some(other)) {
                insert_atoms(&mut out, &s);
            }
        }
    }
    out
}

fn insert_atoms(out: &mut BTreeSet<String>, joined: &str) {
    for part in joined.split(',') {
        let trimmed = part.trim();
        if !trimmed.is_empty() {
            out.insert(trimmed.to_string());
        }
    }
}

fn number(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

fn date(value: Option<&Value>) -> Option<NaiveDate> {
    TimeParser::parse_date(&scalar_text(value)?)
}

fn positive_int(value: Option<&Value>, default: usize) -> usize {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64().map(|f| f as i64),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        None | Some(0) => default,
        Some(n) if n < 0 => 1,
        Some(n) => n as usize,
    }
}
