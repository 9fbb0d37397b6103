use std::collections::BTreeSet;

use crate::engine::query::normalize::CanonicalQuery;
use crate::engine::record::SaleRecord;

/// Decide whether one record is included by the query: AND across dimensions,
/// OR within a dimension's set. Pure function, safe to run in parallel over
/// the whole dataset.
pub fn matches(record: &SaleRecord, query: &CanonicalQuery) -> bool {
    matches_search(record, query)
        && member_of(&query.regions, &record.customer_region)
        && member_of(&query.genders, &record.gender)
        && member_of(&query.categories, &record.product_category)
        && member_of(&query.payment_methods, &record.payment_method)
        && matches_tags(record, query)
        && matches_age(record, query)
        && matches_date(record, query)
}

/// Case-insensitive substring match against customer name or phone number.
fn matches_search(record: &SaleRecord, query: &CanonicalQuery) -> bool {
    let Some(term) = query.search.as_deref() else {
        return true;
    };
    let term = term.to_lowercase();
    record.customer_name.to_lowercase().contains(&term)
        || record.phone_number.to_lowercase().contains(&term)
}

/// Empty set imposes no constraint; otherwise exact, case-sensitive match.
fn member_of(set: &BTreeSet<String>, value: &str) -> bool {
    set.is_empty() || set.contains(value)
}

/// At least one of the record's tags must be selected.
fn matches_tags(record: &SaleRecord, query: &CanonicalQuery) -> bool {
    query.tags.is_empty() || record.tags.iter().any(|t| query.tags.contains(t))
}

/// A record without a usable age fails any active age bound.
fn matches_age(record: &SaleRecord, query: &CanonicalQuery) -> bool {
    if query.age_min.is_none() && query.age_max.is_none() {
        return true;
    }
    let Some(age) = record.age else {
        return false;
    };
    if let Some(min) = query.age_min {
        if age < min {
            return false;
        }
    }
    if let Some(max) = query.age_max {
        if age > max {
            return false;
        }
    }
    true
}

/// Bounds are inclusive calendar days: `date_from` at start of day through
/// `date_to` at end of day. A record whose date does not parse fails any
/// active date bound.
fn matches_date(record: &SaleRecord, query: &CanonicalQuery) -> bool {
    if query.date_from.is_none() && query.date_to.is_none() {
        return true;
    }
    let Some(date) = record.parsed_date() else {
        return false;
    };
    let day = date.date();
    if let Some(from) = query.date_from {
        if day < from {
            return false;
        }
    }
    if let Some(to) = query.date_to {
        if day > to {
            return false;
        }
    }
    true
}
