use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Untrusted query input, exactly as the caller sent it.
///
/// Every field is an optional raw JSON value: multi-select dimensions may
/// arrive as a single scalar, a list, or a comma-joined string, and numeric
/// parameters may arrive as numbers or strings. Nothing here is validated;
/// `normalize` turns this into a `CanonicalQuery` and is the only place that
/// decides what counts as "no filter".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawQuery {
    pub search: Option<Value>,
    pub region: Option<Value>,
    pub gender: Option<Value>,
    pub category: Option<Value>,
    pub tags: Option<Value>,
    pub payment_method: Option<Value>,
    pub age_min: Option<Value>,
    pub age_max: Option<Value>,
    pub date_from: Option<Value>,
    pub date_to: Option<Value>,
    pub sort_by: Option<Value>,
    pub sort_order: Option<Value>,
    pub page: Option<Value>,
    pub page_size: Option<Value>,
}
