use crate::engine::query::RawQuery;
use serde_json::{Map, Value};

/// Builds raw query input the way a caller would send it: arbitrary JSON
/// values under the external camelCase parameter names.
pub struct RawQueryFactory {
    params: Map<String, Value>,
}

impl RawQueryFactory {
    pub fn new() -> Self {
        Self { params: Map::new() }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn create(self) -> RawQuery {
        serde_json::from_value(Value::Object(self.params)).expect("valid raw query shape")
    }
}
