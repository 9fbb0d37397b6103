use std::sync::Arc;

use crate::engine::query::QueryEngine;

/// Shared state handed to every connection handler.
pub struct FrontendContext {
    pub engine: Arc<QueryEngine>,
}

impl FrontendContext {
    pub fn new(engine: Arc<QueryEngine>) -> Arc<Self> {
        Arc::new(Self { engine })
    }
}
