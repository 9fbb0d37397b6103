pub mod context;
pub mod http;

use context::FrontendContext;
use std::sync::Arc;

use crate::engine::query::QueryEngine;

pub async fn start(engine: Arc<QueryEngine>) -> anyhow::Result<()> {
    let ctx = FrontendContext::new(engine);
    http::listener::run_http_server(ctx).await
}
