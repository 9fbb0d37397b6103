use http_body_util::BodyExt;
use hyper::{Request, Response, StatusCode, body::Incoming};
use serde::Serialize;
use serde_json::json;
use std::{convert::Infallible, sync::Arc};
use tracing::error;

use crate::engine::query::RawQuery;
use crate::frontend::context::FrontendContext;

pub async fn handle_request(
    req: Request<Incoming>,
    ctx: Arc<FrontendContext>,
) -> Result<Response<String>, Infallible> {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/health") => render_json(&json!({ "status": "ok" })),
        ("POST", "/api/sales") => handle_search(req, ctx).await,
        ("GET", "/api/sales/filter-options") => handle_filter_options(ctx).await,
        (_, "/health" | "/api/sales" | "/api/sales/filter-options") => method_not_allowed(),
        _ => not_found(),
    }
}

/// `POST /api/sales` takes the raw query as a JSON body; an empty body means
/// the default query. Unparsable parameter values inside a valid body are
/// handled by the normalizer, not rejected here.
async fn handle_search(
    req: Request<Incoming>,
    ctx: Arc<FrontendContext>,
) -> Result<Response<String>, Infallible> {
    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => return render_error(&format!("failed to read body: {e}"), StatusCode::BAD_REQUEST),
    };

    let raw: RawQuery = if body.is_empty() {
        RawQuery::default()
    } else {
        match serde_json::from_slice(&body) {
            Ok(raw) => raw,
            Err(e) => {
                return render_error(&format!("invalid query body: {e}"), StatusCode::BAD_REQUEST);
            }
        }
    };

    match ctx.engine.search(&raw).await {
        Ok(page) => render_json(&page),
        Err(e) => {
            error!(target: "salescan::http", "search failed: {e}");
            render_error(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn handle_filter_options(ctx: Arc<FrontendContext>) -> Result<Response<String>, Infallible> {
    match ctx.engine.filter_options().await {
        Ok(options) => render_json(&options),
        Err(e) => {
            error!(target: "salescan::http", "filter options failed: {e}");
            render_error(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn render_json<T: Serialize>(value: &T) -> Result<Response<String>, Infallible> {
    match serde_json::to_string(value) {
        Ok(body) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header(hyper::header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap()),
        Err(e) => render_error(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR),
    }
}

fn render_error(msg: &str, status: StatusCode) -> Result<Response<String>, Infallible> {
    let body = json!({ "error": status.canonical_reason().unwrap_or("error"), "message": msg });
    Ok(Response::builder()
        .status(status)
        .header(hyper::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap())
}

fn not_found() -> Result<Response<String>, Infallible> {
    render_error("no such route", StatusCode::NOT_FOUND)
}

fn method_not_allowed() -> Result<Response<String>, Infallible> {
    render_error("method not allowed", StatusCode::METHOD_NOT_ALLOWED)
}
