//! Correlation ids.
//!
//! Every request runs inside an `http.request` span carrying a correlation id.
//! An inbound `x-correlation-id` header is reused; otherwise a UUID v4 is
//! generated. The id is echoed on the response, and every request logs one
//! completion line inside its span.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, info, warn};
use uuid::Uuid;

pub const CORRELATION_HEADER: &str = "x-correlation-id";

/// The inbound id if present and non-blank, else a fresh one
pub fn get_or_create(headers: &HeaderMap) -> String {
    headers
        .get(CORRELATION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

pub async fn correlation_middleware(request: Request, next: Next) -> Response {
    let id = get_or_create(request.headers());

    let span = tracing::info_span!(
        "http.request",
        correlation_id = %id,
        method = %request.method(),
        route = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span.clone()).await;
    span.in_scope(|| {
        let status = response.status();
        if status.is_server_error() {
            warn!(status = status.as_u16(), "request failed");
        } else {
            info!(status = status.as_u16(), "request completed");
        }
    });
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(CORRELATION_HEADER, value);
    }
    response
}
