//! Request correlation and access logging.
//!
//! Every request gets a correlation id, taken from `x-correlation-id` when it
//! holds a valid UUID and generated otherwise. The id is written to one
//! access-log line and echoed on the response.
//!
//! Access lines log the matched route template (`/lists/:name/items`), never
//! the concrete path, so checklist names stay out of the logs.

use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use log::{info, warn};
use std::time::Instant;
use uuid::Uuid;

/// Header carrying the correlation id in both directions.
pub static CORRELATION_ID_HEADER: HeaderName = HeaderName::from_static("x-correlation-id");

/// `axum::middleware::from_fn` body for correlation + access logging.
pub async fn request_context(req: Request, next: Next) -> Response {
    let correlation_id = req
        .headers()
        .get(&CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .unwrap_or_else(Uuid::new_v4);

    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_string(), |path| path.as_str().to_string());
    let started_at = Instant::now();

    let mut response = next.run(req).await;

    let status = response.status();
    let duration_ms = started_at.elapsed().as_millis();
    if status.is_server_error() {
        warn!(
            "event=http_request module=server status=error method={method} route={route} http_status={} duration_ms={duration_ms} correlation_id={correlation_id}",
            status.as_u16()
        );
    } else {
        info!(
            "event=http_request module=server status=ok method={method} route={route} http_status={} duration_ms={duration_ms} correlation_id={correlation_id}",
            status.as_u16()
        );
    }

    if let Ok(value) = HeaderValue::from_str(&correlation_id.to_string()) {
        response.headers_mut().insert(&CORRELATION_ID_HEADER, value);
    }
    response
}
