use std::time::Instant;

use axum::{middleware::Next, response::Response};

/// Logs one line per request: method, path, status, latency.
pub async fn request_logging(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(%method, path = %path, status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        tracing::info!(%method, path = %path, status = status.as_u16(), elapsed_ms, "request handled");
    }

    response
}
