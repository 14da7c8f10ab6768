//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// Response header carrying the generated request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logs request method, path, status, and duration under a per-request id.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!("request", %request_id);
    let mut response = next.run(request).instrument(span.clone()).await;

    let duration = start.elapsed();
    let status = response.status();

    span.in_scope(|| {
        info!(
            method = %method,
            path = %uri.path(),
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "HTTP request"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}
