//! CORS layer for the record listeners.

use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use recordhub_core::config::CorsConfig;

use super::logging::REQUEST_ID_HEADER;

/// Builds the CORS layer from `server.cors`.
///
/// Browser clients can always read the `x-request-id` response header.
/// Entries that do not parse are skipped with a warning.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(parse_all::<Method>("method", &config.allowed_methods))
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(Duration::from_secs(config.max_age_seconds));

    let layer = if is_wildcard(&config.allowed_origins) {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parse_all::<HeaderValue>("origin", &config.allowed_origins))
    };

    if is_wildcard(&config.allowed_headers) {
        layer.allow_headers(Any)
    } else {
        layer.allow_headers(parse_all::<HeaderName>("header", &config.allowed_headers))
    }
}

fn is_wildcard(entries: &[String]) -> bool {
    entries.iter().any(|e| e == "*")
}

fn parse_all<T: FromStr>(what: &str, entries: &[String]) -> Vec<T> {
    entries
        .iter()
        .filter_map(|entry| match entry.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(entry = %entry, "Ignoring invalid CORS {what}");
                None
            }
        })
        .collect()
}
