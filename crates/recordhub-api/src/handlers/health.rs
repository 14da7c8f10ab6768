//! Health check handler.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use recordhub_entity::ResourceKind;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
///
/// Reports a record count for every enabled collection, regardless of which
/// listener served the request.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime_seconds = (Utc::now() - state.started_at).num_seconds().max(0) as u64;

    let mut records = BTreeMap::new();
    for kind in ResourceKind::ALL {
        if !kind.config(&state.config.resources).enabled {
            continue;
        }
        let count = match kind {
            ResourceKind::Coffee => state.coffees.len(),
            ResourceKind::Employee => state.employees.len(),
            ResourceKind::Flight => state.flights.len(),
        };
        records.insert(kind.collection().to_string(), count);
    }

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at,
        uptime_seconds,
        records,
    })
}
