//! Route definitions for the RecordHub HTTP API.
//!
//! Every resource family gets the same five CRUD routes under
//! `/{collection}`. Routers are built either per family (one listener per
//! resource) or unified (every enabled family on one listener).

use axum::extract::FromRef;
use axum::routing::get;
use axum::{Router, extract::DefaultBodyLimit, middleware as axum_middleware};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use recordhub_core::Record;
use recordhub_entity::{Coffee, Employee, Flight, ResourceKind};

use crate::handlers;
use crate::middleware;
use crate::state::{AppState, ResourceState};

/// Build a router serving every enabled resource family plus `/health`.
pub fn build_router(state: AppState) -> Router {
    let mut routes = health_routes();
    for kind in ResourceKind::ALL {
        if kind.config(&state.config.resources).enabled {
            routes = routes.merge(routes_for(kind));
        }
    }

    with_layers(routes, state)
}

/// Build a router serving a single resource family plus `/health`.
pub fn build_resource_router(state: AppState, kind: ResourceKind) -> Router {
    with_layers(health_routes().merge(routes_for(kind)), state)
}

fn routes_for(kind: ResourceKind) -> Router<AppState> {
    match kind {
        ResourceKind::Coffee => resource_routes::<Coffee>(),
        ResourceKind::Employee => resource_routes::<Employee>(),
        ResourceKind::Flight => resource_routes::<Flight>(),
    }
}

/// CRUD endpoints for one record type.
fn resource_routes<R>() -> Router<AppState>
where
    R: Record,
    ResourceState<R>: FromRef<AppState>,
{
    let collection = format!("/{}", R::COLLECTION);
    let item = format!("/{}/{{id}}", R::COLLECTION);

    Router::new()
        .route(
            &collection,
            get(handlers::resource::list_records::<R>).post(handlers::resource::create_record::<R>),
        )
        .route(
            &item,
            get(handlers::resource::get_record::<R>)
                .put(handlers::resource::update_record::<R>)
                .delete(handlers::resource::delete_record::<R>),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

fn with_layers(routes: Router<AppState>, state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    routes
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}
