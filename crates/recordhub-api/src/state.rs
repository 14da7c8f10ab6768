//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use axum::extract::FromRef;
use chrono::{DateTime, Utc};

use recordhub_core::config::AppConfig;
use recordhub_core::traits::{Record, Repository};
use recordhub_entity::{Coffee, Employee, Flight};

/// Shared application state passed to every handler via Axum's `State`
/// extractor. Every field is cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Process start time, reported by the health endpoint.
    pub started_at: DateTime<Utc>,
    /// Coffee repository.
    pub coffees: Arc<dyn Repository<Coffee>>,
    /// Employee repository.
    pub employees: Arc<dyn Repository<Employee>>,
    /// Flight repository.
    pub flights: Arc<dyn Repository<Flight>>,
}

/// The slice of state a generic resource handler needs: its own repository.
pub struct ResourceState<R: Record> {
    /// Repository backing the resource's routes.
    pub repo: Arc<dyn Repository<R>>,
}

impl<R: Record> Clone for ResourceState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: Record> ResourceState<R> {
    /// Wraps a repository.
    pub fn new(repo: Arc<dyn Repository<R>>) -> Self {
        Self { repo }
    }
}

impl FromRef<AppState> for ResourceState<Coffee> {
    fn from_ref(state: &AppState) -> Self {
        Self::new(Arc::clone(&state.coffees))
    }
}

impl FromRef<AppState> for ResourceState<Employee> {
    fn from_ref(state: &AppState) -> Self {
        Self::new(Arc::clone(&state.employees))
    }
}

impl FromRef<AppState> for ResourceState<Flight> {
    fn from_ref(state: &AppState) -> Self {
        Self::new(Arc::clone(&state.flights))
    }
}
