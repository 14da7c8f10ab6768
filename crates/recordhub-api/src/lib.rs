//! # recordhub-api
//!
//! HTTP API layer for RecordHub built on Axum.
//!
//! Provides the generic CRUD endpoints for every resource family, the
//! health endpoint, middleware (request logging, CORS), extractors, DTOs,
//! error mapping, and the listener runner.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::ApiError;
pub use state::AppState;
