//! # recordhub-core
//!
//! Core crate for RecordHub. Contains the record and repository traits,
//! configuration schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other RecordHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
pub use traits::{Record, Repository};
