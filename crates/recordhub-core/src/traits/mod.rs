//! Core traits defined in `recordhub-core` and implemented by other crates.

pub mod record;
pub mod repository;

pub use record::Record;
pub use repository::Repository;
