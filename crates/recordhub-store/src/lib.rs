//! # recordhub-store
//!
//! In-memory storage for RecordHub. One [`InMemoryRepository`] instance
//! backs each resource collection; instances share nothing and never
//! contend with each other.

pub mod memory;

pub use memory::{InMemoryRepository, MAX_SEED_ID};
