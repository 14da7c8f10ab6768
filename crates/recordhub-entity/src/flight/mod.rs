//! Flight domain entities.

pub mod model;

pub use model::Flight;
