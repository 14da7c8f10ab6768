//! Coffee domain entities.

pub mod model;

pub use model::Coffee;
