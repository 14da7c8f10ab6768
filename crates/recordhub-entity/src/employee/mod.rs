//! Employee domain entities.

pub mod model;

pub use model::Employee;
