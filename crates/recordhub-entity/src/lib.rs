//! # recordhub-entity
//!
//! Resource record models served by RecordHub. Every record derives
//! `Debug`, `Clone`, `PartialEq`, `Serialize`, `Deserialize` and implements
//! [`recordhub_core::Record`]. Decoding is type-checked but lenient about
//! missing fields: an omitted or `null` field takes its zero value.

pub mod coffee;
mod de;
pub mod employee;
pub mod fixtures;
pub mod flight;
pub mod kind;

pub use coffee::Coffee;
pub use employee::Employee;
pub use flight::Flight;
pub use kind::ResourceKind;
