//! The record contract shared by every resource type.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A resource record stored by a [`Repository`](super::Repository).
///
/// The repository only ever looks at the `id`; every other field is opaque
/// payload. The naming constants drive URL paths and response messages in
/// the HTTP layer.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Collection path segment, e.g. `"coffees"`.
    const COLLECTION: &'static str;
    /// Key under which a single record is returned, e.g. `"coffee"`.
    const SINGULAR: &'static str;
    /// Human-readable label used in messages, e.g. `"Coffee"`.
    const LABEL: &'static str;

    /// The record's unique identifier.
    fn id(&self) -> &str;

    /// Overwrites the record's identifier.
    fn set_id(&mut self, id: String);
}
