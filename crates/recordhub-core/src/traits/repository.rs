//! Generic repository trait for keyed record collections.

use super::record::Record;

/// Generic CRUD repository over a single record type.
///
/// Implementations must make every operation atomic with respect to every
/// other operation on the same instance. "Not found" is reported through
/// `Option`, never as an error.
pub trait Repository<R>: Send + Sync + 'static
where
    R: Record,
{
    /// Snapshot of all records in insertion order.
    fn list(&self) -> Vec<R>;

    /// Find a record by id.
    fn get(&self, id: &str) -> Option<R>;

    /// Store a new record under a freshly allocated id and return it.
    ///
    /// Any id carried by `record` is ignored.
    fn create(&self, record: R) -> R;

    /// Replace every field of the record with `id`, keeping its id and
    /// position. Returns `None` without mutating anything when absent.
    fn update(&self, id: &str, record: R) -> Option<R>;

    /// Remove the record with `id`. Returns the removed id, or `None`
    /// without mutating anything when absent.
    fn delete(&self, id: &str) -> Option<String>;

    /// Number of records currently stored.
    fn len(&self) -> usize;

    /// Whether the collection holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
