//! In-memory repository backed by an ordered vector behind a read/write lock.
//!
//! Reads (`list`, `get`, `len`) share the lock; `create`, `update` and
//! `delete` hold it exclusively. The lock is held only for the scan or the
//! mutation itself and never across an `.await`, so every operation appears
//! atomic to concurrent request handlers.

use std::collections::HashSet;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use recordhub_core::error::AppError;
use recordhub_core::result::AppResult;
use recordhub_core::traits::{Record, Repository};

/// Largest numeric seed id accepted by [`InMemoryRepository::with_records`].
///
/// Ids above it belong to the generated sequence, leaving it at least 2^63
/// values.
pub const MAX_SEED_ID: u64 = u64::MAX / 2;

/// Generic in-memory repository for a single record type.
pub struct InMemoryRepository<R> {
    inner: RwLock<Collection<R>>,
}

/// Lock-protected state: records in insertion order plus the id sequence.
struct Collection<R> {
    items: Vec<R>,
    /// Last issued sequence number. Only ever increases.
    next_seq: u64,
}

impl<R: Record> Collection<R> {
    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|r| r.id() == id)
    }

    fn allocate_id(&mut self) -> String {
        // Starts at most at MAX_SEED_ID, so this cannot overflow.
        self.next_seq += 1;
        self.next_seq.to_string()
    }
}

impl<R: Record> InMemoryRepository<R> {
    /// Creates an empty repository. The first generated id is `"1"`.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collection {
                items: Vec::new(),
                next_seq: 0,
            }),
        }
    }

    /// Creates a repository pre-populated with `records`, kept in the given
    /// order and with their ids untouched.
    ///
    /// The id sequence starts after the largest numeric seed id, so generated
    /// ids never collide with seeded ones. Numeric ids above [`MAX_SEED_ID`]
    /// are rejected.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        let mut next_seq = 0u64;

        for record in records {
            let id = record.id();
            if id.is_empty() {
                return Err(AppError::validation(format!(
                    "{} seed record has an empty id",
                    R::LABEL
                )));
            }
            if !seen.insert(id.to_string()) {
                return Err(AppError::conflict(format!(
                    "Duplicate {} seed id '{id}'",
                    R::SINGULAR
                )));
            }
            if let Some(numeric) = numeric_id(id) {
                if numeric > MAX_SEED_ID {
                    return Err(AppError::validation(format!(
                        "{} seed id '{id}' exceeds {MAX_SEED_ID}",
                        R::LABEL
                    )));
                }
                next_seq = next_seq.max(numeric);
            }
            items.push(record);
        }

        debug!(
            collection = R::COLLECTION,
            count = items.len(),
            next_seq,
            "Seeded repository"
        );

        Ok(Self {
            inner: RwLock::new(Collection { items, next_seq }),
        })
    }

    // Each mutation is a single push, assignment or remove, so a panic in
    // another holder cannot leave the collection half-updated.
    fn read(&self) -> RwLockReadGuard<'_, Collection<R>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collection<R>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A seed id made only of ASCII digits, read as a number.
///
/// Digit strings too long for `u64` are reported as `u64::MAX` so the range
/// check rejects them instead of treating them as opaque ids.
fn numeric_id(id: &str) -> Option<u64> {
    if !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(id.parse().unwrap_or(u64::MAX))
}

impl<R: Record> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> fmt::Debug for InMemoryRepository<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let collection = self.read();
        f.debug_struct("InMemoryRepository")
            .field("collection", &R::COLLECTION)
            .field("len", &collection.items.len())
            .field("next_seq", &collection.next_seq)
            .finish()
    }
}

impl<R: Record> Repository<R> for InMemoryRepository<R> {
    fn list(&self) -> Vec<R> {
        self.read().items.clone()
    }

    fn get(&self, id: &str) -> Option<R> {
        self.read().items.iter().find(|r| r.id() == id).cloned()
    }

    fn create(&self, mut record: R) -> R {
        let mut collection = self.write();
        let id = collection.allocate_id();
        record.set_id(id);
        collection.items.push(record.clone());
        drop(collection);

        debug!(collection = R::COLLECTION, id = record.id(), "Record created");
        record
    }

    fn update(&self, id: &str, mut record: R) -> Option<R> {
        let mut collection = self.write();
        let index = collection.position(id)?;
        record.set_id(id.to_string());
        collection.items[index] = record.clone();
        drop(collection);

        debug!(collection = R::COLLECTION, id, "Record updated");
        Some(record)
    }

    fn delete(&self, id: &str) -> Option<String> {
        let mut collection = self.write();
        let index = collection.position(id)?;
        let removed = collection.items.remove(index);
        drop(collection);

        debug!(collection = R::COLLECTION, id, "Record deleted");
        Some(removed.id().to_string())
    }

    fn len(&self) -> usize {
        self.read().items.len()
    }
}
