//! Response DTOs.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use recordhub_core::Record;

/// Message plus the affected record, keyed by the record's singular name:
/// `{"message": "Coffee created successfully", "coffee": {...}}`.
#[derive(Debug, Clone)]
pub struct RecordMessage<R> {
    /// Human-readable outcome.
    pub message: String,
    /// The record after the operation.
    pub record: R,
}

impl<R: Record> RecordMessage<R> {
    /// `"<Label> created successfully"`.
    pub fn created(record: R) -> Self {
        Self {
            message: format!("{} created successfully", R::LABEL),
            record,
        }
    }

    /// `"<Label> updated successfully"`.
    pub fn updated(record: R) -> Self {
        Self {
            message: format!("{} updated successfully", R::LABEL),
            record,
        }
    }
}

impl<R: Record> Serialize for RecordMessage<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("message", &self.message)?;
        map.serialize_entry(R::SINGULAR, &self.record)?;
        map.end()
    }
}

/// Delete confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// Message.
    pub message: String,
    /// Id of the removed record.
    pub id: String,
}

impl DeletedResponse {
    /// `"<Label> deleted successfully"` for the given id.
    pub fn new<R: Record>(id: String) -> Self {
        Self {
            message: format!("{} deleted successfully", R::LABEL),
            id,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Process start time.
    pub started_at: DateTime<Utc>,
    /// Uptime.
    pub uptime_seconds: u64,
    /// Record count per enabled collection.
    pub records: BTreeMap<String, usize>,
}
