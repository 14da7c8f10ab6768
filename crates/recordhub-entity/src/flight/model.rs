//! Flight entity model.

use serde::{Deserialize, Serialize};

use recordhub_core::Record;

/// A scheduled flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flight {
    /// Server-assigned identifier.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub id: String,
    /// Flight number, e.g. `"AI 845"`.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub number: String,
    /// Operating airline.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub airline_name: String,
    /// Departure city.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub source: String,
    /// Arrival city.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub destination: String,
    /// Seat capacity.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub capacity: i64,
    /// Ticket price.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub price: f64,
}

impl Record for Flight {
    const COLLECTION: &'static str = "flights";
    const SINGULAR: &'static str = "flight";
    const LABEL: &'static str = "Flight";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
