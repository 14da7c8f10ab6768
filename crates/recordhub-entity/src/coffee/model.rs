//! Coffee entity model.

use serde::{Deserialize, Serialize};

use recordhub_core::Record;

/// A coffee item on the menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coffee {
    /// Server-assigned identifier.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub id: String,
    /// Cup size: Small, Medium or Large.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub category: String,
    /// Preparation: Filter or Instant.
    #[serde(rename = "type", deserialize_with = "crate::de::null_as_default")]
    pub coffee_type: String,
    /// Price per cup.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub price: f64,
    /// Sugar level: No, Less or Normal.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub sugar_level: String,
}

impl Record for Coffee {
    const COLLECTION: &'static str = "coffees";
    const SINGULAR: &'static str = "coffee";
    const LABEL: &'static str = "Coffee";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
