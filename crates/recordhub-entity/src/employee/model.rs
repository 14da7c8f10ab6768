//! Employee entity model.

use serde::{Deserialize, Serialize};

use recordhub_core::Record;

/// An employee record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    /// Server-assigned identifier.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub id: String,
    /// Full name.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub name: String,
    /// Job title.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub designation: String,
    /// Primary technology.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub technology: String,
    /// Commission amount.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub commission: i64,
    /// Salary amount.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub salary: f64,
    /// Phone number.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub phone: i64,
}

impl Record for Employee {
    const COLLECTION: &'static str = "employees";
    const SINGULAR: &'static str = "employee";
    const LABEL: &'static str = "Employee";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
