//! Resource family enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

use recordhub_core::Record;
use recordhub_core::config::{ResourceConfig, ResourcesConfig};

use crate::{Coffee, Employee, Flight};

/// The resource families served by RecordHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Coffee items.
    Coffee,
    /// Employees.
    Employee,
    /// Flights.
    Flight,
}

impl ResourceKind {
    /// Every resource family, in listener start-up order.
    pub const ALL: [ResourceKind; 3] = [Self::Coffee, Self::Employee, Self::Flight];

    /// The collection path segment, e.g. `"coffees"`.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Coffee => Coffee::COLLECTION,
            Self::Employee => Employee::COLLECTION,
            Self::Flight => Flight::COLLECTION,
        }
    }

    /// The settings section for this family.
    pub fn config<'a>(&self, resources: &'a ResourcesConfig) -> &'a ResourceConfig {
        match self {
            Self::Coffee => &resources.coffee,
            Self::Employee => &resources.employee,
            Self::Flight => &resources.flight,
        }
    }

    /// The effective split-mode port for this family.
    pub fn port(&self, resources: &ResourcesConfig) -> u16 {
        match self {
            Self::Coffee => resources.coffee_port(),
            Self::Employee => resources.employee_port(),
            Self::Flight => resources.flight_port(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}
