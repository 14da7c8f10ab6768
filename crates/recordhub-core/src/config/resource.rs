//! Per-resource listener configuration.

use serde::{Deserialize, Serialize};

/// Default port of the flights listener.
pub const DEFAULT_FLIGHT_PORT: u16 = 8080;
/// Default port of the employees listener.
pub const DEFAULT_EMPLOYEE_PORT: u16 = 8081;
/// Default port of the coffees listener.
pub const DEFAULT_COFFEE_PORT: u16 = 8083;

/// Settings for all resource families.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Coffee items.
    #[serde(default)]
    pub coffee: ResourceConfig,
    /// Employees.
    #[serde(default)]
    pub employee: ResourceConfig,
    /// Flights.
    #[serde(default)]
    pub flight: ResourceConfig,
}

impl ResourcesConfig {
    /// Effective port of the coffees listener.
    pub fn coffee_port(&self) -> u16 {
        self.coffee.port.unwrap_or(DEFAULT_COFFEE_PORT)
    }

    /// Effective port of the employees listener.
    pub fn employee_port(&self) -> u16 {
        self.employee.port.unwrap_or(DEFAULT_EMPLOYEE_PORT)
    }

    /// Effective port of the flights listener.
    pub fn flight_port(&self) -> u16 {
        self.flight.port.unwrap_or(DEFAULT_FLIGHT_PORT)
    }
}

/// Settings for a single resource family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Whether the resource is served at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Listener port in split mode. Falls back to the resource's default.
    #[serde(default)]
    pub port: Option<u16>,
    /// Pre-populate the collection with the sample records.
    #[serde(default)]
    pub seed_fixtures: bool,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: None,
            seed_fixtures: false,
        }
    }
}

fn default_true() -> bool {
    true
}
