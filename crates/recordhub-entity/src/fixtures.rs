//! Sample records used to pre-populate collections on start-up.

use crate::{Coffee, Employee, Flight};

/// The two sample coffee items.
pub fn coffees() -> Vec<Coffee> {
    vec![
        Coffee {
            id: "1001".to_string(),
            category: "Medium".to_string(),
            coffee_type: "Filter".to_string(),
            price: 100.0,
            sugar_level: "Normal".to_string(),
        },
        Coffee {
            id: "1002".to_string(),
            category: "Large".to_string(),
            coffee_type: "Instant".to_string(),
            price: 150.0,
            sugar_level: "Less".to_string(),
        },
    ]
}

/// The two sample employees.
pub fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "1001".to_string(),
            name: "Aliya".to_string(),
            designation: "Developer".to_string(),
            technology: "Java".to_string(),
            commission: 50000,
            salary: 15000.0,
            phone: 9353938926,
        },
        Employee {
            id: "1002".to_string(),
            name: "John".to_string(),
            designation: "Manager".to_string(),
            technology: "Go".to_string(),
            commission: 60000,
            salary: 20000.0,
            phone: 9353938927,
        },
    ]
}

/// The two sample flights.
pub fn flights() -> Vec<Flight> {
    vec![
        Flight {
            id: "1001".to_string(),
            number: "AI 845".to_string(),
            airline_name: "Air India".to_string(),
            source: "Mumbai".to_string(),
            destination: "Abu Dhabi".to_string(),
            capacity: 180,
            price: 15000.0,
        },
        Flight {
            id: "1002".to_string(),
            number: "AI 846".to_string(),
            airline_name: "Air India".to_string(),
            source: "Abu Dhabi".to_string(),
            destination: "Mumbai".to_string(),
            capacity: 180,
            price: 15000.0,
        },
    ]
}
