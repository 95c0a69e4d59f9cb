//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{timestamp_now, Vehicle, VehicleDetails, VehicleId};

/// Valid vehicle fields: a blue 2022 Toyota Corolla
pub fn valid_details() -> VehicleDetails {
    VehicleDetails {
        brand: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2022,
        color: "Blue".to_string(),
        price: 20000.0,
    }
}

/// Create a test vehicle with default values
pub fn test_vehicle() -> Vehicle {
    let now = timestamp_now();
    Vehicle {
        id: VehicleId::new(),
        brand: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2022,
        color: "Blue".to_string(),
        price: 20000.0,
        created_at: now,
        updated_at: now,
    }
}
