//! Vehicle domain entity
//!
//! A vehicle record in the catalog. The catalog is the source of truth;
//! the showcase service only mirrors a subset of these fields.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a vehicle
///
/// Opaque to everything but the use case that generates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub String);

impl VehicleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VehicleId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for VehicleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for VehicleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current instant at the precision PostgreSQL stores (microseconds)
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A vehicle in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Build a brand new vehicle with a fresh id.
    ///
    /// Callers validate `details` first; this only assembles the record.
    pub fn create(details: VehicleDetails, now: DateTime<Utc>) -> Self {
        Vehicle {
            id: VehicleId::new(),
            brand: details.brand,
            model: details.model,
            year: details.year,
            color: details.color,
            price: details.price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the mutable fields. `id` and `created_at` never change.
    pub fn apply(&mut self, details: VehicleDetails, now: DateTime<Utc>) {
        self.brand = details.brand;
        self.model = details.model;
        self.color = details.color;
        self.year = details.year;
        self.price = details.price;
        self.updated_at = now;
    }
}

/// Caller-supplied vehicle fields, shared by create and update
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDetails {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
}
