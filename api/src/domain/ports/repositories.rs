//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Vehicle, VehicleId};
use crate::error::DomainError;

/// Repository for Vehicle entities
///
/// Stores exactly what it is given; ids and timestamps come from the caller.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Insert a new vehicle. Fails if the store rejects the write (no upsert).
    async fn save(&self, vehicle: &Vehicle) -> Result<(), DomainError>;

    /// Find a vehicle by ID. `Ok(None)` means no such vehicle.
    async fn get_by_id(&self, id: &VehicleId) -> Result<Option<Vehicle>, DomainError>;

    /// Overwrite the mutable fields of the vehicle with the same ID.
    ///
    /// A missing row is not an error.
    async fn update(&self, vehicle: &Vehicle) -> Result<(), DomainError>;
}
