//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Vehicle, VehicleId};
use crate::domain::ports::{ListingUpdate, NewListing, ShowcaseClient, VehicleRepository};
use crate::error::{DomainError, ShowcaseError};

// ============================================================================
// In-Memory Vehicle Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryVehicleRepository {
    vehicles: Arc<RwLock<HashMap<VehicleId, Vehicle>>>,
    save_calls: Arc<RwLock<usize>>,
    update_calls: Arc<RwLock<usize>>,
    should_fail: bool,
    fail_updates: bool,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation fails as if the database were down
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Only `update` fails; lookups and inserts work
    pub fn failing_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    /// Pre-populate with a vehicle for testing
    pub fn with_vehicle(self, vehicle: Vehicle) -> Self {
        self.vehicles
            .write()
            .unwrap()
            .insert(vehicle.id.clone(), vehicle);
        self
    }

    /// Inspect the stored record without going through the port
    pub fn stored(&self, id: &VehicleId) -> Option<Vehicle> {
        self.vehicles.read().unwrap().get(id).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.read().unwrap().is_empty()
    }

    pub fn save_calls(&self) -> usize {
        *self.save_calls.read().unwrap()
    }

    pub fn update_calls(&self) -> usize {
        *self.update_calls.read().unwrap()
    }

    fn unavailable() -> DomainError {
        DomainError::Database("database unavailable".to_string())
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn save(&self, vehicle: &Vehicle) -> Result<(), DomainError> {
        *self.save_calls.write().unwrap() += 1;
        if self.should_fail {
            return Err(Self::unavailable());
        }

        let mut vehicles = self.vehicles.write().unwrap();
        if vehicles.contains_key(&vehicle.id) {
            return Err(DomainError::Database(format!(
                "duplicate key value violates unique constraint: {}",
                vehicle.id
            )));
        }
        vehicles.insert(vehicle.id.clone(), vehicle.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &VehicleId) -> Result<Option<Vehicle>, DomainError> {
        if self.should_fail {
            return Err(Self::unavailable());
        }
        Ok(self.vehicles.read().unwrap().get(id).cloned())
    }

    async fn update(&self, vehicle: &Vehicle) -> Result<(), DomainError> {
        *self.update_calls.write().unwrap() += 1;
        if self.should_fail || self.fail_updates {
            return Err(Self::unavailable());
        }

        // Mirrors the SQL adapter: a missing row is silently ignored
        if let Some(stored) = self.vehicles.write().unwrap().get_mut(&vehicle.id) {
            stored.brand = vehicle.brand.clone();
            stored.model = vehicle.model.clone();
            stored.year = vehicle.year;
            stored.color = vehicle.color.clone();
            stored.price = vehicle.price;
            stored.updated_at = vehicle.updated_at;
        }
        Ok(())
    }
}

// ============================================================================
// Mock Showcase Client
// ============================================================================

#[derive(Default)]
pub struct MockShowcaseClient {
    created: Arc<RwLock<Vec<NewListing>>>,
    updated: Arc<RwLock<Vec<(VehicleId, ListingUpdate)>>>,
    should_fail: bool,
}

impl MockShowcaseClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls are recorded, then rejected with a 503
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Every create_listing call received, in order
    pub fn created(&self) -> Vec<NewListing> {
        self.created.read().unwrap().clone()
    }

    /// Every update_listing call received, in order
    pub fn updated(&self) -> Vec<(VehicleId, ListingUpdate)> {
        self.updated.read().unwrap().clone()
    }

    pub fn create_calls(&self) -> usize {
        self.created.read().unwrap().len()
    }

    pub fn update_calls(&self) -> usize {
        self.updated.read().unwrap().len()
    }

    fn outcome(&self) -> Result<(), ShowcaseError> {
        if self.should_fail {
            Err(ShowcaseError::Api {
                status: 503,
                message: "showcase unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ShowcaseClient for MockShowcaseClient {
    async fn create_listing(&self, listing: &NewListing) -> Result<(), ShowcaseError> {
        self.created.write().unwrap().push(listing.clone());
        self.outcome()
    }

    async fn update_listing(
        &self,
        vehicle_id: &VehicleId,
        listing: &ListingUpdate,
    ) -> Result<(), ShowcaseError> {
        self.updated
            .write()
            .unwrap()
            .push((vehicle_id.clone(), listing.clone()));
        self.outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_vehicle;

    #[tokio::test]
    async fn in_memory_save_then_get_round_trip() {
        let repo = InMemoryVehicleRepository::new();
        let vehicle = test_vehicle();

        repo.save(&vehicle).await.unwrap();
        let found = repo.get_by_id(&vehicle.id).await.unwrap();

        assert_eq!(found, Some(vehicle));
    }

    #[tokio::test]
    async fn in_memory_save_rejects_duplicate_id() {
        let repo = InMemoryVehicleRepository::new();
        let vehicle = test_vehicle();

        repo.save(&vehicle).await.unwrap();

        assert!(repo.save(&vehicle).await.is_err());
    }

    #[tokio::test]
    async fn in_memory_update_keeps_created_at() {
        let original = test_vehicle();
        let repo = InMemoryVehicleRepository::new().with_vehicle(original.clone());

        let mut changed = original.clone();
        changed.brand = "Honda".to_string();
        changed.created_at = changed.created_at - chrono::Duration::days(1);
        repo.update(&changed).await.unwrap();

        let stored = repo.stored(&original.id).unwrap();
        assert_eq!(stored.brand, "Honda");
        assert_eq!(stored.created_at, original.created_at);
    }
}
