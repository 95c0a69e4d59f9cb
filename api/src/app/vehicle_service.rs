//! Vehicle service
//!
//! Orchestrates catalog writes: validate, persist, then tell the showcase
//! service about the change.
//!
//! The catalog record is authoritative. Showcase notifications run as a
//! post-commit step after a successful write, and their failures are only
//! logged: they never fail or roll back the catalog operation.

use std::sync::Arc;

use chrono::SecondsFormat;

use crate::domain::entities::{timestamp_now, Vehicle, VehicleDetails, VehicleId};
use crate::domain::ports::{ListingUpdate, NewListing, ShowcaseClient, VehicleRepository};
use crate::domain::validation::validate_vehicle_fields;
use crate::error::{AppError, DomainError};

/// Summary returned after a vehicle is created
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedVehicle {
    pub id: VehicleId,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

/// Catalog change to propagate to the showcase service
#[derive(Debug, Clone)]
enum ListingChange {
    Created(NewListing),
    Updated(VehicleId, ListingUpdate),
}

/// Service for creating and updating catalog vehicles
pub struct VehicleService<VR, SC>
where
    VR: VehicleRepository,
    SC: ShowcaseClient,
{
    vehicles: Arc<VR>,
    showcase: Arc<SC>,
}

impl<VR, SC> VehicleService<VR, SC>
where
    VR: VehicleRepository,
    SC: ShowcaseClient,
{
    pub fn new(vehicles: Arc<VR>, showcase: Arc<SC>) -> Self {
        Self { vehicles, showcase }
    }

    /// Create a new vehicle
    ///
    /// 1. Validate the fields
    /// 2. Build the vehicle with a fresh id and equal timestamps
    /// 3. Persist it
    /// 4. Publish a showcase listing (best effort)
    pub async fn create(&self, details: VehicleDetails) -> Result<CreatedVehicle, AppError> {
        validate_vehicle_fields(&details.brand, &details.model, details.year, details.price)?;

        let vehicle = Vehicle::create(details, timestamp_now());

        self.vehicles.save(&vehicle).await?;

        tracing::info!(vehicle_id = %vehicle.id, "Vehicle created");

        self.after_commit(ListingChange::Created(NewListing::from(&vehicle)))
            .await;

        Ok(CreatedVehicle {
            id: vehicle.id,
            created_at: vehicle
                .created_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }

    /// Update an existing vehicle
    ///
    /// The lookup happens first; a missing vehicle short-circuits before
    /// validation. Invalid fields leave the stored record untouched.
    pub async fn update(&self, id: &VehicleId, details: VehicleDetails) -> Result<(), AppError> {
        let mut vehicle = self.vehicles.get_by_id(id).await?.ok_or_else(|| {
            AppError::Domain(DomainError::NotFound(format!("Vehicle {} not found", id)))
        })?;

        validate_vehicle_fields(&details.brand, &details.model, details.year, details.price)?;

        vehicle.apply(details, timestamp_now());

        self.vehicles.update(&vehicle).await?;

        tracing::info!(vehicle_id = %vehicle.id, "Vehicle updated");

        let listing = ListingUpdate::from(&vehicle);
        self.after_commit(ListingChange::Updated(vehicle.id, listing))
            .await;

        Ok(())
    }

    /// Post-commit hook: propagate a change to the showcase service.
    ///
    /// Runs only after the catalog write succeeded. Errors end here.
    async fn after_commit(&self, change: ListingChange) {
        let (vehicle_id, result) = match &change {
            ListingChange::Created(listing) => (
                listing.vehicle_id.clone(),
                self.showcase.create_listing(listing).await,
            ),
            ListingChange::Updated(id, listing) => (
                id.to_string(),
                self.showcase.update_listing(id, listing).await,
            ),
        };

        if let Err(e) = result {
            tracing::warn!(
                vehicle_id = %vehicle_id,
                error = %e,
                change = ?change,
                "Failed to notify showcase service"
            );
        }
    }
}
