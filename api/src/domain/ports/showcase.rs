//! Showcase client port trait
//!
//! Defines the interface for notifying the showcase service, which publishes
//! listings derived from catalog vehicles.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::entities::{Vehicle, VehicleId};
use crate::error::ShowcaseError;

/// Listing payload sent when a vehicle is created
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub vehicle_id: String,
    pub brand: String,
    pub model: String,
    pub price: f64,
}

impl From<&Vehicle> for NewListing {
    fn from(v: &Vehicle) -> Self {
        NewListing {
            vehicle_id: v.id.to_string(),
            brand: v.brand.clone(),
            model: v.model.clone(),
            price: v.price,
        }
    }
}

/// Listing payload sent when a vehicle is updated (keyed by vehicle id)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingUpdate {
    pub brand: String,
    pub model: String,
    pub price: f64,
}

impl From<&Vehicle> for ListingUpdate {
    fn from(v: &Vehicle) -> Self {
        ListingUpdate {
            brand: v.brand.clone(),
            model: v.model.clone(),
            price: v.price,
        }
    }
}

/// Client for the showcase service
///
/// Each call is a single synchronous request; no retries.
#[async_trait]
pub trait ShowcaseClient: Send + Sync {
    /// Publish a listing for a newly created vehicle
    async fn create_listing(&self, listing: &NewListing) -> Result<(), ShowcaseError>;

    /// Refresh the listing of an existing vehicle
    async fn update_listing(
        &self,
        vehicle_id: &VehicleId,
        listing: &ListingUpdate,
    ) -> Result<(), ShowcaseError>;
}
