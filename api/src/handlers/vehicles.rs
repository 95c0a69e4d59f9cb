//! Vehicle handlers
//!
//! Endpoints for creating and updating catalog vehicles.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{VehicleDetails, VehicleId};
use crate::domain::ports::{ShowcaseClient, VehicleRepository};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating or updating a vehicle
///
/// Missing fields decode to their zero value and are reported by validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VehicleRequest {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
}

impl From<VehicleRequest> for VehicleDetails {
    fn from(r: VehicleRequest) -> Self {
        VehicleDetails {
            brand: r.brand,
            model: r.model,
            year: r.year,
            color: r.color,
            price: r.price,
        }
    }
}

/// Response for a created vehicle
#[derive(Debug, Serialize)]
pub struct CreateVehicleResponse {
    pub id: String,
    pub created_at: String,
}

/// POST /vehicles/add
///
/// Add a new vehicle to the catalog.
pub async fn create_vehicle<VR, SC>(
    State(state): State<AppState<VR, SC>>,
    Json(request): Json<VehicleRequest>,
) -> Result<(StatusCode, Json<CreateVehicleResponse>), AppError>
where
    VR: VehicleRepository,
    SC: ShowcaseClient,
{
    let created = state.vehicle_service.create(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateVehicleResponse {
            id: created.id.to_string(),
            created_at: created.created_at,
        }),
    ))
}

/// PUT /vehicles/:id
///
/// Update the data of the vehicle identified by `id`.
pub async fn update_vehicle<VR, SC>(
    State(state): State<AppState<VR, SC>>,
    Path(id): Path<String>,
    Json(request): Json<VehicleRequest>,
) -> Result<StatusCode, AppError>
where
    VR: VehicleRepository,
    SC: ShowcaseClient,
{
    if id.trim().is_empty() {
        return Err(AppError::BadRequest("Vehicle id is required".to_string()));
    }

    state
        .vehicle_service
        .update(&VehicleId(id), request.into())
        .await?;

    Ok(StatusCode::OK)
}
