//! PostgreSQL adapter for VehicleRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::entities::{Vehicle, VehicleId};
use crate::domain::ports::VehicleRepository;
use crate::entity::vehicles;
use crate::error::DomainError;

/// PostgreSQL implementation of VehicleRepository
pub struct PostgresVehicleRepository {
    db: DatabaseConnection,
}

impl PostgresVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehicleRepository for PostgresVehicleRepository {
    async fn save(&self, vehicle: &Vehicle) -> Result<(), DomainError> {
        let model: vehicles::ActiveModel = vehicles::Model::from(vehicle).into();

        vehicles::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn get_by_id(&self, id: &VehicleId) -> Result<Option<Vehicle>, DomainError> {
        let result = vehicles::Entity::find_by_id(id.0.clone())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn update(&self, vehicle: &Vehicle) -> Result<(), DomainError> {
        let changes = vehicles::ActiveModel {
            id: NotSet,
            brand: Set(vehicle.brand.clone()),
            model: Set(vehicle.model.clone()),
            year: Set(vehicle.year),
            color: Set(vehicle.color.clone()),
            price: Set(vehicle.price),
            created_at: NotSet,
            updated_at: Set(vehicle.updated_at.fixed_offset()),
        };

        // Affected-row count is deliberately not checked
        let result = vehicles::Entity::update_many()
            .set(changes)
            .filter(vehicles::Column::Id.eq(vehicle.id.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        tracing::debug!(
            vehicle_id = %vehicle.id,
            rows_affected = result.rows_affected,
            "vehicle row updated"
        );

        Ok(())
    }
}

/// Convert domain entity to SeaORM model
impl From<&Vehicle> for vehicles::Model {
    fn from(vehicle: &Vehicle) -> Self {
        vehicles::Model {
            id: vehicle.id.0.clone(),
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            color: vehicle.color.clone(),
            price: vehicle.price,
            created_at: vehicle.created_at.fixed_offset(),
            updated_at: vehicle.updated_at.fixed_offset(),
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<vehicles::Model> for Vehicle {
    fn from(model: vehicles::Model) -> Self {
        Vehicle {
            id: VehicleId(model.id),
            brand: model.brand,
            model: model.model,
            year: model.year,
            color: model.color,
            price: model.price,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
