//! Schema bootstrap
//!
//! Creates the tables derived from the SeaORM entities when they are missing.

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::entity::vehicles;
use crate::error::DomainError;

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(vehicles::Entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    tracing::debug!("vehicles table ready");
    Ok(())
}
