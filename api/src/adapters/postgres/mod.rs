//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod schema;
pub mod vehicle_repo;


pub use schema::ensure_schema;
pub use vehicle_repo::PostgresVehicleRepository;
