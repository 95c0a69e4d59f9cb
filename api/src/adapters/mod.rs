//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;
pub mod showcase;

pub use postgres::{ensure_schema, PostgresVehicleRepository};
pub use showcase::ShowcaseClientImpl;
