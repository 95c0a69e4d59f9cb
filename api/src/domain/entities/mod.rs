//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod vehicle;

pub use vehicle::{timestamp_now, Vehicle, VehicleDetails, VehicleId};
