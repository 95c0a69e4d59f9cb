//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod vehicles;

pub use vehicles::{create_vehicle, update_vehicle};
