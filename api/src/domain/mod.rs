//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies
//! - `validation`: Field invariants shared by the create and update flows

pub mod entities;
pub mod ports;
pub mod validation;
