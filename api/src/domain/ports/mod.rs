//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;
pub mod showcase;

pub use repositories::VehicleRepository;
pub use showcase::{ListingUpdate, NewListing, ShowcaseClient};
