//! Vehicle field validation
//!
//! Checks run in a fixed order and stop at the first failure.

use chrono::{Datelike, Utc};

use crate::error::ValidationError;

/// Oldest model year is exclusive: 1950 itself is rejected.
pub const MIN_YEAR_EXCLUSIVE: i32 = 1950;

/// Validate vehicle fields against the current calendar year.
pub fn validate_vehicle_fields(
    brand: &str,
    model: &str,
    year: i32,
    price: f64,
) -> Result<(), ValidationError> {
    validate_vehicle_fields_at(brand, model, year, price, Utc::now().year())
}

/// Validate vehicle fields with an explicit current year.
pub fn validate_vehicle_fields_at(
    brand: &str,
    model: &str,
    year: i32,
    price: f64,
    current_year: i32,
) -> Result<(), ValidationError> {
    if brand.is_empty() {
        return Err(ValidationError::EmptyBrand);
    }
    if model.is_empty() {
        return Err(ValidationError::EmptyModel);
    }
    if year <= MIN_YEAR_EXCLUSIVE || year > current_year + 1 {
        return Err(ValidationError::InvalidYear);
    }
    // NaN fails every comparison, so it is rejected here too
    if price.is_nan() || price <= 0.0 {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(())
}
