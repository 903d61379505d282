//! Checked arithmetic helpers.
//!
//! The counted values are fixed-width `i64`, so the helpers refuse to wrap:
//! overflow is surfaced as [`TourError::Overflow`] instead of a panic or a
//! silently wrong result.

use crate::error::TourError;

/// Adds two numbers.
///
/// # Errors
///
/// Returns [`TourError::Overflow`] if the sum does not fit in `i64`.
pub fn add(x: i64, y: i64) -> Result<i64, TourError> {
    x.checked_add(y).ok_or_else(|| TourError::overflow("+", x, y))
}

/// Multiplies two numbers.
///
/// # Errors
///
/// Returns [`TourError::Overflow`] if the product does not fit in `i64`.
pub fn multiply(x: i64, y: i64) -> Result<i64, TourError> {
    x.checked_mul(y).ok_or_else(|| TourError::overflow("*", x, y))
}
