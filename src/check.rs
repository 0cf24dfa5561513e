//! Argument checks shared by operators and indicators.
//!
//! Each check either passes its argument through or fails with the
//! matching [`MooError`] variant. Nothing is clamped or corrected.

use crate::error::{MooError, Result};

/// Fails unless `probability` lies in the closed interval `[0, 1]`.
///
/// NaN is rejected.
///
/// ```
/// use u_moo::check::probability_is_valid;
///
/// assert_eq!(probability_is_valid(0.25).unwrap(), 0.25);
/// assert!(probability_is_valid(1.1).is_err());
/// ```
pub fn probability_is_valid(probability: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&probability) {
        Ok(probability)
    } else {
        Err(MooError::Validation(format!(
            "probability {probability} is not in [0, 1]"
        )))
    }
}

/// Unwraps a required argument, failing with [`MooError::NullArgument`]
/// when it is absent.
pub fn not_null<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(MooError::NullArgument(name))
}

/// Fails unless a vector of length `found` matches the `expected`
/// dimensionality.
pub fn dimension_matches(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(MooError::DimensionMismatch { expected, found })
    }
}
