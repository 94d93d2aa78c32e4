//! Validation utilities for common input checks
//!
//! Each check returns a boolean so contracts can surface their own error variant.

/// Validation utility functions
pub struct Validation;

impl Validation {
    /// Amount is strictly greater than zero
    pub fn is_positive(amount: i128) -> bool {
        amount > 0
    }

    /// Percentage lies in 0..=100
    pub fn is_valid_percent(percent: u32) -> bool {
        percent <= 100
    }
}
