//! Math utilities for checked arithmetic, percentages and pro-rata shares

use soroban_sdk::{Env, I256};

/// Safe math operations to prevent overflow/underflow
pub struct SafeMath;

impl SafeMath {
    /// Safely add two i128 values, panicking on overflow
    pub fn add(a: i128, b: i128) -> i128 {
        a.checked_add(b).expect("Math: addition overflow")
    }

    /// Safely subtract two i128 values, panicking on underflow
    pub fn sub(a: i128, b: i128) -> i128 {
        a.checked_sub(b).expect("Math: subtraction underflow")
    }

    /// Safely multiply two i128 values, panicking on overflow
    pub fn mul(a: i128, b: i128) -> i128 {
        a.checked_mul(b).expect("Math: multiplication overflow")
    }

    /// Safely divide two i128 values, panicking on division by zero
    pub fn div(a: i128, b: i128) -> i128 {
        if b == 0 {
            panic!("Math: division by zero");
        }
        a.checked_div(b).expect("Math: division overflow")
    }

    /// Calculate percentage: (value * percent) / 100, rounded down
    ///
    /// # Arguments
    /// * `value` - The base value
    /// * `percent` - The percentage (0-100)
    pub fn percent(value: i128, percent: u32) -> i128 {
        if percent > 100 {
            panic!("Math: percent must be <= 100");
        }
        Self::div(Self::mul(value, percent as i128), 100)
    }

    /// Pro-rata share: (amount * numerator) / denominator, rounded down
    ///
    /// Rounding down means a share never exceeds what the pool holds, at the
    /// cost of dust. Very small amounts against a large pool can round to zero.
    /// The intermediate product is carried in 256 bits, so only a quotient
    /// outside the i128 range panics.
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `amount` - The holder's stake
    /// * `numerator` - The pool value being shared out
    /// * `denominator` - The sum of all stakes
    pub fn mul_div_floor(e: &Env, amount: i128, numerator: i128, denominator: i128) -> i128 {
        if denominator == 0 {
            panic!("Math: division by zero");
        }
        let product = I256::from_i128(e, amount).mul(&I256::from_i128(e, numerator));
        product
            .div(&I256::from_i128(e, denominator))
            .to_i128()
            .expect("Math: mul_div overflow")
    }
}
