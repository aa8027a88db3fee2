//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic that
//! returns [`Result<Self, PoolError>`](crate::error::PoolError) instead of
//! wrapping or panicking on overflow, underflow, or division by zero.
//!
//! # Examples
//!
//! ```
//! use hydra_pair::domain::Amount;
//! use hydra_pair::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(10));
//! assert_eq!(sum, Ok(Amount::new(110)));
//! ```

use super::wide::{narrow, widen_mul, U256};
use crate::domain::Amount;
use crate::error::PoolError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: saturation hides bugs; errors propagate instead.
/// - Division truncates towards zero.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_mul(&self, other: &Self) -> Result<Self, PoolError>;

    /// Checked floor division.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self) -> Result<Self, PoolError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_add(other)
            .ok_or(PoolError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_sub(other)
            .ok_or(PoolError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_mul(other)
            .ok_or(PoolError::Overflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_div_floor(other)
            .ok_or(PoolError::DivisionByZero)
    }
}

/// Computes `floor(a × b / denominator)`.
///
/// The product is formed in 256 bits, so only a quotient that does not fit
/// in an [`Amount`] is an error.
///
/// # Errors
///
/// - [`PoolError::DivisionByZero`] if `denominator` is zero.
/// - [`PoolError::Overflow`] if the quotient exceeds `u128::MAX`.
pub fn mul_div_floor(a: Amount, b: Amount, denominator: Amount) -> Result<Amount, PoolError> {
    div_floor(widen_mul(a, b), denominator, "mul-div quotient overflow")
}

/// Floor division of a wide numerator, narrowed with `context` on overflow.
fn div_floor(
    numerator: U256,
    denominator: Amount,
    context: &'static str,
) -> Result<Amount, PoolError> {
    if denominator.is_zero() {
        return Err(PoolError::DivisionByZero);
    }
    narrow(numerator / U256::from(denominator.get()), context)
}
