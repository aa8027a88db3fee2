//! Pure pricing formulas for the constant product curve.
//!
//! Neither formula charges a fee: the full input amount enters the curve.
//! Both divide with truncation, so rounding loss always stays in the pool.
//! Products are formed in 256 bits.

use super::mul_div_floor;
use super::wide::{narrow, widen_mul, U256};
use crate::domain::Amount;
use crate::error::PoolError;

/// Amount of the second asset matching `amount_a` at the ratio
/// `reserve_b / reserve_a`.
///
/// `floor(amount_a × reserve_b / reserve_a)`, with no rounding-up
/// correction.
///
/// # Errors
///
/// - [`PoolError::Validation`] if `amount_a` or either reserve is zero.
/// - [`PoolError::Overflow`] if the quoted amount does not fit.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Amount;
/// use hydra_pair::math::quote;
///
/// let b = quote(Amount::new(50), Amount::new(100), Amount::new(400));
/// assert_eq!(b, Ok(Amount::new(200)));
/// ```
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount, PoolError> {
    if amount_a.is_zero() {
        return Err(PoolError::Validation("quote amount must be non-zero"));
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(PoolError::Validation(
            "cannot quote against an empty reserve",
        ));
    }
    mul_div_floor(amount_a, reserve_b, reserve_a)
}

/// Output of selling `amount_in` into the curve.
///
/// `floor(amount_in × reserve_out / (reserve_in + amount_in))`.  A zero
/// result is a valid answer, not an error.  The result never exceeds
/// `reserve_out`, so no input size makes it overflow.
///
/// # Errors
///
/// Returns [`PoolError::Validation`] if `amount_in` is zero.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Amount;
/// use hydra_pair::math::amount_out;
///
/// let out = amount_out(Amount::new(10), Amount::new(100), Amount::new(400));
/// assert_eq!(out, Ok(Amount::new(36)));
/// ```
pub fn amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, PoolError> {
    if amount_in.is_zero() {
        return Err(PoolError::Validation("swap amount must be non-zero"));
    }
    let numerator = widen_mul(amount_in, reserve_out);
    let denominator = U256::from(reserve_in.get()) + U256::from(amount_in.get());
    narrow(numerator / denominator, "swap output overflow")
}
