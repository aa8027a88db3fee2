//! 256-bit intermediates for products of two amounts.
//!
//! Amounts and reserves are stored as `u128`, but the product of two of
//! them needs up to 256 bits.  Every formula in this crate widens before
//! multiplying and only narrows the final result, so `Overflow` means the
//! *answer* does not fit, never that an intermediate did.

// Covers the items expanded by `construct_uint!`.
#![allow(unsafe_code, missing_docs)]

use uint::construct_uint;

use crate::domain::Amount;
use crate::error::PoolError;

construct_uint! {
    /// 256-bit unsigned integer for intermediate products.
    pub struct U256(4);
}

/// Exact product `a × b`; two `u128` factors always fit in 256 bits.
#[inline]
pub(crate) fn widen_mul(a: Amount, b: Amount) -> U256 {
    U256::from(a.get()) * U256::from(b.get())
}

/// Narrows a wide value back to an [`Amount`].
///
/// # Errors
///
/// Returns [`PoolError::Overflow`] with `context` if `value` exceeds
/// `u128::MAX`.
#[inline]
pub(crate) fn narrow(value: U256, context: &'static str) -> Result<Amount, PoolError> {
    if value > U256::from(u128::MAX) {
        return Err(PoolError::Overflow(context));
    }
    Ok(Amount::new(value.low_u128()))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn widen_mul_exceeds_u128() {
        let p = widen_mul(Amount::MAX, Amount::MAX);
        assert!(p > U256::from(u128::MAX));
        assert_eq!(p / U256::from(u128::MAX), U256::from(u128::MAX));
    }

    #[test]
    fn narrow_accepts_u128_max() {
        assert_eq!(narrow(U256::from(u128::MAX), "x"), Ok(Amount::MAX));
    }

    #[test]
    fn narrow_rejects_wider_values() {
        let Err(PoolError::Overflow("too wide")) =
            narrow(U256::from(u128::MAX) + U256::one(), "too wide")
        else {
            panic!("expected Overflow");
        };
    }
}
