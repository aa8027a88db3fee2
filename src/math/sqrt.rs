//! Integer square root.

use super::wide::{widen_mul, U256};
use crate::domain::Amount;

/// Returns `floor(√n)` using Newton's method.
///
/// Converges for every 256-bit input; the first iterate `⌈n / 2⌉` never
/// overflows, and each subsequent iterate is strictly smaller until the
/// fixed point is reached.
///
/// # Examples
///
/// ```
/// use hydra_pair::math::{isqrt, U256};
///
/// assert_eq!(isqrt(U256::from(40_000u32)), U256::from(200u32));
/// assert_eq!(isqrt(U256::from(99u32)), U256::from(9u32));
/// ```
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n < U256::from(2u8) {
        return n;
    }
    let mut x = n;
    let mut y = (n >> 1) + (n & U256::one());
    while y < x {
        x = y;
        y = (x + n / x) >> 1;
    }
    x
}

/// Geometric mean `floor(√(a × b))` of two amounts.
///
/// The product is taken in 256 bits and its root is at most
/// `max(a, b)`, so the result always fits in an [`Amount`].
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Amount;
/// use hydra_pair::math::sqrt_product;
///
/// assert_eq!(sqrt_product(Amount::new(100), Amount::new(400)), Amount::new(200));
/// ```
#[must_use]
pub fn sqrt_product(a: Amount, b: Amount) -> Amount {
    Amount::new(isqrt(widen_mul(a, b)).low_u128())
}
