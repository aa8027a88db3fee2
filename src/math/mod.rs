//! Arithmetic utilities for pool calculations.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe operations
//! on amounts, the integer square root used to size the first share
//! issuance, and the pure pricing formulas [`quote`] and [`amount_out`].
//! Products of two amounts are carried in a 256-bit [`U256`] and narrowed
//! back only once the final value is known.

mod checked;
mod pricing;
mod sqrt;
mod wide;

pub use checked::{mul_div_floor, CheckedArithmetic};
pub use pricing::{amount_out, quote};
pub use sqrt::{isqrt, sqrt_product};
pub use wide::U256;
