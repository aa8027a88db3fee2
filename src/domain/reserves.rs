//! Cached reserve snapshot.

use super::{Amount, Side};

/// The pool's recorded view of its own balances of the two assets.
///
/// Pricing and liquidity-ratio math read this snapshot; it is rewritten
/// at the end of every swap, mint, and burn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reserves {
    low: Amount,
    high: Amount,
}

impl Reserves {
    /// An empty pool.
    pub const EMPTY: Self = Self {
        low: Amount::ZERO,
        high: Amount::ZERO,
    };

    /// Creates a reserve snapshot.
    #[must_use]
    pub const fn new(low: Amount, high: Amount) -> Self {
        Self { low, high }
    }

    /// Reserve of the low-identity asset.
    pub const fn low(&self) -> Amount {
        self.low
    }

    /// Reserve of the high-identity asset.
    pub const fn high(&self) -> Amount {
        self.high
    }

    /// Returns `(reserve_in, reserve_out)` for a trade selling `side_in`.
    #[must_use]
    pub const fn oriented(&self, side_in: Side) -> (Amount, Amount) {
        match side_in {
            Side::Low => (self.low, self.high),
            Side::High => (self.high, self.low),
        }
    }

    /// Builds a snapshot from amounts given in trade orientation.
    #[must_use]
    pub const fn from_oriented(side_in: Side, reserve_in: Amount, reserve_out: Amount) -> Self {
        match side_in {
            Side::Low => Self::new(reserve_in, reserve_out),
            Side::High => Self::new(reserve_out, reserve_in),
        }
    }

    /// Returns `true` when neither asset has been deposited.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.low.is_zero() && self.high.is_zero()
    }

    /// Returns the reserves as a `(low, high)` tuple.
    #[must_use]
    pub const fn as_tuple(&self) -> (Amount, Amount) {
        (self.low, self.high)
    }
}
