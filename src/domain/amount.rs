//! Raw asset quantity with checked arithmetic.

use core::fmt;

/// A raw asset quantity in the smallest indivisible unit.
///
/// Reserves, balances, allowances, and swap amounts are all `Amount`s.
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of wrapping or panicking.
/// Division always truncates (floor), which is the only rounding mode the
/// pool uses.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Amount;
///
/// let a = Amount::new(10);
/// let b = Amount::new(400);
/// assert_eq!(a.checked_mul(&b), Some(Amount::new(4_000)));
/// assert_eq!(Amount::new(4_000).checked_div_floor(&Amount::new(110)), Some(Amount::new(36)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Truncating division. Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div_floor(&self, divisor: &Self) -> Option<Self> {
        match self.0.checked_div(divisor.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
