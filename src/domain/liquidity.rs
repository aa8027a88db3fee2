//! Pool share units.

use core::fmt;

use super::Amount;

/// A quantity of pool shares.
///
/// Distinct from [`Amount`] because it measures proportional ownership of
/// the pool's reserves rather than a quantity of either underlying asset.
/// On the share ledger shares are stored as plain amounts; use
/// [`Liquidity::as_amount`] and [`Liquidity::from_amount`] to cross over.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Amount, Liquidity};
///
/// let minted = Liquidity::new(200);
/// assert_eq!(minted.as_amount(), Amount::new(200));
/// assert_eq!(Liquidity::from_amount(Amount::new(200)), minted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Liquidity(u128);

impl Liquidity {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Liquidity` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if no shares are represented.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Reinterprets a share-ledger amount as liquidity.
    #[must_use]
    pub const fn from_amount(amount: Amount) -> Self {
        Self(amount.get())
    }

    /// Returns these shares as a share-ledger amount.
    pub const fn as_amount(&self) -> Amount {
        Amount::new(self.0)
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
