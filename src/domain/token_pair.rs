//! Canonically ordered pair of distinct asset identities.

use super::Address;
use crate::error::PoolError;

/// Which of the pool's two assets an identity refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The asset with the lower identity.
    Low,
    /// The asset with the higher identity.
    High,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

/// An ordered pair of distinct assets, canonically sorted by identity.
///
/// The canonical ordering guarantees `low() < high()`, so `(A, B)` and
/// `(B, A)` produce the same pair and a single pool exists per unordered
/// pair of assets.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Address, TokenPair};
///
/// let a = Address::from_low_u64(1);
/// let b = Address::from_low_u64(2);
///
/// let pair = TokenPair::new(b, a).expect("distinct assets");
/// assert_eq!(pair.low(), a);
/// assert_eq!(pair.high(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    low: Address,
    high: Address,
}

impl TokenPair {
    /// Creates a new canonically-ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Validation`] if both identities are equal.
    pub fn new(asset_x: Address, asset_y: Address) -> Result<Self, PoolError> {
        if asset_x == asset_y {
            return Err(PoolError::Validation(
                "token pair requires two distinct assets",
            ));
        }

        let (low, high) = if asset_x < asset_y {
            (asset_x, asset_y)
        } else {
            (asset_y, asset_x)
        };

        Ok(Self { low, high })
    }

    /// Returns the asset with the lower identity.
    #[must_use]
    pub const fn low(&self) -> Address {
        self.low
    }

    /// Returns the asset with the higher identity.
    #[must_use]
    pub const fn high(&self) -> Address {
        self.high
    }

    /// Returns `true` if `asset` is one of the pair's two assets.
    #[must_use]
    pub fn contains(&self, asset: &Address) -> bool {
        self.low == *asset || self.high == *asset
    }

    /// Returns which side `asset` sits on, or `None` for a foreign asset.
    #[must_use]
    pub fn side_of(&self, asset: &Address) -> Option<Side> {
        if *asset == self.low {
            Some(Side::Low)
        } else if *asset == self.high {
            Some(Side::High)
        } else {
            None
        }
    }

    /// Resolves a trade direction.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Validation`] if either asset is foreign to the
    /// pair or if both name the same asset.
    pub fn direction(&self, asset_in: &Address, asset_out: &Address) -> Result<Side, PoolError> {
        let side_in = self
            .side_of(asset_in)
            .ok_or(PoolError::Validation("input asset is not part of this pool"))?;
        let side_out = self
            .side_of(asset_out)
            .ok_or(PoolError::Validation("output asset is not part of this pool"))?;
        if side_in == side_out {
            return Err(PoolError::Validation(
                "input and output assets must differ",
            ));
        }
        Ok(side_in)
    }
}
