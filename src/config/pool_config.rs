//! Configuration for a two-asset constant product pool.

use core::fmt;

use crate::domain::{Address, TokenPair};
use crate::error::PoolError;

/// A state-mutating pool entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    /// `swap`
    Swap,
    /// `add_liquidity`
    AddLiquidity,
    /// `remove_liquidity`
    RemoveLiquidity,
    /// `mint`
    Mint,
    /// `burn`
    Burn,
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Swap => "swap",
            Self::AddLiquidity => "add_liquidity",
            Self::RemoveLiquidity => "remove_liquidity",
            Self::Mint => "mint",
            Self::Burn => "burn",
        };
        f.write_str(name)
    }
}

/// Which entry points take the exclusive execution guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuardScope {
    /// Every state-mutating entry point takes the guard, so no operation
    /// can touch reserves while another is in the middle of a ledger call.
    #[default]
    AllMutations,
    /// Only `mint` and `burn` take the guard.  `swap` runs unguarded, and
    /// the transfers `add_liquidity` and `remove_liquidity` make before
    /// reaching mint or burn run unguarded too.
    MintBurnOnly,
}

impl GuardScope {
    /// Returns `true` if `entry` must hold the guard under this scope.
    #[must_use]
    pub const fn covers(&self, entry: EntryPoint) -> bool {
        match self {
            Self::AllMutations => true,
            Self::MintBurnOnly => matches!(entry, EntryPoint::Mint | EntryPoint::Burn),
        }
    }
}

/// Deployment parameters for a [`Pool`](crate::pool::Pool).
///
/// # Validation
///
/// - The two asset identities must differ.
/// - The pool's own address (which also names its share token) must not
///   collide with either asset.
///
/// Whether the assets are actually deployed is checked later, against an
/// [`AssetRegistry`](crate::ledger::AssetRegistry), when the pool is built.
///
/// # Examples
///
/// ```
/// use hydra_pair::config::{GuardScope, PoolConfig};
/// use hydra_pair::domain::Address;
///
/// let cfg = PoolConfig::new(
///     Address::from_low_u64(1_000),
///     Address::from_low_u64(2),
///     Address::from_low_u64(1),
/// )
/// .expect("valid config");
///
/// assert_eq!(cfg.token_pair().low(), Address::from_low_u64(1));
/// assert_eq!(cfg.guard_scope(), GuardScope::AllMutations);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pool_address: Address,
    token_pair: TokenPair,
    guard_scope: GuardScope,
}

impl PoolConfig {
    /// Creates a new `PoolConfig` with the default guard scope.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Validation`] if the assets are identical or if
    /// the pool address equals either asset.
    pub fn new(
        pool_address: Address,
        asset_x: Address,
        asset_y: Address,
    ) -> Result<Self, PoolError> {
        let config = Self {
            pool_address,
            token_pair: TokenPair::new(asset_x, asset_y)?,
            guard_scope: GuardScope::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the guard scope.
    #[must_use]
    pub fn with_guard_scope(mut self, guard_scope: GuardScope) -> Self {
        self.guard_scope = guard_scope;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Validation`] if the pool address equals either
    /// asset identity.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.token_pair.contains(&self.pool_address) {
            return Err(PoolError::Validation(
                "pool address must differ from both assets",
            ));
        }
        Ok(())
    }

    /// Returns the pool's own address.
    #[must_use]
    pub const fn pool_address(&self) -> Address {
        self.pool_address
    }

    /// Returns the canonically ordered asset pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the guard scope.
    #[must_use]
    pub const fn guard_scope(&self) -> GuardScope {
        self.guard_scope
    }
}
