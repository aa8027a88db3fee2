//! Liquidity-side trait extending [`SwapPool`].
//!
//! [`LiquidityPool`] issues and redeems pool shares.  There are two layers:
//!
//! - [`LiquidityPool::add_liquidity`] and [`LiquidityPool::remove_liquidity`]
//!   move the caller's assets or shares into the pool and then run the
//!   matching primitive.
//! - [`LiquidityPool::mint`] and [`LiquidityPool::burn`] are the primitives.
//!   They settle whatever the pool holds beyond its cached reserves (for
//!   `mint`) or whatever shares the pool holds (for `burn`), so a caller
//!   who has already made the transfer can invoke them directly.
//!
//! # Share Accounting
//!
//! ```text
//! first mint:  liquidity = floor(sqrt(amount0 × amount1))
//! later mints: liquidity = min(amount0 × supply / reserve0,
//!                              amount1 × supply / reserve1)
//! burn:        amount_i  = liquidity × balance_i / supply
//! ```
//!
//! The share supply changes only through `mint` and `burn`.

use super::SwapPool;
use crate::domain::{Address, Amount, Liquidity};
use crate::error::PoolError;

/// Share issuance and redemption for a two-asset pool.
pub trait LiquidityPool: SwapPool {
    /// Deposits up to `amount_low_in` / `amount_high_in` from `caller` at
    /// the current reserve ratio and mints shares to `caller`.
    ///
    /// An empty pool accepts both amounts as given.  Otherwise the larger
    /// side is trimmed to match the other at the reserve ratio, and only
    /// the trimmed amounts are pulled.
    ///
    /// # Returns
    ///
    /// `(amount_low, amount_high, liquidity)`: the committed amounts and the
    /// shares minted.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Validation`] if a quote input is zero.
    /// - [`PoolError::InsufficientLiquidity`] if an optimal amount or the
    ///   minted liquidity is zero.
    /// - [`PoolError::Reentrancy`] if the guard is already held.
    /// - [`PoolError::Ledger`] if a transfer fails.
    fn add_liquidity(
        &self,
        caller: &Address,
        amount_low_in: Amount,
        amount_high_in: Amount,
    ) -> Result<(Amount, Amount, Liquidity), PoolError>;

    /// Returns `liquidity` shares from `caller` to the pool and redeems
    /// them to `caller`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Validation`] if `liquidity` is zero.
    /// - [`PoolError::Ledger`] if `caller` holds fewer shares.
    /// - Anything [`LiquidityPool::burn`] returns.
    fn remove_liquidity(
        &self,
        caller: &Address,
        liquidity: Liquidity,
    ) -> Result<(Amount, Amount), PoolError>;

    /// Mints shares to `to` for the assets held beyond the cached reserves.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientLiquidity`] if the computed liquidity is
    ///   zero.
    /// - [`PoolError::Underflow`] if a balance sits below its reserve.
    /// - [`PoolError::Reentrancy`] if the guard is already held.
    fn mint(&self, to: &Address) -> Result<Liquidity, PoolError>;

    /// Burns every share the pool holds and pays the pro-rata assets to
    /// `to`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientLiquidity`] if the pool holds no shares
    ///   or either payout rounds to zero.
    /// - [`PoolError::Reentrancy`] if the guard is already held.
    /// - [`PoolError::Ledger`] if a payout transfer fails.
    fn burn(&self, to: &Address) -> Result<(Amount, Amount), PoolError>;

    /// Outstanding pool shares.
    #[must_use]
    fn total_supply(&self) -> Liquidity;
}
