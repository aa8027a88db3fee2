//! Swap-side trait for executing trades and querying pool state.
//!
//! [`SwapPool`] covers everything a trader needs:
//!
//! 1. **Execute**: [`SwapPool::swap`] sells one asset for the other.
//! 2. **Preview**: [`SwapPool::get_amount_out`] runs the pricing formula
//!    against the cached reserves without moving anything.
//! 3. **Inspect**: [`SwapPool::token_pair`] and [`SwapPool::reserves`].
//!
//! # Pricing
//!
//! No fee is charged; the whole input enters the curve:
//!
//! ```text
//! amount_out = floor(amount_in × reserve_out / (reserve_in + amount_in))
//! ```
//!
//! # Receivers
//!
//! Every method takes `&self`.  Executing a swap calls into token ledgers
//! that may run foreign code, and that code may hold another handle to the
//! same pool.  Whether such a reentrant call is accepted is decided by the
//! pool's [`GuardScope`](crate::config::GuardScope), not by the borrow
//! checker.

use crate::domain::{Address, Amount, Reserves, TokenPair};
use crate::error::PoolError;

/// Trading interface of a two-asset pool.
///
/// # Errors
///
/// Fallible methods return [`Result<T, PoolError>`].  The common variants:
///
/// - [`PoolError::Validation`]: foreign or identical assets, zero amount.
/// - [`PoolError::InsufficientLiquidity`]: reserves cannot cover the trade.
/// - [`PoolError::Reentrancy`]: a guarded operation is already in flight.
/// - [`PoolError::Ledger`]: an asset transfer failed.
pub trait SwapPool {
    /// Sells `amount_in` of `asset_in` from `caller` for `asset_out`.
    ///
    /// The output is sent to `caller` before the input is pulled, so
    /// `caller` must have approved the pool for at least `amount_in` on
    /// the input ledger.  If the formula yields zero output the call is a
    /// no-op that returns [`Amount::ZERO`].
    ///
    /// # Errors
    ///
    /// - [`PoolError::Validation`] if either asset is foreign, the assets
    ///   are identical, or `amount_in` is zero.
    /// - [`PoolError::InsufficientLiquidity`] if the output exceeds the
    ///   cached opposite reserve.
    /// - [`PoolError::Reentrancy`] if the guard is held and covers swaps.
    /// - [`PoolError::Ledger`] if either transfer fails.
    fn swap(
        &self,
        caller: &Address,
        asset_in: &Address,
        asset_out: &Address,
        amount_in: Amount,
    ) -> Result<Amount, PoolError>;

    /// Output [`SwapPool::swap`] would produce against the current reserves.
    ///
    /// # Errors
    ///
    /// Same validation as [`SwapPool::swap`], plus [`PoolError::Overflow`]
    /// if an intermediate does not fit.
    fn get_amount_out(
        &self,
        asset_in: &Address,
        asset_out: &Address,
        amount_in: Amount,
    ) -> Result<Amount, PoolError>;

    /// Canonically ordered asset pair served by the pool.
    #[must_use]
    fn token_pair(&self) -> &TokenPair;

    /// Cached reserves, low asset first.
    #[must_use]
    fn reserves(&self) -> Reserves;
}
