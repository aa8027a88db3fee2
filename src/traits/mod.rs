//! Core trait abstractions for pool operations.
//!
//! [`SwapPool`] covers trading and [`LiquidityPool`] covers share issuance
//! and redemption.  Both are implemented by [`Pool`](crate::pool::Pool).

mod liquidity_pool;
mod swap_pool;

pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
