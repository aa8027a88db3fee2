//! The constant product pool and its engines.
//!
//! | File | Contents |
//! |------|----------|
//! | `pair.rs` | [`Pool`]: identity, reserve cache, accessors, execution plumbing |
//! | `guard.rs` | [`ExecutionGuard`] and its RAII [`GuardTicket`] |
//! | `frame.rs` | All-or-nothing operation frames |
//! | `swap.rs` | Swap engine ([`SwapPool`](crate::traits::SwapPool) impl) |
//! | `liquidity.rs` | Liquidity engine ([`LiquidityPool`](crate::traits::LiquidityPool) impl) |

mod frame;
mod guard;
mod liquidity;
mod pair;
mod swap;

#[cfg(test)]
mod proptest_properties;
#[cfg(test)]
pub(crate) mod testkit;

pub use guard::{ExecutionGuard, GuardState, GuardTicket};
pub use pair::Pool;
