//! Fundamental domain value types used throughout the pool.
//!
//! This module contains the value types that model the pool's domain:
//! identities, amounts, shares, the ordered asset pair, the reserve
//! snapshot, and the audit records.  All types use newtypes or plain
//! `Copy` records with validated constructors where an invariant exists.

mod address;
mod amount;
mod event;
mod liquidity;
mod reserves;
mod token_pair;

pub use address::Address;
pub use amount::Amount;
pub use event::{DepositRecord, PoolEvent, SwapRecord, WithdrawalRecord};
pub use liquidity::Liquidity;
pub use reserves::Reserves;
pub use token_pair::{Side, TokenPair};
