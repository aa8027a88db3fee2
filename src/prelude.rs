//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use hydra_pair::prelude::*;
//! ```
//!
//! This re-exports the domain types, the pool traits, configuration, the
//! ledger interface and error types so that consumers don't need to import
//! from individual submodules.

pub use crate::domain::{
    Address, Amount, DepositRecord, Liquidity, PoolEvent, Reserves, SwapRecord, TokenPair,
    WithdrawalRecord,
};

pub use crate::traits::{LiquidityPool, SwapPool};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{GuardScope, PoolConfig};

pub use crate::ledger::{AssetRegistry, MemoryLedger, ShareLedger, TokenLedger};

pub use crate::pool::{GuardState, Pool};

pub use crate::error::{PoolError, Result};
