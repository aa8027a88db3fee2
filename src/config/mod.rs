//! Pool deployment configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for a pool: its own
//! address, the canonically ordered asset pair, and the [`GuardScope`]
//! deciding which [`EntryPoint`]s take the exclusive execution guard.

mod pool_config;

pub use pool_config::{EntryPoint, GuardScope, PoolConfig};
