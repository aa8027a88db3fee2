//! # Hydra Pair
//!
//! A two-asset constant product pool: reserves of two distinct fungible
//! assets, trades priced by `x · y = k` with no fee, and a fungible pool
//! share token representing proportional ownership of the reserves.
//!
//! The pool never stores balances itself.  Both underlying assets and the
//! pool's own share token are reached through the
//! [`TokenLedger`](ledger::TokenLedger) interface; [`MemoryLedger`](ledger::MemoryLedger)
//! is the in-process implementation shipped with the crate.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hydra-pair = "0.1"
//! ```
//!
//! ## Deploy a pool, deposit and trade
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use hydra_pair::prelude::*;
//!
//! let alice = Address::from_low_u64(7);
//! let pool_addr = Address::from_low_u64(1_000);
//!
//! // 1. Two asset ledgers, funded and approved for the pool
//! let usdc = Rc::new(MemoryLedger::new(Address::from_low_u64(1)));
//! let weth = Rc::new(MemoryLedger::new(Address::from_low_u64(2)));
//! for ledger in [&usdc, &weth] {
//!     ledger.mint(&alice, Amount::new(10_000)).expect("mint");
//!     ledger.approve(&alice, &pool_addr, Amount::MAX).expect("approve");
//! }
//! let mut registry = AssetRegistry::new();
//! registry.register(usdc.clone());
//! registry.register(weth.clone());
//!
//! // 2. Deploy (argument order does not matter)
//! let config = PoolConfig::new(pool_addr, weth.address(), usdc.address()).expect("config");
//! let pool = Pool::deploy(&config, &registry).expect("deploy");
//! assert_eq!(pool.token_a(), usdc.address());
//!
//! // 3. First deposit sets the price and mints sqrt(100 × 400) shares
//! let (_, _, shares) = pool
//!     .add_liquidity(&alice, Amount::new(100), Amount::new(400))
//!     .expect("deposit");
//! assert_eq!(shares, Liquidity::new(200));
//!
//! // 4. Sell 10 USDC: floor(10 × 400 / 110) = 36 WETH
//! let out = pool
//!     .swap(&alice, &usdc.address(), &weth.address(), Amount::new(10))
//!     .expect("swap");
//! assert_eq!(out, Amount::new(36));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  PoolConfig + AssetRegistry
//! └──────┬───────┘
//!        │ Pool::deploy
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  guard → atomic frame → engine
//! └──────┬───────┘
//!        │ SwapPool + LiquidityPool traits
//!        ▼
//! ┌──────────────┐
//! │    Ledgers    │  TokenLedger / ShareLedger (may re-enter the pool)
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  Address, Amount, Liquidity, Reserves, records
//! └──────────────┘
//! ```
//!
//! # Reentrancy
//!
//! A ledger call hands control to code the pool does not own.  Every
//! mutating entry point takes the pool's execution guard under the default
//! [`GuardScope::AllMutations`](config::GuardScope::AllMutations); a
//! reentrant call fails with [`PoolError::Reentrancy`](error::PoolError::Reentrancy)
//! instead of waiting.  [`GuardScope::MintBurnOnly`](config::GuardScope::MintBurnOnly)
//! narrows the guard to `mint` and `burn`.
//!
//! Independently of the guard, every entry point is all-or-nothing: a
//! failure restores ledgers, reserves and the audit log.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber:
//! `debug` for computed amounts, `info` for audit records, `warn` for
//! guard rejections and rollbacks, `error` for internal invariant breaches.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`TokenPair`](domain::TokenPair), audit records |
//! | [`traits`] | Core abstractions: [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) and [`GuardScope`](config::GuardScope) |
//! | [`ledger`] | Token Ledger Interface, [`MemoryLedger`](ledger::MemoryLedger), [`AssetRegistry`](ledger::AssetRegistry) |
//! | [`pool`]   | [`Pool`](pool::Pool), the execution guard and both engines |
//! | [`math`]   | Checked arithmetic, 256-bit intermediates, integer square root, pricing formulas |
//! | [`error`]  | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
