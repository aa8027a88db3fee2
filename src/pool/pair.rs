//! Pool identity, reserve cache and execution plumbing.
//!
//! [`Pool`] owns the state every engine shares:
//!
//! - the two asset ledgers, resolved once at deployment,
//! - the share ledger it mints into and burns from,
//! - the reserve cache,
//! - the execution guard,
//! - the audit log.
//!
//! The engines themselves live in `swap.rs` and `liquidity.rs` as the
//! [`SwapPool`](crate::traits::SwapPool) and
//! [`LiquidityPool`](crate::traits::LiquidityPool) implementations.

use core::cell::{Cell, RefCell};
use core::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use super::frame::Frame;
use super::guard::{ExecutionGuard, GuardState, GuardTicket};
use crate::config::{EntryPoint, PoolConfig};
use crate::domain::{Address, Amount, PoolEvent, Reserves, Side, TokenPair};
use crate::error::PoolError;
use crate::ledger::{AssetRegistry, MemoryLedger, ShareLedger, TokenLedger};
use crate::math;

/// A two-asset constant product pool.
///
/// Deployed from a [`PoolConfig`] against an [`AssetRegistry`] that must
/// know both assets.  Reserves start at zero, the share supply starts at
/// zero and the guard starts open.
///
/// All entry points take `&self`.  A pool is usually held in an [`Rc`] so
/// that ledger hooks can keep a [`Weak`](std::rc::Weak) handle back to it.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
///
/// use hydra_pair::config::PoolConfig;
/// use hydra_pair::domain::{Address, Amount, Reserves};
/// use hydra_pair::ledger::{AssetRegistry, MemoryLedger, TokenLedger};
/// use hydra_pair::pool::Pool;
/// use hydra_pair::traits::{LiquidityPool, SwapPool};
///
/// let alice = Address::from_low_u64(7);
/// let pool_addr = Address::from_low_u64(1_000);
/// let low = Rc::new(MemoryLedger::new(Address::from_low_u64(1)));
/// let high = Rc::new(MemoryLedger::new(Address::from_low_u64(2)));
/// low.mint(&alice, Amount::new(1_000)).expect("mint");
/// high.mint(&alice, Amount::new(1_000)).expect("mint");
/// low.approve(&alice, &pool_addr, Amount::MAX).expect("approve");
/// high.approve(&alice, &pool_addr, Amount::MAX).expect("approve");
///
/// let mut registry = AssetRegistry::new();
/// registry.register(low.clone());
/// registry.register(high.clone());
///
/// let cfg = PoolConfig::new(pool_addr, low.address(), high.address()).expect("config");
/// let pool = Pool::deploy(&cfg, &registry).expect("deploy");
///
/// pool.add_liquidity(&alice, Amount::new(100), Amount::new(400)).expect("deposit");
/// let out = pool
///     .swap(&alice, &low.address(), &high.address(), Amount::new(10))
///     .expect("swap");
///
/// assert_eq!(out, Amount::new(36));
/// assert_eq!(pool.reserves(), Reserves::new(Amount::new(110), Amount::new(364)));
/// ```
pub struct Pool {
    pub(super) config: PoolConfig,
    pub(super) asset_low: Rc<dyn TokenLedger>,
    pub(super) asset_high: Rc<dyn TokenLedger>,
    pub(super) shares: Rc<dyn ShareLedger>,
    pub(super) reserves: Cell<Reserves>,
    pub(super) guard: ExecutionGuard,
    pub(super) events: RefCell<Vec<PoolEvent>>,
}

impl Pool {
    /// Deploys a pool with a fresh in-memory share ledger named after the
    /// pool address.
    ///
    /// # Errors
    ///
    /// - Propagates any error from [`PoolConfig::validate`].
    /// - Returns [`PoolError::Validation`] if either asset is not
    ///   registered.
    pub fn deploy(config: &PoolConfig, registry: &AssetRegistry) -> Result<Self, PoolError> {
        let shares = Rc::new(MemoryLedger::new(config.pool_address()));
        Self::deploy_with_share_ledger(config, registry, shares)
    }

    /// Deploys a pool that issues its shares on `shares`.
    ///
    /// # Errors
    ///
    /// - Propagates any error from [`PoolConfig::validate`].
    /// - Returns [`PoolError::Validation`] if either asset is not
    ///   registered, if the share ledger's address is not the pool
    ///   address, or if the share ledger already has a supply.
    pub fn deploy_with_share_ledger(
        config: &PoolConfig,
        registry: &AssetRegistry,
        shares: Rc<dyn ShareLedger>,
    ) -> Result<Self, PoolError> {
        config.validate()?;
        let pair = config.token_pair();
        let asset_low = registry
            .resolve(&pair.low())
            .ok_or(PoolError::Validation("low asset is not deployed"))?;
        let asset_high = registry
            .resolve(&pair.high())
            .ok_or(PoolError::Validation("high asset is not deployed"))?;
        if shares.address() != config.pool_address() {
            return Err(PoolError::Validation(
                "share ledger must live at the pool address",
            ));
        }
        if !shares.total_supply().is_zero() {
            return Err(PoolError::Validation(
                "share ledger must start with zero supply",
            ));
        }

        debug!(
            pool = %config.pool_address(),
            low = %pair.low(),
            high = %pair.high(),
            scope = ?config.guard_scope(),
            "pool deployed"
        );

        Ok(Self {
            config: config.clone(),
            asset_low,
            asset_high,
            shares,
            reserves: Cell::new(Reserves::EMPTY),
            guard: ExecutionGuard::new(),
            events: RefCell::new(Vec::new()),
        })
    }

    /// Deposit ratio helper: `floor(amount_a × reserve_b / reserve_a)`.
    ///
    /// # Errors
    ///
    /// See [`math::quote`].
    pub fn quote(
        amount_a: Amount,
        reserve_a: Amount,
        reserve_b: Amount,
    ) -> Result<Amount, PoolError> {
        math::quote(amount_a, reserve_a, reserve_b)
    }

    /// The pool's own address, which is also the identity of its share
    /// token.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.config.pool_address()
    }

    /// Identity of the low asset.
    #[must_use]
    pub const fn token_a(&self) -> Address {
        self.config.token_pair().low()
    }

    /// Identity of the high asset.
    #[must_use]
    pub const fn token_b(&self) -> Address {
        self.config.token_pair().high()
    }

    /// Cached `(reserve_a, reserve_b)`, ordered like [`Pool::token_a`] and
    /// [`Pool::token_b`].
    #[must_use]
    pub fn get_reserves(&self) -> (Amount, Amount) {
        self.reserves.get().as_tuple()
    }

    /// Deployment parameters.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// The pool share token, without its mint and burn capabilities.
    #[must_use]
    pub fn share_token(&self) -> &dyn TokenLedger {
        self.shares.as_token_ledger()
    }

    /// Whether a guarded operation is currently in flight.
    #[must_use]
    pub fn guard_state(&self) -> GuardState {
        self.guard.state()
    }

    /// Audit records of every committed operation, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<PoolEvent> {
        self.events.borrow().clone()
    }

    pub(super) fn ledger(&self, side: Side) -> &dyn TokenLedger {
        match side {
            Side::Low => self.asset_low.as_ref(),
            Side::High => self.asset_high.as_ref(),
        }
    }

    pub(super) fn pair(&self) -> &TokenPair {
        self.config.token_pair()
    }

    /// Balances the pool actually holds on both asset ledgers.
    pub(super) fn balances(&self) -> Reserves {
        let me = self.address();
        Reserves::new(
            self.asset_low.balance_of(&me),
            self.asset_high.balance_of(&me),
        )
    }

    pub(super) fn set_reserves(&self, reserves: Reserves) {
        debug!(low = %reserves.low(), high = %reserves.high(), "reserves updated");
        self.reserves.set(reserves);
    }

    pub(super) fn sync_reserves(&self) {
        self.set_reserves(self.balances());
    }

    pub(super) fn emit(&self, event: PoolEvent) {
        self.events.borrow_mut().push(event);
    }

    /// Takes the guard if the configured scope covers `entry`.
    pub(super) fn enter(&self, entry: EntryPoint) -> Result<Option<GuardTicket<'_>>, PoolError> {
        if !self.config.guard_scope().covers(entry) {
            return Ok(None);
        }
        match self.guard.acquire() {
            Ok(ticket) => Ok(Some(ticket)),
            Err(err) => {
                warn!(pool = %self.address(), %entry, "rejected: execution guard is held");
                Err(err)
            }
        }
    }

    /// Takes the guard for the `inner` primitive reached from `outer`,
    /// unless `outer` already holds it.
    pub(super) fn escalate(
        &self,
        outer: EntryPoint,
        inner: EntryPoint,
    ) -> Result<Option<GuardTicket<'_>>, PoolError> {
        if self.config.guard_scope().covers(outer) {
            return Ok(None);
        }
        self.enter(inner)
    }

    /// Runs `body` under the guard (as the scope dictates) inside an
    /// atomic frame.
    pub(super) fn execute<T>(
        &self,
        entry: EntryPoint,
        body: impl FnOnce() -> Result<T, PoolError>,
    ) -> Result<T, PoolError> {
        let _ticket = self.enter(entry)?;
        let frame = Frame::open(self);
        match body() {
            Ok(value) => {
                frame.commit(self)?;
                Ok(value)
            }
            Err(err) => {
                frame.revert(self)?;
                warn!(pool = %self.address(), %entry, error = %err, "operation rolled back");
                Err(err)
            }
        }
    }
}

impl fmt::Debug for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("address", &self.address())
            .field("token_pair", self.pair())
            .field("reserves", &self.reserves.get())
            .field("total_supply", &self.shares.total_supply())
            .field("guard", &self.guard.state())
            .field("guard_scope", &self.config.guard_scope())
            .finish_non_exhaustive()
    }
}
