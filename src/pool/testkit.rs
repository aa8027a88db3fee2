//! Shared fixtures for the pool's unit and property tests.

#![allow(clippy::panic)]

use std::rc::Rc;

use super::Pool;
use crate::config::{GuardScope, PoolConfig};
use crate::domain::{Address, Amount};
use crate::ledger::{AssetRegistry, MemoryLedger, TokenLedger};
use crate::traits::LiquidityPool;

pub(crate) const TRADER: Address = Address::from_low_u64(7);
pub(crate) const OTHER: Address = Address::from_low_u64(8);
pub(crate) const POOL: Address = Address::from_low_u64(100);

/// Units minted to [`TRADER`] and [`OTHER`] on each asset.
pub(crate) const FUNDING: u128 = 1_000_000_000_000_000_000_000_000_000_000;

pub(crate) fn a(v: u128) -> Amount {
    Amount::new(v)
}

pub(crate) struct Fixture {
    pub(crate) low: Rc<MemoryLedger>,
    pub(crate) high: Rc<MemoryLedger>,
    pub(crate) shares: Rc<MemoryLedger>,
    pub(crate) pool: Rc<Pool>,
}

impl Fixture {
    pub(crate) fn empty(scope: GuardScope) -> Self {
        let low = funded_ledger(1);
        let high = funded_ledger(2);
        let shares = Rc::new(MemoryLedger::new(POOL));
        let mut registry = AssetRegistry::new();
        registry.register(low.clone());
        registry.register(high.clone());
        // Reversed; the pool sorts them.
        let Ok(cfg) = PoolConfig::new(POOL, high.address(), low.address()) else {
            panic!("config");
        };
        let Ok(pool) =
            Pool::deploy_with_share_ledger(&cfg.with_guard_scope(scope), &registry, shares.clone())
        else {
            panic!("deploy");
        };
        Self {
            low,
            high,
            shares,
            pool: Rc::new(pool),
        }
    }

    /// A pool seeded by [`TRADER`] with `(reserve_low, reserve_high)`.
    pub(crate) fn seeded(reserve_low: u128, reserve_high: u128) -> Self {
        let fixture = Self::empty(GuardScope::AllMutations);
        let Ok(_) = fixture
            .pool
            .add_liquidity(&TRADER, a(reserve_low), a(reserve_high))
        else {
            panic!("seed liquidity");
        };
        fixture
    }

    pub(crate) fn low_id(&self) -> Address {
        self.low.address()
    }

    pub(crate) fn high_id(&self) -> Address {
        self.high.address()
    }
}

fn funded_ledger(id: u64) -> Rc<MemoryLedger> {
    let ledger = Rc::new(MemoryLedger::new(Address::from_low_u64(id)));
    for holder in [TRADER, OTHER] {
        let Ok(()) = ledger.mint(&holder, a(FUNDING)) else {
            panic!("mint");
        };
        let Ok(()) = ledger.approve(&holder, &POOL, Amount::MAX) else {
            panic!("approve");
        };
    }
    ledger
}
