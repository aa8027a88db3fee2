//! Integration tests exercising the pool through its public API.
//!
//! These tests verify end-to-end flows: deployment and canonical ordering,
//! the reference trading and liquidity scenarios, share transferability,
//! and reentrant calls made from ledger transfer hooks under both guard
//! scopes.

#![allow(clippy::panic)]

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use hydra_pair::config::{GuardScope, PoolConfig};
use hydra_pair::domain::{Address, Amount, Liquidity, PoolEvent, Reserves};
use hydra_pair::error::PoolError;
use hydra_pair::ledger::{
    AssetRegistry, LedgerError, MemoryLedger, TokenLedger, TransferHook, TransferNotice,
};
use hydra_pair::pool::{GuardState, Pool};
use hydra_pair::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const POOL: Address = Address::from_low_u64(1_000);
const ALICE: Address = Address::from_low_u64(7);
const BOB: Address = Address::from_low_u64(8);

fn a(v: u128) -> Amount {
    Amount::new(v)
}

fn l(v: u128) -> Liquidity {
    Liquidity::new(v)
}

struct Market {
    low: Rc<MemoryLedger>,
    high: Rc<MemoryLedger>,
    shares: Rc<MemoryLedger>,
    pool: Rc<Pool>,
}

impl Market {
    fn open(scope: GuardScope) -> Self {
        let low = funded(1);
        let high = funded(2);
        let shares = Rc::new(MemoryLedger::new(POOL));
        let mut registry = AssetRegistry::new();
        registry.register(high.clone());
        registry.register(low.clone());
        let Ok(cfg) = PoolConfig::new(POOL, high.address(), low.address()) else {
            panic!("valid config");
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

    fn seeded(scope: GuardScope) -> Self {
        let market = Self::open(scope);
        let Ok(_) = market.pool.add_liquidity(&ALICE, a(100), a(400)) else {
            panic!("seed");
        };
        market
    }

    fn low_id(&self) -> Address {
        self.low.address()
    }

    fn high_id(&self) -> Address {
        self.high.address()
    }

    fn weak(&self) -> Weak<Pool> {
        Rc::downgrade(&self.pool)
    }

    fn balances(&self) -> Reserves {
        Reserves::new(self.low.balance_of(&POOL), self.high.balance_of(&POOL))
    }
}

fn funded(id: u64) -> Rc<MemoryLedger> {
    let ledger = Rc::new(MemoryLedger::new(Address::from_low_u64(id)));
    for holder in [ALICE, BOB] {
        let Ok(()) = ledger.mint(&holder, a(1_000_000)) else {
            panic!("mint");
        };
        let Ok(()) = ledger.approve(&holder, &POOL, Amount::MAX) else {
            panic!("approve");
        };
    }
    ledger
}

/// A hook that runs `reenter` once, on the first movement out of the pool,
/// and stores its result.
fn reenter_once<T: 'static>(
    pool: Weak<Pool>,
    slot: Rc<RefCell<Option<Result<T, PoolError>>>>,
    reenter: impl Fn(&Pool) -> Result<T, PoolError> + 'static,
) -> TransferHook {
    let fired = Cell::new(false);
    Rc::new(move |notice: &TransferNotice| -> Result<(), LedgerError> {
        if notice.from != POOL || fired.replace(true) {
            return Ok(());
        }
        let Some(pool) = pool.upgrade() else {
            return Ok(());
        };
        *slot.borrow_mut() = Some(reenter(&pool));
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn ordering_is_independent_of_argument_order() {
    let low = Address::from_low_u64(3);
    let high = Address::from_low_u64(9);
    let Ok(forward) = PoolConfig::new(POOL, low, high) else {
        panic!("forward");
    };
    let Ok(backward) = PoolConfig::new(POOL, high, low) else {
        panic!("backward");
    };
    assert_eq!(forward.token_pair(), backward.token_pair());
    assert_eq!(forward.token_pair().low(), low);

    let market = Market::open(GuardScope::AllMutations);
    assert!(market.pool.token_a() < market.pool.token_b());
    assert_eq!(market.pool.token_a(), market.low_id());
}

#[test]
fn equal_or_unknown_assets_rejected() {
    let asset = Address::from_low_u64(1);
    assert!(matches!(
        PoolConfig::new(POOL, asset, asset),
        Err(PoolError::Validation(_))
    ));

    let registry = AssetRegistry::new();
    let Ok(cfg) = PoolConfig::new(POOL, asset, Address::from_low_u64(2)) else {
        panic!("valid config");
    };
    assert!(matches!(
        Pool::deploy(&cfg, &registry),
        Err(PoolError::Validation(_))
    ));
}

#[test]
fn fresh_pool_is_empty_and_open() {
    let market = Market::open(GuardScope::AllMutations);
    assert_eq!(market.pool.reserves(), Reserves::EMPTY);
    assert_eq!(market.pool.total_supply(), Liquidity::ZERO);
    assert_eq!(market.pool.guard_state(), GuardState::Open);
    assert_eq!(market.pool.address(), POOL);
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn first_deposit_mints_two_hundred() {
    let market = Market::open(GuardScope::AllMutations);
    let result = market.pool.add_liquidity(&ALICE, a(100), a(400));
    assert_eq!(result, Ok((a(100), a(400), l(200))));
    assert_eq!(market.pool.reserves(), Reserves::new(a(100), a(400)));
}

#[test]
fn second_deposit_commits_quoted_amounts() {
    let market = Market::seeded(GuardScope::AllMutations);
    assert_eq!(Pool::quote(a(50), a(100), a(400)), Ok(a(200)));
    let result = market.pool.add_liquidity(&BOB, a(50), a(300));
    assert_eq!(result, Ok((a(50), a(200), l(100))));
}

#[test]
fn reference_swap() {
    let market = Market::seeded(GuardScope::AllMutations);
    let out = market
        .pool
        .swap(&BOB, &market.low_id(), &market.high_id(), a(10));
    assert_eq!(out, Ok(a(36)));
    assert_eq!(market.pool.reserves(), Reserves::new(a(110), a(364)));
    assert_eq!(market.balances(), market.pool.reserves());
}

#[test]
fn swap_with_identical_assets_always_fails() {
    let market = Market::seeded(GuardScope::MintBurnOnly);
    for amount in [0, 1, 36, 1_000_000] {
        let result = market
            .pool
            .swap(&BOB, &market.high_id(), &market.high_id(), a(amount));
        assert!(matches!(result, Err(PoolError::Validation(_))));
    }
}

#[test]
fn reserve_accessor_is_idempotent() {
    let market = Market::seeded(GuardScope::AllMutations);
    assert_eq!(market.pool.reserves(), market.pool.reserves());
    assert_eq!(market.pool.get_reserves(), market.pool.get_reserves());
    assert_eq!(market.pool.get_reserves(), (a(100), a(400)));
    assert_eq!(market.pool.token_a(), market.pool.token_a());
}

#[test]
fn burn_after_trading_pays_pro_rata_and_drains() {
    let market = Market::seeded(GuardScope::AllMutations);
    let Ok(_) = market.pool.add_liquidity(&BOB, a(50), a(200)) else {
        panic!("bob deposit");
    };
    let Ok(_) = market
        .pool
        .swap(&BOB, &market.high_id(), &market.low_id(), a(77))
    else {
        panic!("swap");
    };

    let supply = market.pool.total_supply().get();
    let balances = market.balances();
    let expected = (
        a(100 * balances.low().get() / supply),
        a(100 * balances.high().get() / supply),
    );
    assert_eq!(market.pool.remove_liquidity(&BOB, l(100)), Ok(expected));

    let Ok(_) = market.pool.remove_liquidity(&ALICE, l(200)) else {
        panic!("alice exit");
    };
    assert_eq!(market.pool.total_supply(), Liquidity::ZERO);
    assert_eq!(market.pool.reserves(), Reserves::EMPTY);
    assert_eq!(market.balances(), Reserves::EMPTY);
}

#[test]
fn shares_are_transferable() {
    let market = Market::seeded(GuardScope::AllMutations);
    let Ok(()) = market.pool.share_token().transfer(&ALICE, &BOB, a(50)) else {
        panic!("share transfer");
    };
    assert_eq!(market.shares.balance_of(&BOB), a(50));
    assert_eq!(market.pool.remove_liquidity(&BOB, l(50)), Ok((a(25), a(100))));
    assert_eq!(
        market.pool.total_supply().as_amount(),
        market.shares.balance_of(&ALICE)
    );
}

#[test]
fn audit_log_records_each_operation() {
    let market = Market::seeded(GuardScope::AllMutations);
    let Ok(_) = market
        .pool
        .swap(&BOB, &market.low_id(), &market.high_id(), a(10))
    else {
        panic!("swap");
    };
    let Ok(_) = market.pool.remove_liquidity(&ALICE, l(20)) else {
        panic!("remove");
    };
    let kinds: Vec<_> = market.pool.events().iter().map(PoolEvent::kind).collect();
    assert_eq!(kinds, ["deposit", "swap", "withdrawal"]);
}

// ---------------------------------------------------------------------------
// Reentrancy: AllMutations
// ---------------------------------------------------------------------------

#[test]
fn swap_reentered_from_payout_is_rejected() {
    let market = Market::seeded(GuardScope::AllMutations);
    let slot = Rc::new(RefCell::new(None));
    let (low, high) = (market.low_id(), market.high_id());
    market.high.set_hook(reenter_once(market.weak(), slot.clone(), move |pool| {
        pool.swap(&BOB, &low, &high, a(10))
    }));

    let out = market.pool.swap(&ALICE, &low, &high, a(10));
    assert_eq!(out, Ok(a(36)));
    assert_eq!(*slot.borrow(), Some(Err(PoolError::Reentrancy)));
    assert_eq!(market.pool.reserves(), market.balances());
    assert_eq!(market.pool.guard_state(), GuardState::Open);
}

#[test]
fn burn_reentered_from_share_transfer_is_rejected() {
    let market = Market::seeded(GuardScope::AllMutations);
    let slot = Rc::new(RefCell::new(None));
    let weak = market.weak();
    let fired = Rc::new(Cell::new(false));
    let seen = slot.clone();
    let once = fired.clone();
    market.shares.set_hook(Rc::new(move |notice: &TransferNotice| -> Result<(), LedgerError> {
        if notice.to == POOL && !once.replace(true) {
            if let Some(pool) = weak.upgrade() {
                *seen.borrow_mut() = Some(pool.burn(&BOB));
            }
        }
        Ok(())
    }));

    let result = market.pool.remove_liquidity(&ALICE, l(100));
    assert_eq!(result, Ok((a(50), a(200))));
    assert!(fired.get());
    assert_eq!(*slot.borrow(), Some(Err(PoolError::Reentrancy)));
    assert_eq!(market.low.balance_of(&BOB), a(1_000_000));
}

#[test]
fn propagated_reentrancy_rolls_everything_back() {
    let market = Market::seeded(GuardScope::AllMutations);
    let (low, high) = (market.low_id(), market.high_id());
    let weak = market.weak();
    market.high.set_hook(Rc::new(move |notice: &TransferNotice| -> Result<(), LedgerError> {
        if notice.from != POOL {
            return Ok(());
        }
        let Some(pool) = weak.upgrade() else {
            return Ok(());
        };
        pool.swap(&BOB, &low, &high, a(1))
            .map(|_| ())
            .map_err(|err| LedgerError::Rejected(err.to_string()))
    }));

    let alice_high = market.high.balance_of(&ALICE);
    let events = market.pool.events().len();
    let result = market.pool.swap(&ALICE, &low, &high, a(10));

    assert!(matches!(
        result,
        Err(PoolError::Ledger(LedgerError::Rejected(_)))
    ));
    assert_eq!(market.high.balance_of(&ALICE), alice_high);
    assert_eq!(market.pool.reserves(), Reserves::new(a(100), a(400)));
    assert_eq!(market.balances(), market.pool.reserves());
    assert_eq!(market.pool.events().len(), events);
    assert_eq!(market.pool.guard_state(), GuardState::Open);
    assert_eq!(market.low.open_checkpoints(), 0);
    assert_eq!(market.high.open_checkpoints(), 0);
    assert_eq!(market.shares.open_checkpoints(), 0);
}

#[test]
fn failed_payout_restores_shares() {
    let market = Market::seeded(GuardScope::AllMutations);
    market.high.set_hook(Rc::new(|notice: &TransferNotice| -> Result<(), LedgerError> {
        if notice.from == POOL {
            return Err(LedgerError::Rejected("recipient refuses".into()));
        }
        Ok(())
    }));

    let result = market.pool.remove_liquidity(&ALICE, l(100));
    assert!(matches!(result, Err(PoolError::Ledger(_))));
    assert_eq!(market.shares.balance_of(&ALICE), a(200));
    assert_eq!(market.shares.balance_of(&POOL), Amount::ZERO);
    assert_eq!(market.pool.total_supply(), l(200));
    assert_eq!(market.pool.reserves(), Reserves::new(a(100), a(400)));
    assert_eq!(market.balances(), market.pool.reserves());
}

// ---------------------------------------------------------------------------
// Reentrancy: MintBurnOnly
// ---------------------------------------------------------------------------

#[test]
fn unguarded_swap_reentry_leaves_reserves_stale() {
    let market = Market::seeded(GuardScope::MintBurnOnly);
    let slot = Rc::new(RefCell::new(None));
    let (low, high) = (market.low_id(), market.high_id());
    market.high.set_hook(reenter_once(market.weak(), slot.clone(), move |pool| {
        pool.swap(&BOB, &low, &high, a(10))
    }));

    let out = market.pool.swap(&ALICE, &low, &high, a(10));

    // Both trades priced against (100, 400); the outer write wins.
    assert_eq!(out, Ok(a(36)));
    assert_eq!(*slot.borrow(), Some(Ok(a(36))));
    assert_eq!(market.pool.reserves(), Reserves::new(a(110), a(364)));
    assert_eq!(market.balances(), Reserves::new(a(120), a(328)));
}

#[test]
fn mint_still_guarded_during_burn_payout() {
    let market = Market::seeded(GuardScope::MintBurnOnly);
    let slot = Rc::new(RefCell::new(None));
    market
        .low
        .set_hook(reenter_once(market.weak(), slot.clone(), |pool| pool.mint(&BOB)));

    let result = market.pool.remove_liquidity(&ALICE, l(100));
    assert_eq!(result, Ok((a(50), a(200))));
    assert_eq!(*slot.borrow(), Some(Err(PoolError::Reentrancy)));
    assert_eq!(market.pool.guard_state(), GuardState::Open);
}

#[test]
fn share_transfer_hook_can_race_burn_but_is_rolled_back() {
    let market = Market::seeded(GuardScope::MintBurnOnly);
    let slot = Rc::new(RefCell::new(None));
    let weak = market.weak();
    let fired = Rc::new(Cell::new(false));
    let seen = slot.clone();
    let once = fired.clone();
    market.shares.set_hook(Rc::new(move |notice: &TransferNotice| -> Result<(), LedgerError> {
        if notice.to == POOL && !once.replace(true) {
            if let Some(pool) = weak.upgrade() {
                *seen.borrow_mut() = Some(pool.burn(&BOB));
            }
        }
        Ok(())
    }));

    // The hook redeems Alice's shares to Bob before her own burn runs,
    // which then finds nothing to burn and reverts the whole call.
    let result = market.pool.remove_liquidity(&ALICE, l(100));
    assert!(matches!(result, Err(PoolError::InsufficientLiquidity(_))));
    assert_eq!(*slot.borrow(), Some(Ok((a(50), a(200)))));

    assert_eq!(market.shares.balance_of(&ALICE), a(200));
    assert_eq!(market.low.balance_of(&BOB), a(1_000_000));
    assert_eq!(market.pool.reserves(), Reserves::new(a(100), a(400)));
    assert_eq!(market.pool.events().len(), 1);
}

#[test]
fn mint_burn_only_deposit_pull_runs_outside_guard() {
    let market = Market::seeded(GuardScope::MintBurnOnly);
    let slot = Rc::new(RefCell::new(None));
    let weak = market.weak();
    let seen = slot.clone();
    let fired = Cell::new(false);
    market.high.set_hook(Rc::new(move |notice: &TransferNotice| -> Result<(), LedgerError> {
        if notice.to == POOL && !fired.replace(true) {
            if let Some(pool) = weak.upgrade() {
                *seen.borrow_mut() = Some(pool.guard_state());
            }
        }
        Ok(())
    }));

    let Ok(_) = market.pool.add_liquidity(&BOB, a(50), a(200)) else {
        panic!("deposit");
    };
    // The pull runs before mint, outside the guard.
    assert_eq!(*slot.borrow(), Some(GuardState::Open));
    assert_eq!(market.pool.guard_state(), GuardState::Open);
}
