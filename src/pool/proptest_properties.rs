//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Canonical ordering**: argument order never changes the pair.
//! 2. **Constant product**: `reserve_low × reserve_high` never decreases
//!    across swaps in either direction, including at 18-decimal scale.
//! 3. **Swap reversibility**: a round trip returns at most the original.
//! 4. **Burn pro-rata**: redemption is `floor(liquidity × balance / supply)`.
//! 5. **Reserve sync**: cached reserves equal ledger balances after every
//!    successful mutation.
//! 6. **Full exit**: redeeming every share drains the pool.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{Address, Amount, Liquidity, Reserves};
use crate::ledger::TokenLedger;
use crate::math::U256;
use crate::pool::testkit::{a, Fixture, OTHER, POOL, TRADER};
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Swap inputs small relative to the reserves above.
fn trade_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000u128
}

/// Reserves between one and a million whole 18-decimal tokens.
fn token_reserve_strategy() -> impl Strategy<Value = u128> {
    1_000_000_000_000_000_000u128..=1_000_000_000_000_000_000_000_000u128
}

/// Trades up to ten million whole 18-decimal tokens.
fn token_trade_strategy() -> impl Strategy<Value = u128> {
    1u128..=10_000_000_000_000_000_000_000_000u128
}

/// Fraction of a holding, in parts per thousand.
fn permille_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000u128
}

fn k(reserves: Reserves) -> U256 {
    U256::from(reserves.low().get()) * U256::from(reserves.high().get())
}

/// Runs `trades` against a pool seeded at `(rl, rh)`, checking k after each.
fn swaps_keep_k(rl: u128, rh: u128, trades: &[(bool, u128)]) -> Result<(), TestCaseError> {
    let f = Fixture::seeded(rl, rh);

    for &(sell_low, amount) in trades {
        let (asset_in, asset_out) = if sell_low {
            (f.low_id(), f.high_id())
        } else {
            (f.high_id(), f.low_id())
        };
        let before = f.pool.reserves();
        let Ok(_) = f.pool.swap(&OTHER, &asset_in, &asset_out, a(amount)) else {
            return Err(TestCaseError::fail("swap against funded pool failed"));
        };
        let after = f.pool.reserves();
        prop_assert!(
            k(after) >= k(before),
            "k decreased: {} -> {}",
            k(before), k(after)
        );
    }
    Ok(())
}

fn assert_synced(f: &Fixture) -> Result<(), TestCaseError> {
    let reserves = f.pool.reserves();
    prop_assert_eq!(reserves.low(), f.low.balance_of(&POOL));
    prop_assert_eq!(reserves.high(), f.high.balance_of(&POOL));
    Ok(())
}

// ---------------------------------------------------------------------------
// Property 1: Canonical Ordering
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_canonical_ordering(x in 1u64..u64::MAX, y in 1u64..u64::MAX) {
        let pool = Address::from_low_u64(0);
        let (x, y) = (Address::from_low_u64(x), Address::from_low_u64(y));
        let forward = PoolConfig::new(pool, x, y);
        let backward = PoolConfig::new(pool, y, x);

        if x == y {
            prop_assert!(forward.is_err());
            prop_assert!(backward.is_err());
        } else {
            let (Ok(forward), Ok(backward)) = (forward, backward) else {
                return Err(TestCaseError::fail("distinct assets must configure"));
            };
            prop_assert!(forward.token_pair().low() < forward.token_pair().high());
            prop_assert_eq!(forward.token_pair(), backward.token_pair());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Constant Product
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_constant_product_non_decreasing(
        rl in reserve_strategy(),
        rh in reserve_strategy(),
        trades in prop::collection::vec((any::<bool>(), trade_strategy()), 1..8),
    ) {
        swaps_keep_k(rl, rh, &trades)?;
    }

    #[test]
    fn prop_constant_product_non_decreasing_at_token_scale(
        rl in token_reserve_strategy(),
        rh in token_reserve_strategy(),
        trades in prop::collection::vec((any::<bool>(), token_trade_strategy()), 1..8),
    ) {
        swaps_keep_k(rl, rh, &trades)?;
    }
}

// ---------------------------------------------------------------------------
// Property 3: Swap Reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        rl in reserve_strategy(),
        rh in reserve_strategy(),
        amount in trade_strategy(),
    ) {
        let f = Fixture::seeded(rl, rh);

        let Ok(received) = f.pool.swap(&OTHER, &f.low_id(), &f.high_id(), a(amount)) else {
            return Err(TestCaseError::fail("forward swap failed"));
        };
        if received.is_zero() {
            return Ok(());
        }
        let Ok(returned) = f.pool.swap(&OTHER, &f.high_id(), &f.low_id(), received) else {
            return Err(TestCaseError::fail("reverse swap failed"));
        };

        prop_assert!(
            returned <= a(amount),
            "round-trip should not gain: returned={} > original={}",
            returned, amount
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: Burn Pro-Rata
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_burn_is_pro_rata(
        rl in reserve_strategy(),
        rh in reserve_strategy(),
        donation in 0u128..=1_000_000u128,
        permille in permille_strategy(),
    ) {
        let f = Fixture::seeded(rl, rh);
        if donation > 0 {
            let Ok(()) = f.low.transfer(&OTHER, &POOL, a(donation)) else {
                return Err(TestCaseError::fail("donation failed"));
            };
        }

        let held = f.shares.balance_of(&TRADER).get();
        let liquidity = (held * permille / 1_000).max(1);
        let supply = f.pool.total_supply().get();
        let balance_low = f.low.balance_of(&POOL).get();
        let balance_high = f.high.balance_of(&POOL).get();
        let expected = (
            a(liquidity * balance_low / supply),
            a(liquidity * balance_high / supply),
        );

        let result = f.pool.remove_liquidity(&TRADER, Liquidity::new(liquidity));
        if expected.0.is_zero() || expected.1.is_zero() {
            prop_assert!(result.is_err());
        } else {
            prop_assert_eq!(result, Ok(expected));
            prop_assert_eq!(f.pool.total_supply(), Liquidity::new(supply - liquidity));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Reserve Sync
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reserves_match_balances(
        rl in reserve_strategy(),
        rh in reserve_strategy(),
        deposit_low in trade_strategy(),
        deposit_high in trade_strategy(),
        trade in trade_strategy(),
        permille in permille_strategy(),
    ) {
        let f = Fixture::seeded(rl, rh);
        assert_synced(&f)?;

        if f.pool.add_liquidity(&OTHER, a(deposit_low), a(deposit_high)).is_ok() {
            assert_synced(&f)?;
        }

        let Ok(_) = f.pool.swap(&OTHER, &f.high_id(), &f.low_id(), a(trade)) else {
            return Err(TestCaseError::fail("swap failed"));
        };
        assert_synced(&f)?;

        let held = f.shares.balance_of(&TRADER).get();
        let liquidity = (held * permille / 1_000).max(1);
        if f.pool.remove_liquidity(&TRADER, Liquidity::new(liquidity)).is_ok() {
            assert_synced(&f)?;
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Full Exit
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_full_exit_drains_pool(
        rl in reserve_strategy(),
        rh in reserve_strategy(),
        trade in trade_strategy(),
    ) {
        let f = Fixture::seeded(rl, rh);
        let Ok(_) = f.pool.swap(&OTHER, &f.low_id(), &f.high_id(), a(trade)) else {
            return Err(TestCaseError::fail("swap failed"));
        };

        let shares = Liquidity::from_amount(f.shares.balance_of(&TRADER));
        let Ok(_) = f.pool.remove_liquidity(&TRADER, shares) else {
            return Err(TestCaseError::fail("full exit failed"));
        };

        prop_assert_eq!(f.pool.total_supply(), Liquidity::ZERO);
        prop_assert_eq!(f.pool.reserves(), Reserves::EMPTY);
        prop_assert_eq!(f.low.balance_of(&POOL), Amount::ZERO);
        prop_assert_eq!(f.high.balance_of(&POOL), Amount::ZERO);
    }
}
