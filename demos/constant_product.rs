//! Constant product pool example.
//!
//! Demonstrates deploying a pool over two in-memory ledgers, seeding it,
//! trading in both directions, redeeming shares, and a ledger hook that
//! tries to re-enter the pool mid-swap.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hydra_pair=debug cargo run --example constant_product
//! ```

use std::rc::Rc;

use hydra_pair::ledger::{LedgerResult, TransferNotice};
use hydra_pair::math::U256;
use hydra_pair::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Constant Product Pool (x · y = k, no fee) ===\n");

    // ── 1. Ledgers and accounts ─────────────────────────────────────────
    let alice = Address::from_low_u64(0xA11CE);
    let bob = Address::from_low_u64(0xB0B);
    let pool_addr = Address::from_low_u64(0x9001);

    let usdc = Rc::new(MemoryLedger::new(Address::from_low_u64(1)));
    let weth = Rc::new(MemoryLedger::new(Address::from_low_u64(2)));
    for ledger in [&usdc, &weth] {
        for holder in [alice, bob] {
            ledger.mint(&holder, Amount::new(1_000_000))?;
            ledger.approve(&holder, &pool_addr, Amount::MAX)?;
        }
    }

    let mut registry = AssetRegistry::new();
    registry.register(usdc.clone());
    registry.register(weth.clone());

    // ── 2. Deploy ───────────────────────────────────────────────────────
    //    Argument order is irrelevant: the pair is sorted by identity.
    let config = PoolConfig::new(pool_addr, weth.address(), usdc.address())?;
    let pool = Rc::new(Pool::deploy(&config, &registry)?);
    println!("Pool {} serves {} / {}", pool.address(), pool.token_a(), pool.token_b());

    // ── 3. Seed liquidity ───────────────────────────────────────────────
    let (a0, b0, shares) = pool.add_liquidity(&alice, Amount::new(100_000), Amount::new(400_000))?;
    println!("Alice deposited {a0} / {b0}, minted {shares} shares");

    let (a1, b1, more) = pool.add_liquidity(&bob, Amount::new(10_000), Amount::new(90_000))?;
    println!("Bob offered 10000 / 90000, committed {a1} / {b1}, minted {more} shares");

    // ── 4. Trade both ways ──────────────────────────────────────────────
    let quoted = pool.get_amount_out(&usdc.address(), &weth.address(), Amount::new(5_000))?;
    let out = pool.swap(&bob, &usdc.address(), &weth.address(), Amount::new(5_000))?;
    println!("Bob sold 5000 USDC for {out} WETH (quoted {quoted})");

    let back = pool.swap(&bob, &weth.address(), &usdc.address(), out)?;
    println!("Bob sold {out} WETH back for {back} USDC");

    let (reserve_a, reserve_b) = pool.get_reserves();
    let k = U256::from(reserve_a.get()) * U256::from(reserve_b.get());
    println!("Reserves now {reserve_a} / {reserve_b} (k = {k})");

    // ── 5. A hook that tries to re-enter ────────────────────────────────
    let weak = Rc::downgrade(&pool);
    let (usdc_id, weth_id) = (usdc.address(), weth.address());
    weth.set_hook(Rc::new(move |notice: &TransferNotice| -> LedgerResult<()> {
        if notice.from == pool_addr {
            if let Some(pool) = weak.upgrade() {
                let nested = pool.swap(&bob, &usdc_id, &weth_id, Amount::new(1));
                println!("  re-entrant swap from hook: {nested:?}");
            }
        }
        Ok(())
    }));
    let out = pool.swap(&alice, &usdc.address(), &weth.address(), Amount::new(1_000))?;
    println!("Alice's swap still settled: {out} WETH");
    weth.clear_hook();

    // ── 6. Redeem ───────────────────────────────────────────────────────
    let (r0, r1) = pool.remove_liquidity(&bob, more)?;
    println!("Bob redeemed {more} shares for {r0} / {r1}");
    let (r0, r1) = pool.remove_liquidity(&alice, shares)?;
    println!("Alice redeemed {shares} shares for {r0} / {r1}");
    println!("Remaining supply: {}", pool.total_supply());

    // ── 7. Audit log ────────────────────────────────────────────────────
    println!("\nAudit log:");
    for event in pool.events() {
        println!("  {:<10} {event:?}", event.kind());
    }

    Ok(())
}
