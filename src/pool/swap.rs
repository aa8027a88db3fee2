//! Swap engine.
//!
//! # Algorithm (`asset_in` → `asset_out`)
//!
//! 1. Orient the cached reserves to `(reserve_in, reserve_out)`.
//! 2. `amount_out = floor(amount_in × reserve_out / (reserve_in + amount_in))`
//! 3. Zero output: return zero, move nothing, record nothing.
//! 4. Send `amount_out` of `asset_out` to the caller.
//! 5. Pull `amount_in` of `asset_in` from the caller.
//! 6. `reserve_in += amount_in`, `reserve_out -= amount_out`.
//!
//! Step 6 is arithmetic, not a re-read of the ledgers.  Floor division
//! keeps the rounding remainder in the pool, so `reserve_in × reserve_out`
//! never decreases.

use tracing::{debug, error, info};

use super::Pool;
use crate::config::EntryPoint;
use crate::domain::{Address, Amount, Reserves, SwapRecord, TokenPair};
use crate::error::PoolError;
use crate::math::{self, CheckedArithmetic};
use crate::traits::SwapPool;

impl SwapPool for Pool {
    fn swap(
        &self,
        caller: &Address,
        asset_in: &Address,
        asset_out: &Address,
        amount_in: Amount,
    ) -> Result<Amount, PoolError> {
        let side_in = self.pair().direction(asset_in, asset_out)?;
        if amount_in.is_zero() {
            return Err(PoolError::Validation("swap amount must be non-zero"));
        }

        self.execute(EntryPoint::Swap, || {
            let (reserve_in, reserve_out) = self.reserves.get().oriented(side_in);
            let amount_out = math::amount_out(amount_in, reserve_in, reserve_out)?;
            debug!(
                pool = %self.address(),
                %amount_in,
                %reserve_in,
                %reserve_out,
                %amount_out,
                "swap priced"
            );
            if amount_out.is_zero() {
                return Ok(Amount::ZERO);
            }
            if amount_out > reserve_out {
                error!(
                    pool = %self.address(),
                    %amount_out,
                    %reserve_out,
                    "swap output exceeds cached reserve"
                );
                return Err(PoolError::InsufficientLiquidity(
                    "swap output exceeds reserve",
                ));
            }

            let me = self.address();
            self.ledger(side_in.opposite())
                .transfer(&me, caller, amount_out)?;
            self.ledger(side_in)
                .transfer_from(&me, caller, &me, amount_in)?;

            let reserves = Reserves::from_oriented(
                side_in,
                reserve_in.safe_add(&amount_in)?,
                reserve_out.safe_sub(&amount_out)?,
            );
            self.set_reserves(reserves);

            let record = SwapRecord {
                caller: *caller,
                asset_in: *asset_in,
                asset_out: *asset_out,
                amount_in,
                amount_out,
            };
            info!(
                pool = %me,
                caller = %record.caller,
                asset_in = %record.asset_in,
                asset_out = %record.asset_out,
                amount_in = %record.amount_in,
                amount_out = %record.amount_out,
                "swap"
            );
            self.emit(record.into());
            Ok(amount_out)
        })
    }

    fn get_amount_out(
        &self,
        asset_in: &Address,
        asset_out: &Address,
        amount_in: Amount,
    ) -> Result<Amount, PoolError> {
        let side_in = self.pair().direction(asset_in, asset_out)?;
        let (reserve_in, reserve_out) = self.reserves.get().oriented(side_in);
        math::amount_out(amount_in, reserve_in, reserve_out)
    }

    fn token_pair(&self) -> &TokenPair {
        self.pair()
    }

    fn reserves(&self) -> Reserves {
        self.reserves.get()
    }
}
