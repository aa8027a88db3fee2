//! Liquidity engine: deposit quoting, share minting and redemption.
//!
//! `mint` and `burn` both settle against the pool's *actual* balances
//! rather than the cached reserves, so assets sent to the pool outside
//! the entry points are absorbed by the next mint or shared out by the
//! next burn.  Both finish by resynchronizing the reserve cache with those
//! balances.

use tracing::{debug, error, info};

use super::Pool;
use crate::config::EntryPoint;
use crate::domain::{Address, Amount, DepositRecord, Liquidity, WithdrawalRecord};
use crate::error::PoolError;
use crate::math::{self, mul_div_floor, sqrt_product, CheckedArithmetic};
use crate::traits::LiquidityPool;

impl Pool {
    /// Amounts to commit for a deposit of up to `(low_in, high_in)`.
    fn deposit_amounts(
        &self,
        low_in: Amount,
        high_in: Amount,
    ) -> Result<(Amount, Amount), PoolError> {
        let reserves = self.reserves.get();
        if reserves.is_empty() {
            return Ok((low_in, high_in));
        }

        let high_optimal = math::quote(low_in, reserves.low(), reserves.high())?;
        debug!(pool = %self.address(), %low_in, %high_optimal, "quoted high side");
        if high_optimal <= high_in {
            if high_optimal.is_zero() {
                return Err(PoolError::InsufficientLiquidity(
                    "optimal high amount is zero",
                ));
            }
            return Ok((low_in, high_optimal));
        }

        let low_optimal = math::quote(high_in, reserves.high(), reserves.low())?;
        debug!(pool = %self.address(), %high_in, %low_optimal, "quoted low side");
        if low_optimal > low_in {
            error!(
                pool = %self.address(),
                %low_optimal,
                %low_in,
                "optimal low amount exceeds the requested amount"
            );
            return Err(PoolError::InvariantViolation(
                "optimal low amount exceeds the requested amount",
            ));
        }
        if low_optimal.is_zero() {
            return Err(PoolError::InsufficientLiquidity(
                "optimal low amount is zero",
            ));
        }
        Ok((low_optimal, high_in))
    }

    /// Mint body; the caller holds whatever guard the scope requires.
    fn mint_locked(&self, to: &Address) -> Result<Liquidity, PoolError> {
        let reserves = self.reserves.get();
        let balances = self.balances();
        let amount_low = balances.low().safe_sub(&reserves.low())?;
        let amount_high = balances.high().safe_sub(&reserves.high())?;
        let supply = self.shares.total_supply();

        let liquidity = if supply.is_zero() {
            sqrt_product(amount_low, amount_high)
        } else {
            let by_low = mul_div_floor(amount_low, supply, reserves.low())?;
            let by_high = mul_div_floor(amount_high, supply, reserves.high())?;
            by_low.min(by_high)
        };
        debug!(
            pool = %self.address(),
            %amount_low,
            %amount_high,
            %supply,
            %liquidity,
            "mint computed"
        );
        if liquidity.is_zero() {
            return Err(PoolError::InsufficientLiquidity(
                "insufficient liquidity minted",
            ));
        }

        self.shares.mint(to, liquidity)?;
        self.set_reserves(balances);
        Ok(Liquidity::from_amount(liquidity))
    }

    /// Burn body; the caller holds whatever guard the scope requires.
    fn burn_locked(&self, to: &Address) -> Result<(Amount, Amount), PoolError> {
        let me = self.address();
        let liquidity = self.shares.balance_of(&me);
        if liquidity.is_zero() {
            return Err(PoolError::InsufficientLiquidity(
                "pool holds no shares to burn",
            ));
        }
        let supply = self.shares.total_supply();
        let balances = self.balances();
        let amount_low = mul_div_floor(liquidity, balances.low(), supply)?;
        let amount_high = mul_div_floor(liquidity, balances.high(), supply)?;
        debug!(
            pool = %me,
            %liquidity,
            %supply,
            %amount_low,
            %amount_high,
            "burn computed"
        );
        if amount_low.is_zero() || amount_high.is_zero() {
            return Err(PoolError::InsufficientLiquidity(
                "insufficient liquidity burned",
            ));
        }

        self.shares.burn(&me, liquidity)?;
        self.asset_low.transfer(&me, to, amount_low)?;
        self.asset_high.transfer(&me, to, amount_high)?;
        self.sync_reserves();

        let record = WithdrawalRecord {
            to: *to,
            liquidity: Liquidity::from_amount(liquidity),
            amount_low,
            amount_high,
        };
        info!(
            pool = %me,
            to = %record.to,
            liquidity = %record.liquidity,
            amount_low = %record.amount_low,
            amount_high = %record.amount_high,
            "withdrawal"
        );
        self.emit(record.into());
        Ok((amount_low, amount_high))
    }
}

impl LiquidityPool for Pool {
    fn add_liquidity(
        &self,
        caller: &Address,
        amount_low_in: Amount,
        amount_high_in: Amount,
    ) -> Result<(Amount, Amount, Liquidity), PoolError> {
        if amount_low_in.is_zero() || amount_high_in.is_zero() {
            return Err(PoolError::Validation("deposit amounts must be non-zero"));
        }
        self.execute(EntryPoint::AddLiquidity, || {
            let (amount_low, amount_high) = self.deposit_amounts(amount_low_in, amount_high_in)?;
            let me = self.address();
            self.asset_low
                .transfer_from(&me, caller, &me, amount_low)?;
            self.asset_high
                .transfer_from(&me, caller, &me, amount_high)?;

            let liquidity = {
                let _ticket = self.escalate(EntryPoint::AddLiquidity, EntryPoint::Mint)?;
                self.mint_locked(caller)?
            };

            let record = DepositRecord {
                caller: *caller,
                amount_low,
                amount_high,
                liquidity,
            };
            info!(
                pool = %me,
                caller = %record.caller,
                amount_low = %record.amount_low,
                amount_high = %record.amount_high,
                liquidity = %record.liquidity,
                "deposit"
            );
            self.emit(record.into());
            Ok((amount_low, amount_high, liquidity))
        })
    }

    fn remove_liquidity(
        &self,
        caller: &Address,
        liquidity: Liquidity,
    ) -> Result<(Amount, Amount), PoolError> {
        if liquidity.is_zero() {
            return Err(PoolError::Validation("liquidity must be non-zero"));
        }
        self.execute(EntryPoint::RemoveLiquidity, || {
            let me = self.address();
            self.shares.transfer(caller, &me, liquidity.as_amount())?;
            let _ticket = self.escalate(EntryPoint::RemoveLiquidity, EntryPoint::Burn)?;
            self.burn_locked(caller)
        })
    }

    fn mint(&self, to: &Address) -> Result<Liquidity, PoolError> {
        self.execute(EntryPoint::Mint, || self.mint_locked(to))
    }

    fn burn(&self, to: &Address) -> Result<(Amount, Amount), PoolError> {
        self.execute(EntryPoint::Burn, || self.burn_locked(to))
    }

    fn total_supply(&self) -> Liquidity {
        Liquidity::from_amount(self.shares.total_supply())
    }
}
