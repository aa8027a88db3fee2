//! Audit records emitted by pool operations.
//!
//! Each record carries the full parameters of the operation that produced
//! it so that observers outside the pool can reconstruct every trade,
//! deposit, and withdrawal.  Records are appended to the pool's event log
//! only when the operation commits; a failed operation leaves no record.

use super::{Address, Amount, Liquidity};

/// A completed swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapRecord {
    /// Account that sold `asset_in` and received `asset_out`.
    pub caller: Address,
    /// Asset sold to the pool.
    pub asset_in: Address,
    /// Asset bought from the pool.
    pub asset_out: Address,
    /// Quantity of `asset_in` pulled from the caller.
    pub amount_in: Amount,
    /// Quantity of `asset_out` sent to the caller.
    pub amount_out: Amount,
}

/// A completed `add_liquidity` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositRecord {
    /// Depositor, also the recipient of the minted shares.
    pub caller: Address,
    /// Low-identity asset committed.
    pub amount_low: Amount,
    /// High-identity asset committed.
    pub amount_high: Amount,
    /// Shares minted.
    pub liquidity: Liquidity,
}

/// A completed burn of pool shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawalRecord {
    /// Recipient of the redeemed assets.
    pub to: Address,
    /// Shares destroyed.
    pub liquidity: Liquidity,
    /// Low-identity asset paid out.
    pub amount_low: Amount,
    /// High-identity asset paid out.
    pub amount_high: Amount,
}

/// Any audit record the pool emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolEvent {
    /// See [`SwapRecord`].
    Swap(SwapRecord),
    /// See [`DepositRecord`].
    Deposit(DepositRecord),
    /// See [`WithdrawalRecord`].
    Withdrawal(WithdrawalRecord),
}

impl PoolEvent {
    /// Short, stable name of the record kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Swap(_) => "swap",
            Self::Deposit(_) => "deposit",
            Self::Withdrawal(_) => "withdrawal",
        }
    }
}

impl From<SwapRecord> for PoolEvent {
    fn from(record: SwapRecord) -> Self {
        Self::Swap(record)
    }
}

impl From<DepositRecord> for PoolEvent {
    fn from(record: DepositRecord) -> Self {
        Self::Deposit(record)
    }
}

impl From<WithdrawalRecord> for PoolEvent {
    fn from(record: WithdrawalRecord) -> Self {
        Self::Withdrawal(record)
    }
}
