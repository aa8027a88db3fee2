//! Token ledger errors.

use thiserror::Error;

use crate::domain::Amount;

/// Error returned by a [`TokenLedger`](super::TokenLedger) operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The debited holder does not own enough units.
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance {
        /// Current balance of the debited holder.
        have: Amount,
        /// Amount the operation required.
        need: Amount,
    },

    /// The spender's allowance does not cover the pull.
    #[error("insufficient allowance: have {have}, need {need}")]
    InsufficientAllowance {
        /// Remaining allowance.
        have: Amount,
        /// Amount the operation required.
        need: Amount,
    },

    /// A balance or the total supply would exceed the representable range.
    #[error("ledger arithmetic overflow")]
    Overflow,

    /// The total supply would drop below zero.
    #[error("ledger supply underflow")]
    Underflow,

    /// A transfer hook refused the movement.
    #[error("transfer rejected by hook: {0}")]
    Rejected(String),

    /// The checkpoint was already committed or reverted.
    #[error("unknown ledger checkpoint")]
    UnknownCheckpoint,
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
