//! Unified error types for the Hydra pair pool.
//!
//! All fallible pool operations return [`PoolError`], ensuring a consistent
//! error handling experience for consumers.  The variants follow the pool's
//! failure taxonomy:
//!
//! | Variant | Meaning | Retry? |
//! |---------|---------|--------|
//! | [`PoolError::Validation`] | wrong asset, identical assets, zero amount, bad config | never |
//! | [`PoolError::InsufficientLiquidity`] | pool too shallow, nothing minted or burned | with new parameters |
//! | [`PoolError::Reentrancy`] | execution guard already held | state unchanged |
//! | [`PoolError::Overflow`] / [`PoolError::Underflow`] / [`PoolError::DivisionByZero`] | checked arithmetic | no |
//! | [`PoolError::InvariantViolation`] | defect in the pricing math | no |
//! | [`PoolError::Ledger`] | a token ledger refused a call | depends on ledger |
//!
//! Every operation is all-or-nothing: whatever error is returned, no
//! partial effect of the failed operation remains visible.

use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors produced by pool construction and pool operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Malformed input: unknown or identical assets, zero amounts,
    /// unresolvable asset identities.
    #[error("validation failed: {0}")]
    Validation(&'static str),

    /// The pool cannot satisfy the request at its current depth, or the
    /// request would mint or burn nothing.
    #[error("insufficient liquidity: {0}")]
    InsufficientLiquidity(&'static str),

    /// The exclusive execution guard was already held by an operation
    /// further up the call stack.
    #[error("reentrant call rejected: execution guard is held")]
    Reentrancy,

    /// An arithmetic step exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// An arithmetic step would have produced a negative value.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An internal consistency check failed.  This is a defect in the
    /// pool's math, never a caller error.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),

    /// A token ledger call failed.
    #[error("token ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, PoolError>;
