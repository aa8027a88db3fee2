//! The Token Ledger Interface consumed by the pool.
//!
//! Both underlying assets and the pool's own share token are reached
//! through [`TokenLedger`].  Receivers are `&self` because a ledger call
//! hands control to code the pool does not own, and that code may call
//! back into the pool (or into the ledger) before the outer call returns.
//!
//! # Journaling
//!
//! A pool operation is all-or-nothing even though it performs several
//! ledger calls.  Ledgers therefore expose a checkpoint stack:
//!
//! ```text
//! cp = ledger.checkpoint()      // snapshot pushed
//! ... transfers ...
//! ledger.commit(cp)             // keep effects, drop snapshot
//! ledger.revert_to(cp)          // or: restore snapshot, drop it
//! ```
//!
//! Checkpoints nest, so reentrant operations can open and close their own
//! frames inside an outer one.

use crate::domain::{Address, Amount};

use super::LedgerResult;

/// Handle to a ledger snapshot returned by [`TokenLedger::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checkpoint(usize);

impl Checkpoint {
    /// Creates a checkpoint handle at the given stack depth.
    #[must_use]
    pub const fn at_depth(depth: usize) -> Self {
        Self(depth)
    }

    /// Stack depth of the snapshot this handle refers to.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.0
    }
}

/// Standard fungible-asset operations.
///
/// `transfer` is authorized by `from` being the caller; `transfer_from`
/// is authorized by an allowance that `from` granted to `spender`.
pub trait TokenLedger {
    /// Identity of this asset.
    fn address(&self) -> Address;

    /// Total units in existence.
    fn total_supply(&self) -> Amount;

    /// Units held by `holder`.
    fn balance_of(&self, holder: &Address) -> Amount;

    /// Units `spender` may still pull from `owner`.
    fn allowance(&self, owner: &Address, spender: &Address) -> Amount;

    /// Sets the allowance of `spender` over `owner`'s units.
    ///
    /// # Errors
    ///
    /// Ledger-specific; the in-memory ledger never fails here.
    fn approve(&self, owner: &Address, spender: &Address, amount: Amount) -> LedgerResult<()>;

    /// Moves `amount` from `from` to `to` on `from`'s own authority.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`](super::LedgerError::InsufficientBalance)
    ///   if `from` holds less than `amount`.
    /// - [`LedgerError::Rejected`](super::LedgerError::Rejected) if a hook
    ///   refuses the movement.
    fn transfer(&self, from: &Address, to: &Address, amount: Amount) -> LedgerResult<()>;

    /// Moves `amount` from `from` to `to`, consuming `spender`'s allowance.
    ///
    /// # Errors
    ///
    /// As [`TokenLedger::transfer`], plus
    /// [`LedgerError::InsufficientAllowance`](super::LedgerError::InsufficientAllowance).
    fn transfer_from(
        &self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> LedgerResult<()>;

    /// Pushes a snapshot of the ledger state.
    fn checkpoint(&self) -> Checkpoint;

    /// Restores the state captured by `checkpoint` and discards it together
    /// with every snapshot taken after it.
    ///
    /// # Errors
    ///
    /// [`LedgerError::UnknownCheckpoint`](super::LedgerError::UnknownCheckpoint)
    /// if the snapshot no longer exists.
    fn revert_to(&self, checkpoint: Checkpoint) -> LedgerResult<()>;

    /// Keeps the current state and discards `checkpoint` together with
    /// every snapshot taken after it.
    ///
    /// # Errors
    ///
    /// [`LedgerError::UnknownCheckpoint`](super::LedgerError::UnknownCheckpoint)
    /// if the snapshot no longer exists.
    fn commit(&self, checkpoint: Checkpoint) -> LedgerResult<()>;
}

/// A ledger whose supply its owner can change.
///
/// The pool holds one of these for its own shares: it mints on deposit
/// and burns on withdrawal, while holders move shares through the plain
/// [`TokenLedger`] primitives.
pub trait ShareLedger: TokenLedger {
    /// Views this ledger through the plain [`TokenLedger`] interface, which
    /// exposes no supply-changing operations.
    fn as_token_ledger(&self) -> &dyn TokenLedger;

    /// Creates `amount` new units credited to `to`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Overflow`](super::LedgerError::Overflow) if the
    /// supply or the balance would overflow.
    fn mint(&self, to: &Address, amount: Amount) -> LedgerResult<()>;

    /// Destroys `amount` units held by `from`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`](super::LedgerError::InsufficientBalance)
    /// if `from` holds less than `amount`.
    fn burn(&self, from: &Address, amount: Amount) -> LedgerResult<()>;
}
