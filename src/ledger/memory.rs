//! In-memory fungible ledger.

use core::cell::RefCell;
use core::fmt;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::domain::{Address, Amount};

use super::{Checkpoint, LedgerError, LedgerResult, ShareLedger, TokenLedger};

/// A balance movement, as reported to a [`TransferHook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransferNotice {
    /// Ledger that moved the units.
    pub token: Address,
    /// Debited holder.
    pub from: Address,
    /// Credited holder.
    pub to: Address,
    /// Units moved.
    pub amount: Amount,
}

/// Callback run after every successful balance movement.
///
/// The hook is arbitrary external code: it may call back into a pool or
/// into this same ledger.  Returning an error fails the transfer and
/// restores the ledger to its state before the transfer.
pub type TransferHook = Rc<dyn Fn(&TransferNotice) -> LedgerResult<()>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LedgerState {
    balances: BTreeMap<Address, Amount>,
    allowances: BTreeMap<(Address, Address), Amount>,
    total_supply: Amount,
}

impl LedgerState {
    fn balance(&self, holder: &Address) -> Amount {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    fn debit(&mut self, holder: &Address, amount: Amount) -> LedgerResult<()> {
        let have = self.balance(holder);
        let left = have
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance { have, need: amount })?;
        self.balances.insert(*holder, left);
        Ok(())
    }

    fn credit(&mut self, holder: &Address, amount: Amount) -> LedgerResult<()> {
        let total = self
            .balance(holder)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(*holder, total);
        Ok(())
    }
}

/// In-memory implementation of [`TokenLedger`] and [`ShareLedger`].
///
/// State lives behind a `RefCell`; no borrow is held while the optional
/// [`TransferHook`] runs, so hooks can freely re-enter.  An allowance of
/// [`Amount::MAX`] is treated as unlimited and is not decremented.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Address, Amount};
/// use hydra_pair::ledger::{MemoryLedger, TokenLedger};
///
/// let usdc = MemoryLedger::new(Address::from_low_u64(1));
/// let alice = Address::from_low_u64(100);
/// let bob = Address::from_low_u64(101);
///
/// usdc.mint(&alice, Amount::new(50)).expect("mint");
/// usdc.transfer(&alice, &bob, Amount::new(20)).expect("transfer");
/// assert_eq!(usdc.balance_of(&bob), Amount::new(20));
/// assert_eq!(usdc.total_supply(), Amount::new(50));
/// ```
pub struct MemoryLedger {
    address: Address,
    state: RefCell<LedgerState>,
    snapshots: RefCell<Vec<LedgerState>>,
    hook: RefCell<Option<TransferHook>>,
}

impl MemoryLedger {
    /// Creates an empty ledger for the asset `address`.
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            state: RefCell::new(LedgerState::default()),
            snapshots: RefCell::new(Vec::new()),
            hook: RefCell::new(None),
        }
    }

    /// Installs `hook`, replacing any previous one.
    pub fn set_hook(&self, hook: TransferHook) {
        *self.hook.borrow_mut() = Some(hook);
    }

    /// Removes the transfer hook.
    pub fn clear_hook(&self) {
        *self.hook.borrow_mut() = None;
    }

    /// Creates `amount` units credited to `to`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Overflow`] if the supply or the balance overflows.
    pub fn mint(&self, to: &Address, amount: Amount) -> LedgerResult<()> {
        let mut state = self.state.borrow_mut();
        let supply = state
            .total_supply
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        state.credit(to, amount)?;
        state.total_supply = supply;
        Ok(())
    }

    /// Destroys `amount` units held by `from`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    /// - [`LedgerError::Underflow`] if the supply is below `amount`.
    pub fn burn(&self, from: &Address, amount: Amount) -> LedgerResult<()> {
        let mut state = self.state.borrow_mut();
        let supply = state
            .total_supply
            .checked_sub(&amount)
            .ok_or(LedgerError::Underflow)?;
        state.debit(from, amount)?;
        state.total_supply = supply;
        Ok(())
    }

    /// Number of open checkpoints.
    #[must_use]
    pub fn open_checkpoints(&self) -> usize {
        self.snapshots.borrow().len()
    }

    fn move_units(&self, from: &Address, to: &Address, amount: Amount) -> LedgerResult<()> {
        let mut state = self.state.borrow_mut();
        state.debit(from, amount)?;
        state.credit(to, amount)
    }

    fn consume_allowance(
        &self,
        owner: &Address,
        spender: &Address,
        amount: Amount,
    ) -> LedgerResult<()> {
        let mut state = self.state.borrow_mut();
        let key = (*owner, *spender);
        let have = state.allowances.get(&key).copied().unwrap_or_default();
        if have == Amount::MAX {
            return Ok(());
        }
        let left = have
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance { have, need: amount })?;
        state.allowances.insert(key, left);
        Ok(())
    }

    fn notify(&self, notice: &TransferNotice) -> LedgerResult<()> {
        let hook = self.hook.borrow().clone();
        match hook {
            Some(hook) => hook(notice),
            None => Ok(()),
        }
    }

    /// Runs `body` inside a private checkpoint, then reports the movement
    /// to the hook.  Any failure restores the ledger.
    fn guarded_move<F>(&self, notice: TransferNotice, body: F) -> LedgerResult<()>
    where
        F: FnOnce() -> LedgerResult<()>,
    {
        let checkpoint = self.checkpoint();
        match body().and_then(|()| self.notify(&notice)) {
            Ok(()) => self.commit(checkpoint),
            Err(err) => {
                self.revert_to(checkpoint)?;
                Err(err)
            }
        }
    }
}

impl TokenLedger for MemoryLedger {
    fn address(&self) -> Address {
        self.address
    }

    fn total_supply(&self) -> Amount {
        self.state.borrow().total_supply
    }

    fn balance_of(&self, holder: &Address) -> Amount {
        self.state.borrow().balance(holder)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.state
            .borrow()
            .allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn approve(&self, owner: &Address, spender: &Address, amount: Amount) -> LedgerResult<()> {
        self.state
            .borrow_mut()
            .allowances
            .insert((*owner, *spender), amount);
        Ok(())
    }

    fn transfer(&self, from: &Address, to: &Address, amount: Amount) -> LedgerResult<()> {
        let notice = TransferNotice {
            token: self.address,
            from: *from,
            to: *to,
            amount,
        };
        self.guarded_move(notice, || self.move_units(from, to, amount))
    }

    fn transfer_from(
        &self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> LedgerResult<()> {
        let notice = TransferNotice {
            token: self.address,
            from: *from,
            to: *to,
            amount,
        };
        self.guarded_move(notice, || {
            self.consume_allowance(from, spender, amount)?;
            self.move_units(from, to, amount)
        })
    }

    fn checkpoint(&self) -> Checkpoint {
        let snapshot = self.state.borrow().clone();
        let mut snapshots = self.snapshots.borrow_mut();
        snapshots.push(snapshot);
        Checkpoint::at_depth(snapshots.len() - 1)
    }

    fn revert_to(&self, checkpoint: Checkpoint) -> LedgerResult<()> {
        let mut snapshots = self.snapshots.borrow_mut();
        let snapshot = snapshots
            .get(checkpoint.depth())
            .cloned()
            .ok_or(LedgerError::UnknownCheckpoint)?;
        snapshots.truncate(checkpoint.depth());
        *self.state.borrow_mut() = snapshot;
        Ok(())
    }

    fn commit(&self, checkpoint: Checkpoint) -> LedgerResult<()> {
        let mut snapshots = self.snapshots.borrow_mut();
        if checkpoint.depth() >= snapshots.len() {
            return Err(LedgerError::UnknownCheckpoint);
        }
        snapshots.truncate(checkpoint.depth());
        Ok(())
    }
}

impl ShareLedger for MemoryLedger {
    fn as_token_ledger(&self) -> &dyn TokenLedger {
        self
    }

    fn mint(&self, to: &Address, amount: Amount) -> LedgerResult<()> {
        MemoryLedger::mint(self, to, amount)
    }

    fn burn(&self, from: &Address, amount: Amount) -> LedgerResult<()> {
        MemoryLedger::burn(self, from, amount)
    }
}

impl fmt::Debug for MemoryLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryLedger")
            .field("address", &self.address)
            .field("total_supply", &self.state.borrow().total_supply)
            .field("holders", &self.state.borrow().balances.len())
            .field("hooked", &self.hook.borrow().is_some())
            .finish()
    }
}
