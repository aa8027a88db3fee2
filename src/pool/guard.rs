//! Exclusive execution guard.
//!
//! A single flag shared by every guarded entry point of a pool.  Acquiring
//! it while it is already held fails immediately with
//! [`PoolError::Reentrancy`]; there is no waiting and no queue.  The flag
//! is released when the returned [`GuardTicket`] is dropped, so every exit
//! path (normal return, `?` propagation, or unwinding) reopens it.

use core::cell::Cell;

use crate::error::PoolError;

/// Observable state of an [`ExecutionGuard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuardState {
    /// No guarded operation is in flight.
    #[default]
    Open,
    /// A guarded operation is in flight further up the call stack.
    Held,
}

/// Reentrancy barrier owned by a pool.
#[derive(Debug, Default)]
pub struct ExecutionGuard {
    state: Cell<GuardState>,
}

impl ExecutionGuard {
    /// Creates an open guard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Cell::new(GuardState::Open),
        }
    }

    /// Takes the guard.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Reentrancy`] if the guard is already held.
    pub fn acquire(&self) -> Result<GuardTicket<'_>, PoolError> {
        if self.state.get() == GuardState::Held {
            return Err(PoolError::Reentrancy);
        }
        self.state.set(GuardState::Held);
        Ok(GuardTicket { guard: self })
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> GuardState {
        self.state.get()
    }
}

/// Proof that the guard is held; reopens it on drop.
#[must_use = "the guard is released as soon as the ticket is dropped"]
#[derive(Debug)]
pub struct GuardTicket<'a> {
    guard: &'a ExecutionGuard,
}

impl Drop for GuardTicket<'_> {
    fn drop(&mut self) {
        self.guard.state.set(GuardState::Open);
    }
}
