//! All-or-nothing operation frames.
//!
//! A frame captures everything an operation can change: the three ledgers
//! it touches (through their checkpoint stacks), the reserve cache and the
//! length of the audit log.  Frames nest, so an operation entered from a
//! ledger hook inside another operation gets its own frame, and reverting
//! the outer frame also discards whatever the inner one committed.

use tracing::error;

use super::Pool;
use crate::domain::Reserves;
use crate::error::PoolError;
use crate::ledger::{Checkpoint, LedgerError};

#[derive(Debug, Clone, Copy)]
pub(super) struct Frame {
    low: Checkpoint,
    high: Checkpoint,
    shares: Checkpoint,
    reserves: Reserves,
    events: usize,
}

impl Frame {
    pub(super) fn open(pool: &Pool) -> Self {
        Self {
            low: pool.asset_low.checkpoint(),
            high: pool.asset_high.checkpoint(),
            shares: pool.shares.checkpoint(),
            reserves: pool.reserves.get(),
            events: pool.events.borrow().len(),
        }
    }

    pub(super) fn commit(self, pool: &Pool) -> Result<(), PoolError> {
        let results = [
            pool.asset_low.commit(self.low),
            pool.asset_high.commit(self.high),
            pool.shares.commit(self.shares),
        ];
        Self::settle(pool, results)
    }

    pub(super) fn revert(self, pool: &Pool) -> Result<(), PoolError> {
        let results = [
            pool.asset_low.revert_to(self.low),
            pool.asset_high.revert_to(self.high),
            pool.shares.revert_to(self.shares),
        ];
        pool.reserves.set(self.reserves);
        pool.events.borrow_mut().truncate(self.events);
        Self::settle(pool, results)
    }

    // All three ledgers are closed before the first failure is reported.
    fn settle(pool: &Pool, results: [Result<(), LedgerError>; 3]) -> Result<(), PoolError> {
        for result in results {
            if let Err(err) = result {
                error!(pool = %pool.address(), error = %err, "ledger checkpoint lost");
                return Err(PoolError::InvariantViolation("ledger checkpoint lost"));
            }
        }
        Ok(())
    }
}
