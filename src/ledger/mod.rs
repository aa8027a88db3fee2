//! The Token Ledger Interface and an in-memory implementation.
//!
//! The pool treats fungible-asset ledgers as external collaborators.  This
//! module defines the interface it consumes ([`TokenLedger`], and
//! [`ShareLedger`] for the pool's own shares), the [`AssetRegistry`] used
//! to resolve asset identities at pool construction, and [`MemoryLedger`],
//! an in-process ledger with transfer hooks for modelling external code
//! that re-enters the pool.

mod error;
mod memory;
mod registry;
mod token_ledger;

pub use error::{LedgerError, LedgerResult};
pub use memory::{MemoryLedger, TransferHook, TransferNotice};
pub use registry::AssetRegistry;
pub use token_ledger::{Checkpoint, ShareLedger, TokenLedger};
