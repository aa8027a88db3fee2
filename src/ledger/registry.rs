//! Resolution of asset identities to deployed ledgers.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::domain::Address;

use super::TokenLedger;

/// The set of deployed asset ledgers a pool may be built against.
///
/// Pool construction looks both asset identities up here and refuses
/// identities that do not resolve.
#[derive(Default)]
pub struct AssetRegistry {
    ledgers: BTreeMap<Address, Rc<dyn TokenLedger>>,
}

impl AssetRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `ledger` under its own address.
    ///
    /// Returns the ledger previously registered at that address, if any.
    pub fn register(&mut self, ledger: Rc<dyn TokenLedger>) -> Option<Rc<dyn TokenLedger>> {
        self.ledgers.insert(ledger.address(), ledger)
    }

    /// Looks up the ledger deployed at `address`.
    #[must_use]
    pub fn resolve(&self, address: &Address) -> Option<Rc<dyn TokenLedger>> {
        self.ledgers.get(address).cloned()
    }
}

impl core::fmt::Debug for AssetRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.ledgers.keys()).finish()
    }
}
