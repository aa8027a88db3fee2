//! Chain-agnostic account and asset identity.

use core::fmt;

/// A 32-byte identity naming an account, an asset ledger, or a pool.
///
/// The derived ordering is lexicographic over the bytes, which is the same
/// as numeric ordering of the big-endian integer they encode.  Pools rely
/// on this total order to sort their two assets canonically.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Address;
///
/// let lo = Address::from_low_u64(1);
/// let hi = Address::from_low_u64(2);
/// assert!(lo < hi);
/// assert_eq!(hi.to_string(), "0x00000000…00000002");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates an `Address` whose big-endian value equals `value`.
    ///
    /// Handy for tests and demos where small, readable identities are
    /// enough.
    #[must_use]
    pub const fn from_low_u64(value: u64) -> Self {
        let be = value.to_be_bytes();
        let mut bytes = [0u8; 32];
        let mut i = 0;
        while i < 8 {
            bytes[24 + i] = be[i];
            i += 1;
        }
        Self(bytes)
    }
}

impl fmt::Display for Address {
    /// Formats as `0x` followed by the first and last four bytes in hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for b in self.0.iter().take(4) {
            write!(f, "{b:02x}")?;
        }
        write!(f, "…")?;
        for b in self.0.iter().skip(28) {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}
