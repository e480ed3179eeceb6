//! Chain-agnostic account identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A generic, chain-agnostic identity for a caller, owner, or custody
/// account.
///
/// Wraps a fixed-size `[u8; 32]` byte array. The all-zero identity is the
/// conventional "unset" sentinel and is rejected wherever an identity is
/// required at initialization.
///
/// # Examples
///
/// ```
/// use fundamm::domain::AccountId;
///
/// let owner = AccountId::from_bytes([7u8; 32]);
/// assert!(!owner.is_zero());
/// assert_eq!(owner.as_bytes(), [7u8; 32]);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero identity.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` if this is the all-zero sentinel.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < 32 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First four bytes are enough to tell accounts apart in logs.
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}…",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_round_trip() {
        let bytes = [42u8; 32];
        assert_eq!(AccountId::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn zero_is_zero() {
        assert!(AccountId::zero().is_zero());
    }

    #[test]
    fn non_zero_detected() {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        assert!(!AccountId::from_bytes(bytes).is_zero());
    }

    #[test]
    fn equality() {
        assert_eq!(AccountId::from_bytes([1u8; 32]), AccountId::from_bytes([1u8; 32]));
        assert_ne!(AccountId::from_bytes([1u8; 32]), AccountId::from_bytes([2u8; 32]));
    }

    #[test]
    fn display_is_short() {
        let s = format!("{}", AccountId::from_bytes([0xab; 32]));
        assert!(s.starts_with("abababab"));
    }
}
