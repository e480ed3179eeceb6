//! Authorization/registry collaborator.

use core::fmt;

use crate::domain::AccountId;
use crate::error::PoolError;

/// Protocol-level roles the registry resolves.
///
/// The pool owner is not a role: it is fixed per pool in the
/// configuration. Roles cover the identities shared across pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Governance-equivalent capability: may pause and unpause trading.
    Governance,
    /// Recipient of protocol swap fees.
    FeeSink,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Governance => write!(f, "governance"),
            Self::FeeSink => write!(f, "fee-sink"),
        }
    }
}

/// Resolves role identities and checks privileged callers.
///
/// The core consumes this collaborator for owner-independent privilege
/// checks (pausing) and to locate the protocol fee sink; it never writes
/// to the registry.
pub trait AccessRegistry {
    /// Resolves the identity registered for `role`, if any.
    fn resolve(&self, role: Role) -> Option<AccountId>;

    /// Fails unless `caller` is the identity registered for `role`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Unauthorized`] if the role is unregistered or
    /// held by a different identity.
    fn require_role(&self, role: Role, caller: AccountId) -> crate::error::Result<()> {
        match self.resolve(role) {
            Some(holder) if holder == caller => Ok(()),
            Some(_) => Err(PoolError::Unauthorized("caller does not hold the role")),
            None => Err(PoolError::Unauthorized("role is not registered")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneRole {
        governance: AccountId,
    }

    impl AccessRegistry for OneRole {
        fn resolve(&self, role: Role) -> Option<AccountId> {
            match role {
                Role::Governance => Some(self.governance),
                Role::FeeSink => None,
            }
        }
    }

    #[test]
    fn require_role_accepts_holder() {
        let gov = AccountId::from_bytes([1u8; 32]);
        let reg = OneRole { governance: gov };
        assert!(reg.require_role(Role::Governance, gov).is_ok());
    }

    #[test]
    fn require_role_rejects_other() {
        let reg = OneRole {
            governance: AccountId::from_bytes([1u8; 32]),
        };
        let other = AccountId::from_bytes([2u8; 32]);
        assert_eq!(
            reg.require_role(Role::Governance, other),
            Err(PoolError::Unauthorized("caller does not hold the role"))
        );
    }

    #[test]
    fn require_role_rejects_unregistered() {
        let reg = OneRole {
            governance: AccountId::from_bytes([1u8; 32]),
        };
        assert_eq!(
            reg.require_role(Role::FeeSink, AccountId::zero()),
            Err(PoolError::Unauthorized("role is not registered"))
        );
    }

    #[test]
    fn role_display() {
        assert_eq!(format!("{}", Role::Governance), "governance");
        assert_eq!(format!("{}", Role::FeeSink), "fee-sink");
    }
}
