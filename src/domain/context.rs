//! Caller context carried into every operation.

use super::{AccountId, Timestamp};

/// The authenticated caller identity and current time for one call.
///
/// The core is a pure state machine: it never reads a clock and never
/// authenticates anyone itself. The host system resolves both and passes
/// them in with each operation.
///
/// # Examples
///
/// ```
/// use fundamm::domain::{AccountId, CallContext, Timestamp};
///
/// let ctx = CallContext::new(AccountId::from_bytes([1u8; 32]), Timestamp::new(100));
/// assert_eq!(ctx.now(), Timestamp::new(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallContext {
    caller: AccountId,
    now: Timestamp,
}

impl CallContext {
    /// Creates a context for `caller` at time `now`.
    #[must_use]
    pub const fn new(caller: AccountId, now: Timestamp) -> Self {
        Self { caller, now }
    }

    /// Returns the authenticated caller identity.
    #[must_use]
    pub const fn caller(&self) -> AccountId {
        self.caller
    }

    /// Returns the current time as supplied by the host.
    #[must_use]
    pub const fn now(&self) -> Timestamp {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let caller = AccountId::from_bytes([9u8; 32]);
        let ctx = CallContext::new(caller, Timestamp::new(7));
        assert_eq!(ctx.caller(), caller);
        assert_eq!(ctx.now(), Timestamp::new(7));
    }

    #[test]
    fn copy_semantics() {
        let ctx = CallContext::new(AccountId::zero(), Timestamp::new(1));
        let copy = ctx;
        assert_eq!(ctx, copy);
    }
}
