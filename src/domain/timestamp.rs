//! Wall-clock timestamp supplied by the caller context.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A point in time in whole seconds since an arbitrary epoch.
///
/// The core never reads a clock; every operation receives the current
/// time through [`CallContext`](super::CallContext) and compares it
/// against configured deadlines. A deadline counts as passed strictly
/// after its instant — an operation arriving exactly at the deadline is
/// still in time.
///
/// # Examples
///
/// ```
/// use fundamm::domain::Timestamp;
///
/// let deadline = Timestamp::new(1_000);
/// assert!(!Timestamp::new(1_000).is_after(deadline));
/// assert!(Timestamp::new(1_001).is_after(deadline));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a `Timestamp` from whole seconds.
    #[must_use]
    pub const fn new(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Returns the underlying seconds value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if `self` is strictly after `other`.
    #[must_use]
    pub const fn is_after(&self, other: Self) -> bool {
        self.0 > other.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
