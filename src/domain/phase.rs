//! Derived pool lifecycle phase.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The lifecycle phase of a funding pool, derived from its one-way flags
/// and the current time.
///
/// The phase is never stored; it is computed on demand from
/// `target_reached`, `fully_returned`, and the configured deadlines. The
/// underlying flags only ever move forward, so a pool can never re-enter
/// an earlier phase. Trading permissions are checked against the flags
/// and deadlines directly; `Phase` exists for observability.
///
/// ```text
/// Open ──(entry deadline passes, target not reached)──▶ EntryClosed
///   │
///   └─(target reached)─▶ Funded ──(completion deadline passes)──▶ PostCompletion
///                                                                      │
///                                     (returned ≥ expected return) ────▶ FullyReturned
/// ```
///
/// `EntryClosed` disables buying but leaves selling open; `FullyReturned`
/// is terminal for accounting only — trading continues indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Before the entry deadline, target not yet reached: fund-raising.
    Open,
    /// Entry deadline passed without reaching the target: buys rejected,
    /// sells still allowed.
    EntryClosed,
    /// Target reached: capital allocated, buying re-enabled.
    Funded,
    /// Past the completion deadline: bonus distribution activates on
    /// sells; buying is disabled again.
    PostCompletion,
    /// Owner has returned at least the expected return amount.
    FullyReturned,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "Open",
            Self::EntryClosed => "EntryClosed",
            Self::Funded => "Funded",
            Self::PostCompletion => "PostCompletion",
            Self::FullyReturned => "FullyReturned",
        };
        write!(f, "{name}")
    }
}
