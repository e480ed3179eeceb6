//! Structured audit events emitted through the audit-log collaborator.

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, Timestamp};

/// A structured event describing one pool state transition.
///
/// Events are fire-and-forget: the core emits them through the
/// [`AuditLog`](crate::traits::AuditLog) collaborator and never reads
/// them back. They serialize with `serde` for off-chain observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolEvent {
    /// Pool created and variant state seeded.
    Deployed {
        /// Custody account of the new pool.
        pool: AccountId,
        /// Project owner entitled to the allocated capital.
        owner: AccountId,
        /// Funding target in settlement units.
        expected_settlement: Amount,
        /// Claim supply the raise corresponds to.
        expected_claim: Amount,
        /// End of the fund-raising period.
        entry_deadline: Timestamp,
        /// End of the project completion period.
        completion_deadline: Timestamp,
    },
    /// Trading availability toggled by governance.
    PausedSet {
        /// New pause state.
        paused: bool,
    },
    /// Accumulation counters moved while the target was not yet reached.
    AccumulationUpdated {
        /// Settlement accumulated towards the target.
        accumulated_settlement: Amount,
        /// Claim asset accumulated towards the expected claim amount.
        accumulated_claim: Amount,
    },
    /// The funding target was reached; capital allocated to the owner.
    TargetReached {
        /// Settlement amount now awaiting the owner's claim.
        allocated: Amount,
    },
    /// AMM reserve balances after a swap or a return.
    ReservesUpdated {
        /// Settlement tokens actually held against trading.
        real_settlement: Amount,
        /// Settlement-side virtual liquidity.
        virtual_settlement: Amount,
        /// Claim-side virtual liquidity.
        virtual_claim: Amount,
    },
    /// The owner withdrew the allocated capital.
    AllocationClaimed {
        /// Recipient (the pool owner).
        owner: AccountId,
        /// Amount transferred out.
        amount: Amount,
    },
    /// The returning party sent funds back to the pool.
    Returned {
        /// Account the settlement was pulled from.
        returner: AccountId,
        /// Portion counted against the expected settlement.
        principal: Amount,
        /// Portion added to the bonus balance.
        bonus: Amount,
        /// Cumulative returned amount after this call.
        returned_total: Amount,
    },
    /// Cumulative returns crossed the expected-return threshold.
    FullyReturned {
        /// Final cumulative returned amount.
        returned_total: Amount,
    },
}
