//! Combined collaborator bound for pool operations.

use super::{AccessRegistry, AuditLog, ClaimLedger, SettlementLedger};

/// Everything a pool operation needs from the host system, as one bound.
///
/// Pool and engine methods take a single `&mut impl Externals` instead of
/// four separate collaborator parameters. Any type implementing the four
/// collaborator traits implements `Externals` automatically.
///
/// # Atomicity contract
///
/// The core stages all local state changes and commits them only after
/// every external call has succeeded, so a collaborator failure never
/// leaves partial pool state. Sell execution goes further and undoes its
/// own completed ledger calls before surfacing a later leg's failure,
/// since a payout can fail in the normal lifecycle once pool custody
/// lags the real reserve. For the remaining operations the mirror-image
/// obligation sits with the host: when several external calls are issued
/// (pull, fee payout, mint) and a later one fails, the host's
/// transaction boundary must unwind the earlier ones.
pub trait Externals: AccessRegistry + SettlementLedger + ClaimLedger + AuditLog {}

impl<T: AccessRegistry + SettlementLedger + ClaimLedger + AuditLog> Externals for T {}
