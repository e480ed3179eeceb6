//! Append-only audit-log collaborator.

use crate::domain::PoolEvent;

/// Fire-and-forget structured event sink.
///
/// The core records every state transition here for off-chain observers
/// and never reads events back. Recording is infallible: an audit
/// backend that can fail must buffer or drop internally rather than
/// veto pool operations.
pub trait AuditLog {
    /// Appends one event to the log.
    fn record(&mut self, event: &PoolEvent);
}
