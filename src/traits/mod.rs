//! Collaborator seams the core consumes but does not implement.
//!
//! The pool engine is a pure state machine; everything with an identity,
//! a balance, or a log line behind it is reached through these traits:
//! [`AccessRegistry`] (roles), [`SettlementLedger`] / [`ClaimLedger`]
//! (asset custody), and [`AuditLog`] (event emission). [`Externals`]
//! bundles all four for operation signatures.

mod assets;
mod audit;
mod externals;
mod registry;

pub use assets::{ClaimLedger, SettlementLedger};
pub use audit::AuditLog;
pub use externals::Externals;
pub use registry::{AccessRegistry, Role};
