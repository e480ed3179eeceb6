//! Fundamental domain value types used throughout the pool engine.
//!
//! This module contains the core value types that model the funding-pool
//! domain: amounts, basis-point rates, asset and account handles,
//! timestamps, swap descriptors, lifecycle phases, and audit events.
//! All types use newtypes with validated constructors to enforce
//! invariants.

mod account;
mod amount;
mod asset;
mod basis_points;
mod context;
mod direction;
mod event;
mod phase;
mod quote;
mod rounding;
mod timestamp;

pub use account::AccountId;
pub use amount::Amount;
pub use asset::{AssetId, ClaimId};
pub use basis_points::BasisPoints;
pub use context::CallContext;
pub use direction::SwapDirection;
pub use event::PoolEvent;
pub use phase::Phase;
pub use quote::SwapQuote;
pub use rounding::Rounding;
pub use timestamp::Timestamp;
