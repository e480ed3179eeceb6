//! The funding pool: ledger state, lifecycle operations, and the AMM
//! engine that trades against it.
//!
//! [`FundingPool`] owns the pool's immutable [`PoolConfig`](crate::config::PoolConfig)
//! and its mutable ledger state. The lifecycle operations (pause, claim
//! allocation, record returns) live in `ledger`; swap quoting and
//! execution live in `engine`; [`PoolVariant`] selects the behavior
//! profile at creation time.

mod engine;
mod ledger;
pub(crate) mod variant;

#[cfg(test)]
mod proptest_properties;

pub use ledger::FundingPool;
pub use variant::PoolVariant;
