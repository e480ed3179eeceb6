//! Pool configuration and protocol parameters.
//!
//! [`PoolConfig`] is the immutable blueprint of one funding pool, fully
//! validated at construction. [`ProtocolParams`] is the snapshot of the
//! parameter-store collaborator consumed during initialization only.

mod params;
mod pool_config;

pub use params::ProtocolParams;
pub use pool_config::PoolConfig;
