//! Pool construction.

mod default_factory;

pub use default_factory::PoolFactory;
