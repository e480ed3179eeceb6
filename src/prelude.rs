//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use fundamm::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    AccountId, Amount, AssetId, BasisPoints, CallContext, ClaimId, Phase, PoolEvent, Rounding,
    SwapDirection, SwapQuote, Timestamp,
};

// Re-export core traits
pub use crate::traits::{
    AccessRegistry, AuditLog, ClaimLedger, Externals, Role, SettlementLedger,
};

// Re-export math utilities
pub use crate::math::CheckedArithmetic;

// Re-export configuration
pub use crate::config::{PoolConfig, ProtocolParams};

// Re-export error types
pub use crate::error::{PoolError, Result};

// Re-export the pool and factory
pub use crate::factory::PoolFactory;
pub use crate::pools::{FundingPool, PoolVariant};

// Re-export the reference environment
pub use crate::env::InMemoryExternals;
