//! Unified error types for the fundamm library.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type. Variants map onto the four failure classes the engine
//! distinguishes: configuration errors (fatal at initialization),
//! precondition violations (single operation rejected, no state touched),
//! arithmetic violations (checked math refused to wrap), and external-call
//! failures (collaborator transfer/mint/burn rejected the operation).
//!
//! Each variant carries a static reason string, and where an amount makes
//! the failure reproducible (slippage, fee ceiling) the offending values
//! ride along in the variant.

use thiserror::Error;

use crate::domain::{Amount, BasisPoints};

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Unified error enum for all pool and engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Invalid initialization parameter; the whole initialization is rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A quantity argument is out of range (usually zero where non-zero is required).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A configured fee rate exceeds the protocol ceiling.
    #[error("fee {fee} exceeds ceiling {ceiling}")]
    FeeTooHigh {
        /// The offending fee rate.
        fee: BasisPoints,
        /// The maximum the parameter store allows.
        ceiling: BasisPoints,
    },

    /// Trading is suspended on this pool.
    #[error("pool is paused")]
    Paused,

    /// A time bound has passed: the caller-supplied deadline or a pool period.
    #[error("deadline passed: {0}")]
    Expired(&'static str),

    /// Buying after the entry deadline requires the funding target to be reached.
    #[error("funding target not reached")]
    TargetNotReached,

    /// The pool variant does not support AMM trading.
    #[error("pool variant does not support trading")]
    TradingUnavailable,

    /// Reserves cannot satisfy the requested swap or payout.
    #[error("insufficient liquidity: {0}")]
    InsufficientLiquidity(&'static str),

    /// The quote violates the caller's slippage bound.
    #[error("slippage exceeded: limit {limit}, actual {actual}")]
    SlippageExceeded {
        /// The caller's bound (`min_out` or `max_in`).
        limit: Amount,
        /// The quoted amount that broke it.
        actual: Amount,
    },

    /// The caller does not hold the role the operation requires.
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    /// Checked arithmetic overflowed. Must not occur while invariants hold.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Checked arithmetic underflowed. Must not occur while invariants hold.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The settlement-asset ledger rejected a transfer.
    #[error("settlement transfer failed: {0}")]
    TransferFailed(&'static str),

    /// The claim-asset ledger rejected a mint or burn.
    #[error("claim mint/burn failed: {0}")]
    MintBurnFailed(&'static str),
}
