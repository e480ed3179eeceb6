//! Protocol parameters read from the parameter store at initialization.

use crate::domain::BasisPoints;
use crate::error::PoolError;

/// Multiplier floor: 10 000 bp = 1×.
const MIN_MULTIPLIER_BPS: u32 = 10_000;

/// Protocol-wide parameters consumed only during pool initialization.
///
/// The parameter store collaborator is read-only at call time; the core
/// snapshots the values it needs into this struct when a pool is created
/// and never consults them again. Fee ceilings bound the per-pool entry
/// and exit fee rates; reserve multipliers scale the funding targets into
/// the virtual reserves that seed the pricing curve.
///
/// # Examples
///
/// ```
/// use fundamm::config::ProtocolParams;
/// use fundamm::domain::BasisPoints;
///
/// let params = ProtocolParams::new(
///     BasisPoints::new(1_000),  // 10% fee ceiling
///     BasisPoints::new(20_000), // 2x settlement multiplier
///     BasisPoints::new(20_000), // 2x claim multiplier
/// ).expect("valid params");
/// assert_eq!(params.fee_ceiling().get(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProtocolParams {
    fee_ceiling: BasisPoints,
    settlement_multiplier: BasisPoints,
    claim_multiplier: BasisPoints,
}

impl ProtocolParams {
    /// Creates a validated parameter snapshot.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidConfiguration`] if the fee ceiling is 100% or
    ///   more: a full-rate fee makes every swap degenerate.
    /// - [`PoolError::InvalidConfiguration`] if either multiplier is below
    ///   1×. The virtual settlement reserve must cover the funding target,
    ///   otherwise the virtual→real shift at target-reached could
    ///   underflow it.
    pub const fn new(
        fee_ceiling: BasisPoints,
        settlement_multiplier: BasisPoints,
        claim_multiplier: BasisPoints,
    ) -> crate::error::Result<Self> {
        if fee_ceiling.get() >= BasisPoints::MAX_PERCENT.get() {
            return Err(PoolError::InvalidConfiguration(
                "fee ceiling must be below 100%",
            ));
        }
        if settlement_multiplier.get() < MIN_MULTIPLIER_BPS {
            return Err(PoolError::InvalidConfiguration(
                "settlement multiplier must be at least 1x",
            ));
        }
        if claim_multiplier.get() < MIN_MULTIPLIER_BPS {
            return Err(PoolError::InvalidConfiguration(
                "claim multiplier must be at least 1x",
            ));
        }
        Ok(Self {
            fee_ceiling,
            settlement_multiplier,
            claim_multiplier,
        })
    }

    /// Maximum entry/exit fee rate a pool may configure.
    #[must_use]
    pub const fn fee_ceiling(&self) -> BasisPoints {
        self.fee_ceiling
    }

    /// Multiplier from funding target to virtual settlement reserve.
    #[must_use]
    pub const fn settlement_multiplier(&self) -> BasisPoints {
        self.settlement_multiplier
    }

    /// Multiplier from expected claim amount to virtual claim reserve.
    #[must_use]
    pub const fn claim_multiplier(&self) -> BasisPoints {
        self.claim_multiplier
    }
}
