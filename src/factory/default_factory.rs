//! Default pool factory implementation.

use tracing::info;

use crate::config::{PoolConfig, ProtocolParams};
use crate::domain::PoolEvent;
use crate::pools::{FundingPool, PoolVariant};
use crate::traits::Externals;

/// Stateless factory for creating funding pools.
///
/// `PoolFactory` is the single entry point for constructing a
/// [`FundingPool`]: it seeds the variant's starting ledger state from
/// the validated [`PoolConfig`] and [`ProtocolParams`], records the
/// deployment in the audit log, and returns the assembled pool.
///
/// # Thread Safety
///
/// [`create`](Self::create) holds no shared mutable state of its own; it
/// only writes through the collaborator handle it is given.
///
/// # Example
///
/// ```rust
/// use fundamm::config::{PoolConfig, ProtocolParams};
/// use fundamm::domain::{AccountId, Amount, AssetId, BasisPoints, ClaimId, Timestamp};
/// use fundamm::env::InMemoryExternals;
/// use fundamm::factory::PoolFactory;
/// use fundamm::pools::PoolVariant;
///
/// let params = ProtocolParams::new(
///     BasisPoints::new(1_000),
///     BasisPoints::new(20_000),
///     BasisPoints::new(20_000),
/// )
/// .expect("valid params");
///
/// let config = PoolConfig::new(
///     AssetId::from_bytes([1u8; 32]),
///     AssetId::from_bytes([2u8; 32]),
///     ClaimId::new(1),
///     AccountId::from_bytes([3u8; 32]),
///     AccountId::from_bytes([4u8; 32]),
///     BasisPoints::new(300),
///     BasisPoints::new(300),
///     Amount::new(10_000),
///     Amount::new(1_000_000),
///     BasisPoints::new(500),
///     Timestamp::new(1_000),
///     Timestamp::new(2_000),
///     Timestamp::new(0),
///     &params,
/// )
/// .expect("valid config");
///
/// let mut env = InMemoryExternals::new();
/// let pool = PoolFactory::create(config, PoolVariant::Speculation, &params, &mut env)
///     .expect("pool created");
///
/// // 2x multipliers seed the curve at twice the funding targets.
/// assert_eq!(pool.virtual_settlement(), Amount::new(20_000));
/// assert_eq!(pool.virtual_claim(), Amount::new(2_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolFactory;

impl PoolFactory {
    /// Creates a funding pool from a validated configuration.
    ///
    /// Seeds the ledger state for `variant` (virtual reserves and the
    /// curve invariant for trading variants, empty state otherwise) and
    /// records a [`PoolEvent::Deployed`] entry.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`](crate::error::PoolError::Overflow)
    /// if seeding the virtual reserves or their product overflows.
    pub fn create<E: Externals>(
        config: PoolConfig,
        variant: PoolVariant,
        params: &ProtocolParams,
        ext: &mut E,
    ) -> crate::error::Result<FundingPool> {
        let state = variant.seed(&config, params)?;
        let pool = FundingPool::from_parts(config, variant, state);

        ext.record(&PoolEvent::Deployed {
            pool: config.pool_account(),
            owner: config.owner(),
            expected_settlement: config.expected_settlement(),
            expected_claim: config.expected_claim(),
            entry_deadline: config.entry_deadline(),
            completion_deadline: config.completion_deadline(),
        });
        info!(
            pool = %config.pool_account(),
            owner = %config.owner(),
            ?variant,
            "funding pool deployed"
        );
        Ok(pool)
    }
}
