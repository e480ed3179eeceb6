//! Immutable per-pool configuration.

use crate::domain::{
    AccountId, Amount, AssetId, BasisPoints, ClaimId, Rounding, Timestamp,
};
use crate::error::PoolError;

use super::ProtocolParams;

/// The immutable configuration of one funding pool, fixed at creation.
///
/// Construction validates every parameter; a `PoolConfig` that exists is
/// a valid one. The derived quantities (`expected_return`,
/// `expected_bonus`) are computed once here and never recomputed.
///
/// # Examples
///
/// ```
/// use fundamm::config::{PoolConfig, ProtocolParams};
/// use fundamm::domain::{
///     AccountId, Amount, AssetId, BasisPoints, ClaimId, Timestamp,
/// };
///
/// let params = ProtocolParams::new(
///     BasisPoints::new(1_000),
///     BasisPoints::new(20_000),
///     BasisPoints::new(20_000),
/// ).expect("valid params");
///
/// let config = PoolConfig::new(
///     AssetId::from_bytes([1u8; 32]),   // settlement asset
///     AssetId::from_bytes([2u8; 32]),   // claim asset
///     ClaimId::new(1),
///     AccountId::from_bytes([10u8; 32]), // pool custody account
///     AccountId::from_bytes([11u8; 32]), // owner
///     BasisPoints::new(300),             // 3% entry fee
///     BasisPoints::new(300),             // 3% exit fee
///     Amount::new(10_000),               // funding target
///     Amount::new(1_000_000),            // expected claim amount
///     BasisPoints::new(500),             // 5% reward
///     Timestamp::new(1_000),             // entry deadline
///     Timestamp::new(2_000),             // completion deadline
///     Timestamp::new(0),                 // now
///     &params,
/// ).expect("valid config");
///
/// assert_eq!(config.expected_return(), Amount::new(10_500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    settlement_asset: AssetId,
    claim_asset: AssetId,
    claim_id: ClaimId,
    pool_account: AccountId,
    owner: AccountId,
    entry_fee: BasisPoints,
    exit_fee: BasisPoints,
    expected_settlement: Amount,
    expected_claim: Amount,
    reward_rate: BasisPoints,
    entry_deadline: Timestamp,
    completion_deadline: Timestamp,
    expected_return: Amount,
    expected_bonus: Amount,
}

impl PoolConfig {
    /// Creates a validated pool configuration.
    ///
    /// # Errors
    ///
    /// [`PoolError::InvalidConfiguration`] if any asset or account handle
    /// is zero, if either expected amount is zero, if `entry_deadline` is
    /// not strictly after `now`, or if `completion_deadline` is not
    /// strictly after `entry_deadline`.
    /// [`PoolError::FeeTooHigh`] if either fee rate exceeds the protocol
    /// ceiling.
    /// [`PoolError::Overflow`] if the expected-return derivation overflows.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        settlement_asset: AssetId,
        claim_asset: AssetId,
        claim_id: ClaimId,
        pool_account: AccountId,
        owner: AccountId,
        entry_fee: BasisPoints,
        exit_fee: BasisPoints,
        expected_settlement: Amount,
        expected_claim: Amount,
        reward_rate: BasisPoints,
        entry_deadline: Timestamp,
        completion_deadline: Timestamp,
        now: Timestamp,
        params: &ProtocolParams,
    ) -> crate::error::Result<Self> {
        if settlement_asset.is_zero() {
            return Err(PoolError::InvalidConfiguration(
                "settlement asset handle is zero",
            ));
        }
        if claim_asset.is_zero() {
            return Err(PoolError::InvalidConfiguration("claim asset handle is zero"));
        }
        if pool_account.is_zero() {
            return Err(PoolError::InvalidConfiguration("pool account is zero"));
        }
        if owner.is_zero() {
            return Err(PoolError::InvalidConfiguration("owner identity is zero"));
        }
        if expected_settlement.is_zero() {
            return Err(PoolError::InvalidConfiguration("funding target is zero"));
        }
        if expected_claim.is_zero() {
            return Err(PoolError::InvalidConfiguration("expected claim amount is zero"));
        }
        if !entry_deadline.is_after(now) {
            return Err(PoolError::InvalidConfiguration(
                "entry deadline must be strictly in the future",
            ));
        }
        if !completion_deadline.is_after(entry_deadline) {
            return Err(PoolError::InvalidConfiguration(
                "completion deadline must be strictly after the entry deadline",
            ));
        }
        for fee in [entry_fee, exit_fee] {
            if fee > params.fee_ceiling() {
                return Err(PoolError::FeeTooHigh {
                    fee,
                    ceiling: params.fee_ceiling(),
                });
            }
        }

        // expected_return = target + target * reward / 10_000
        let expected_bonus = reward_rate.apply(expected_settlement, Rounding::Down)?;
        let expected_return = expected_settlement
            .checked_add(&expected_bonus)
            .ok_or(PoolError::Overflow("expected return overflow"))?;

        Ok(Self {
            settlement_asset,
            claim_asset,
            claim_id,
            pool_account,
            owner,
            entry_fee,
            exit_fee,
            expected_settlement,
            expected_claim,
            reward_rate,
            entry_deadline,
            completion_deadline,
            expected_return,
            expected_bonus,
        })
    }

    /// Settlement-asset handle (the "HOLD" side).
    #[must_use]
    pub const fn settlement_asset(&self) -> AssetId {
        self.settlement_asset
    }

    /// Claim-asset handle (the "RWA" side).
    #[must_use]
    pub const fn claim_asset(&self) -> AssetId {
        self.claim_asset
    }

    /// Identifier of this pool's claim series.
    #[must_use]
    pub const fn claim_id(&self) -> ClaimId {
        self.claim_id
    }

    /// The pool's custody account on the settlement ledger.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.pool_account
    }

    /// The project owner entitled to the allocated capital.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Entry fee rate, charged on buy-side input.
    #[must_use]
    pub const fn entry_fee(&self) -> BasisPoints {
        self.entry_fee
    }

    /// Exit fee rate, charged on sell-side output.
    #[must_use]
    pub const fn exit_fee(&self) -> BasisPoints {
        self.exit_fee
    }

    /// Funding target in settlement units.
    #[must_use]
    pub const fn expected_settlement(&self) -> Amount {
        self.expected_settlement
    }

    /// Claim supply corresponding to a full raise.
    #[must_use]
    pub const fn expected_claim(&self) -> Amount {
        self.expected_claim
    }

    /// Reward rate the owner owes on top of the principal.
    #[must_use]
    pub const fn reward_rate(&self) -> BasisPoints {
        self.reward_rate
    }

    /// End of the fund-raising period.
    #[must_use]
    pub const fn entry_deadline(&self) -> Timestamp {
        self.entry_deadline
    }

    /// End of the project completion period.
    #[must_use]
    pub const fn completion_deadline(&self) -> Timestamp {
        self.completion_deadline
    }

    /// `target + target × reward_rate / 10_000`, fixed at creation.
    #[must_use]
    pub const fn expected_return(&self) -> Amount {
        self.expected_return
    }

    /// `target × reward_rate / 10_000`, the bonus pot a full return funds.
    #[must_use]
    pub const fn expected_bonus(&self) -> Amount {
        self.expected_bonus
    }
}
