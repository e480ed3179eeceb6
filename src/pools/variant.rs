//! Pool-variant dispatch: per-variant seeding and return accounting.

use core::fmt;

use crate::config::{PoolConfig, ProtocolParams};
use crate::domain::{Amount, Rounding};
use crate::error::PoolError;
use crate::math::CheckedArithmetic;

use super::ledger::PoolState;

/// The closed set of pool variants, dispatched once at creation.
///
/// Each variant supplies its own initialization seeding and its own
/// return-of-funds accounting; everything else is shared ledger logic.
/// The set is small and closed, so this is an enum rather than a trait
/// object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolVariant {
    /// The trading variant: seeds virtual reserves from the protocol
    /// multipliers, prices swaps on the constant-product curve, and
    /// splits returned funds into principal and bonus.
    Speculation,
    /// A plain raise-and-repay pool with no secondary market: no AMM
    /// seeding, swaps rejected, returns counted as-is.
    Direct,
}

impl PoolVariant {
    /// Returns `true` if the variant prices and executes swaps.
    #[must_use]
    pub const fn supports_trading(&self) -> bool {
        matches!(self, Self::Speculation)
    }

    /// Variant-specific initialization: produces the starting mutable
    /// state for a pool with this variant.
    ///
    /// For [`Speculation`](Self::Speculation) this seeds the virtual
    /// reserves from the funding targets and protocol multipliers and
    /// fixes the invariant constant `k = virtual_claim × virtual_settlement`.
    /// `k` is never recomputed afterwards; it anchors the configured
    /// curve, not the live reserves.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if a seeded reserve or `k`
    /// overflows `u128`.
    pub(crate) fn seed(
        &self,
        config: &PoolConfig,
        params: &ProtocolParams,
    ) -> crate::error::Result<PoolState> {
        let mut state = PoolState::default();
        match self {
            Self::Speculation => {
                state.virtual_settlement = params
                    .settlement_multiplier()
                    .apply(config.expected_settlement(), Rounding::Down)?;
                state.virtual_claim = params
                    .claim_multiplier()
                    .apply(config.expected_claim(), Rounding::Down)?;
                state.invariant_k = state
                    .virtual_claim
                    .checked_mul(&state.virtual_settlement)
                    .ok_or(PoolError::Overflow("invariant constant overflow"))?;
                Ok(state)
            }
            Self::Direct => Ok(state),
        }
    }

    /// Variant-specific return accounting, applied to the staged state
    /// before the shared counters move.
    ///
    /// Returns the `(principal, bonus)` split of `amount`.
    ///
    /// For [`Speculation`](Self::Speculation): principal is capped at the
    /// settlement still owed (`expected_settlement − returned`) and added
    /// to the real settlement reserve, since the repaid capital is once
    /// again held for trading. The virtual reserve gives up the same
    /// amount, clamped at whatever it still holds: with a settlement
    /// multiplier under 2× the target-reached shift leaves less than a
    /// full target on the virtual side. The remainder is bonus and feeds
    /// the available bonus balance. [`Direct`](Self::Direct) counts the
    /// full amount as principal with no reserve movement.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if a reserve or counter movement
    /// overflows.
    pub(crate) fn apply_return(
        &self,
        config: &PoolConfig,
        staged: &mut PoolState,
        amount: Amount,
    ) -> crate::error::Result<(Amount, Amount)> {
        match self {
            Self::Speculation => {
                let outstanding = config
                    .expected_settlement()
                    .saturating_sub(&staged.returned);
                let principal = amount.min(outstanding);
                let bonus = amount.safe_sub(&principal)?;

                if !principal.is_zero() {
                    let shifted = principal.min(staged.virtual_settlement);
                    staged.virtual_settlement = staged.virtual_settlement.safe_sub(&shifted)?;
                    staged.real_settlement = staged.real_settlement.safe_add(&principal)?;
                }
                if !bonus.is_zero() {
                    staged.available_bonus = staged.available_bonus.safe_add(&bonus)?;
                }
                Ok((principal, bonus))
            }
            Self::Direct => Ok((amount, Amount::ZERO)),
        }
    }
}

impl fmt::Display for PoolVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Speculation => write!(f, "speculation"),
            Self::Direct => write!(f, "direct"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AccountId, AssetId, BasisPoints, ClaimId, Timestamp};

    fn params() -> ProtocolParams {
        let Ok(p) = ProtocolParams::new(
            BasisPoints::new(1_000),
            BasisPoints::new(20_000),
            BasisPoints::new(20_000),
        ) else {
            panic!("valid params");
        };
        p
    }

    fn config() -> PoolConfig {
        let Ok(cfg) = PoolConfig::new(
            AssetId::from_bytes([1u8; 32]),
            AssetId::from_bytes([2u8; 32]),
            ClaimId::new(1),
            AccountId::from_bytes([10u8; 32]),
            AccountId::from_bytes([11u8; 32]),
            BasisPoints::new(300),
            BasisPoints::new(300),
            Amount::new(10_000),
            Amount::new(1_000_000),
            BasisPoints::new(500),
            Timestamp::new(1_000),
            Timestamp::new(2_000),
            Timestamp::new(0),
            &params(),
        ) else {
            panic!("valid config");
        };
        cfg
    }

    #[test]
    fn speculation_seeds_virtual_reserves_and_k() {
        let Ok(state) = PoolVariant::Speculation.seed(&config(), &params()) else {
            panic!("expected Ok");
        };
        assert_eq!(state.virtual_settlement, Amount::new(20_000));
        assert_eq!(state.virtual_claim, Amount::new(2_000_000));
        // k = 2_000_000 * 20_000 = 4e10
        assert_eq!(state.invariant_k, Amount::new(40_000_000_000));
        assert_eq!(state.real_settlement, Amount::ZERO);
    }

    #[test]
    fn direct_seeds_nothing() {
        let Ok(state) = PoolVariant::Direct.seed(&config(), &params()) else {
            panic!("expected Ok");
        };
        assert_eq!(state, PoolState::default());
    }

    #[test]
    fn trading_support() {
        assert!(PoolVariant::Speculation.supports_trading());
        assert!(!PoolVariant::Direct.supports_trading());
    }

    #[test]
    fn speculation_return_splits_principal_and_bonus() {
        let cfg = config();
        let Ok(mut staged) = PoolVariant::Speculation.seed(&cfg, &params()) else {
            panic!("expected Ok");
        };
        // Mimic the target-reached shift: 10_000 moved out of virtual.
        staged.virtual_settlement = Amount::new(10_000);
        staged.real_settlement = Amount::new(10_000);
        staged.returned = Amount::ZERO;

        let Ok((principal, bonus)) =
            PoolVariant::Speculation.apply_return(&cfg, &mut staged, Amount::new(10_500))
        else {
            panic!("expected Ok");
        };
        assert_eq!(principal, Amount::new(10_000));
        assert_eq!(bonus, Amount::new(500));
        assert_eq!(staged.virtual_settlement, Amount::ZERO);
        assert_eq!(staged.real_settlement, Amount::new(20_000));
        assert_eq!(staged.available_bonus, Amount::new(500));
    }

    #[test]
    fn speculation_partial_return_is_all_principal() {
        let cfg = config();
        let Ok(mut staged) = PoolVariant::Speculation.seed(&cfg, &params()) else {
            panic!("expected Ok");
        };
        staged.virtual_settlement = Amount::new(10_000);
        staged.real_settlement = Amount::new(10_000);

        let Ok((principal, bonus)) =
            PoolVariant::Speculation.apply_return(&cfg, &mut staged, Amount::new(4_000))
        else {
            panic!("expected Ok");
        };
        assert_eq!(principal, Amount::new(4_000));
        assert_eq!(bonus, Amount::ZERO);
        assert_eq!(staged.available_bonus, Amount::ZERO);
    }

    #[test]
    fn speculation_return_with_sub_two_x_multiplier_clamps_the_shift() {
        let Ok(tight) = ProtocolParams::new(
            BasisPoints::new(1_000),
            BasisPoints::new(15_000),
            BasisPoints::new(20_000),
        ) else {
            panic!("valid params");
        };
        let cfg = config();
        let Ok(mut staged) = PoolVariant::Speculation.seed(&cfg, &tight) else {
            panic!("expected Ok");
        };
        // 1.5x seeds 15_000 virtual settlement; the target-reached shift
        // leaves only 5_000 of it.
        staged.virtual_settlement = Amount::new(5_000);
        staged.real_settlement = Amount::new(10_000);

        let Ok((principal, bonus)) =
            PoolVariant::Speculation.apply_return(&cfg, &mut staged, Amount::new(10_500))
        else {
            panic!("expected Ok");
        };
        assert_eq!(principal, Amount::new(10_000));
        assert_eq!(bonus, Amount::new(500));
        assert_eq!(staged.virtual_settlement, Amount::ZERO);
        assert_eq!(staged.real_settlement, Amount::new(20_000));
        assert_eq!(staged.available_bonus, Amount::new(500));
    }

    #[test]
    fn speculation_return_after_principal_repaid_is_all_bonus() {
        let cfg = config();
        let Ok(mut staged) = PoolVariant::Speculation.seed(&cfg, &params()) else {
            panic!("expected Ok");
        };
        staged.virtual_settlement = Amount::ZERO;
        staged.real_settlement = Amount::new(20_000);
        staged.returned = Amount::new(10_000);

        let Ok((principal, bonus)) =
            PoolVariant::Speculation.apply_return(&cfg, &mut staged, Amount::new(500))
        else {
            panic!("expected Ok");
        };
        assert_eq!(principal, Amount::ZERO);
        assert_eq!(bonus, Amount::new(500));
        assert_eq!(staged.real_settlement, Amount::new(20_000));
    }

    #[test]
    fn direct_return_is_identity() {
        let cfg = config();
        let mut staged = PoolState::default();
        let Ok((principal, bonus)) =
            PoolVariant::Direct.apply_return(&cfg, &mut staged, Amount::new(7_000))
        else {
            panic!("expected Ok");
        };
        assert_eq!(principal, Amount::new(7_000));
        assert_eq!(bonus, Amount::ZERO);
        assert_eq!(staged, PoolState::default());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PoolVariant::Speculation), "speculation");
        assert_eq!(format!("{}", PoolVariant::Direct), "direct");
    }
}
