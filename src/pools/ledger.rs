//! The pool ledger: all mutable state of one funding pool.

use tracing::{debug, info};

use crate::config::PoolConfig;
use crate::domain::{Amount, CallContext, Phase, PoolEvent, Timestamp};
use crate::error::PoolError;
use crate::math::CheckedArithmetic;
use crate::traits::{Externals, Role};

use super::variant::PoolVariant;

/// All mutable counters and flags of one pool.
///
/// `Copy` on purpose: mutations run on a staged copy and commit only
/// after every external call succeeded, so a failed operation can never
/// leave partial state behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct PoolState {
    /// Settlement accumulated towards the target. Frozen once reached.
    pub(crate) accumulated_settlement: Amount,
    /// Claim asset accumulated towards the expected claim amount.
    pub(crate) accumulated_claim: Amount,
    /// One-way flag: the funding target has been met.
    pub(crate) target_reached: bool,
    /// Settlement awaiting the owner's withdrawal.
    pub(crate) allocated_settlement: Amount,
    /// Returned settlement not yet paid out to sellers.
    pub(crate) available_return: Amount,
    /// Claim asset outstanding against the pool (minted − burned).
    pub(crate) awaiting_claim: Amount,
    /// Cumulative amount returned by the owner. Never decreases.
    pub(crate) returned: Amount,
    /// One-way flag: `returned ≥ expected_return`.
    pub(crate) fully_returned: bool,
    /// Settlement tokens actually held for trading.
    pub(crate) real_settlement: Amount,
    /// Settlement-side virtual liquidity.
    pub(crate) virtual_settlement: Amount,
    /// Claim-side virtual liquidity (the claim asset is never pooled).
    pub(crate) virtual_claim: Amount,
    /// `virtual_claim × virtual_settlement` at seeding. Read-only after.
    pub(crate) invariant_k: Amount,
    /// Bonus settlement available to late sellers.
    pub(crate) available_bonus: Amount,
    /// Trading suspended.
    pub(crate) paused: bool,
}

/// One funding pool: immutable configuration, variant tag, and mutable
/// ledger state.
///
/// Created through [`PoolFactory::create`](crate::factory::PoolFactory::create).
/// Every state-changing operation is atomic: it either fully commits or
/// fully rejects with no observable partial effect. The host serializes
/// all calls to one pool; cross-pool calls are independent.
///
/// Lifecycle operations live here; swap pricing and execution live in
/// the engine `impl` block (`pools::engine`).
#[derive(Debug, Clone, PartialEq)]
pub struct FundingPool {
    config: PoolConfig,
    variant: PoolVariant,
    state: PoolState,
}

impl FundingPool {
    pub(crate) const fn from_parts(
        config: PoolConfig,
        variant: PoolVariant,
        state: PoolState,
    ) -> Self {
        Self {
            config,
            variant,
            state,
        }
    }

    /// Returns the immutable configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the variant this pool was created with.
    #[must_use]
    pub const fn variant(&self) -> PoolVariant {
        self.variant
    }

    pub(crate) const fn state(&self) -> &PoolState {
        &self.state
    }

    pub(crate) fn commit(&mut self, staged: PoolState) {
        self.state = staged;
    }

    /// Derives the lifecycle [`Phase`] at time `now`.
    ///
    /// The underlying flags are one-way, so for a fixed `now` the phase
    /// never moves backwards.
    #[must_use]
    pub fn phase(&self, now: Timestamp) -> Phase {
        if self.state.fully_returned {
            Phase::FullyReturned
        } else if self.state.target_reached {
            if now.is_after(self.config.completion_deadline()) {
                Phase::PostCompletion
            } else {
                Phase::Funded
            }
        } else if now.is_after(self.config.entry_deadline()) {
            Phase::EntryClosed
        } else {
            Phase::Open
        }
    }

    /// Returns `true` while trading is suspended.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.state.paused
    }

    /// Returns `true` once the funding target has been reached.
    #[must_use]
    pub const fn is_target_reached(&self) -> bool {
        self.state.target_reached
    }

    /// Returns `true` once cumulative returns cover the expected return.
    #[must_use]
    pub const fn is_fully_returned(&self) -> bool {
        self.state.fully_returned
    }

    /// Settlement accumulated towards the target so far.
    #[must_use]
    pub const fn accumulated_settlement(&self) -> Amount {
        self.state.accumulated_settlement
    }

    /// Claim asset accumulated towards the expected claim amount so far.
    #[must_use]
    pub const fn accumulated_claim(&self) -> Amount {
        self.state.accumulated_claim
    }

    /// Settlement awaiting the owner's withdrawal.
    #[must_use]
    pub const fn allocated_settlement(&self) -> Amount {
        self.state.allocated_settlement
    }

    /// Returned settlement not yet paid out to sellers.
    #[must_use]
    pub const fn available_return(&self) -> Amount {
        self.state.available_return
    }

    /// Claim asset outstanding against the pool.
    #[must_use]
    pub const fn awaiting_claim(&self) -> Amount {
        self.state.awaiting_claim
    }

    /// Cumulative amount the owner has returned.
    #[must_use]
    pub const fn returned(&self) -> Amount {
        self.state.returned
    }

    /// Settlement tokens actually held for trading.
    #[must_use]
    pub const fn real_settlement(&self) -> Amount {
        self.state.real_settlement
    }

    /// Settlement-side virtual liquidity.
    #[must_use]
    pub const fn virtual_settlement(&self) -> Amount {
        self.state.virtual_settlement
    }

    /// Claim-side virtual liquidity.
    #[must_use]
    pub const fn virtual_claim(&self) -> Amount {
        self.state.virtual_claim
    }

    /// The invariant constant fixed at seeding, for inspection only.
    #[must_use]
    pub const fn invariant_k(&self) -> Amount {
        self.state.invariant_k
    }

    /// Bonus settlement still available to late sellers.
    #[must_use]
    pub const fn available_bonus(&self) -> Amount {
        self.state.available_bonus
    }

    /// Suspends or resumes trading. Governance only.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Unauthorized`] unless the caller holds
    /// [`Role::Governance`] in the registry.
    pub fn set_paused<E: Externals>(
        &mut self,
        paused: bool,
        ctx: &CallContext,
        ext: &mut E,
    ) -> crate::error::Result<()> {
        ext.require_role(Role::Governance, ctx.caller())?;
        self.state.paused = paused;
        ext.record(&PoolEvent::PausedSet { paused });
        info!(pool = %self.config.pool_account(), paused, "pause state changed");
        Ok(())
    }

    /// Transfers the entire allocated settlement amount to the owner.
    ///
    /// Returns the amount transferred.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Unauthorized`] if the caller is not the pool owner.
    /// - [`PoolError::InvalidQuantity`] if nothing is allocated.
    /// - [`PoolError::TransferFailed`] if the settlement ledger rejects
    ///   the payout; no state changes in that case.
    pub fn claim_allocated<E: Externals>(
        &mut self,
        ctx: &CallContext,
        ext: &mut E,
    ) -> crate::error::Result<Amount> {
        if ctx.caller() != self.config.owner() {
            return Err(PoolError::Unauthorized("only the pool owner may claim"));
        }
        let amount = self.state.allocated_settlement;
        if amount.is_zero() {
            return Err(PoolError::InvalidQuantity("no allocated amount to claim"));
        }

        let mut staged = self.state;
        staged.allocated_settlement = Amount::ZERO;

        ext.transfer(
            self.config.settlement_asset(),
            self.config.pool_account(),
            self.config.owner(),
            amount,
        )?;

        self.commit(staged);
        ext.record(&PoolEvent::AllocationClaimed {
            owner: self.config.owner(),
            amount,
        });
        info!(pool = %self.config.pool_account(), %amount, "allocation claimed");
        Ok(amount)
    }

    /// Accepts returned settlement from the returning party (in practice
    /// the owner) and updates the return counters.
    ///
    /// The variant splits the amount first: the speculation variant caps
    /// the principal at what is still owed, moves it virtual→real, and
    /// banks the remainder as bonus. Crossing the expected-return
    /// threshold flips the one-way `fully_returned` flag.
    ///
    /// # Errors
    ///
    /// - [`PoolError::TargetNotReached`] before the target is met.
    /// - [`PoolError::InvalidQuantity`] if `amount` is zero.
    /// - [`PoolError::TransferFailed`] if pulling the settlement fails;
    ///   no state changes in that case.
    pub fn return_amount<E: Externals>(
        &mut self,
        amount: Amount,
        ctx: &CallContext,
        ext: &mut E,
    ) -> crate::error::Result<()> {
        if !self.state.target_reached {
            return Err(PoolError::TargetNotReached);
        }
        if amount.is_zero() {
            return Err(PoolError::InvalidQuantity("return amount must be non-zero"));
        }

        let mut staged = self.state;
        let (principal, bonus) = self.variant.apply_return(&self.config, &mut staged, amount)?;

        staged.returned = staged.returned.safe_add(&amount)?;
        staged.available_return = staged.available_return.safe_add(&amount)?;
        let crossed = !staged.fully_returned && staged.returned >= self.config.expected_return();
        if crossed {
            staged.fully_returned = true;
        }

        ext.transfer_from(
            self.config.settlement_asset(),
            ctx.caller(),
            self.config.pool_account(),
            amount,
        )?;

        self.commit(staged);
        ext.record(&PoolEvent::Returned {
            returner: ctx.caller(),
            principal,
            bonus,
            returned_total: self.state.returned,
        });
        if self.variant.supports_trading() {
            ext.record(&PoolEvent::ReservesUpdated {
                real_settlement: self.state.real_settlement,
                virtual_settlement: self.state.virtual_settlement,
                virtual_claim: self.state.virtual_claim,
            });
        }
        debug!(
            pool = %self.config.pool_account(),
            %principal,
            %bonus,
            returned = %self.state.returned,
            "return accepted"
        );
        if crossed {
            ext.record(&PoolEvent::FullyReturned {
                returned_total: self.state.returned,
            });
            info!(pool = %self.config.pool_account(), "pool fully returned");
        }
        Ok(())
    }
}
