//! The AMM engine: quoting and executing swaps against the pool ledger.
//!
//! Swaps price the claim asset against the settlement asset on a
//! constant-product curve over *virtual* reserves augmented by the *real*
//! settlement liquidity:
//!
//! - **Buy** (settlement → claim): input reserve is
//!   `virtual settlement + real settlement`, output reserve is the
//!   virtual claim reserve. The entry fee is taken on the input before
//!   pricing.
//! - **Sell** (claim → settlement): the mirror; the exit fee is taken on
//!   the output, computed from the pre-fee output quantity. Payouts come
//!   from the real reserve only.
//!
//! Execution is all-or-nothing: quotes and reserve movements are staged
//! on a copy of the ledger state, external transfers run last, and the
//! staged state commits only if every one of them succeeded.

use tracing::{debug, info};

use crate::domain::{
    Amount, CallContext, PoolEvent, Rounding, SwapDirection, SwapQuote, Timestamp,
};
use crate::error::PoolError;
use crate::math::{quote_exact_in, quote_exact_out, CheckedArithmetic};
use crate::traits::{Externals, Role};

use super::ledger::FundingPool;

impl FundingPool {
    /// Checks every precondition for a swap without quoting it.
    ///
    /// # Errors
    ///
    /// - [`PoolError::TradingUnavailable`] if the variant has no AMM.
    /// - [`PoolError::Paused`] while trading is suspended.
    /// - [`PoolError::Expired`] if the caller-supplied `deadline` has
    ///   passed, or when buying after the completion deadline.
    /// - [`PoolError::TargetNotReached`] when buying after the entry
    ///   deadline without the target having been met.
    pub fn validate_trading(
        &self,
        deadline: Timestamp,
        direction: SwapDirection,
        now: Timestamp,
    ) -> crate::error::Result<()> {
        if !self.variant().supports_trading() {
            return Err(PoolError::TradingUnavailable);
        }
        if self.is_paused() {
            return Err(PoolError::Paused);
        }
        if now.is_after(deadline) {
            return Err(PoolError::Expired("caller deadline passed"));
        }
        if direction.is_buy() && now.is_after(self.config().entry_deadline()) {
            if !self.is_target_reached() {
                return Err(PoolError::TargetNotReached);
            }
            if now.is_after(self.config().completion_deadline()) {
                return Err(PoolError::Expired("completion period over, buying disabled"));
            }
        }
        Ok(())
    }

    /// Quotes a swap for an exact input amount.
    ///
    /// For buys `amount_in` is the caller's gross spend: the entry fee
    /// comes off it first and the remainder is priced. For sells
    /// `amount_in` is the claim quantity; the exit fee comes off the
    /// priced output. Pure: no state is touched.
    ///
    /// # Errors
    ///
    /// - [`PoolError::TradingUnavailable`] if the variant has no AMM.
    /// - [`PoolError::InvalidQuantity`] if the input is zero or consumed
    ///   entirely by the fee.
    /// - [`PoolError::InsufficientLiquidity`] if the curve cannot price
    ///   the input.
    pub fn estimate_swap_exact_input(
        &self,
        amount_in: Amount,
        direction: SwapDirection,
    ) -> crate::error::Result<SwapQuote> {
        if !self.variant().supports_trading() {
            return Err(PoolError::TradingUnavailable);
        }
        if amount_in.is_zero() {
            return Err(PoolError::InvalidQuantity("swap input must be positive"));
        }
        let (reserve_in, reserve_out) = self.trading_reserves(direction)?;
        match direction {
            SwapDirection::Buy => {
                let fee = self.config().entry_fee().apply(amount_in, Rounding::Down)?;
                let net = amount_in
                    .checked_sub(&fee)
                    .ok_or(PoolError::Underflow("entry fee exceeds input"))?;
                if net.is_zero() {
                    return Err(PoolError::InvalidQuantity(
                        "input consumed entirely by the entry fee",
                    ));
                }
                let amount_out = quote_exact_in(net, reserve_in, reserve_out)?;
                SwapQuote::new(net, amount_out, fee, direction)
            }
            SwapDirection::Sell => {
                let gross_out = quote_exact_in(amount_in, reserve_in, reserve_out)?;
                let fee = self.config().exit_fee().apply(gross_out, Rounding::Down)?;
                let amount_out = gross_out
                    .checked_sub(&fee)
                    .ok_or(PoolError::Underflow("exit fee exceeds output"))?;
                if amount_out.is_zero() {
                    return Err(PoolError::InsufficientLiquidity(
                        "output consumed entirely by the exit fee",
                    ));
                }
                SwapQuote::new(amount_in, amount_out, fee, direction)
            }
        }
    }

    /// Quotes a swap for an exact output amount.
    ///
    /// For buys `amount_out` is the claim quantity to mint; the quoted
    /// input is net, and the caller pays `amount_in + fee`. For sells
    /// `amount_out` is the settlement the caller receives after the exit
    /// fee; the pre-fee quantity is grossed up through the fee complement
    /// before the inverse quote. Pure: no state is touched.
    ///
    /// # Errors
    ///
    /// - [`PoolError::TradingUnavailable`] if the variant has no AMM.
    /// - [`PoolError::InsufficientLiquidity`] if `amount_out` (grossed up
    ///   for sells) reaches the output reserve.
    pub fn estimate_swap_exact_output(
        &self,
        amount_out: Amount,
        direction: SwapDirection,
    ) -> crate::error::Result<SwapQuote> {
        if !self.variant().supports_trading() {
            return Err(PoolError::TradingUnavailable);
        }
        if amount_out.is_zero() {
            return Err(PoolError::InvalidQuantity("swap output must be positive"));
        }
        let (reserve_in, reserve_out) = self.trading_reserves(direction)?;
        match direction {
            SwapDirection::Buy => {
                let net = quote_exact_out(amount_out, reserve_in, reserve_out)?;
                let fee = self.config().entry_fee().fee_on_net(net)?;
                SwapQuote::new(net, amount_out, fee, direction)
            }
            SwapDirection::Sell => {
                let fee = self.config().exit_fee().fee_on_net(amount_out)?;
                let gross_out = amount_out.safe_add(&fee)?;
                let amount_in = quote_exact_out(gross_out, reserve_in, reserve_out)?;
                SwapQuote::new(amount_in, amount_out, fee, direction)
            }
        }
    }

    /// Executes a swap driven by an exact input amount.
    ///
    /// `min_out` is the caller's slippage bound on the output.
    ///
    /// # Errors
    ///
    /// Everything [`validate_trading`](Self::validate_trading) and
    /// [`estimate_swap_exact_input`](Self::estimate_swap_exact_input)
    /// return, plus [`PoolError::SlippageExceeded`] and any external
    /// transfer/mint/burn failure, in which case no state changes.
    pub fn swap_exact_input<E: Externals>(
        &mut self,
        amount_in: Amount,
        direction: SwapDirection,
        min_out: Amount,
        deadline: Timestamp,
        ctx: &CallContext,
        ext: &mut E,
    ) -> crate::error::Result<SwapQuote> {
        self.validate_trading(deadline, direction, ctx.now())?;
        let quote = self.estimate_swap_exact_input(amount_in, direction)?;
        if quote.amount_out() < min_out {
            return Err(PoolError::SlippageExceeded {
                limit: min_out,
                actual: quote.amount_out(),
            });
        }
        self.apply_swap(quote, ctx, ext)
    }

    /// Executes a swap driven by an exact output amount.
    ///
    /// `max_in` is the caller's slippage bound on the total charged:
    /// `amount_in + fee` for buys, the claim input for sells.
    ///
    /// # Errors
    ///
    /// Everything [`validate_trading`](Self::validate_trading) and
    /// [`estimate_swap_exact_output`](Self::estimate_swap_exact_output)
    /// return, plus [`PoolError::SlippageExceeded`] and any external
    /// transfer/mint/burn failure, in which case no state changes.
    pub fn swap_exact_output<E: Externals>(
        &mut self,
        amount_out: Amount,
        direction: SwapDirection,
        max_in: Amount,
        deadline: Timestamp,
        ctx: &CallContext,
        ext: &mut E,
    ) -> crate::error::Result<SwapQuote> {
        self.validate_trading(deadline, direction, ctx.now())?;
        let quote = self.estimate_swap_exact_output(amount_out, direction)?;
        let charged = quote.total_charged()?;
        if charged > max_in {
            return Err(PoolError::SlippageExceeded {
                limit: max_in,
                actual: charged,
            });
        }
        self.apply_swap(quote, ctx, ext)
    }

    /// Computes the bonus owed on a sale of `claim_sold` claim units at
    /// time `now`.
    ///
    /// Zero unless the completion deadline has passed and bonus funds
    /// remain; otherwise proportional to the fraction of the expected
    /// claim supply being sold, capped by the available balance:
    /// `min(claim_sold × expected_bonus / expected_claim, available_bonus)`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the proportion overflows.
    pub fn calculate_bonus(
        &self,
        claim_sold: Amount,
        now: Timestamp,
    ) -> crate::error::Result<Amount> {
        if !now.is_after(self.config().completion_deadline()) {
            return Ok(Amount::ZERO);
        }
        if self.available_bonus().is_zero() {
            return Ok(Amount::ZERO);
        }
        let share = claim_sold
            .mul_div(
                &self.config().expected_bonus(),
                &self.config().expected_claim(),
                Rounding::Down,
            )
            .ok_or(PoolError::Overflow("bonus proportion overflow"))?;
        Ok(share.min(self.available_bonus()))
    }

    /// Input/output reserves for `direction`.
    ///
    /// Buying draws on `virtual settlement + real settlement` and pays
    /// out of the virtual claim reserve; selling is the mirror.
    fn trading_reserves(
        &self,
        direction: SwapDirection,
    ) -> crate::error::Result<(Amount, Amount)> {
        let settlement_side = self
            .virtual_settlement()
            .safe_add(&self.real_settlement())?;
        match direction {
            SwapDirection::Buy => Ok((settlement_side, self.virtual_claim())),
            SwapDirection::Sell => Ok((self.virtual_claim(), settlement_side)),
        }
    }

    /// Applies a validated, slippage-checked quote to the ledger.
    ///
    /// All reserve and counter movements are staged on a copy; the
    /// external calls run against the collaborators afterwards; the copy
    /// commits only once all of them succeeded.
    fn apply_swap<E: Externals>(
        &mut self,
        quote: SwapQuote,
        ctx: &CallContext,
        ext: &mut E,
    ) -> crate::error::Result<SwapQuote> {
        match quote.direction() {
            SwapDirection::Buy => self.apply_buy(quote, ctx, ext),
            SwapDirection::Sell => self.apply_sell(quote, ctx, ext),
        }
    }

    fn apply_buy<E: Externals>(
        &mut self,
        quote: SwapQuote,
        ctx: &CallContext,
        ext: &mut E,
    ) -> crate::error::Result<SwapQuote> {
        let config = *self.config();
        let mut staged = *self.state();

        staged.real_settlement = staged.real_settlement.safe_add(&quote.amount_in())?;
        staged.virtual_claim = staged.virtual_claim.safe_sub(&quote.amount_out())?;
        staged.awaiting_claim = staged.awaiting_claim.safe_add(&quote.amount_out())?;

        let mut accumulation_moved = false;
        let mut reached_now = false;
        if !staged.target_reached {
            // Clamped advance: neither counter may overshoot its target.
            staged.accumulated_settlement = staged
                .accumulated_settlement
                .safe_add(&quote.amount_in())?
                .min(config.expected_settlement());
            staged.accumulated_claim = staged
                .accumulated_claim
                .safe_add(&quote.amount_out())?
                .min(config.expected_claim());
            accumulation_moved = true;

            if staged.accumulated_settlement == config.expected_settlement() {
                // The raise is complete: the target amount leaves the AMM's
                // custody for the owner allocation, and the same amount
                // shifts from the virtual to the real side of the curve.
                staged.target_reached = true;
                staged.allocated_settlement = config.expected_settlement();
                staged.real_settlement = staged
                    .real_settlement
                    .safe_sub(&config.expected_settlement())?;
                staged.virtual_settlement = staged
                    .virtual_settlement
                    .safe_sub(&config.expected_settlement())?;
                staged.real_settlement = staged
                    .real_settlement
                    .safe_add(&config.expected_settlement())?;
                reached_now = true;
            }
        }

        // External calls: pull gross input, forward the fee, mint claims.
        let total = quote.total_charged()?;
        ext.transfer_from(
            config.settlement_asset(),
            ctx.caller(),
            config.pool_account(),
            total,
        )?;
        if !quote.fee().is_zero() {
            let fee_sink = ext
                .resolve(Role::FeeSink)
                .ok_or(PoolError::Unauthorized("fee sink is not registered"))?;
            ext.transfer(
                config.settlement_asset(),
                config.pool_account(),
                fee_sink,
                quote.fee(),
            )?;
        }
        ext.mint(
            config.claim_asset(),
            ctx.caller(),
            config.claim_id(),
            quote.amount_out(),
        )?;

        self.commit(staged);
        if accumulation_moved {
            ext.record(&PoolEvent::AccumulationUpdated {
                accumulated_settlement: staged.accumulated_settlement,
                accumulated_claim: staged.accumulated_claim,
            });
        }
        if reached_now {
            ext.record(&PoolEvent::TargetReached {
                allocated: staged.allocated_settlement,
            });
            info!(pool = %config.pool_account(), "funding target reached");
        }
        ext.record(&PoolEvent::ReservesUpdated {
            real_settlement: staged.real_settlement,
            virtual_settlement: staged.virtual_settlement,
            virtual_claim: staged.virtual_claim,
        });
        debug!(pool = %config.pool_account(), %quote, "buy applied");
        Ok(quote)
    }

    fn apply_sell<E: Externals>(
        &mut self,
        quote: SwapQuote,
        ctx: &CallContext,
        ext: &mut E,
    ) -> crate::error::Result<SwapQuote> {
        let config = *self.config();
        let bonus = self.calculate_bonus(quote.amount_in(), ctx.now())?;
        let mut staged = *self.state();

        if staged.real_settlement < quote.amount_out() {
            return Err(PoolError::InsufficientLiquidity(
                "real reserve cannot cover the payout",
            ));
        }
        let gross_out = quote.amount_out().safe_add(&quote.fee())?;
        staged.real_settlement = staged
            .real_settlement
            .checked_sub(&gross_out)
            .ok_or(PoolError::InsufficientLiquidity(
                "real reserve cannot cover payout and fee",
            ))?;
        staged.virtual_claim = staged.virtual_claim.safe_add(&quote.amount_in())?;
        staged.awaiting_claim = staged.awaiting_claim.safe_sub(&quote.amount_in())?;

        let mut accumulation_moved = false;
        if !staged.target_reached {
            // Early sellers retract from the raise. Clamped at zero so an
            // adversarial sell sequence cannot underflow the counters.
            staged.accumulated_settlement =
                staged.accumulated_settlement.saturating_sub(&gross_out);
            staged.accumulated_claim =
                staged.accumulated_claim.saturating_sub(&quote.amount_in());
            accumulation_moved = true;
        }

        if !bonus.is_zero() {
            // calculate_bonus caps at the available balance; available
            // returns always cover it because every bonus entered through
            // a recorded return.
            staged.available_bonus = staged.available_bonus.safe_sub(&bonus)?;
            staged.available_return = staged.available_return.safe_sub(&bonus)?;
        }

        // External calls: burn the claims first so an overstated sale
        // fails before any funds move, then pay the seller and the fee.
        // Pool custody can lag the real reserve after the owner claims
        // the allocation, so a payout leg may fail even though the staged
        // checks passed; every leg that already ran is undone before the
        // error surfaces.
        let fee_sink = if quote.fee().is_zero() {
            None
        } else {
            Some(
                ext.resolve(Role::FeeSink)
                    .ok_or(PoolError::Unauthorized("fee sink is not registered"))?,
            )
        };
        let proceeds = quote.amount_out().safe_add(&bonus)?;
        ext.burn(
            config.claim_asset(),
            ctx.caller(),
            config.claim_id(),
            quote.amount_in(),
        )?;
        if let Err(err) = ext.transfer(
            config.settlement_asset(),
            config.pool_account(),
            ctx.caller(),
            proceeds,
        ) {
            ext.mint(
                config.claim_asset(),
                ctx.caller(),
                config.claim_id(),
                quote.amount_in(),
            )?;
            return Err(err);
        }
        if let Some(sink) = fee_sink {
            if let Err(err) = ext.transfer(
                config.settlement_asset(),
                config.pool_account(),
                sink,
                quote.fee(),
            ) {
                ext.transfer(
                    config.settlement_asset(),
                    ctx.caller(),
                    config.pool_account(),
                    proceeds,
                )?;
                ext.mint(
                    config.claim_asset(),
                    ctx.caller(),
                    config.claim_id(),
                    quote.amount_in(),
                )?;
                return Err(err);
            }
        }

        self.commit(staged);
        if accumulation_moved {
            ext.record(&PoolEvent::AccumulationUpdated {
                accumulated_settlement: staged.accumulated_settlement,
                accumulated_claim: staged.accumulated_claim,
            });
        }
        ext.record(&PoolEvent::ReservesUpdated {
            real_settlement: staged.real_settlement,
            virtual_settlement: staged.virtual_settlement,
            virtual_claim: staged.virtual_claim,
        });
        debug!(pool = %config.pool_account(), %quote, %bonus, "sell applied");
        Ok(quote)
    }
}
