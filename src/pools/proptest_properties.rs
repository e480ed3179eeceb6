//! Property-based tests using `proptest` over the swap math and the
//! pool ledger.
//!
//! Covers five properties:
//!
//! 1. **Curve preservation**: an exact-input quote never decreases the
//!    reserve product and never drains the output reserve.
//! 2. **Inverse consistency**: the input quoted for an exact output, fed
//!    back through the exact-input quote, yields at least that output.
//! 3. **Fee monotonicity**: a fee-charging pool never pays out more than
//!    the same pool with zero fees for the same gross input.
//! 4. **Accumulation bounds**: no buy sequence pushes the accumulation
//!    counters past their targets, and the target flag never clears.
//! 5. **Retraction safety**: interleaved buys and full sell-backs keep
//!    the counters within bounds instead of underflowing.

use proptest::prelude::*;

use crate::config::{PoolConfig, ProtocolParams};
use crate::domain::{
    AccountId, Amount, AssetId, BasisPoints, CallContext, ClaimId, SwapDirection, Timestamp,
};
use crate::env::InMemoryExternals;
use crate::factory::PoolFactory;
use crate::math::{quote_exact_in, quote_exact_out};
use crate::pools::{FundingPool, PoolVariant};
use crate::traits::Role;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const TARGET: u128 = 10_000;
const EXPECTED_CLAIM: u128 = 1_000_000;

fn account(tag: u8) -> AccountId {
    let mut bytes = [0u8; 32];
    bytes[31] = tag;
    AccountId::from_bytes(bytes)
}

fn asset(tag: u8) -> AssetId {
    let mut bytes = [0u8; 32];
    bytes[31] = tag;
    AssetId::from_bytes(bytes)
}

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

fn make_pool(entry_fee: u32, exit_fee: u32) -> FundingPool {
    let Ok(config) = PoolConfig::new(
        asset(1),
        asset(2),
        ClaimId::new(1),
        account(10),
        account(11),
        BasisPoints::new(entry_fee),
        BasisPoints::new(exit_fee),
        Amount::new(TARGET),
        Amount::new(EXPECTED_CLAIM),
        BasisPoints::new(500),
        Timestamp::new(1_000),
        Timestamp::new(2_000),
        Timestamp::new(0),
        &params(),
    ) else {
        panic!("valid config");
    };
    let mut env = InMemoryExternals::new();
    let Ok(pool) = PoolFactory::create(config, PoolVariant::Speculation, &params(), &mut env)
    else {
        panic!("valid pool");
    };
    pool
}

/// A funded environment: trader holds effectively unlimited settlement
/// and the fee sink role is registered.
fn make_env() -> InMemoryExternals {
    let mut env = InMemoryExternals::new();
    env.set_role(Role::Governance, account(20));
    env.set_role(Role::FeeSink, account(21));
    env.set_balance(asset(1), account(30), Amount::new(u128::MAX / 4));
    env
}

fn trader_ctx(now: u64) -> CallContext {
    CallContext::new(account(30), Timestamp::new(now))
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values away from the extremes where quotes degenerate.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=1_000_000_000_000u128
}

/// Swap inputs up to the reserve scale.
fn input_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000u128
}

/// Fee rates from zero to the protocol ceiling used in these tests.
fn fee_strategy() -> impl Strategy<Value = u32> {
    0u32..=1_000u32
}

/// Buy amounts around the funding-target scale.
fn buy_sequence_strategy() -> impl Strategy<Value = Vec<u128>> {
    proptest::collection::vec(1u128..=5_000u128, 1..8)
}

// ---------------------------------------------------------------------------
// Property 1: curve preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_exact_in_preserves_product(
        reserve_in in reserve_strategy(),
        reserve_out in reserve_strategy(),
        amount_in in input_strategy(),
    ) {
        let Ok(out) = quote_exact_in(
            Amount::new(amount_in),
            Amount::new(reserve_in),
            Amount::new(reserve_out),
        ) else {
            return Ok(());
        };
        prop_assert!(out.get() < reserve_out);
        let k_before = reserve_in * reserve_out;
        let k_after = (reserve_in + amount_in) * (reserve_out - out.get());
        prop_assert!(k_after >= k_before);
    }
}

// ---------------------------------------------------------------------------
// Property 2: inverse consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_exact_out_covers_requested(
        reserve_in in reserve_strategy(),
        reserve_out in reserve_strategy(),
        amount_out in input_strategy(),
    ) {
        // restrict to satisfiable requests
        prop_assume!(amount_out < reserve_out);
        let Ok(required_in) = quote_exact_out(
            Amount::new(amount_out),
            Amount::new(reserve_in),
            Amount::new(reserve_out),
        ) else {
            return Ok(());
        };
        let Ok(actual_out) = quote_exact_in(
            required_in,
            Amount::new(reserve_in),
            Amount::new(reserve_out),
        ) else {
            return Ok(());
        };
        prop_assert!(actual_out.get() >= amount_out);
    }
}

// ---------------------------------------------------------------------------
// Property 3: fee monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_fees_never_increase_output(
        entry_fee in fee_strategy(),
        exit_fee in fee_strategy(),
        gross_in in 100u128..=50_000u128,
    ) {
        let with_fees = make_pool(entry_fee, exit_fee);
        let without_fees = make_pool(0, 0);

        let taxed = with_fees
            .estimate_swap_exact_input(Amount::new(gross_in), SwapDirection::Buy);
        let Ok(free) = without_fees
            .estimate_swap_exact_input(Amount::new(gross_in), SwapDirection::Buy)
        else {
            return Ok(());
        };
        if let Ok(taxed) = taxed {
            prop_assert!(taxed.amount_out() <= free.amount_out());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: accumulation bounds under buys
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_buys_never_overshoot_accumulation(
        entry_fee in fee_strategy(),
        buys in buy_sequence_strategy(),
    ) {
        let mut pool = make_pool(entry_fee, 0);
        let mut env = make_env();
        let ctx = trader_ctx(100);
        let mut was_reached = false;

        for gross in buys {
            let result = pool.swap_exact_input(
                Amount::new(gross),
                SwapDirection::Buy,
                Amount::ZERO,
                Timestamp::new(200),
                &ctx,
                &mut env,
            );
            if result.is_err() {
                continue;
            }
            prop_assert!(pool.accumulated_settlement() <= Amount::new(TARGET));
            prop_assert!(pool.accumulated_claim() <= Amount::new(EXPECTED_CLAIM));
            if was_reached {
                prop_assert!(pool.is_target_reached());
            }
            was_reached = pool.is_target_reached();
            if was_reached {
                prop_assert_eq!(pool.allocated_settlement(), Amount::new(TARGET));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: retraction safety under sell-backs
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_sell_backs_keep_counters_in_bounds(
        entry_fee in fee_strategy(),
        exit_fee in fee_strategy(),
        buys in buy_sequence_strategy(),
    ) {
        let mut pool = make_pool(entry_fee, exit_fee);
        let mut env = make_env();
        let ctx = trader_ctx(100);

        for gross in buys {
            let Ok(quote) = pool.swap_exact_input(
                Amount::new(gross),
                SwapDirection::Buy,
                Amount::ZERO,
                Timestamp::new(200),
                &ctx,
                &mut env,
            ) else {
                continue;
            };
            // sell every claim straight back
            let _ = pool.swap_exact_input(
                quote.amount_out(),
                SwapDirection::Sell,
                Amount::ZERO,
                Timestamp::new(200),
                &ctx,
                &mut env,
            );
            prop_assert!(pool.accumulated_settlement() <= Amount::new(TARGET));
            prop_assert!(pool.accumulated_claim() <= Amount::new(EXPECTED_CLAIM));
        }
    }
}
