//! Constant-product quote functions over virtual reserves.
//!
//! The pricing curve is the standard `x × y = k` quote, evaluated against
//! whichever reserves the engine selects for the swap direction. These
//! functions are pure: fee handling, reserve mutation, and phase rules
//! all live in the engine.
//!
//! # Rounding
//!
//! - [`quote_exact_in`] truncates: the pool never over-pays output.
//! - [`quote_exact_out`] computes `in_res × out / (out_res − out)` floored
//!   and then adds one unit, so the pool is never under-charged input.

use crate::domain::{Amount, Rounding};
use crate::error::PoolError;
use crate::math::CheckedArithmetic;

/// Computes the output for an exact input against the given reserves.
///
/// Formula: `amount_out = amount_in × reserve_out / (reserve_in + amount_in)`,
/// rounded down. `amount_in` must already be net of any input-side fee.
///
/// # Errors
///
/// - [`PoolError::InvalidQuantity`] if `amount_in` is zero.
/// - [`PoolError::InsufficientLiquidity`] if either reserve is zero or the
///   quote rounds to zero.
/// - [`PoolError::Overflow`] if `amount_in × reserve_out` overflows.
pub fn quote_exact_in(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> crate::error::Result<Amount> {
    if amount_in.is_zero() {
        return Err(PoolError::InvalidQuantity("swap input must be non-zero"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(PoolError::InsufficientLiquidity("empty reserve"));
    }

    let denominator = reserve_in.safe_add(&amount_in)?;
    let amount_out = amount_in
        .mul_div(&reserve_out, &denominator, Rounding::Down)
        .ok_or(PoolError::Overflow("exact-in quote overflow"))?;

    if amount_out.is_zero() {
        return Err(PoolError::InsufficientLiquidity(
            "input too small to price",
        ));
    }
    // amount_in / (reserve_in + amount_in) < 1 guarantees out < reserve_out.
    Ok(amount_out)
}

/// Computes the input required for an exact output against the given
/// reserves.
///
/// Formula: `amount_in = reserve_in × amount_out / (reserve_out − amount_out) + 1`.
/// The added unit compensates the truncation in the pool's favour.
///
/// # Errors
///
/// - [`PoolError::InvalidQuantity`] if `amount_out` is zero.
/// - [`PoolError::InsufficientLiquidity`] if `amount_out ≥ reserve_out` or
///   `reserve_in` is zero.
/// - [`PoolError::Overflow`] if `reserve_in × amount_out` overflows.
pub fn quote_exact_out(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> crate::error::Result<Amount> {
    if amount_out.is_zero() {
        return Err(PoolError::InvalidQuantity("swap output must be non-zero"));
    }
    if amount_out >= reserve_out {
        return Err(PoolError::InsufficientLiquidity(
            "requested output exceeds output reserve",
        ));
    }
    if reserve_in.is_zero() {
        return Err(PoolError::InsufficientLiquidity("empty input reserve"));
    }

    let denominator = reserve_out.safe_sub(&amount_out)?;
    let floored = reserve_in
        .mul_div(&amount_out, &denominator, Rounding::Down)
        .ok_or(PoolError::Overflow("exact-out quote overflow"))?;

    floored.safe_add(&Amount::new(1))
}
