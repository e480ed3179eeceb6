//! Arithmetic utilities for the pool engine.
//!
//! This module provides the [`CheckedArithmetic`] trait for overflow-safe
//! operations on domain types and the pure constant-product quote
//! functions the AMM engine prices swaps with.

mod checked;
mod constant_product;

pub use checked::CheckedArithmetic;
pub use constant_product::{quote_exact_in, quote_exact_out};
