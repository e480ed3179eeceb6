//! Basis-point representation for fee rates and percentages.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::PoolError;

/// Maximum value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Fee rates, reward rates, and reserve multipliers are all basis-point
/// values with denominator 10 000. Multipliers above 10 000 (more than
/// 100%) are meaningful; fee and reward rates are validated against
/// protocol ceilings at initialization instead.
///
/// # Examples
///
/// ```
/// use fundamm::domain::BasisPoints;
///
/// let bp = BasisPoints::new(300); // 3%
/// assert_eq!(bp.get(), 300);
/// assert!(bp.is_valid_percent());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Computes `amount × (self / 10_000)` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the intermediate multiplication
    /// overflows.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        let bps = self.0 as u128;
        let raw = amount.get();

        let product = match raw.checked_mul(bps) {
            Some(v) => v,
            None => return Err(PoolError::Overflow("basis points apply overflow")),
        };

        let divisor = MAX_BPS as u128;

        match rounding {
            Rounding::Down => Ok(Amount::new(product / divisor)),
            Rounding::Up => {
                // product + 9_999 cannot overflow unless product is within
                // 10_000 of u128::MAX, which the checked_mul above already
                // constrains for any realistic amount.
                match product.checked_add(divisor - 1) {
                    Some(n) => Ok(Amount::new(n / divisor)),
                    None => {
                        let q = product / divisor;
                        let r = product % divisor;
                        if r != 0 {
                            Ok(Amount::new(q + 1))
                        } else {
                            Ok(Amount::new(q))
                        }
                    }
                }
            }
        }
    }

    /// Inverts a net amount through the complement rate: computes the fee
    /// owed on top of `net` so that the fee is `self` of the grossed-up
    /// total, i.e. `fee = net × self / (10_000 − self)`, truncated.
    ///
    /// Used for exact-output quotes where the pricing curve produces the
    /// net quantity first and the fee must be reconstructed from it.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidQuantity`] if the rate is 100% or more (the
    ///   complement would be zero or negative).
    /// - [`PoolError::Overflow`] if the intermediate multiplication overflows.
    pub const fn fee_on_net(&self, net: Amount) -> crate::error::Result<Amount> {
        if self.0 >= MAX_BPS {
            return Err(PoolError::InvalidQuantity(
                "fee rate of 100% makes the swap impossible",
            ));
        }
        let complement = (MAX_BPS - self.0) as u128;
        let product = match net.get().checked_mul(self.0 as u128) {
            Some(v) => v,
            None => return Err(PoolError::Overflow("fee gross-up overflow")),
        };
        Ok(Amount::new(product / complement))
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(BasisPoints::new(300).get(), 300);
    }

    #[test]
    fn constants() {
        assert_eq!(BasisPoints::ZERO.get(), 0);
        assert_eq!(BasisPoints::MAX_PERCENT.get(), 10_000);
    }

    #[test]
    fn is_valid_percent_in_range() {
        assert!(BasisPoints::ZERO.is_valid_percent());
        assert!(BasisPoints::new(5_000).is_valid_percent());
        assert!(BasisPoints::MAX_PERCENT.is_valid_percent());
    }

    #[test]
    fn is_valid_percent_out_of_range() {
        assert!(!BasisPoints::new(10_001).is_valid_percent());
    }

    // -- apply --------------------------------------------------------------

    #[test]
    fn apply_round_down() {
        // 300bp of 5_000 = 150 (the entry fee of Scenario A)
        let bp = BasisPoints::new(300);
        let Ok(result) = bp.apply(Amount::new(5_000), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::new(150));
    }

    #[test]
    fn apply_round_down_truncates() {
        // 300bp of 1 = 0.03 -> 0
        let bp = BasisPoints::new(300);
        let Ok(result) = bp.apply(Amount::new(1), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::ZERO);
    }

    #[test]
    fn apply_round_up_remainder() {
        let bp = BasisPoints::new(300);
        let Ok(result) = bp.apply(Amount::new(1), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::new(1));
    }

    #[test]
    fn apply_zero_rate() {
        let Ok(result) = BasisPoints::ZERO.apply(Amount::new(1_000_000), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::ZERO);
    }

    #[test]
    fn apply_multiplier_above_one() {
        // 20_000bp of 10_000 = 20_000 (the 2x reserve multiplier)
        let bp = BasisPoints::new(20_000);
        let Ok(result) = bp.apply(Amount::new(10_000), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::new(20_000));
    }

    #[test]
    fn apply_overflow() {
        let bp = BasisPoints::new(u32::MAX);
        assert!(bp.apply(Amount::MAX, Rounding::Down).is_err());
    }

    // -- fee_on_net ---------------------------------------------------------

    #[test]
    fn fee_on_net_normal() {
        // 300bp on net 9_700 -> 9_700 * 300 / 9_700 = 300,
        // so gross 10_000 carries exactly a 3% fee.
        let bp = BasisPoints::new(300);
        let Ok(fee) = bp.fee_on_net(Amount::new(9_700)) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, Amount::new(300));
    }

    #[test]
    fn fee_on_net_truncates() {
        let bp = BasisPoints::new(300);
        let Ok(fee) = bp.fee_on_net(Amount::new(100)) else {
            panic!("expected Ok");
        };
        // 100 * 300 / 9_700 = 3.09... -> 3
        assert_eq!(fee, Amount::new(3));
    }

    #[test]
    fn fee_on_net_zero_rate() {
        let Ok(fee) = BasisPoints::ZERO.fee_on_net(Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, Amount::ZERO);
    }

    #[test]
    fn fee_on_net_full_rate_rejected() {
        assert!(BasisPoints::MAX_PERCENT.fee_on_net(Amount::new(1)).is_err());
        assert!(BasisPoints::new(20_000).fee_on_net(Amount::new(1)).is_err());
    }

    // -- misc ---------------------------------------------------------------

    #[test]
    fn display() {
        assert_eq!(format!("{}", BasisPoints::new(30)), "30bp");
    }

    #[test]
    fn ordering() {
        assert!(BasisPoints::new(1) < BasisPoints::new(5));
    }
}
