//! Swap quote: the priced outcome of a swap before or after execution.

use core::fmt;

use super::{Amount, SwapDirection};
use crate::error::PoolError;

/// A priced swap: input, output, and the fee extracted alongside.
///
/// The same type is returned by the `estimate_*` methods (a dry quote)
/// and by the `swap_*` methods (the amounts that were actually applied).
///
/// # Amount semantics
///
/// - **Buy** — `amount_in` is the net settlement entering the reserves;
///   the caller pays `amount_in + fee` in total. `amount_out` is the
///   claim amount minted to the caller.
/// - **Sell** — `amount_in` is the claim amount burned from the caller;
///   `amount_out` is the settlement the caller receives after the exit
///   fee, which is paid out of the pool's real reserve.
///
/// # Invariants
///
/// `amount_in` and `amount_out` are both non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapQuote {
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
    direction: SwapDirection,
}

impl SwapQuote {
    /// Creates a quote with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidQuantity`] if either amount is zero.
    pub const fn new(
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
        direction: SwapDirection,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(PoolError::InvalidQuantity("quote input must be positive"));
        }
        if amount_out.is_zero() {
            return Err(PoolError::InvalidQuantity("quote output must be positive"));
        }
        Ok(Self {
            amount_in,
            amount_out,
            fee,
            direction,
        })
    }

    /// Returns the net input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee, always denominated in the settlement asset.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Returns the swap direction the quote was priced for.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Total the caller is charged: `amount_in + fee` for buys (fee on
    /// top of the input), `amount_in` for sells (fee comes out of the
    /// output instead).
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the buy-side sum overflows.
    pub const fn total_charged(&self) -> crate::error::Result<Amount> {
        match self.direction {
            SwapDirection::Buy => match self.amount_in.checked_add(&self.fee) {
                Some(v) => Ok(v),
                None => Err(PoolError::Overflow("quote total overflow")),
            },
            SwapDirection::Sell => Ok(self.amount_in),
        }
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_quote() {
        let Ok(q) = SwapQuote::new(
            Amount::new(1_000),
            Amount::new(990),
            Amount::new(30),
            SwapDirection::Buy,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_in(), Amount::new(1_000));
        assert_eq!(q.amount_out(), Amount::new(990));
        assert_eq!(q.fee(), Amount::new(30));
        assert!(q.direction().is_buy());
    }

    #[test]
    fn zero_input_rejected() {
        let q = SwapQuote::new(
            Amount::ZERO,
            Amount::new(1),
            Amount::ZERO,
            SwapDirection::Buy,
        );
        assert!(q.is_err());
    }

    #[test]
    fn zero_output_rejected() {
        let q = SwapQuote::new(
            Amount::new(1),
            Amount::ZERO,
            Amount::ZERO,
            SwapDirection::Sell,
        );
        assert!(q.is_err());
    }

    #[test]
    fn zero_fee_allowed() {
        let q = SwapQuote::new(
            Amount::new(1),
            Amount::new(1),
            Amount::ZERO,
            SwapDirection::Sell,
        );
        assert!(q.is_ok());
    }

    // -- total_charged ------------------------------------------------------

    #[test]
    fn total_charged_buy_includes_fee() {
        let Ok(q) = SwapQuote::new(
            Amount::new(4_850),
            Amount::new(390_342),
            Amount::new(150),
            SwapDirection::Buy,
        ) else {
            panic!("expected Ok");
        };
        let Ok(total) = q.total_charged() else {
            panic!("expected Ok");
        };
        assert_eq!(total, Amount::new(5_000));
    }

    #[test]
    fn total_charged_sell_is_input() {
        let Ok(q) = SwapQuote::new(
            Amount::new(200_000),
            Amount::new(1_500),
            Amount::new(45),
            SwapDirection::Sell,
        ) else {
            panic!("expected Ok");
        };
        let Ok(total) = q.total_charged() else {
            panic!("expected Ok");
        };
        assert_eq!(total, Amount::new(200_000));
    }

    #[test]
    fn display_carries_direction() {
        let Ok(q) = SwapQuote::new(
            Amount::new(10),
            Amount::new(9),
            Amount::new(1),
            SwapDirection::Sell,
        ) else {
            panic!("expected Ok");
        };
        let s = format!("{q}");
        assert!(s.starts_with("Sell"));
        assert!(s.contains("10"));
    }
}
