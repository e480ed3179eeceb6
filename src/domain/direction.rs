//! Swap direction descriptor.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The direction of a swap between the settlement asset and the claim
/// asset.
///
/// Direction selects the input and output reserves for the pricing curve:
///
/// - [`Buy`](Self::Buy) — settlement in, claim out. Input reserve is
///   `virtual settlement + real settlement`, output reserve is the
///   virtual claim reserve. The entry fee is taken on the input.
/// - [`Sell`](Self::Sell) — claim in, settlement out. The mirror of the
///   above; the exit fee is taken on the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Settlement asset in, claim asset out.
    Buy,
    /// Claim asset in, settlement asset out.
    Sell,
}

impl SwapDirection {
    /// Returns `true` for [`SwapDirection::Buy`].
    #[must_use]
    pub const fn is_buy(&self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Returns `true` for [`SwapDirection::Sell`].
    #[must_use]
    pub const fn is_sell(&self) -> bool {
        matches!(self, Self::Sell)
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}
