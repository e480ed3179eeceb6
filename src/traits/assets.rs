//! Settlement-asset and claim-asset ledger collaborators.

use crate::domain::{AccountId, Amount, AssetId, ClaimId};

/// Fungible transfer primitives on the settlement-asset ledger.
///
/// Both operations are fallible; the core performs them as the last step
/// of a mutation and aborts the whole operation if any transfer fails.
pub trait SettlementLedger {
    /// Pulls `amount` of `asset` from `payer` into `payee`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed)
    /// if the ledger rejects the transfer (insufficient balance, missing
    /// approval, frozen account).
    fn transfer_from(
        &mut self,
        asset: AssetId,
        payer: AccountId,
        payee: AccountId,
        amount: Amount,
    ) -> crate::error::Result<()>;

    /// Sends `amount` of `asset` from `payer` (an account the caller
    /// controls, in practice the pool's custody account) to `payee`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed)
    /// if the ledger rejects the transfer.
    fn transfer(
        &mut self,
        asset: AssetId,
        payer: AccountId,
        payee: AccountId,
        amount: Amount,
    ) -> crate::error::Result<()>;
}

/// Mint/burn primitives on the claim-asset ledger.
///
/// Claim tokens are never pooled: buys mint them to the buyer and sells
/// burn them from the seller, so claim-side liquidity is purely virtual.
/// Both operations must be atomic with the calling operation.
pub trait ClaimLedger {
    /// Mints `amount` of claim series `id` under `asset` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::MintBurnFailed`](crate::error::PoolError::MintBurnFailed)
    /// if the ledger rejects the mint.
    fn mint(
        &mut self,
        asset: AssetId,
        to: AccountId,
        id: ClaimId,
        amount: Amount,
    ) -> crate::error::Result<()>;

    /// Burns `amount` of claim series `id` under `asset` from `from`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::MintBurnFailed`](crate::error::PoolError::MintBurnFailed)
    /// if the ledger rejects the burn (insufficient balance).
    fn burn(
        &mut self,
        asset: AssetId,
        from: AccountId,
        id: ClaimId,
        amount: Amount,
    ) -> crate::error::Result<()>;
}
