//! In-memory reference implementation of the external collaborators.
//!
//! [`InMemoryExternals`] backs all four collaborator traits with plain
//! hash maps. It exists for tests, examples, and embedding the engine in
//! a process that keeps its ledgers in memory; a production embedding
//! would implement the traits over its own asset ledgers instead.

use std::collections::HashMap;

use crate::domain::{AccountId, Amount, AssetId, ClaimId, PoolEvent};
use crate::error::PoolError;
use crate::traits::{AccessRegistry, AuditLog, ClaimLedger, Role, SettlementLedger};

/// Hash-map backed registry, ledgers, and audit sink in one value.
///
/// Transfers and burns fail with the same errors a real ledger would
/// return on insufficient balance, so rollback behavior is exercised the
/// same way in tests as in production.
#[derive(Debug, Default, Clone)]
pub struct InMemoryExternals {
    roles: HashMap<Role, AccountId>,
    balances: HashMap<(AssetId, AccountId), Amount>,
    claims: HashMap<(AssetId, AccountId, ClaimId), Amount>,
    events: Vec<PoolEvent>,
}

impl InMemoryExternals {
    /// Creates an empty environment: no roles, no balances, no events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `account` to `role`, replacing any previous holder.
    pub fn set_role(&mut self, role: Role, account: AccountId) {
        self.roles.insert(role, account);
    }

    /// Sets the settlement balance of `account` in `asset`.
    pub fn set_balance(&mut self, asset: AssetId, account: AccountId, amount: Amount) {
        self.balances.insert((asset, account), amount);
    }

    /// Settlement balance of `account` in `asset`, zero if never touched.
    #[must_use]
    pub fn balance_of(&self, asset: AssetId, account: AccountId) -> Amount {
        self.balances
            .get(&(asset, account))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Claim balance of `account` for series `id` under `asset`.
    #[must_use]
    pub fn claim_balance_of(&self, asset: AssetId, account: AccountId, id: ClaimId) -> Amount {
        self.claims
            .get(&(asset, account, id))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Every event recorded so far, in order.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    fn move_settlement(
        &mut self,
        asset: AssetId,
        payer: AccountId,
        payee: AccountId,
        amount: Amount,
    ) -> crate::error::Result<()> {
        let from = self.balance_of(asset, payer);
        let debited = from
            .checked_sub(&amount)
            .ok_or(PoolError::TransferFailed("insufficient settlement balance"))?;
        let credited = self
            .balance_of(asset, payee)
            .checked_add(&amount)
            .ok_or(PoolError::TransferFailed("payee balance overflow"))?;
        self.balances.insert((asset, payer), debited);
        self.balances.insert((asset, payee), credited);
        Ok(())
    }
}

impl AccessRegistry for InMemoryExternals {
    fn resolve(&self, role: Role) -> Option<AccountId> {
        self.roles.get(&role).copied()
    }
}

impl SettlementLedger for InMemoryExternals {
    fn transfer_from(
        &mut self,
        asset: AssetId,
        payer: AccountId,
        payee: AccountId,
        amount: Amount,
    ) -> crate::error::Result<()> {
        self.move_settlement(asset, payer, payee, amount)
    }

    fn transfer(
        &mut self,
        asset: AssetId,
        payer: AccountId,
        payee: AccountId,
        amount: Amount,
    ) -> crate::error::Result<()> {
        self.move_settlement(asset, payer, payee, amount)
    }
}

impl ClaimLedger for InMemoryExternals {
    fn mint(
        &mut self,
        asset: AssetId,
        to: AccountId,
        id: ClaimId,
        amount: Amount,
    ) -> crate::error::Result<()> {
        let credited = self
            .claim_balance_of(asset, to, id)
            .checked_add(&amount)
            .ok_or(PoolError::MintBurnFailed("claim balance overflow"))?;
        self.claims.insert((asset, to, id), credited);
        Ok(())
    }

    fn burn(
        &mut self,
        asset: AssetId,
        from: AccountId,
        id: ClaimId,
        amount: Amount,
    ) -> crate::error::Result<()> {
        let debited = self
            .claim_balance_of(asset, from, id)
            .checked_sub(&amount)
            .ok_or(PoolError::MintBurnFailed("insufficient claim balance"))?;
        self.claims.insert((asset, from, id), debited);
        Ok(())
    }
}

impl AuditLog for InMemoryExternals {
    fn record(&mut self, event: &PoolEvent) {
        self.events.push(*event);
    }
}
