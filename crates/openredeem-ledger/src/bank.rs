//! In-memory multi-asset token bank.
//!
//! Reference implementation of [`AssetLedger`] used by the integration
//! tests and by hosts embedding the engine without an external ledger.
//! Per-(asset, account) balances and per-(asset, owner, spender) allowances;
//! every mutation validates both legs before touching state.

use std::collections::HashMap;

use openredeem_types::{Address, Amount, AssetId, RedeemError, Result};

use crate::ledger::AssetLedger;
use crate::supply::SupplyAudit;

/// Source of truth for balances and allowances across all configured assets.
#[derive(Debug, Default)]
pub struct TokenBank {
    /// Per-(asset, account) balances.
    balances: HashMap<(AssetId, Address), Amount>,
    /// Per-(asset, owner, spender) allowances.
    allowances: HashMap<(AssetId, Address, Address), Amount>,
    /// Supply conservation tracker.
    supply: SupplyAudit,
}

impl TokenBank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `amount` of `asset` in `to`'s account and record it in the
    /// supply audit.
    ///
    /// # Errors
    /// Returns [`RedeemError::BalanceOverflow`] if the account balance or
    /// the asset's minted total would overflow.
    pub fn mint(&mut self, asset: &AssetId, to: Address, amount: Amount) -> Result<()> {
        let entry = self.balances.entry((asset.clone(), to)).or_insert(0);
        let credited = entry
            .checked_add(amount)
            .ok_or(RedeemError::BalanceOverflow)?;
        self.supply.record_mint(asset, amount)?;
        *entry = credited;
        Ok(())
    }

    /// Set `spender`'s allowance over `owner`'s holdings. Overwrites any
    /// previous approval.
    pub fn approve(&mut self, asset: &AssetId, owner: Address, spender: Address, amount: Amount) {
        self.allowances.insert((asset.clone(), owner, spender), amount);
    }

    /// Total supply of an asset (sum of all account balances).
    #[must_use]
    pub fn total_supply(&self, asset: &AssetId) -> Amount {
        self.balances
            .iter()
            .filter(|((a, _), _)| a == asset)
            .map(|(_, amount)| amount)
            .sum()
    }

    /// Verify supply conservation for a given asset.
    ///
    /// # Errors
    /// Returns [`RedeemError::SupplyInvariantViolation`] if the summed
    /// balances diverge from the minted total.
    pub fn verify_supply(&self, asset: &AssetId) -> Result<()> {
        self.supply.verify(asset, self.total_supply(asset))
    }
}

impl AssetLedger for TokenBank {
    fn balance_of(&self, asset: &AssetId, owner: Address) -> Amount {
        self.balances
            .get(&(asset.clone(), owner))
            .copied()
            .unwrap_or(0)
    }

    fn allowance(&self, asset: &AssetId, owner: Address, spender: Address) -> Amount {
        self.allowances
            .get(&(asset.clone(), owner, spender))
            .copied()
            .unwrap_or(0)
    }

    fn transfer(
        &mut self,
        asset: &AssetId,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let available = self.balance_of(asset, from);
        if available < amount {
            return Err(RedeemError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance_of(asset, to)
            .checked_add(amount)
            .ok_or(RedeemError::BalanceOverflow)?;
        self.balances.insert((asset.clone(), from), available - amount);
        self.balances.insert((asset.clone(), to), credited);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        asset: &AssetId,
        spender: Address,
        owner: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let approved = self.allowance(asset, owner, spender);
        if approved < amount {
            return Err(RedeemError::InsufficientAllowance {
                needed: amount,
                approved,
            });
        }
        self.transfer(asset, owner, to, amount)?;
        self.allowances
            .insert((asset.clone(), owner, spender), approved - amount);
        Ok(())
    }
}
