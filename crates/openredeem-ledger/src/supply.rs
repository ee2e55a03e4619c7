//! Per-asset supply conservation audit.
//!
//! Invariant checked by the bank after any sequence of operations:
//! ```text
//! ∀ asset: Σ balances == Σ mints
//! ```
//! Nothing in this system destroys supply — redemption and sweep only move
//! balances between accounts — so the expected total is the minted total.

use std::collections::HashMap;

use openredeem_types::{Amount, AssetId, RedeemError, Result};

/// Tracks minted supply per asset and validates conservation.
#[derive(Debug, Default)]
pub struct SupplyAudit {
    /// Total minted per asset since creation.
    minted: HashMap<AssetId, Amount>,
}

impl SupplyAudit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mint.
    ///
    /// # Errors
    /// Returns [`RedeemError::BalanceOverflow`] if the asset's minted total
    /// would overflow.
    pub fn record_mint(&mut self, asset: &AssetId, amount: Amount) -> Result<()> {
        let total = self.minted.entry(asset.clone()).or_insert(0);
        *total = total
            .checked_add(amount)
            .ok_or(RedeemError::BalanceOverflow)?;
        Ok(())
    }

    /// Expected total supply for an asset.
    #[must_use]
    pub fn expected_supply(&self, asset: &AssetId) -> Amount {
        self.minted.get(asset).copied().unwrap_or(0)
    }

    /// Verify that the actual supply (sum of all account balances) matches
    /// the minted total for an asset.
    ///
    /// # Errors
    /// Returns [`RedeemError::SupplyInvariantViolation`] if actual ≠ expected.
    pub fn verify(&self, asset: &AssetId, actual_supply: Amount) -> Result<()> {
        let expected = self.expected_supply(asset);
        if actual_supply != expected {
            return Err(RedeemError::SupplyInvariantViolation {
                reason: format!(
                    "asset {asset}: actual supply {actual_supply} != minted {expected}"
                ),
            });
        }
        Ok(())
    }
}
