//! Timelocked recovery sweep.
//!
//! After the deadline, anyone may drain the vault: every treasury asset's
//! full balance, then the accumulated claim-token balance, goes to the
//! fixed recovery address. The claim pool is not touched.

use chrono::{DateTime, Utc};
use openredeem_ledger::AssetLedger;
use openredeem_types::{Amount, AssetId, Payout, RedeemError, Result, SweepReport};

use crate::redeemer::Redeemer;

impl Redeemer {
    /// Return every held balance to the recovery address.
    ///
    /// Callable by anyone once `now` reaches the deadline — no caller
    /// identity is taken. Zero balances are transferred as no-ops rather
    /// than skipped, so repeated calls are idempotent in effect but always
    /// attempted. `remaining_claim` is untouched: redemption stays
    /// callable afterwards and pays zero.
    ///
    /// # Errors
    /// [`RedeemError::SweepTooEarly`] before the deadline (no state
    /// change); ledger errors surface verbatim.
    pub fn return_to_origin<L: AssetLedger>(
        &self,
        ledger: &mut L,
        now: DateTime<Utc>,
    ) -> Result<SweepReport> {
        if now < self.config.deadline {
            return Err(RedeemError::SweepTooEarly {
                now,
                deadline: self.config.deadline,
            });
        }

        let recovery = self.config.recovery_address;

        // Measure every leg and validate its credit before moving anything.
        let mut legs: Vec<(&AssetId, Amount)> =
            Vec::with_capacity(self.config.treasury_assets.len() + 1);
        for asset in &self.config.treasury_assets {
            legs.push((asset, ledger.balance_of(asset, self.vault)));
        }
        legs.push((
            &self.config.claim_token,
            ledger.balance_of(&self.config.claim_token, self.vault),
        ));
        if recovery != self.vault {
            for &(asset, held) in &legs {
                ledger
                    .balance_of(asset, recovery)
                    .checked_add(held)
                    .ok_or(RedeemError::BalanceOverflow)?;
            }
        }

        let mut returned = Vec::with_capacity(legs.len());
        for (asset, held) in legs {
            ledger.transfer(asset, self.vault, recovery, held)?;
            returned.push(Payout {
                asset: asset.clone(),
                amount: held,
            });
        }

        tracing::info!(
            recovery = %recovery,
            legs = returned.len(),
            "Sweep executed"
        );

        Ok(SweepReport {
            recovery_address: recovery,
            returned,
            swept_at: now,
        })
    }
}
