//! Pro-rata redemption accounting.
//!
//! One redemption per call: pull the surrendered claim tokens into the
//! vault, pay each treasury asset out at the same claim/pool ratio against
//! its own current balance, then shrink the pool by the surrendered amount.
//! Every precondition is validated before the first transfer, so a call
//! either moves everything or nothing.

use chrono::{DateTime, Utc};
use openredeem_ledger::AssetLedger;
use openredeem_types::{
    Address, Amount, AssetId, Payout, ReceiptId, RedeemError, RedemptionConfig,
    RedemptionReceipt, Result, mul_div_floor,
};

/// The redemption engine: immutable configuration plus the shrinking
/// claim pool.
///
/// The engine holds no balances of its own; it reads and moves funds on an
/// injected [`AssetLedger`] under its `vault` address. Mutating calls must
/// be serialized — [`crate::SharedRedeemer`] provides that boundary for
/// multi-threaded hosts.
#[derive(Debug)]
pub struct Redeemer {
    pub(crate) config: RedemptionConfig,
    /// The engine's own account on the ledger.
    pub(crate) vault: Address,
    /// The shrinking denominator of the payout ratio. Independent of the
    /// claim token's circulating supply.
    pub(crate) remaining_claim: Amount,
    /// Receipt sequence; the first redemption is sequence 1.
    pub(crate) sequence: u64,
}

impl Redeemer {
    /// Create an engine over `config`, operating the ledger account
    /// `vault`, with a caller-chosen initial claim pool.
    ///
    /// The pool is an independent denominator, not the claim token's live
    /// supply; zero is accepted and makes every redemption fail with
    /// [`RedeemError::PoolExhausted`].
    #[must_use]
    pub fn new(config: RedemptionConfig, vault: Address, initial_claim_pool: Amount) -> Self {
        Self {
            config,
            vault,
            remaining_claim: initial_claim_pool,
            sequence: 0,
        }
    }

    /// The configured claim-token identity.
    #[must_use]
    pub fn redeemed_token(&self) -> &AssetId {
        &self.config.claim_token
    }

    /// The fixed recovery address the sweep returns balances to.
    #[must_use]
    pub fn return_to_treasury(&self) -> Address {
        self.config.recovery_address
    }

    /// The remaining claim pool.
    #[must_use]
    pub fn remaining_claim(&self) -> Amount {
        self.remaining_claim
    }

    /// The absolute time the sweep becomes callable.
    #[must_use]
    pub fn deadline(&self) -> DateTime<Utc> {
        self.config.deadline
    }

    /// The engine's ledger account.
    #[must_use]
    pub fn vault(&self) -> Address {
        self.vault
    }

    /// The full immutable configuration.
    #[must_use]
    pub fn config(&self) -> &RedemptionConfig {
        &self.config
    }

    /// Execute one redemption: surrender `claim_amount` of the claim token
    /// from `caller` and pay `recipient` a pro-rata share of every treasury
    /// asset.
    ///
    /// For each treasury asset, in configuration order:
    /// `payout = floor(vault_balance * claim_amount / remaining_claim)`,
    /// all against the same pool value. The surrendered tokens stay in the
    /// vault; afterwards the pool shrinks by exactly `claim_amount`.
    ///
    /// `recipient` may differ from `caller`: authorization is checked on
    /// the spender, payouts go to the recipient.
    ///
    /// # Errors
    /// - [`RedeemError::InvalidAmount`] if `claim_amount` is zero
    /// - [`RedeemError::PoolExhausted`] if the pool is zero
    /// - [`RedeemError::ClaimExceedsPool`] if `claim_amount` is larger than
    ///   the pool
    /// - [`RedeemError::InsufficientBalance`] /
    ///   [`RedeemError::InsufficientAllowance`] if the claim pull cannot
    ///   succeed
    /// - [`RedeemError::ArithmeticOverflow`] if a widening payout product
    ///   overflows
    ///
    /// All failures leave every balance and the pool untouched.
    pub fn redeem<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: Address,
        recipient: Address,
        claim_amount: Amount,
    ) -> Result<RedemptionReceipt> {
        if claim_amount == 0 {
            return Err(RedeemError::InvalidAmount);
        }
        let pool = self.remaining_claim;
        if pool == 0 {
            return Err(RedeemError::PoolExhausted);
        }
        if claim_amount > pool {
            return Err(RedeemError::ClaimExceedsPool {
                requested: claim_amount,
                remaining: pool,
            });
        }

        let claim_token = self.config.claim_token.clone();

        // Validate the claim pull.
        let available = ledger.balance_of(&claim_token, caller);
        if available < claim_amount {
            return Err(RedeemError::InsufficientBalance {
                needed: claim_amount,
                available,
            });
        }
        let approved = ledger.allowance(&claim_token, caller, self.vault);
        if approved < claim_amount {
            return Err(RedeemError::InsufficientAllowance {
                needed: claim_amount,
                approved,
            });
        }
        if caller != self.vault {
            ledger
                .balance_of(&claim_token, self.vault)
                .checked_add(claim_amount)
                .ok_or(RedeemError::BalanceOverflow)?;
        }

        // Size every payout before any transfer: one ratio for the whole
        // call, each asset measured against its own current vault balance.
        let mut payouts = Vec::with_capacity(self.config.treasury_assets.len());
        for asset in &self.config.treasury_assets {
            let held = ledger.balance_of(asset, self.vault);
            let amount =
                mul_div_floor(held, claim_amount, pool).ok_or(RedeemError::ArithmeticOverflow)?;
            if recipient != self.vault {
                ledger
                    .balance_of(asset, recipient)
                    .checked_add(amount)
                    .ok_or(RedeemError::BalanceOverflow)?;
            }
            payouts.push(Payout {
                asset: asset.clone(),
                amount,
            });
        }

        // Execute: pull the claim into the vault, then pay out in
        // configuration order. Everything was validated above, so no
        // transfer can fail against a conforming ledger.
        ledger.transfer_from(&claim_token, self.vault, caller, self.vault, claim_amount)?;
        for payout in &payouts {
            ledger.transfer(&payout.asset, self.vault, recipient, payout.amount)?;
        }

        self.remaining_claim = pool - claim_amount;
        self.sequence += 1;

        let receipt = RedemptionReceipt {
            id: ReceiptId::deterministic(self.sequence, recipient),
            sequence: self.sequence,
            caller,
            recipient,
            claim_amount,
            pool_before: pool,
            pool_after: self.remaining_claim,
            payouts,
            executed_at: Utc::now(),
        };

        tracing::info!(
            receipt = %receipt.id,
            caller = %caller,
            recipient = %recipient,
            claim = %claim_amount,
            pool_after = %self.remaining_claim,
            "Redemption settled"
        );

        Ok(receipt)
    }
}
