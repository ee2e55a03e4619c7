//! Serialized mutation boundary.
//!
//! The engine requires every state-mutating call to run to completion with
//! no interleaving. [`SharedRedeemer`] provides that guarantee for
//! multi-threaded hosts: one lock owns both the engine state and the
//! ledger, so no redemption ever sees a stale pool or half-moved balances.

use chrono::Utc;
use openredeem_ledger::AssetLedger;
use openredeem_types::{Address, Amount, AssetId, RedemptionReceipt, Result, SweepReport};
use parking_lot::Mutex;

use crate::redeemer::Redeemer;

struct Inner<L> {
    redeemer: Redeemer,
    ledger: L,
}

/// Thread-safe wrapper owning a [`Redeemer`] and its ledger behind a single
/// mutex.
pub struct SharedRedeemer<L> {
    inner: Mutex<Inner<L>>,
}

impl<L: AssetLedger> SharedRedeemer<L> {
    #[must_use]
    pub fn new(redeemer: Redeemer, ledger: L) -> Self {
        Self {
            inner: Mutex::new(Inner { redeemer, ledger }),
        }
    }

    /// Execute one redemption under the lock.
    pub fn redeem(
        &self,
        caller: Address,
        recipient: Address,
        claim_amount: Amount,
    ) -> Result<RedemptionReceipt> {
        let mut inner = self.inner.lock();
        let Inner { redeemer, ledger } = &mut *inner;
        redeemer.redeem(ledger, caller, recipient, claim_amount)
    }

    /// Execute the sweep under the lock, against the current wall-clock
    /// time.
    pub fn return_to_origin(&self) -> Result<SweepReport> {
        let mut inner = self.inner.lock();
        let Inner { redeemer, ledger } = &mut *inner;
        redeemer.return_to_origin(ledger, Utc::now())
    }

    /// The remaining claim pool.
    #[must_use]
    pub fn remaining_claim(&self) -> Amount {
        self.inner.lock().redeemer.remaining_claim()
    }

    /// The configured claim-token identity.
    #[must_use]
    pub fn redeemed_token(&self) -> AssetId {
        self.inner.lock().redeemer.redeemed_token().clone()
    }

    /// The fixed recovery address.
    #[must_use]
    pub fn return_to_treasury(&self) -> Address {
        self.inner.lock().redeemer.return_to_treasury()
    }

    /// Run a read-only closure against the ledger under the lock.
    pub fn with_ledger<R>(&self, f: impl FnOnce(&L) -> R) -> R {
        f(&self.inner.lock().ledger)
    }
}
