//! Receipt types for the OpenRedeem audit trail.
//!
//! Every successful redemption produces a [`RedemptionReceipt`]; every sweep
//! produces a [`SweepReport`]. Receipts form an append-only audit trail of
//! everything that ever left the vault.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::ids::{Address, AssetId, ReceiptId};

/// One asset leg of a redemption or sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub asset: AssetId,
    pub amount: Amount,
}

/// Audit record of one executed redemption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedemptionReceipt {
    /// Deterministic identifier (sequence + recipient).
    pub id: ReceiptId,
    /// Position in the engine's redemption order, starting at 1.
    pub sequence: u64,
    /// The account whose claim tokens were pulled.
    pub caller: Address,
    /// The account the treasury payouts were sent to.
    pub recipient: Address,
    /// Claim-token units surrendered.
    pub claim_amount: Amount,
    /// Remaining claim pool before this redemption.
    pub pool_before: Amount,
    /// Remaining claim pool after this redemption.
    pub pool_after: Amount,
    /// Per-asset payouts in treasury configuration order.
    pub payouts: Vec<Payout>,
    /// When this redemption executed.
    pub executed_at: DateTime<Utc>,
}

/// Audit record of one executed sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    /// Where the balances went.
    pub recovery_address: Address,
    /// Amounts returned, treasury assets in configuration order followed by
    /// the claim token. Zero entries mean the balance was already empty.
    pub returned: Vec<Payout>,
    /// When the sweep executed.
    pub swept_at: DateTime<Utc>,
}
