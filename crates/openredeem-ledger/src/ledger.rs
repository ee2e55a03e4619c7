//! The asset ledger capability boundary.
//!
//! The redemption engine never owns balances; it is handed a ledger and
//! moves funds through this trait. Anything that can answer `balance_of`
//! and execute `transfer`/`transfer_from` atomically can back the engine.

use openredeem_types::{Address, Amount, AssetId, Result};

/// Fungible-asset ledger as required from every asset referenced in the
/// engine's configuration.
///
/// Contract: each call is individually atomic — a failed transfer leaves
/// every balance and allowance exactly as before the call. Implementations
/// backing external systems must provide that per-call transactionality;
/// the engine layers its own all-or-nothing guarantee across calls by
/// validating every precondition before the first transfer.
pub trait AssetLedger {
    /// Current holdings of `owner`. Unknown accounts hold zero.
    fn balance_of(&self, asset: &AssetId, owner: Address) -> Amount;

    /// Remaining authorization `owner` has granted `spender`.
    fn allowance(&self, asset: &AssetId, owner: Address, spender: Address) -> Amount;

    /// Move `amount` from `from` to `to`. Zero-amount transfers succeed as
    /// no-ops.
    ///
    /// # Errors
    /// [`openredeem_types::RedeemError::InsufficientBalance`] on overdraw.
    fn transfer(&mut self, asset: &AssetId, from: Address, to: Address, amount: Amount)
    -> Result<()>;

    /// Move `amount` from `owner` to `to` on behalf of `spender`, gated by
    /// an allowance of at least `amount`, which is decremented by the
    /// amount moved.
    ///
    /// # Errors
    /// [`openredeem_types::RedeemError::InsufficientAllowance`] if the
    /// allowance does not cover `amount`;
    /// [`openredeem_types::RedeemError::InsufficientBalance`] on overdraw.
    fn transfer_from(
        &mut self,
        asset: &AssetId,
        spender: Address,
        owner: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()>;
}
