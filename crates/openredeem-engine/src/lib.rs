//! # openredeem-engine
//!
//! The **OpenRedeem** redemption engine: pro-rata payout accounting over a
//! shrinking claim pool, plus the timelocked recovery sweep.
//!
//! ## Architecture
//!
//! [`Redeemer`] consumes an immutable
//! [`RedemptionConfig`](openredeem_types::RedemptionConfig) and an injected
//! [`AssetLedger`](openredeem_ledger::AssetLedger). One redemption per
//! call:
//! 1. Validate the claim pull and size every payout — no transfer happens
//!    until the whole call is known to succeed
//! 2. Pull the surrendered claim tokens into the vault (retained, not
//!    burned)
//! 3. Pay each treasury asset out in configuration order, all at the same
//!    `claim / pool` ratio against that asset's own current balance
//! 4. Shrink the pool by exactly the surrendered amount
//!
//! After the 37-day window, `return_to_origin` drains every held balance
//! to the fixed recovery address.
//!
//! [`SharedRedeemer`] wraps engine and ledger behind one mutex for hosts
//! that cannot otherwise serialize mutating calls.

pub mod redeemer;
pub mod shared;
pub mod sweep;

pub use redeemer::Redeemer;
pub use shared::SharedRedeemer;
