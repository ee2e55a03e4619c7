//! # openredeem-ledger
//!
//! The asset boundary of the **OpenRedeem** engine.
//!
//! The redemption engine holds no balances of its own; every balance read
//! and every transfer goes through the [`AssetLedger`] capability trait
//! defined here. The crate also ships:
//!
//! - [`TokenBank`] — an in-memory multi-asset implementation with ERC-20
//!   style allowances, used by tests and in-process hosts
//! - [`SupplyAudit`] — a per-asset supply conservation checker

pub mod bank;
pub mod ledger;
pub mod supply;

pub use bank::TokenBank;
pub use ledger::AssetLedger;
pub use supply::SupplyAudit;
