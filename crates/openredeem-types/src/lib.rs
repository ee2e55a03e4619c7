//! # openredeem-types
//!
//! Shared types, errors, and configuration for the **OpenRedeem** pro-rata
//! redemption engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`Address`], [`AssetId`], [`ReceiptId`]
//! - **Amounts**: [`Amount`] (u128 base units) and [`mul_div_floor`]
//! - **Configuration**: [`RedemptionConfig`]
//! - **Receipts**: [`RedemptionReceipt`], [`SweepReport`], [`Payout`]
//! - **Errors**: [`RedeemError`] with `RD_ERR_` prefix codes
//! - **Constants**: the 37-day redemption window and the recovery address

pub mod amount;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod receipt;

// Re-export all primary types at crate root for ergonomic imports:
//   use openredeem_types::{Address, Amount, RedemptionConfig, ...};

pub use amount::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use receipt::*;

// Constants are accessed via `openredeem_types::constants::FOO`
// (not re-exported to avoid name collisions).
