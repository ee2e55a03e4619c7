//! Error types for the OpenRedeem engine.
//!
//! All errors use the `RD_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Redemption errors
//! - 2xx: Ledger / balance errors
//! - 3xx: Sweep errors
//! - 4xx: Configuration errors
//! - 8xx: Audit errors
//! - 9xx: General / internal errors

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::amount::Amount;

/// Central error enum for all OpenRedeem operations.
#[derive(Debug, Error)]
pub enum RedeemError {
    // =================================================================
    // Redemption Errors (1xx)
    // =================================================================
    /// The redeem amount was zero.
    #[error("RD_ERR_100: redeem amount must be positive")]
    InvalidAmount,

    /// The remaining claim pool is zero; no further redemption is possible.
    /// Reported distinctly so an exhausted pool never surfaces as a
    /// division fault.
    #[error("RD_ERR_101: claim pool is exhausted")]
    PoolExhausted,

    /// The redeem amount exceeds the remaining claim pool.
    #[error("RD_ERR_102: claim exceeds remaining pool: requested {requested}, remaining {remaining}")]
    ClaimExceedsPool { requested: Amount, remaining: Amount },

    // =================================================================
    // Ledger / Balance Errors (2xx)
    // =================================================================
    /// Not enough balance to perform the transfer.
    #[error("RD_ERR_200: insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Amount, available: Amount },

    /// The spender's allowance does not cover the transfer.
    #[error("RD_ERR_201: insufficient allowance: need {needed}, approved {approved}")]
    InsufficientAllowance { needed: Amount, approved: Amount },

    /// Crediting the recipient would overflow its balance.
    #[error("RD_ERR_202: balance overflow on credit")]
    BalanceOverflow,

    // =================================================================
    // Sweep Errors (3xx)
    // =================================================================
    /// The sweep was called before the deadline. The message keeps the
    /// stable "not enough time" phrasing that external tooling matches on.
    #[error("RD_ERR_300: not enough time: sweep called at {now}, deadline {deadline}")]
    SweepTooEarly {
        now: DateTime<Utc>,
        deadline: DateTime<Utc>,
    },

    // =================================================================
    // Configuration Errors (4xx)
    // =================================================================
    /// Invalid construction parameters (empty or duplicated treasury list,
    /// malformed address, etc.).
    #[error("RD_ERR_400: configuration error: {0}")]
    Configuration(String),

    // =================================================================
    // Audit Errors (8xx)
    // =================================================================
    /// Per-asset supply conservation check failed — critical safety alert.
    #[error("RD_ERR_800: supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// The widening payout product overflowed `u128`.
    #[error("RD_ERR_900: arithmetic overflow in payout computation")]
    ArithmeticOverflow,
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, RedeemError>;
