//! Immutable redemption configuration.
//!
//! Set once at construction and never mutated: the claim-token identity,
//! the fixed ordered treasury basket, the recovery address, and the sweep
//! deadline (construction time plus the 37-day window).

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{RedeemError, Result};
use crate::ids::{Address, AssetId};

/// Immutable configuration of one redemption engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedemptionConfig {
    /// The asset surrendered by redeemers.
    pub claim_token: AssetId,
    /// The fixed ordered basket of assets paid out on redemption.
    pub treasury_assets: Vec<AssetId>,
    /// Fixed destination for the sweep. Not caller-supplied.
    pub recovery_address: Address,
    /// Absolute time after which the sweep becomes callable.
    pub deadline: DateTime<Utc>,
}

impl RedemptionConfig {
    /// Build a configuration. The deadline is `created_at` plus the 37-day
    /// redemption window; the recovery address is the fixed constant.
    ///
    /// # Errors
    /// Returns [`RedeemError::Configuration`] if the treasury list is empty,
    /// contains duplicates, or contains the claim token itself (the basket
    /// holds assets *other* than the claim token).
    pub fn new(
        claim_token: AssetId,
        treasury_assets: Vec<AssetId>,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        if treasury_assets.is_empty() {
            return Err(RedeemError::Configuration(
                "treasury asset list must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for asset in &treasury_assets {
            if *asset == claim_token {
                return Err(RedeemError::Configuration(format!(
                    "claim token {asset} cannot appear in the treasury basket"
                )));
            }
            if !seen.insert(asset) {
                return Err(RedeemError::Configuration(format!(
                    "duplicate treasury asset {asset}"
                )));
            }
        }
        Ok(Self {
            claim_token,
            treasury_assets,
            recovery_address: constants::RECOVERY_ADDRESS,
            deadline: created_at + Duration::seconds(constants::REDEMPTION_WINDOW_SECS),
        })
    }
}
