//! Identifiers used throughout OpenRedeem.
//!
//! Accounts are 20-byte addresses rendered as `0x`-prefixed hex. Assets use
//! compact string identifiers. Receipt IDs are deterministic SHA-256 digests
//! so the same redemption always yields the same receipt identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RedeemError, Result};

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A 20-byte account address: redeemers, recipients, the engine's vault,
/// and the recovery address are all identified this way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// Parse a `0x`-prefixed (or bare) hex string. Case-insensitive.
    ///
    /// # Errors
    /// Returns [`RedeemError::Configuration`] if the string is not exactly
    /// 20 bytes of hex.
    pub fn from_hex(s: &str) -> Result<Self> {
        let stripped = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        let bytes = hex::decode(stripped)
            .map_err(|e| RedeemError::Configuration(format!("invalid address {s}: {e}")))?;
        let bytes: [u8; 20] = bytes
            .try_into()
            .map_err(|_| RedeemError::Configuration(format!("invalid address {s}: not 20 bytes")))?;
        Ok(Self(bytes))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Short form for log fields: first 4 bytes of hex.
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

#[cfg(feature = "test-helpers")]
impl Address {
    /// A random address, for test fixtures.
    #[must_use]
    pub fn random() -> Self {
        use rand::RngCore;
        let mut bytes = [0u8; 20];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

// ---------------------------------------------------------------------------
// AssetId
// ---------------------------------------------------------------------------

/// Identity of a fungible asset held or paid out by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AssetId(pub String);

impl AssetId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ReceiptId
// ---------------------------------------------------------------------------

/// Unique identifier for a redemption receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ReceiptId(pub [u8; 16]);

impl ReceiptId {
    /// Deterministic `ReceiptId` from the engine's receipt sequence and the
    /// payout recipient. The same redemption always produces the same ID.
    #[must_use]
    pub fn deterministic(sequence: u64, recipient: Address) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"openredeem:receipt_id:v1:");
        hasher.update(sequence.to_le_bytes());
        hasher.update(recipient.0);
        let hash = hasher.finalize();
        let bytes: [u8; 16] = hash[..16].try_into().expect("SHA-256 produces 32 bytes");
        Self(bytes)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rcpt:{}", hex::encode(self.0))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
