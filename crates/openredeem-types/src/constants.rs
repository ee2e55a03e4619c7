//! System-wide constants for the OpenRedeem engine.

use crate::ids::Address;

/// Length of the redemption window in seconds: 37 days after construction,
/// the sweep becomes callable.
pub const REDEMPTION_WINDOW_SECS: i64 = 37 * 24 * 60 * 60;

/// The fixed recovery address all remaining balances are swept to.
pub const RECOVERY_ADDRESS: Address = Address([
    0x97, 0x99, 0x0b, 0x69, 0x38, 0x35, 0xda, 0x58, 0xa2, 0x81, 0x63, 0x62, 0x96, 0xd2, 0xbf,
    0x02, 0x78, 0x7d, 0xea, 0x17,
]);

/// Hex form of [`RECOVERY_ADDRESS`].
pub const RECOVERY_ADDRESS_HEX: &str = "0x97990B693835da58A281636296D2Bf02787DEa17";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "OpenRedeem";
