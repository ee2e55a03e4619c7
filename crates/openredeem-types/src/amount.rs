//! Integer amount arithmetic.
//!
//! All amounts are `u128` in the asset's smallest denomination. The payout
//! formula `floor(balance * claim / pool)` needs the full-width product
//! before dividing; with 10^18-scale balances the intermediate runs to
//! 10^37, so the multiplication is checked rather than widened further.

/// A token amount in the asset's smallest denomination.
pub type Amount = u128;

/// `floor(value * numerator / denominator)` with a checked product.
///
/// Returns `None` if the product overflows `u128` or the denominator is
/// zero. Truncation is toward zero; the dust stays with the holder of
/// `value`.
#[must_use]
pub fn mul_div_floor(value: Amount, numerator: Amount, denominator: Amount) -> Option<Amount> {
    if denominator == 0 {
        return None;
    }
    value.checked_mul(numerator).map(|product| product / denominator)
}
