//! Fixed-point price arithmetic
//!
//! All conversions run over `u128` with checked operations: a conversion
//! that cannot be represented yields `None` rather than wrapping, and the
//! caller decides how to surface it.

/// Canonical 18-decimal fixed-point price
pub type Wad = u128;

/// Decimal places of the canonical unit
pub const WAD_DECIMALS: u32 = 18;

/// One whole unit at canonical precision (10^18)
pub const WAD: Wad = 1_000_000_000_000_000_000;

/// Default precision of ETH-denominated feeds
///
/// ETH-quoted feeds conventionally report 18 decimals, so their raw
/// readings already equal the canonical form. USD-style feeds report 8.
pub const DEFAULT_FEED_DECIMALS: u32 = 18;

// 10^36: WAD-scaled numerator for WAD-scaled reciprocals. Fits u128
// (max ~3.4 * 10^38), so the intermediate cannot wrap.
const RECIPROCAL_NUMERATOR: u128 = 1_000_000_000_000_000_000_000_000_000_000_000_000;

/// Rescale a value between decimal precisions
///
/// Scaling up multiplies by a power of ten with overflow checking;
/// scaling down divides with truncation toward zero. Returns `None`
/// when the result cannot be represented in a `u128`.
pub fn rescale(value: u128, from_decimals: u32, to_decimals: u32) -> Option<u128> {
    if from_decimals == to_decimals {
        return Some(value);
    }
    if from_decimals < to_decimals {
        let factor = 10u128.checked_pow(to_decimals - from_decimals)?;
        value.checked_mul(factor)
    } else {
        let factor = 10u128.checked_pow(from_decimals - to_decimals)?;
        Some(value / factor)
    }
}

/// Reciprocal of a WAD-scaled price, itself WAD-scaled: `10^36 / price`
///
/// Returns `None` for a zero price and for quotients that truncate to
/// zero (a price above 10^36 means the feed reading was absurdly large,
/// typically a wrong decimal assumption upstream).
pub fn reciprocal(price: Wad) -> Option<Wad> {
    if price == 0 {
        return None;
    }
    let quotient = RECIPROCAL_NUMERATOR / price;
    if quotient == 0 {
        None
    } else {
        Some(quotient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_identity_at_same_precision() {
        // ETH-denominated feeds already report canonical precision.
        assert_eq!(rescale(1_677_000_000_000_000, 18, 18), Some(1_677_000_000_000_000));
        assert_eq!(rescale(24_967_610_000_000_000, 18, 18), Some(24_967_610_000_000_000));
    }

    #[test]
    fn test_rescale_up_from_eight_decimals() {
        // 0.001677 at 8 decimals -> 0.001677 * 10^18
        assert_eq!(rescale(167_700, 8, 18), Some(1_677_000_000_000_000));
        // 0.02496761 at 8 decimals -> 0.02496761 * 10^18
        assert_eq!(rescale(2_496_761, 8, 18), Some(24_967_610_000_000_000));
    }

    #[test]
    fn test_rescale_down_truncates_toward_zero() {
        assert_eq!(rescale(1_999, 3, 0), Some(1));
        assert_eq!(rescale(999, 3, 0), Some(0));
    }

    #[test]
    fn test_rescale_overflow_is_rejected() {
        assert_eq!(rescale(u128::MAX, 8, 18), None);
        // Power-of-ten factor itself overflows u128.
        assert_eq!(rescale(1, 0, 77), None);
    }

    #[test]
    fn test_reciprocal_of_unit_price() {
        assert_eq!(reciprocal(WAD), Some(WAD));
    }

    #[test]
    fn test_reciprocal_exact_truncating_division() {
        let usdt = 1_677_000_000_000_000u128; // 0.001677 ETH
        assert_eq!(reciprocal(usdt), Some(RECIPROCAL_NUMERATOR / usdt));
        // ~596.3 USDT per ETH
        assert_eq!(reciprocal(usdt), Some(596_302_921_884_317_233_154));
    }

    #[test]
    fn test_reciprocal_rejects_zero_and_underflow() {
        assert_eq!(reciprocal(0), None);
        // Price larger than 10^36 truncates the reciprocal to zero.
        assert_eq!(reciprocal(RECIPROCAL_NUMERATOR + 1), None);
        // Price of exactly 10^36 still yields 1.
        assert_eq!(reciprocal(RECIPROCAL_NUMERATOR), Some(1));
    }
}
