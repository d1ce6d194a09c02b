/// Constants for Q64.64 and Q128.128 fixed point numbers
/// Used by the curve evaluators to scale fractions before truncation

pub const Q64: u128 = (u64::MAX as u128) + 1; // 2^64
pub const RESOLUTION_64: u8 = 64;
pub const RESOLUTION_128: u8 = 128;

/// 2^64 as an f64, exact
pub const Q64_F64: f64 = 18446744073709551616.0;
/// 2^128 as an f64, exact
pub const Q128_F64: f64 = 340282366920938463463374607431768211456.0;

/// Returns 2^exp as an f64.
///
/// `exp` must lie in the normal binary64 range `[-1022, 1023]`.
pub fn pow2(exp: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&exp));
    f64::from_bits(((exp + 1023) as u64) << 52)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_factors_are_exact() {
        assert_eq!(pow2(RESOLUTION_64 as i32), Q64_F64);
        assert_eq!(pow2(RESOLUTION_128 as i32), Q128_F64);
        assert_eq!(Q64_F64, Q64 as f64);
        assert_eq!(pow2(-64) * Q64_F64, 1.0);
        assert_eq!(pow2(0), 1.0);
        assert_eq!(pow2(-1022), f64::MIN_POSITIVE);
    }
}
