//! Conversions between big integers and binary64 floats.
//!
//! Integer to float conversions round to nearest with ties to even, and the
//! quotient of two integers is the float nearest to the exact rational value.
//! Float to integer conversions truncate toward zero.

use super::big_num::{Downcast512, Upcast1024, Upcast512, U256, U512};
use super::fixed_point::pow2;
use crate::error::{ErrorCode, Result};

/// Significand width of a binary64, including the hidden bit
const SIGNIFICAND_BITS: u32 = 53;
/// Extra quotient bits kept below the significand for rounding
const ROUND_BITS: u32 = 2;

/// Calculates `num / denom` correctly rounded to the nearest f64
///
/// The operands are widened to U1024 and scaled by a power of two so the
/// integer quotient carries 55 or 56 significant bits. The dropped low bits and
/// a sticky bit from the remainder decide the rounding.
///
/// # Arguments
///
/// * `num` - The dividend
/// * `denom` - The divisor, must not be zero
///
pub fn ratio_to_f64(num: U512, denom: U512) -> Result<f64> {
    if denom.is_zero() {
        return Err(ErrorCode::DivisionByZero("ratio denominator is zero"));
    }
    if num.is_zero() {
        return Ok(0.0);
    }

    let shift = (SIGNIFICAND_BITS + ROUND_BITS) as i32 - (num.bits() as i32 - denom.bits() as i32);
    let (scaled_num, scaled_denom) = if shift >= 0 {
        (num.as_u1024() << shift as usize, denom.as_u1024())
    } else {
        (num.as_u1024(), denom.as_u1024() << (-shift) as usize)
    };
    let (quotient, remainder) = scaled_num.div_mod(scaled_denom);
    let sticky = !remainder.is_zero();

    // quotient is in [2^54, 2^56)
    let quotient = quotient.low_u64();
    let dropped_bits = (64 - quotient.leading_zeros()) - SIGNIFICAND_BITS;
    let mut significand = quotient >> dropped_bits;
    let dropped = quotient & ((1u64 << dropped_bits) - 1);
    let half = 1u64 << (dropped_bits - 1);
    if dropped > half || (dropped == half && (sticky || significand & 1 == 1)) {
        significand += 1;
    }

    // significand <= 2^53 converts exactly
    Ok(significand as f64 * pow2(dropped_bits as i32 - shift))
}

/// Converts an integer to the nearest f64, ties to even
pub fn u256_to_f64(value: U256) -> f64 {
    if value.is_zero() {
        return 0.0;
    }
    // the denominator is one, so this cannot fail
    ratio_to_f64(value.as_u512(), U512::one()).unwrap_or(f64::NAN)
}

/// Truncates an f64 toward zero into a U512
///
/// Fails with `EncodingOverflow` for NaN, infinities, values whose integer part is
/// negative, and values of 2^512 or more.
pub fn truncate_to_u512(value: f64) -> Result<U512> {
    if !value.is_finite() || value <= -1.0 {
        return Err(ErrorCode::EncodingOverflow);
    }
    if value < 1.0 {
        return Ok(U512::zero());
    }

    let bits = value.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;
    let significand = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
    if exponent >= 0 {
        if exponent as u32 + SIGNIFICAND_BITS > 512 {
            return Err(ErrorCode::EncodingOverflow);
        }
        Ok(U512::from(significand) << exponent as usize)
    } else {
        // value >= 1.0, so exponent >= -52
        Ok(U512::from(significand >> (-exponent) as u32))
    }
}

/// Truncates an f64 toward zero into a U256, see [`truncate_to_u512`]
pub fn truncate_to_u256(value: f64) -> Result<U256> {
    truncate_to_u512(value)?
        .checked_as_u256()
        .ok_or(ErrorCode::EncodingOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libraries::fixed_point::Q128_F64;

    fn u512(value: u128) -> U512 {
        U512::from(value)
    }

    #[test]
    fn ratio_of_small_integers() {
        assert_eq!(ratio_to_f64(u512(1), u512(3)).unwrap(), 1.0 / 3.0);
        assert_eq!(ratio_to_f64(u512(2), u512(3)).unwrap(), 2.0 / 3.0);
        assert_eq!(ratio_to_f64(u512(7), u512(7)).unwrap(), 1.0);
        assert_eq!(ratio_to_f64(u512(0), u512(7)).unwrap(), 0.0);
        assert_eq!(ratio_to_f64(u512(1_000_000), u512(1000)).unwrap(), 1000.0);
    }

    #[test]
    fn ratio_rejects_zero_denominator() {
        assert!(matches!(
            ratio_to_f64(u512(1), U512::zero()),
            Err(ErrorCode::DivisionByZero(_))
        ));
        assert!(matches!(
            ratio_to_f64(U512::zero(), U512::zero()),
            Err(ErrorCode::DivisionByZero(_))
        ));
    }

    #[test]
    fn ratio_of_wide_operands() {
        // (2^300 + 1) / 2^300 rounds back to one
        let base = U512::one() << 300usize;
        assert_eq!(ratio_to_f64(base + U512::one(), base).unwrap(), 1.0);
        // 2^511 / 1
        assert_eq!(
            ratio_to_f64(U512::one() << 511usize, U512::one()).unwrap(),
            pow2(511)
        );
        // 1 / 2^511
        assert_eq!(
            ratio_to_f64(U512::one(), U512::one() << 511usize).unwrap(),
            pow2(-511)
        );
        // U512::MAX / 1 rounds up to 2^512
        assert_eq!(
            ratio_to_f64(U512::MAX, U512::one()).unwrap(),
            pow2(511) * 2.0
        );
    }

    #[test]
    fn integer_conversion_ties_to_even() {
        let two_pow_53 = 1u128 << 53;
        assert_eq!(u256_to_f64(U256::from(two_pow_53 + 1)), two_pow_53 as f64);
        assert_eq!(
            u256_to_f64(U256::from(two_pow_53 + 3)),
            (two_pow_53 + 4) as f64
        );

        let two_pow_64 = 1u128 << 64;
        assert_eq!(
            u256_to_f64(U256::from(two_pow_64 + (1 << 11))),
            two_pow_64 as f64
        );
        assert_eq!(
            u256_to_f64(U256::from(two_pow_64 + (1 << 11) + 1)),
            (two_pow_64 + (1 << 12)) as f64
        );
    }

    #[test]
    fn integer_conversion_of_uint256_max() {
        assert_eq!(u256_to_f64(U256::MAX), pow2(255) * 2.0);
        assert_eq!(u256_to_f64(U256::zero()), 0.0);
    }

    #[test]
    fn truncation_toward_zero() {
        assert_eq!(truncate_to_u512(2.9).unwrap(), u512(2));
        assert_eq!(truncate_to_u512(1.0).unwrap(), u512(1));
        assert_eq!(truncate_to_u512(0.99).unwrap(), U512::zero());
        assert_eq!(truncate_to_u512(-0.5).unwrap(), U512::zero());
        assert_eq!(truncate_to_u512(-0.0).unwrap(), U512::zero());
        assert_eq!(
            truncate_to_u512(2251799813685249.5).unwrap(),
            u512(2251799813685249)
        );
        assert_eq!(truncate_to_u256(Q128_F64).unwrap(), U256::one() << 128usize);
    }

    #[test]
    fn truncation_rejects_unrepresentable_values() {
        assert_eq!(truncate_to_u512(-1.0), Err(ErrorCode::EncodingOverflow));
        assert_eq!(truncate_to_u512(f64::NAN), Err(ErrorCode::EncodingOverflow));
        assert_eq!(
            truncate_to_u512(f64::INFINITY),
            Err(ErrorCode::EncodingOverflow)
        );
        assert_eq!(
            truncate_to_u512(pow2(512)),
            Err(ErrorCode::EncodingOverflow)
        );
        assert_eq!(
            truncate_to_u256(pow2(256)),
            Err(ErrorCode::EncodingOverflow)
        );
        assert_eq!(
            truncate_to_u256(pow2(255)).unwrap(),
            U256::one() << 255usize
        );
    }

    mod fuzz_tests {
        use super::*;
        use proptest::prelude::*;

        const MAX_EXACT: u64 = 1 << 53;

        proptest! {
            #[test]
            fn ratio_matches_native_division (
                num in 0..MAX_EXACT,
                denom in 1..MAX_EXACT,
            ) {
                let ratio = ratio_to_f64(U512::from(num), U512::from(denom)).unwrap();
                prop_assert_eq!(ratio, num as f64 / denom as f64);
            }

            #[test]
            fn integer_conversion_matches_native_cast (
                value in any::<u128>(),
            ) {
                prop_assert_eq!(u256_to_f64(U256::from(value)), value as f64);
            }

            #[test]
            fn truncation_matches_native_cast (
                value in any::<u64>(),
                fraction in 0.0f64..1.0,
            ) {
                let float = value as f64 + fraction;
                let truncated = truncate_to_u256(float).unwrap();
                prop_assert_eq!(truncated, U256::from(float as u128));
            }
        }
    }
}
