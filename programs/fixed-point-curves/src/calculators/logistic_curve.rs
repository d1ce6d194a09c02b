use std::f64::consts::E;

use log::{debug, trace};

use crate::libraries::big_num::U256;
use crate::libraries::fixed_point::{pow2, Q64_F64};

/// Inputs at or above this get the floor fee
pub const FEE_CURVE_CUTOFF: u64 = 1_000_000;
/// Floor fee as a Q64.64, ~0.025%
pub const FLOOR_FEE_X64: u128 = 4611686018427388;
/// Divisor applied to the input before the Q64.64 overflow check
pub const SCALED_INPUT_DIVISOR: f64 = 75_000.0;
/// `0x400000000000000000`, the Q64.64 value of 64
pub const SCALED_INPUT_LIMIT_X64: u128 = 0x400000000000000000;
/// Amplitude of the decaying part of the fee, in percent
pub const FEE_AMPLITUDE: f64 = 0.225;
/// Asymptotic fee, in percent
pub const FEE_ASYMPTOTE: f64 = 0.025;
/// Decay length of the exponential
pub const FEE_DECAY: f64 = 100_000.0;

/// Calculates the fee at `x` on an exponentially decaying curve, as a Q64.64 fraction
///
/// The fee starts at 0.25% for `x = 0` and decays toward 0.025%. Large inputs
/// return the floor fee before any exponential is evaluated.
///
/// # Arguments
///
/// * `x` - Curve input, e.g. a notional size
///
/// # Formula
///
/// * `fee = (0.225 / e^(x / 100000) + 0.025) / 100`
/// * `result = floor(fee * 2^64)`
///
pub fn get_fee_at(x: U256) -> u128 {
    if x >= U256::from(FEE_CURVE_CUTOFF) {
        trace!("x at or above cutoff, floor fee");
        return FLOOR_FEE_X64;
    }
    // below the cutoff, so x is exact in a u64 and in an f64
    let x = x.low_u64() as f64;

    if (x / SCALED_INPUT_DIVISOR) * Q64_F64 >= SCALED_INPUT_LIMIT_X64 as f64 {
        trace!("scaled x above limit, floor fee");
        return FLOOR_FEE_X64;
    }

    let fee = FEE_AMPLITUDE / E.powf(x / FEE_DECAY) + FEE_ASYMPTOTE;
    let adjusted = fee / 100.0;
    debug!("x:{}, fee_percent:{}, fee_fraction:{}", x, fee, adjusted);

    // adjusted < 1, so the product stays below 2^64
    (adjusted * pow2(64)) as u128
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fee_at(x: u64) -> u128 {
        get_fee_at(U256::from(x))
    }

    #[test]
    fn limit_constant_is_64_in_q64() {
        assert_eq!(SCALED_INPUT_LIMIT_X64, 64u128 << 64);
    }

    #[test]
    fn scaled_limit_is_unreachable_below_cutoff() {
        // x / 75000 stays below 13.4 under the cutoff
        let largest = (FEE_CURVE_CUTOFF - 1) as f64;
        assert!((largest / SCALED_INPUT_DIVISOR) * Q64_F64 < SCALED_INPUT_LIMIT_X64 as f64);
        assert_ne!(fee_at(FEE_CURVE_CUTOFF - 1), FLOOR_FEE_X64);
    }

    #[test]
    fn golden_values() {
        assert_eq!(fee_at(0), 46116860184273880);
        assert_eq!(fee_at(1), 46116445134607480);
        assert_eq!(fee_at(50_000), 29785846686726012);
        assert_eq!(fee_at(75_000), 24217342060063712);
        assert_eq!(fee_at(100_000), 19880586296282384);
        assert_eq!(fee_at(250_000), 8018638182715578);
        assert_eq!(fee_at(500_000), 4891345682144673);
        assert_eq!(fee_at(999_999), 4613570369262712);
    }

    #[test]
    fn floor_fee_at_and_above_cutoff() {
        assert_eq!(fee_at(FEE_CURVE_CUTOFF), FLOOR_FEE_X64);
        assert_eq!(fee_at(5_000_000), FLOOR_FEE_X64);
        assert_eq!(get_fee_at(U256::MAX), FLOOR_FEE_X64);
    }

    #[test]
    fn curve_stays_above_floor() {
        assert!(fee_at(FEE_CURVE_CUTOFF - 1) > FLOOR_FEE_X64);
    }

    mod fuzz_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn floor_fee_beyond_cutoff (
                x in FEE_CURVE_CUTOFF..u64::MAX,
            ) {
                prop_assert_eq!(fee_at(x), FLOOR_FEE_X64);
            }

            #[test]
            fn fee_is_non_increasing (
                x in 1..FEE_CURVE_CUTOFF,
            ) {
                prop_assert!(fee_at(x) <= fee_at(x - 1));
            }
        }
    }
}
