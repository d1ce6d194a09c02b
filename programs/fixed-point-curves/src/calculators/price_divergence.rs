use log::debug;

use crate::error::Result;
use crate::libraries::big_num::{Upcast512, U256};
use crate::libraries::fixed_point::Q128_F64;
use crate::libraries::float_math::{ratio_to_f64, truncate_to_u256};

/// Calculates the divergence between two price observations
///
/// The smaller price is divided by the larger one and the ratio is subtracted
/// from one unit of Q128.128. The subtraction happens in binary64, where any ratio
/// below one is absorbed by 2^128, so a complement of exactly 2^128 is clamped to
/// zero and reported as no divergence.
///
/// # Arguments
///
/// * `v3_spot` - Spot price observation
/// * `v2_outlier` - Outlier price observation, in the same base as `v3_spot`
///
/// # Formula
///
/// * `divergence = 2^128 - min / max`, or zero when the prices are equal
///
pub fn get_price_divergence(v3_spot: U256, v2_outlier: U256) -> Result<U256> {
    let (numerator, denominator) = if v3_spot > v2_outlier {
        (v2_outlier, v3_spot)
    } else if v3_spot < v2_outlier {
        (v3_spot, v2_outlier)
    } else {
        debug!("prices are equal, no divergence");
        return Ok(U256::zero());
    };

    let proportional_change = ratio_to_f64(numerator.as_u512(), denominator.as_u512())?;
    let price_divergence = Q128_F64 - proportional_change;
    debug!(
        "proportional_change:{}, price_divergence:{}",
        proportional_change, price_divergence
    );

    if price_divergence == Q128_F64 {
        return Ok(U256::zero());
    }
    truncate_to_u256(price_divergence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libraries::abi_encoding::Uint256Word;
    use proptest::prelude::*;

    fn u256(value: u128) -> U256 {
        U256::from(value)
    }

    #[test]
    fn equal_prices_do_not_diverge() {
        let word = Uint256Word::encode(get_price_divergence(u256(100), u256(100)).unwrap());
        assert_eq!(word.to_string(), format!("0x{}", "0".repeat(64)));
    }

    #[test]
    fn zero_prices_do_not_divide() {
        assert_eq!(get_price_divergence(u256(0), u256(0)).unwrap(), U256::zero());
        assert_eq!(get_price_divergence(u256(0), u256(5)).unwrap(), U256::zero());
        assert_eq!(get_price_divergence(u256(5), u256(0)).unwrap(), U256::zero());
    }

    #[test]
    fn complement_is_clamped() {
        // a ratio in (0, 1) cannot move 2^128 in binary64
        assert_eq!(get_price_divergence(u256(5), u256(7)).unwrap(), U256::zero());
        assert_eq!(get_price_divergence(u256(7), u256(5)).unwrap(), U256::zero());
        assert_eq!(
            get_price_divergence(u256(1_000_000_000_000_000_000_000_000_000_000), u256(3)).unwrap(),
            U256::zero()
        );
        assert_eq!(get_price_divergence(U256::MAX, U256::one()).unwrap(), U256::zero());
    }

    proptest! {
        #[test]
        fn equal_prices_never_diverge (
            price in 1..u128::MAX,
        ) {
            prop_assert_eq!(get_price_divergence(u256(price), u256(price)).unwrap(), U256::zero());
        }

        #[test]
        fn divergence_is_symmetric (
            a in any::<u128>(),
            b in any::<u128>(),
        ) {
            prop_assert_eq!(
                get_price_divergence(u256(a), u256(b)).unwrap(),
                get_price_divergence(u256(b), u256(a)).unwrap()
            );
        }
    }
}
