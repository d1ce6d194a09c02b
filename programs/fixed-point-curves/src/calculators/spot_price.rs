use log::debug;

use crate::error::{ErrorCode, Result};
use crate::libraries::big_num::{Upcast512, U256, U512};
use crate::libraries::fixed_point::Q128_F64;
use crate::libraries::float_math::{ratio_to_f64, truncate_to_u256, truncate_to_u512};

/// Pool state after a simulated constant product swap
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatedSwap {
    /// Input reserve after the trade
    pub reserve_a: U512,
    /// Output reserve after the trade
    pub reserve_b: U512,
    /// `reserve_b / reserve_a` scaled by 2^128, before truncation
    pub spot_price_x128: f64,
}

impl SimulatedSwap {
    /// Spot price as a truncated Q128.128
    pub fn spot_price_x128_amount(&self) -> Result<U256> {
        truncate_to_u256(self.spot_price_x128)
    }
}

/// Simulates trading `alpha_x` into a constant product pool and prices the result
///
/// # Arguments
///
/// * `alpha_x` - Amount traded into the pool
/// * `reserve_in` - Reserve of the input token before the trade
/// * `reserve_out` - Reserve of the output token before the trade
///
/// # Formula
///
/// * `reserve_a = reserve_in + alpha_x`
/// * `reserve_b = floor(reserve_in * reserve_out / reserve_a)`
/// * `spot_price_x128 = reserve_b / reserve_a * 2^128`
///
pub fn simulate_swap(alpha_x: U256, reserve_in: U256, reserve_out: U256) -> Result<SimulatedSwap> {
    let reserve_a = reserve_in.as_u512() + alpha_x.as_u512();
    if reserve_a.is_zero() {
        return Err(ErrorCode::DivisionByZero(
            "reserve_in and alpha_x are both zero",
        ));
    }

    // both factors are below 2^256, so the product fits
    let k = reserve_in.as_u512() * reserve_out.as_u512();
    let reserve_b = truncate_to_u512(ratio_to_f64(k, reserve_a)?)?;
    let spot_price_x128 = ratio_to_f64(reserve_b, reserve_a)? * Q128_F64;
    debug!(
        "reserve_a:{}, reserve_b:{}, spot_price_x128:{}",
        reserve_a, reserve_b, spot_price_x128
    );

    Ok(SimulatedSwap {
        reserve_a,
        reserve_b,
        spot_price_x128,
    })
}

/// Spot price after trading `alpha_x` into the pool, as a truncated Q128.128
pub fn get_simulated_spot_price(
    alpha_x: U256,
    reserve_in: U256,
    reserve_out: U256,
) -> Result<U256> {
    simulate_swap(alpha_x, reserve_in, reserve_out)?.spot_price_x128_amount()
}
