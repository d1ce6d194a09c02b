//! Split of a swap fee between the conveyor and the beacon

use log::debug;

use crate::error::Result;
use crate::libraries::big_num::U256;
use crate::libraries::fixed_point::{pow2, RESOLUTION_64};
use crate::libraries::float_math::{truncate_to_u256, u256_to_f64};

/// Largest Q64.64 fee (~0.5%) that still gets the blended split
pub const BLENDED_FEE_CEILING_X64: u64 = 92233720368547760;
/// Fee fraction the blended split moves halfway toward
pub const TARGET_FEE: f64 = 0.005;
/// Fixed fee fraction added on top of the blend
pub const CONVEYOR_FEE_OFFSET: f64 = 0.001;
/// Share paid to the conveyor once the fee is above the ceiling
pub const FLAT_CONVEYOR_SHARE: f64 = 0.6;

/// Conveyor share of the fee, tagged with the unit it was produced in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConveyorShare {
    /// Blended share, scaled by 100
    Percent(f64),
    /// Flat share for high fees
    Fraction(f64),
}

impl ConveyorShare {
    pub fn as_fraction(&self) -> f64 {
        match *self {
            ConveyorShare::Percent(percent) => percent / 100.0,
            ConveyorShare::Fraction(fraction) => fraction,
        }
    }

    /// The number multiplied into the fee total by the deployed reward formula,
    /// which takes the percent branch without dividing by 100.
    pub fn applied_multiplier(&self) -> f64 {
        match *self {
            ConveyorShare::Percent(percent) => percent,
            ConveyorShare::Fraction(fraction) => fraction,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardSplit {
    /// Fee as a plain fraction
    pub fee_fraction: f64,
    pub share: ConveyorShare,
    /// Fee taken from the weth value
    pub weth_total: f64,
    pub conveyor_reward: f64,
    /// Remainder of the fee after the conveyor reward
    pub beacon_reward: f64,
}

impl RewardSplit {
    /// Conveyor reward truncated to an integer amount
    pub fn conveyor_reward_amount(&self) -> Result<U256> {
        truncate_to_u256(self.conveyor_reward)
    }

    /// Beacon reward truncated to an integer amount
    pub fn beacon_reward_amount(&self) -> Result<U256> {
        truncate_to_u256(self.beacon_reward)
    }

    /// Fee total truncated to an integer amount
    pub fn weth_total_amount(&self) -> Result<U256> {
        truncate_to_u256(self.weth_total)
    }
}

/// Splits the fee charged on `weth_value` between the conveyor and the beacon
///
/// # Arguments
///
/// * `percent_fee_x64` - Fee rate as a Q64.64
/// * `weth_value` - Token amount the fee is charged on
///
/// # Formula
///
/// * `f = percent_fee_x64 / 2^64`
/// * `share = (f + (0.005 - f) / 2 + 0.001) * 100` if `percent_fee_x64 <= 92233720368547760`,
///   `0.6` otherwise
/// * `weth_total = weth_value * f`
/// * `conveyor_reward = share * weth_total`
/// * `beacon_reward = weth_total - conveyor_reward`
///
pub fn split_reward(percent_fee_x64: U256, weth_value: U256) -> Result<RewardSplit> {
    let fee_fraction = u256_to_f64(percent_fee_x64) * pow2(-(RESOLUTION_64 as i32));

    let share = if percent_fee_x64 <= U256::from(BLENDED_FEE_CEILING_X64) {
        ConveyorShare::Percent(
            (fee_fraction + (TARGET_FEE - fee_fraction) / 2.0 + CONVEYOR_FEE_OFFSET) * 100.0,
        )
    } else {
        ConveyorShare::Fraction(FLAT_CONVEYOR_SHARE)
    };

    let weth_total = u256_to_f64(weth_value) * fee_fraction;
    let conveyor_reward = share.applied_multiplier() * weth_total;
    let beacon_reward = weth_total - conveyor_reward;
    debug!(
        "fee_fraction:{}, share:{:?}, weth_total:{}, conveyor_reward:{}, beacon_reward:{}",
        fee_fraction, share, weth_total, conveyor_reward, beacon_reward
    );

    Ok(RewardSplit {
        fee_fraction,
        share,
        weth_total,
        conveyor_reward,
        beacon_reward,
    })
}

/// Conveyor reward for `weth_value` at `percent_fee_x64`, truncated to an integer
pub fn get_conveyor_reward(percent_fee_x64: U256, weth_value: U256) -> Result<U256> {
    split_reward(percent_fee_x64, weth_value)?.conveyor_reward_amount()
}
