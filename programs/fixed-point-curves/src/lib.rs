//! Evaluators for precomputed fixed point contract constants.
//!
//! Each calculator turns a few integer arguments into one Q64.64 or Q128.128
//! value, which [`Uint256Word`] encodes as a single ABI `uint256`. Intermediate
//! ratios are evaluated in binary64, rounded the way the published constants were.

pub mod calculators;
pub mod error;
pub mod libraries;

pub use calculators::{
    get_conveyor_reward, get_fee_at, get_price_divergence, get_simulated_spot_price,
    simulate_swap, split_reward, ConveyorShare, RewardSplit, SimulatedSwap,
};
pub use error::{ErrorCode, Result};
pub use libraries::{parse_decimal, Uint256Word, U256, U512};
