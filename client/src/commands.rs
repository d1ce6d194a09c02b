use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fixed_point_curves::{
    get_fee_at, get_price_divergence, parse_decimal, simulate_swap, split_reward, Uint256Word,
    U256,
};
use log::info;

#[derive(Debug, Parser)]
#[command(
    name = "fpcalc",
    version,
    about = "Precompute fixed point constants as ABI uint256 words"
)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: CommandsName,
}

#[derive(Debug, Subcommand)]
pub enum CommandsName {
    /// Divergence between two price observations, as a Q128.128
    PriceDivergence(PriceDivergenceArgs),
    /// Conveyor share of the fee charged on a weth amount
    RewardConveyor(RewardConveyorArgs),
    /// Fee on the decaying fee curve, as a Q64.64
    LogisticCurve(LogisticCurveArgs),
    /// Spot price after a simulated constant product swap, as a Q128.128
    SpotPrice(SpotPriceArgs),
    /// Decode a uint256 word back to its decimal value
    Decode {
        /// 0x-prefixed word of 64 hex digits
        word: Uint256Word,
    },
}

impl CommandsName {
    /// Runs the command and returns the single line to print
    pub fn run(&self) -> Result<String> {
        match self {
            CommandsName::PriceDivergence(args) => Ok(args.run()?.to_string()),
            CommandsName::RewardConveyor(args) => Ok(args.run()?.to_string()),
            CommandsName::LogisticCurve(args) => Ok(args.run().to_string()),
            CommandsName::SpotPrice(args) => Ok(args.run()?.to_string()),
            CommandsName::Decode { word } => {
                let value = word.value().context("failed to decode uint256 word")?;
                Ok(value.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct PriceDivergenceArgs {
    /// Spot price observation
    #[arg(value_parser = parse_decimal)]
    pub v3_spot: U256,
    /// Outlier price observation, in the same base
    #[arg(value_parser = parse_decimal)]
    pub v2_outlier: U256,
}

impl PriceDivergenceArgs {
    pub fn run(&self) -> Result<Uint256Word> {
        let divergence = get_price_divergence(self.v3_spot, self.v2_outlier).with_context(|| {
            format!(
                "price divergence of v3_spot:{} v2_outlier:{}",
                self.v3_spot, self.v2_outlier
            )
        })?;
        info!("price_divergence:{}", divergence);
        Ok(Uint256Word::encode(divergence))
    }
}

#[derive(Debug, Clone, Args)]
pub struct RewardConveyorArgs {
    /// Fee rate as a Q64.64
    #[arg(value_parser = parse_decimal)]
    pub percent_fee: U256,
    /// Token amount the fee is charged on
    #[arg(value_parser = parse_decimal)]
    pub weth_value: U256,
}

impl RewardConveyorArgs {
    pub fn run(&self) -> Result<Uint256Word> {
        let context = || {
            format!(
                "conveyor reward of percent_fee:{} weth_value:{}",
                self.percent_fee, self.weth_value
            )
        };
        let split = split_reward(self.percent_fee, self.weth_value).with_context(context)?;
        info!(
            "conveyor_reward:{}, beacon_reward:{}",
            split.conveyor_reward, split.beacon_reward
        );
        let conveyor_reward = split.conveyor_reward_amount().with_context(context)?;
        Ok(Uint256Word::encode(conveyor_reward))
    }
}

#[derive(Debug, Clone, Args)]
pub struct LogisticCurveArgs {
    /// Curve input
    #[arg(value_parser = parse_decimal)]
    pub x: U256,
}

impl LogisticCurveArgs {
    pub fn run(&self) -> Uint256Word {
        let fee_x64 = get_fee_at(self.x);
        info!("fee_x64:{}", fee_x64);
        Uint256Word::encode(U256::from(fee_x64))
    }
}

#[derive(Debug, Clone, Args)]
pub struct SpotPriceArgs {
    /// Amount traded into the pool
    #[arg(value_parser = parse_decimal)]
    pub alpha_x: U256,
    /// Reserve of the input token
    #[arg(value_parser = parse_decimal)]
    pub reserve_in: U256,
    /// Reserve of the output token
    #[arg(value_parser = parse_decimal)]
    pub reserve_out: U256,
}

impl SpotPriceArgs {
    pub fn run(&self) -> Result<Uint256Word> {
        let context = || {
            format!(
                "spot price of alpha_x:{} reserve_in:{} reserve_out:{}",
                self.alpha_x, self.reserve_in, self.reserve_out
            )
        };
        let swap = simulate_swap(self.alpha_x, self.reserve_in, self.reserve_out)
            .with_context(context)?;
        info!(
            "reserve_a:{}, reserve_b:{}, spot_price_x128:{}",
            swap.reserve_a, swap.reserve_b, swap.spot_price_x128
        );
        let price = swap.spot_price_x128_amount().with_context(context)?;
        Ok(Uint256Word::encode(price))
    }
}
