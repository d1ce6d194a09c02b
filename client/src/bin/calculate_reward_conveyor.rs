#![allow(non_snake_case)]

use anyhow::Result;
use clap::Parser;
use fixed_point_client::commands::RewardConveyorArgs;

#[derive(Debug, Parser)]
#[command(
    name = "calculateRewardConveyor",
    version,
    about = "Print the conveyor reward for a fee and weth value as a uint256 word"
)]
struct Cli {
    #[command(flatten)]
    args: RewardConveyorArgs,
}

fn main() -> Result<()> {
    fixed_point_client::init_logger();
    let cli = Cli::parse();
    let word = cli.args.run()?;
    println!("{}", word);
    Ok(())
}
