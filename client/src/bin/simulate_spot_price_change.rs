#![allow(non_snake_case)]

use anyhow::Result;
use clap::Parser;
use fixed_point_client::commands::SpotPriceArgs;

#[derive(Debug, Parser)]
#[command(
    name = "simulateSpotPriceChange",
    version,
    about = "Print the spot price after a simulated swap as a uint256 word"
)]
struct Cli {
    #[command(flatten)]
    args: SpotPriceArgs,
}

fn main() -> Result<()> {
    fixed_point_client::init_logger();
    let cli = Cli::parse();
    let word = cli.args.run()?;
    println!("{}", word);
    Ok(())
}
