#![allow(non_snake_case)]

use anyhow::Result;
use clap::Parser;
use fixed_point_client::commands::PriceDivergenceArgs;

#[derive(Debug, Parser)]
#[command(
    name = "calculatePriceDivergence",
    version,
    about = "Print the divergence between two price observations as a uint256 word"
)]
struct Cli {
    #[command(flatten)]
    args: PriceDivergenceArgs,
}

fn main() -> Result<()> {
    fixed_point_client::init_logger();
    let cli = Cli::parse();
    let word = cli.args.run()?;
    println!("{}", word);
    Ok(())
}
