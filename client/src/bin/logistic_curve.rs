use anyhow::Result;
use clap::Parser;
use fixed_point_client::commands::LogisticCurveArgs;

#[derive(Debug, Parser)]
#[command(
    name = "logistic_curve",
    version,
    about = "Print the fee curve value at x as a uint256 word"
)]
struct Cli {
    #[command(flatten)]
    args: LogisticCurveArgs,
}

fn main() -> Result<()> {
    fixed_point_client::init_logger();
    let cli = Cli::parse();
    let word = cli.args.run();
    println!("{}", word);
    Ok(())
}
