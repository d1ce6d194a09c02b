use anyhow::Result;
use clap::Parser;
use fixed_point_client::commands::Opts;

fn main() -> Result<()> {
    fixed_point_client::init_logger();
    let opts = Opts::parse();
    let output = opts.command.run()?;
    println!("{}", output);
    Ok(())
}
