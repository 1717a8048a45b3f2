use anyhow::Context;
use clap::Parser;
use weather_dashboard::cli::{run, Cli};
use weather_dashboard::utils::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_file.as_deref()).context("failed to initialise logging")?;
    run(cli)?;
    Ok(())
}
