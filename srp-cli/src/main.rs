//! SRP CLI - Command line tool for solar radiation forecasts.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "srp-cli",
    version,
    about = "Solar radiation forecast toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: srp_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    srp_cmd::run(cli.command).await
}
