//! WOT CLI - Command line tool for well water depth data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wot-cli",
    version,
    about = "Well water depth data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wot_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wot_cmd::run(cli.command).await
}
