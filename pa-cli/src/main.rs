//! Presence CLI - Command line tool for querying a presence analyzer server.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "presence-cli",
    version,
    about = "Presence analyzer dashboard data from the command line"
)]
struct Cli {
    #[command(flatten)]
    options: pa_cmd::ApiOptions,

    #[command(subcommand)]
    command: pa_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using API at {}", cli.options.api_url);
    pa_cmd::run(cli.command, &cli.options).await
}
