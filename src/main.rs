//! Heft CLI entry point.

use anyhow::Result;
use clap::Parser;

use heft::cli::commands::{check, estimate};
use heft::cli::{Cli, Commands};
use heft::infrastructure::config::ConfigLoader;
use heft::infrastructure::logging::{LogConfig, LoggerImpl};

async fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let _logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;

    match cli.command {
        Commands::Estimate(args) => estimate::execute(args, config, cli.json).await,
        Commands::Check(args) => check::execute(args, cli.json).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        heft::cli::handle_error(err, json);
    }
}
