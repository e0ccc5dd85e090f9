//! EVM Params CLI - Inspect the protocol parameter table.

pub mod commands;
pub mod config;
pub mod output;
pub mod telemetry;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = commands::Cli::parse();
    let config = config::CliConfig::load()?;

    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    telemetry::init_telemetry(&log_level, cli.log_json || config.log_json)?;

    if let Err(e) = commands::execute(cli.command, cli.params, &config) {
        output::print_error(&format!("Error: {}", e));
        std::process::exit(1);
    }

    Ok(())
}
