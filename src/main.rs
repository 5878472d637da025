//! mongo-iceberg-sync CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use mongo_iceberg_sync::cli::{self, Cli, Commands};
use mongo_iceberg_sync::infrastructure::logging::LoggerImpl;
use mongo_iceberg_sync::services::PlanningEngine;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = match LoggerImpl::init(&cli.log_config()) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = match &cli.command {
        Commands::Run(args) => cli::commands::run::execute(args, &PlanningEngine),
        Commands::Check(args) => cli::commands::check::execute(args, cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::handle_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}
