use crate::assess::{run_assess, AssessArgs};
use crate::tables::{run_tables, TablesArgs};
use clap::{Parser, Subcommand};
use soa_fees::config::AppConfig;
use soa_fees::error::AppError;
use soa_fees::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "soa",
    about = "Assess Statement of Account fees from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a record, apply operator edits, and print the derived fees (default command)
    Assess(AssessArgs),
    /// Print the fee schedules the rules look up
    Tables(TablesArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Assess(AssessArgs::default()));

    match command {
        Command::Assess(args) => run_assess(args, &config),
        Command::Tables(args) => run_tables(args, &config),
    }
}
