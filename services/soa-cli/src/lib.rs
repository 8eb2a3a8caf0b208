mod assess;
mod cli;
mod infra;
mod tables;

use soa_fees::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
