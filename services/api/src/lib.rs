mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use alusive_ml::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
