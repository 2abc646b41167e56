mod cli;
mod commands;
mod render;
mod shell;

use admin_dashboard::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
