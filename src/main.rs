// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_operation};
use fixture_oracle::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration operations run before logging so a broken config can be fixed
    if is_config_operation(&args) {
        if args.list_config {
            return commands::handle_list_config_command().await;
        }
        return commands::handle_config_update_command(&args).await;
    }

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = if let Some(hex) = &args.decode {
        commands::handle_decode_command(hex)
    } else if args.timezones {
        commands::handle_timezones_command().await
    } else {
        commands::handle_fixtures_command(&args).await
    };

    if let Err(e) = &result {
        tracing::error!("Pipeline did not produce a result: {e}");
    }

    result
}
