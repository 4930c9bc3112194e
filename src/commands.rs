use crate::cli::Args;
use fixture_oracle::config::Config;
use fixture_oracle::data_fetcher::api::{
    create_http_client_with_timeout, run_fixture_pipeline, run_timezone_pipeline,
};
use fixture_oracle::data_fetcher::models::{FixtureQuery, parse_date};
use fixture_oracle::encoding::{decode_u32_arrays, parse_payload_hex};
use fixture_oracle::error::AppError;
use fixture_oracle::secrets::EnvSecrets;
use tracing::info;

/// Builds the fixture query from the configured defaults and any command
/// line overrides.
pub fn resolve_fixture_query(args: &Args, config: &Config) -> Result<FixtureQuery, AppError> {
    let mut query = config.fixtures.clone();

    if let Some(date) = &args.date {
        query.date = parse_date(date)?;
    }
    if let Some(league) = args.league {
        query.league = league;
    }
    if let Some(season) = args.season {
        query.season = season;
    }

    Ok(query)
}

/// Runs the fixture pipeline and prints the payload as 0x-prefixed hex.
pub async fn handle_fixtures_command(args: &Args) -> Result<(), AppError> {
    let config = Config::load().await?;
    let query = resolve_fixture_query(args, &config)?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let payload = run_fixture_pipeline(&client, &config, &query, &EnvSecrets).await?;
    println!("{payload}");

    Ok(())
}

/// Runs the timezone pipeline. Its output is the log line only.
pub async fn handle_timezones_command() -> Result<(), AppError> {
    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    run_timezone_pipeline(&client, &config, &EnvSecrets).await
}

/// Handles `--decode`: prints the two lists held in a payload.
pub fn handle_decode_command(hex: &str) -> Result<(), AppError> {
    let payload = parse_payload_hex(hex)?;
    let (fixture_ids, timestamps) = decode_u32_arrays(&payload)?;
    info!("Decoded {} fixture ids", fixture_ids.len());

    println!("Fixture ID List: {fixture_ids:?}");
    println!("Timestamp List: {timestamps:?}");

    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}
