//! Timezone pipeline: fetch the timezones the API supports and log them.

use reqwest::Client;
use tracing::{info, instrument, warn};

use super::fetch_utils::fetch;
use super::urls::build_timezone_url;
use crate::config::Config;
use crate::constants::secrets::TIMEZONE_API_KEY;
use crate::data_fetcher::models::TimezoneResponse;
use crate::error::AppError;
use crate::secrets::SecretProvider;

/// Fetches the list of timezone identifiers.
#[instrument(skip(client, config, api_key))]
pub async fn fetch_timezones(
    client: &Client,
    config: &Config,
    api_key: Option<&str>,
) -> Result<Vec<String>, AppError> {
    let url = build_timezone_url(&config.api_domain);
    let response: TimezoneResponse = fetch(client, &url, api_key).await?;
    Ok(response.results)
}

/// Renders timezones the way they appear in the log: `["UTC", "CET"]`.
pub fn format_timezone_list(timezones: &[String]) -> String {
    format!("{timezones:?}")
}

/// Runs the timezone pipeline.
///
/// The only observable effect is the log line listing the timezones; the
/// pipeline produces no value. A missing `RAPIDAPI_KEY` does not stop the
/// request, it is sent without the key header.
#[instrument(skip(client, config, secrets))]
pub async fn run_timezone_pipeline(
    client: &Client,
    config: &Config,
    secrets: &impl SecretProvider,
) -> Result<(), AppError> {
    let api_key = secrets.resolve(TIMEZONE_API_KEY);
    if api_key.is_none() {
        warn!("Secret {TIMEZONE_API_KEY} is not set, requesting timezones without an API key");
    }

    let timezones = fetch_timezones(client, config, api_key.as_deref()).await?;
    info!("Timezones: {}", format_timezone_list(&timezones));

    Ok(())
}
