//! Fixture pipeline: fetch fixtures, extract ids and kickoff times, ABI-encode.

use ethers::types::Bytes;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use super::fetch_utils::fetch;
use super::urls::build_fixtures_url;
use crate::config::Config;
use crate::constants::secrets::FIXTURE_API_KEY;
use crate::data_fetcher::models::{FixtureLists, FixtureQuery, FixturesResponse};
use crate::error::AppError;
use crate::secrets::SecretProvider;

/// Fetches the fixtures matching `query`.
#[instrument(skip(client, config, api_key))]
pub async fn fetch_fixtures(
    client: &Client,
    config: &Config,
    query: &FixtureQuery,
    api_key: &str,
) -> Result<FixturesResponse, AppError> {
    let url = build_fixtures_url(&config.api_domain, query);
    let response: FixturesResponse = fetch(client, &url, Some(api_key)).await?;

    if let Some(results) = response.results {
        debug!("API reported {results} fixture results");
    }
    if response.has_api_errors() {
        warn!("API returned errors alongside fixtures: {}", response.errors);
    }

    Ok(response)
}

/// Fetches fixtures and reduces them to the two index-aligned lists.
///
/// Fails with `AppError::MissingSecret` before any request is made when the
/// `soccerApiKey` secret is unavailable.
pub async fn fetch_fixture_lists(
    client: &Client,
    config: &Config,
    query: &FixtureQuery,
    secrets: &impl SecretProvider,
) -> Result<FixtureLists, AppError> {
    let api_key = secrets
        .resolve(FIXTURE_API_KEY)
        .ok_or_else(|| AppError::missing_secret(FIXTURE_API_KEY))?;

    let response = fetch_fixtures(client, config, query, &api_key).await?;

    for entry in &response.response {
        debug!(
            "Fixture {} kicks off at {} ({})",
            entry.fixture.id,
            entry.fixture.timestamp,
            entry.fixture.date.as_deref().unwrap_or("no date")
        );
    }

    let lists = FixtureLists::from_response(&response);
    info!("Fixture ID List: {:?}", lists.fixture_ids());
    info!("Timestamp List: {:?}", lists.timestamps());

    Ok(lists)
}

/// Runs the fixture pipeline end to end.
///
/// Returns the `(uint32[] fixtureIds, uint32[] timestamps)` ABI payload.
///
/// # Example
/// ```rust,no_run
/// use fixture_oracle::config::Config;
/// use fixture_oracle::data_fetcher::api::{create_http_client_with_timeout, run_fixture_pipeline};
/// use fixture_oracle::data_fetcher::models::FixtureQuery;
/// use fixture_oracle::secrets::EnvSecrets;
///
/// #[tokio::main]
/// async fn main() -> Result<(), fixture_oracle::AppError> {
///     let config = Config::default();
///     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
///     let payload =
///         run_fixture_pipeline(&client, &config, &FixtureQuery::default(), &EnvSecrets).await?;
///     println!("{payload}");
///     Ok(())
/// }
/// ```
#[instrument(skip(client, config, secrets))]
pub async fn run_fixture_pipeline(
    client: &Client,
    config: &Config,
    query: &FixtureQuery,
    secrets: &impl SecretProvider,
) -> Result<Bytes, AppError> {
    let lists = fetch_fixture_lists(client, config, query, secrets).await?;
    let payload = lists.encode();
    info!(
        "Encoded {} fixtures into {} byte payload",
        lists.len(),
        payload.len()
    );
    Ok(payload)
}
