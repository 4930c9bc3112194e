//! URL building utilities for API endpoints

use crate::constants::endpoints;
use crate::data_fetcher::models::FixtureQuery;

fn base(api_domain: &str) -> &str {
    api_domain.trim_end_matches('/')
}

/// Builds the fixtures URL for a date, league and season.
///
/// # Example
/// ```
/// use fixture_oracle::data_fetcher::api::build_fixtures_url;
/// use fixture_oracle::data_fetcher::models::FixtureQuery;
///
/// let url = build_fixtures_url("https://api.example.com", &FixtureQuery::default());
/// assert_eq!(url, "https://api.example.com/v3/fixtures?date=2024-03-02&league=39&season=2023");
/// ```
pub fn build_fixtures_url(api_domain: &str, query: &FixtureQuery) -> String {
    format!(
        "{}{}?date={}&league={}&season={}",
        base(api_domain),
        endpoints::FIXTURES,
        query.date_param(),
        query.league,
        query.season
    )
}

/// Builds the URL listing the timezones supported by the API.
///
/// # Example
/// ```
/// use fixture_oracle::data_fetcher::api::build_timezone_url;
///
/// let url = build_timezone_url("https://api.example.com/");
/// assert_eq!(url, "https://api.example.com/v3/timezone");
/// ```
pub fn build_timezone_url(api_domain: &str) -> String {
    format!("{}{}", base(api_domain), endpoints::TIMEZONE)
}
