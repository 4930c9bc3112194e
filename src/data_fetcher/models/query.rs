use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::fixture_defaults;
use crate::error::AppError;

/// Date format used by the fixtures endpoint and the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parameters of a fixtures request.
///
/// Defaults reproduce the original request: Premier League, 2023 season,
/// matches on 2024-03-02.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureQuery {
    #[serde(default = "default_date")]
    pub date: NaiveDate,
    #[serde(default = "default_league")]
    pub league: u32,
    #[serde(default = "default_season")]
    pub season: i32,
}

fn default_date() -> NaiveDate {
    NaiveDate::parse_from_str(fixture_defaults::DATE, DATE_FORMAT).unwrap_or_default()
}

fn default_league() -> u32 {
    fixture_defaults::LEAGUE
}

fn default_season() -> i32 {
    fixture_defaults::SEASON
}

impl Default for FixtureQuery {
    fn default() -> Self {
        FixtureQuery {
            date: default_date(),
            league: default_league(),
            season: default_season(),
        }
    }
}

impl FixtureQuery {
    /// Date rendered the way the API expects it (`YYYY-MM-DD`)
    pub fn date_param(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|e| {
        AppError::date_parse_error(format!("'{input}' is not a YYYY-MM-DD date: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_matches_original_request() {
        let query = FixtureQuery::default();
        assert_eq!(query.date_param(), "2024-03-02");
        assert_eq!(query.league, 39);
        assert_eq!(query.season, 2023);
    }

    #[test]
    fn test_partial_query_fills_defaults() {
        let query: FixtureQuery = toml::from_str("league = 140").unwrap();
        assert_eq!(query.league, 140);
        assert_eq!(query.season, 2023);
        assert_eq!(query.date_param(), "2024-03-02");
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-05-19").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 19).unwrap());

        assert!(parse_date("19.05.2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }
}
