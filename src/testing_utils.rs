use serde_json::{Value, json};

/// Test utilities for building API response bodies
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a fixtures body shaped like the real API answer, one entry per
    /// `(id, timestamp)` pair, in order.
    pub fn fixtures_body(fixtures: &[(u32, u32)]) -> Value {
        let response: Vec<Value> = fixtures
            .iter()
            .map(|&(id, timestamp)| Self::fixture_entry(id, timestamp))
            .collect();

        json!({
            "get": "fixtures",
            "parameters": {"date": "2024-03-02", "league": "39", "season": "2023"},
            "errors": [],
            "results": fixtures.len(),
            "paging": {"current": 1, "total": 1},
            "response": response,
        })
    }

    /// Creates a single `response` element with the nested `fixture` object
    pub fn fixture_entry(id: u32, timestamp: u32) -> Value {
        json!({
            "fixture": {
                "id": id,
                "referee": null,
                "timezone": "UTC",
                "timestamp": timestamp,
                "status": {"long": "Match Finished", "short": "FT", "elapsed": 90},
            },
            "league": {"id": 39, "name": "Premier League", "season": 2023},
            "teams": {
                "home": {"id": 33, "name": "Manchester United"},
                "away": {"id": 34, "name": "Newcastle"},
            },
            "goals": {"home": 1, "away": 0},
        })
    }

    /// Creates a timezone body with the given identifiers
    pub fn timezone_body(timezones: &[&str]) -> Value {
        json!({ "results": timezones })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{FixtureLists, FixturesResponse, TimezoneResponse};

    #[test]
    fn test_fixtures_body_parses() {
        let body = TestDataBuilder::fixtures_body(&[(1, 2), (3, 4)]);
        let response: FixturesResponse = serde_json::from_value(body).unwrap();
        let lists = FixtureLists::from_response(&response);

        assert_eq!(response.results, Some(2));
        assert_eq!(lists.fixture_ids(), &[1, 3]);
        assert_eq!(lists.timestamps(), &[2, 4]);
    }

    #[test]
    fn test_timezone_body_parses() {
        let body = TestDataBuilder::timezone_body(&["UTC", "CET"]);
        let response: TimezoneResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.results, vec!["UTC", "CET"]);
    }
}
