//! Application-wide constants and configuration values
//!
//! Request defaults, secret names and HTTP settings live here so the
//! pipelines and their tests agree on them.

/// Default API-Football host (RapidAPI gateway)
pub const DEFAULT_API_DOMAIN: &str = "https://api-football-v1.p.rapidapi.com";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Header carrying the RapidAPI key
pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";

/// Names under which the pipelines look up their API keys
pub mod secrets {
    /// Secret consulted by the fixture pipeline. Missing means the run fails.
    pub const FIXTURE_API_KEY: &str = "soccerApiKey";

    /// Secret consulted by the timezone pipeline
    pub const TIMEZONE_API_KEY: &str = "RAPIDAPI_KEY";
}

/// Default fixture query, matching the first deployed request
pub mod fixture_defaults {
    pub const DATE: &str = "2024-03-02";

    /// Premier League
    pub const LEAGUE: u32 = 39;

    pub const SEASON: i32 = 2023;
}

/// API endpoint paths, appended to the configured domain
pub mod endpoints {
    pub const FIXTURES: &str = "/v3/fixtures";
    pub const TIMEZONE: &str = "/v3/timezone";
}

/// Environment variables that override the config file
pub mod env_vars {
    pub const API_DOMAIN: &str = "FIXTURE_ORACLE_API_DOMAIN";
    pub const LOG_FILE: &str = "FIXTURE_ORACLE_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "FIXTURE_ORACLE_HTTP_TIMEOUT";
}

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "fixture_oracle.log";

/// How many characters of a response body end up in debug logs
pub const RESPONSE_PREVIEW_CHARS: usize = 1024;
