mod fetch_utils;
pub mod fixtures;
pub mod http_client;
pub mod timezones;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export pipeline entry points
pub use fixtures::{fetch_fixture_lists, fetch_fixtures, run_fixture_pipeline};
pub use timezones::{fetch_timezones, format_timezone_list, run_timezone_pipeline};
