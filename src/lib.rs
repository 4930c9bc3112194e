//! Football fixture oracle pipelines
//!
//! This library fetches fixtures from API-Football, reduces them to two
//! index-aligned lists (fixture ids and kickoff timestamps) and ABI-encodes
//! the pair as `(uint32[], uint32[])` for on-chain consumption. A second,
//! smaller pipeline fetches and logs the timezones the API supports.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fixture_oracle::config::Config;
//! use fixture_oracle::data_fetcher::api::create_http_client_with_timeout;
//! use fixture_oracle::encoding::decode_u32_arrays;
//! use fixture_oracle::secrets::StaticSecrets;
//! use fixture_oracle::{AppError, FixtureQuery, run_fixture_pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!     let secrets = StaticSecrets::new().with("soccerApiKey", "my-rapidapi-key");
//!
//!     let payload =
//!         run_fixture_pipeline(&client, &config, &FixtureQuery::default(), &secrets).await?;
//!     let (fixture_ids, timestamps) = decode_u32_arrays(&payload)?;
//!     println!("{payload}: {fixture_ids:?} {timestamps:?}");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod encoding;
pub mod error;
pub mod secrets;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{run_fixture_pipeline, run_timezone_pipeline};
pub use data_fetcher::models::{FixtureLists, FixtureQuery, FixturesResponse, TimezoneResponse};
pub use error::AppError;
pub use secrets::{EnvSecrets, SecretProvider, StaticSecrets};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
