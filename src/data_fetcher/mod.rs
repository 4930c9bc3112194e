pub mod api;
pub mod models;

pub use api::{run_fixture_pipeline, run_timezone_pipeline};
pub use models::{FixtureLists, FixtureQuery};
