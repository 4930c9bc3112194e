pub mod fixtures;
pub mod query;
pub mod timezones;

pub use fixtures::{Fixture, FixtureEntry, FixtureLists, FixturesResponse};
pub use query::{DATE_FORMAT, FixtureQuery, parse_date};
pub use timezones::TimezoneResponse;
