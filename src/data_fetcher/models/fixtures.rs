use ethers::types::Bytes;
use serde::{Deserialize, Serialize};

use crate::encoding::encode_u32_arrays;

/// The fixture object nested inside every `response` element.
///
/// Only `id` and `timestamp` feed the payload; the remaining fields are
/// kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u32,
    /// Kickoff time in Unix seconds
    pub timestamp: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureEntry {
    pub fixture: Fixture,
}

/// Body of `GET /v3/fixtures`.
///
/// `response` is required: a body without it is rejected while parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixturesResponse {
    pub response: Vec<FixtureEntry>,
    /// Result count reported by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<u32>,
    /// API-level errors; an empty array or object when the call succeeded
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub errors: serde_json::Value,
}

impl FixturesResponse {
    /// Whether the API reported errors alongside the body
    pub fn has_api_errors(&self) -> bool {
        match &self.errors {
            serde_json::Value::Array(items) => !items.is_empty(),
            serde_json::Value::Object(fields) => !fields.is_empty(),
            serde_json::Value::Null => false,
            _ => true,
        }
    }
}

/// Fixture ids and kickoff timestamps as two index-aligned lists.
///
/// Both lists are filled in the same pass, so element `i` of each
/// belongs to the same fixture and the lengths always match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureLists {
    fixture_ids: Vec<u32>,
    timestamps: Vec<u32>,
}

impl FixtureLists {
    pub fn from_fixtures<'a>(fixtures: impl IntoIterator<Item = &'a Fixture>) -> Self {
        let mut lists = FixtureLists::default();
        for fixture in fixtures {
            lists.fixture_ids.push(fixture.id);
            lists.timestamps.push(fixture.timestamp);
        }
        lists
    }

    pub fn from_response(response: &FixturesResponse) -> Self {
        Self::from_fixtures(response.response.iter().map(|entry| &entry.fixture))
    }

    pub fn fixture_ids(&self) -> &[u32] {
        &self.fixture_ids
    }

    pub fn timestamps(&self) -> &[u32] {
        &self.timestamps
    }

    pub fn len(&self) -> usize {
        self.fixture_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixture_ids.is_empty()
    }

    /// ABI-encodes the lists as `(uint32[], uint32[])`, ids first.
    pub fn encode(&self) -> Bytes {
        encode_u32_arrays(&self.fixture_ids, &self.timestamps)
    }
}
