use serde::{Deserialize, Serialize};

/// Body of `GET /v3/timezone`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneResponse {
    pub results: Vec<String>,
}
