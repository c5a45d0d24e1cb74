use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ShortenQuery {
    /// The long URL to shorten, taken verbatim.
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// Full short link, ready to be followed.
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub accesses: u64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
