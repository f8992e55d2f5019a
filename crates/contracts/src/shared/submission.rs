use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Envelope for every submission body: the page fields plus an ISO-8601 timestamp
///
/// Serialized flat, e.g. `{ "digit": "7", "timestamp": "2024-03-15T14:02:26.123Z" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timestamped<T> {
    #[serde(flatten)]
    pub body: T,
    pub timestamp: String,
}

impl<T> Timestamped<T> {
    pub fn new(body: T, created_at: DateTime<Utc>) -> Self {
        Self {
            body,
            timestamp: iso_timestamp(created_at),
        }
    }
}

/// Format a UTC instant the way the backend expects: millisecond precision, `Z` suffix
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
