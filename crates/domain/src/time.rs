//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDateTime, Utc};

/// UTC timestamp used for `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Wire format of every timestamp: ISO 8601 without offset, microsecond precision.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp in the wire [`FORMAT`].
#[must_use]
pub fn format(ts: &Timestamp) -> String {
    ts.format(FORMAT).to_string()
}

/// Parse a timestamp written in the wire [`FORMAT`].
///
/// # Errors
///
/// Returns [`chrono::ParseError`] when `input` does not match the format.
pub fn parse(input: &str) -> Result<Timestamp, chrono::ParseError> {
    NaiveDateTime::parse_from_str(input, FORMAT).map(|naive| naive.and_utc())
}

/// `#[serde(with = "crate::time::serde_format")]` adapter for [`Timestamp`] fields.
pub mod serde_format {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Timestamp;

    #[allow(clippy::missing_errors_doc)]
    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format(ts))
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw).map_err(serde::de::Error::custom)
    }
}
