//! Fixed wire format for timestamp fields.
//!
//! Payload types opt in per field:
//!
//! ```
//! use chrono::{DateTime, FixedOffset};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Item {
//!     name: String,
//!     #[serde(with = "waypost::codec::timestamp")]
//!     created_at: DateTime<FixedOffset>,
//! }
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serializer};

/// Millisecond precision with a numeric UTC offset, e.g.
/// `2013-04-02T21:15:00.000+0200`.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Serialize a timestamp in the wire format.
pub fn serialize<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(WIRE_FORMAT).to_string())
}

/// Deserialize a timestamp from the wire format.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    DateTime::parse_from_str(&text, WIRE_FORMAT).map_err(serde::de::Error::custom)
}
