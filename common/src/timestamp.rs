//! The fixed textual layout used for show start times.
//!
//! Start times are accepted from forms and rendered back in
//! `YYYY-MM-DD HH:MM:SS`. They carry no offset: a show starts at the wall-clock
//! time the venue advertises.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

/// Layout used when rendering a start time.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Layouts accepted from a submission, tried in order.
const ACCEPTED_FORMATS: [&str; 4] = [
    DISPLAY_FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parses a submitted start time.
///
/// Returns `None` when the value matches none of the accepted layouts.
pub fn parse(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Renders a start time in the display layout.
pub fn format(value: &NaiveDateTime) -> String {
    value.format(DISPLAY_FORMAT).to_string()
}

/// `#[serde(with = "common::timestamp")]` adapter for the display layout.
pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid start time `{raw}`")))
}
