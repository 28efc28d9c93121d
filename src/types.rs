/// Shared request field types used across the API schemas
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Time of day as stored in `hora` columns: `HH:MM`, or `HH:MM:SS` when
/// seconds were supplied.
///
/// Matching against stored rows is exact string equality, so every value
/// that reaches the database is re-rendered zero-padded in one of those two
/// shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeOfDay(String);

impl TimeOfDay {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .map(|t| Self(t.format("%H:%M").to_string()))
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S").map(|t| Self(t.format("%H:%M:%S").to_string())))
            .map_err(|_| format!("invalid time of day '{}', expected HH:MM or HH:MM:SS", raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TimeOfDay::parse(&raw).map_err(de::Error::custom)
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a date or datetime; a bare date means midnight.
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime, String> {
    let trimmed = raw.trim();
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS", raw))
}

pub fn deserialize_datetime<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).map_err(de::Error::custom)
}

/// Accepts `true`/`false`/`1`/`0` (form posts rarely send real booleans).
pub fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(de::Error::custom(format!("invalid flag '{}', expected true/false/1/0", other))),
    }
}

/// Splits a comma separated weekday list, dropping blank entries.
pub fn split_weekdays(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}
