use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Resolves `YYYY-MM-DD` or an RFC 3339 timestamp to its calendar date.
/// A timestamp keeps the date as written, without shifting timezones.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// `deserialize_with` adapter for request bodies and the data file.
pub fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date: {raw}")))
}
