//! Upstream timestamps
//!
//! Spreadsheet rows carry ISO-8601 strings, loosely formatted date strings,
//! epoch milliseconds, or nothing at all. [`Timestamp`] keeps the three
//! outcomes distinct: a field that is present but unparseable still wins a
//! priority lookup (it is "non-empty") yet orders as the epoch and displays
//! as the placeholder.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::constants::MISSING_VALUE_PLACEHOLDER;

/// Naive layouts tried after RFC 3339 / RFC 2822, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// A timestamp field as received from upstream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Timestamp {
    /// Absent, `null`, or the empty string
    #[default]
    Missing,
    /// Present but not a recognisable date
    Invalid(String),
    /// Parsed instant
    Valid(DateTime<Utc>),
}

impl Timestamp {
    /// Parse a timestamp string.
    ///
    /// Only the empty string is [`Timestamp::Missing`]. Whitespace-only input
    /// is present but unparseable, so it still wins a priority lookup.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Missing;
        }

        match parse_instant(raw.trim()) {
            Some(instant) => Self::Valid(instant),
            None => Self::Invalid(raw.to_string()),
        }
    }

    /// Interpret an arbitrary JSON value. Numbers are epoch milliseconds.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::String(text) => Self::parse(text),
            Value::Number(number) => number
                .as_f64()
                .filter(|millis| millis.is_finite())
                .and_then(|millis| Utc.timestamp_millis_opt(millis as i64).single())
                .map_or_else(|| Self::Invalid(number.to_string()), Self::Valid),
            other => Self::Invalid(other.to_string()),
        }
    }

    /// `true` unless the field was absent or empty.
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// The parsed instant, if any.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Valid(instant) => Some(*instant),
            Self::Missing | Self::Invalid(_) => None,
        }
    }

    /// Ordering key: unparseable and missing values sort as the epoch.
    pub fn instant_or_epoch(&self) -> DateTime<Utc> {
        self.instant().unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Long US display form (`2/24/2026, 9:30:00 AM`), or `-`.
    pub fn display_long(&self) -> String {
        self.display_with("%-m/%-d/%Y, %-I:%M:%S %p")
    }

    /// Short US display form (`Feb 24, 2026, 09:30 AM`), or `-`.
    pub fn display_short(&self) -> String {
        self.display_with("%b %d, %Y, %I:%M %p")
    }

    fn display_with(&self, layout: &str) -> String {
        match self.instant() {
            Some(instant) => instant.format(layout).to_string(),
            None => MISSING_VALUE_PLACEHOLDER.to_string(),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Valid(instant)
    }
}

/// Serialized as an RFC 3339 string, or `null` when there is no instant.
impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.instant() {
            Some(instant) => serializer
                .serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(text) {
        return Some(instant.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
        .map(|naive| naive.and_utc())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(text, layout).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}
