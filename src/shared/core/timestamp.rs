// Lenient timestamp parsing shared by record decoding and query parameters.
//
// Accepted forms
// - RFC 3339 instants ("2024-05-01T08:00:00+08:00", "2024-05-01T08:00:00.123Z").
// - Date-times without an offset ("2024-05-01T08:00:00", "2024-05-01 08:00:00.5").
// - Plain dates ("2024-05-01"), read as midnight.
//
// Values without an offset are server-local for query parameters and UTC for stored records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de::Error as _};

use crate::shared::core::clock::Clock;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

enum Parsed {
    Instant(DateTime<Utc>),
    WallTime(NaiveDateTime),
    Date(NaiveDate),
}

fn parse(raw: &str) -> Option<Parsed> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(Parsed::Instant(instant.to_utc()));
    }
    // PostgREST renders timestamptz as "+00:00" but some clients send "+0000".
    if let Ok(instant) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(Parsed::Instant(instant.to_utc()));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(Parsed::WallTime)
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(Parsed::Date)
        })
}

/// Values without an offset are server-local wall times, resolved by `clock` with the
/// offset in force on their own date. Wall times skipped by a DST change are rejected.
pub fn parse_timestamp(raw: &str, clock: &dyn Clock) -> Option<DateTime<Utc>> {
    match parse(raw)? {
        Parsed::Instant(instant) => Some(instant),
        Parsed::WallTime(local) => clock.local_to_utc(local),
        Parsed::Date(date) => Some(clock.start_of_day(date)),
    }
}

/// Serde adapter for record timestamps; offset-less values are taken as UTC.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let instant = match parse(&raw) {
        Some(Parsed::Instant(instant)) => Some(instant),
        Some(Parsed::WallTime(local)) => Some(local.and_utc()),
        Some(Parsed::Date(date)) => date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc()),
        None => None,
    };
    instant.ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
}
