//! Conversion of store timestamps to local calendar time.

use chrono::{DateTime, Local, LocalResult, TimeZone, Utc};

/// Output format for normalized dates
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NANOS_PER_SECOND: i64 = 1_000_000_000;
/// 2001-01-01T00:00:00Z as UNIX seconds, used if local midnight is unresolvable
const REFERENCE_EPOCH_UTC: i64 = 978_307_200;

/// Nanoseconds between the UNIX epoch and 2001-01-01 00:00:00 local time.
#[must_use]
pub fn reference_epoch_offset_ns() -> i64 {
    let seconds = Local
        .with_ymd_and_hms(2001, 1, 1, 0, 0, 0)
        .earliest()
        .map_or(REFERENCE_EPOCH_UTC, |midnight| midnight.timestamp());
    seconds * NANOS_PER_SECOND
}

/// Seconds since the UNIX epoch for a raw store timestamp.
///
/// No bounds checks: nonsensical input gives a nonsensical (but defined)
/// result.
#[must_use]
pub fn civil_seconds(raw: i64) -> i64 {
    raw.wrapping_add(reference_epoch_offset_ns()) / NANOS_PER_SECOND
}

/// Format a raw store timestamp as `YYYY-MM-DD HH:MM:SS` in local time.
#[must_use]
pub fn normalize_timestamp(raw: i64) -> String {
    to_local(civil_seconds(raw)).format(DATE_FORMAT).to_string()
}

/// Prefix a body with its formatted date, the human-readable layout.
#[must_use]
pub fn human_readable_body(date: &str, body: &str) -> String {
    format!("{date}: {body}")
}

fn to_local(seconds: i64) -> DateTime<Local> {
    match Local.timestamp_opt(seconds, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => DateTime::<Utc>::UNIX_EPOCH.with_timezone(&Local),
    }
}
