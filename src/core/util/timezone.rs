// SPDX-License-Identifier: MIT OR Apache-2.0

//! Time zone resolution for zone tokens trailing a timestamp literal
//! and for configured default zones.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use chrono_tz::Tz;

/// Abbreviations understood without an IANA id.
///
/// Daylight and standard spellings map to the same region so the offset is
/// always taken from the zone rules at the parsed wall-clock time.
const ZONE_ABBREVIATIONS: &[(&str, Tz)] = &[
    ("UT", Tz::UTC),
    ("UTC", Tz::UTC),
    ("GMT", Tz::UTC),
    ("EST", Tz::US__Eastern),
    ("EDT", Tz::US__Eastern),
    ("CST", Tz::US__Central),
    ("CDT", Tz::US__Central),
    ("MST", Tz::US__Mountain),
    ("MDT", Tz::US__Mountain),
    ("PST", Tz::US__Pacific),
    ("PDT", Tz::US__Pacific),
];

/// Resolve a zone token: a known abbreviation (case-insensitive) or an IANA id.
pub fn resolve_zone(token: &str) -> Option<Tz> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    ZONE_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(token))
        .map(|(_, tz)| *tz)
        .or_else(|| token.parse::<Tz>().ok())
}

/// Place a wall-clock time in a zone.
///
/// Ambiguous times (DST fall-back) take the earlier instant; times that
/// fall in a DST gap do not exist and yield `None`.
pub fn localize(zone: Tz, local: &NaiveDateTime) -> Option<DateTime<Tz>> {
    match zone.from_local_datetime(local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

/// First valid instant of `date` in `zone`.
///
/// Usually local midnight; when midnight is skipped by a DST transition the
/// first wall-clock time after the gap is used.
pub fn start_of_day(zone: Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    let mut local = date.and_hms_opt(0, 0, 0)?;
    // DST gaps are at most a few hours; probe in quarter-hour steps
    for _ in 0..(24 * 4) {
        if let Some(dt) = localize(zone, &local) {
            return Some(dt);
        }
        local = local.checked_add_signed(TimeDelta::minutes(15))?;
    }
    None
}
