// SPDX-License-Identifier: MIT OR Apache-2.0

//! Temporal Parser
//!
//! Interprets integer and text operands as DATE or TIMESTAMP instants.
//!
//! Text is matched against a fixed, ordered list of formats. Each format must
//! consume the whole input; the first one that does wins and no further
//! formats are tried. Attempts keep no state between them.
//!
//! | Target    | Formats (in order)                                                   |
//! |-----------|----------------------------------------------------------------------|
//! | DATE      | `yyyy-MM-dd`, `yy.MM.dd`                                             |
//! | TIMESTAMP | `yy-MM-dd HH:mm:ss.SSS`, `yy-MM-dd HH:mm:ss.SSSSS`, `yyyy-MM-dd HH:mm:ss` |
//!
//! `yy` takes either two digits (read as 20yy) or a literal four-digit year.
//! A timestamp may be followed by whitespace and a zone token (`PST`,
//! `Europe/Berlin`, ...). The zone is applied in a second pass, after the
//! wall-clock part has been parsed on its own.
//!
//! Timestamps keep whole-second precision: fraction digits past the
//! millisecond are dropped, then 500 ms or more carries into the next second
//! (and on into minute, hour and day as needed). Rounding is done on the
//! zoned instant, so a carry may cross a daylight-saving transition.

use crate::core::config::CastConfig;
use crate::core::error::CastError;
use crate::core::util::timezone::{localize, resolve_zone, start_of_day};
use crate::core::value::Instant;
use crate::query_api::definition::sql_type::SqlType;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// ASCII digits only; `\d` would also accept other Unicode digits
const YY: &str = r"(?P<year>[0-9]{2}|[0-9]{4})";
const YYYY: &str = r"(?P<year>[0-9]{4})";
const MM: &str = r"(?P<month>[0-9]{2})";
const DD: &str = r"(?P<day>[0-9]{2})";
const HH_MM_SS: &str = r"(?P<hour>[0-9]{2}):(?P<minute>[0-9]{2}):(?P<second>[0-9]{2})";

/// One entry of a fallback format list
struct TemporalFormat {
    pattern: &'static str,
    regex: Regex,
}

impl TemporalFormat {
    fn date(pattern: &'static str, body: String) -> Self {
        Self::compile(pattern, format!("^{}$", body))
    }

    fn timestamp(pattern: &'static str, body: String) -> Self {
        Self::compile(pattern, format!(r"^{}(?:\s+(?P<zone>\S+))?$", body))
    }

    fn compile(pattern: &'static str, regex: String) -> Self {
        Self {
            pattern,
            regex: Regex::new(&regex).expect("Invalid temporal format regex"),
        }
    }

    /// Try this format against the whole input
    fn attempt<'a>(&self, input: &'a str) -> ParseAttempt<'a> {
        let Some(caps) = self.regex.captures(input) else {
            return ParseAttempt::NoMatch;
        };
        match local_datetime(&caps) {
            Some(local) => ParseAttempt::Matched {
                local,
                zone: caps.name("zone").map(|m| m.as_str()),
            },
            // Right shape, but not a real calendar date or clock time
            None => ParseAttempt::NoMatch,
        }
    }
}

/// Outcome of a single format attempt
#[derive(Debug, PartialEq)]
enum ParseAttempt<'a> {
    Matched {
        local: NaiveDateTime,
        zone: Option<&'a str>,
    },
    NoMatch,
}

static DATE_LITERAL_FORMAT: Lazy<TemporalFormat> =
    Lazy::new(|| TemporalFormat::date("yyyyMMdd", format!("{}{}{}", YYYY, MM, DD)));

static DATE_FORMATS: Lazy<Vec<TemporalFormat>> = Lazy::new(|| {
    vec![
        TemporalFormat::date("yyyy-MM-dd", format!("{}-{}-{}", YYYY, MM, DD)),
        TemporalFormat::date("yy.MM.dd", format!(r"{}\.{}\.{}", YY, MM, DD)),
    ]
});

static TIMESTAMP_FORMATS: Lazy<Vec<TemporalFormat>> = Lazy::new(|| {
    vec![
        TemporalFormat::timestamp(
            "yy-MM-dd HH:mm:ss.SSS",
            format!(r"{}-{}-{} {}\.(?P<fraction>[0-9]{{3}})", YY, MM, DD, HH_MM_SS),
        ),
        TemporalFormat::timestamp(
            "yy-MM-dd HH:mm:ss.SSSSS",
            format!(r"{}-{}-{} {}\.(?P<fraction>[0-9]{{5}})", YY, MM, DD, HH_MM_SS),
        ),
        TemporalFormat::timestamp(
            "yyyy-MM-dd HH:mm:ss",
            format!("{}-{}-{} {}", YYYY, MM, DD, HH_MM_SS),
        ),
    ]
});

fn numeric_group(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name)?.as_str().parse().ok()
}

/// Build the wall-clock value from the named groups of a match
fn local_datetime(caps: &Captures<'_>) -> Option<NaiveDateTime> {
    let year_text = caps.name("year")?.as_str();
    let mut year: i32 = year_text.parse().ok()?;
    if year_text.len() == 2 {
        year += 2000;
    }
    let date = NaiveDate::from_ymd_opt(year, numeric_group(caps, "month")?, numeric_group(caps, "day")?)?;

    if caps.name("hour").is_none() {
        return date.and_hms_opt(0, 0, 0);
    }
    // Digits beyond the millisecond are truncated
    let millis = match caps.name("fraction") {
        Some(m) => m.as_str().get(..3)?.parse().ok()?,
        None => 0,
    };
    let time = NaiveTime::from_hms_milli_opt(
        numeric_group(caps, "hour")?,
        numeric_group(caps, "minute")?,
        numeric_group(caps, "second")?,
        millis,
    )?;
    Some(date.and_time(time))
}

/// Run the ordered format list, stopping at the first full match
fn first_match<'a>(formats: &[TemporalFormat], input: &'a str) -> ParseAttempt<'a> {
    for format in formats {
        match format.attempt(input) {
            ParseAttempt::NoMatch => {
                log::trace!("[TemporalParser] '{}' does not match {}", input, format.pattern);
            }
            matched => {
                log::trace!("[TemporalParser] '{}' matched {}", input, format.pattern);
                return matched;
            }
        }
    }
    ParseAttempt::NoMatch
}

/// Round to the whole second, carrying 500 ms and up
pub fn round_to_second(local: NaiveDateTime) -> Option<NaiveDateTime> {
    let millis = local.nanosecond() / 1_000_000;
    let whole = local.with_nanosecond(0)?;
    if millis >= 500 {
        whole.checked_add_signed(TimeDelta::seconds(1))
    } else {
        Some(whole)
    }
}

/// Operand accepted by [`parse_temporal`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemporalInput<'a> {
    Integer(i64),
    Text(&'a str),
}

/// Target accepted by [`parse_temporal`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalTarget {
    Date,
    Timestamp,
}

/// Interpret an integer or text operand as a DATE or TIMESTAMP instant
pub fn parse_temporal(
    input: TemporalInput<'_>,
    target: TemporalTarget,
    source_type: SqlType,
    config: &CastConfig,
) -> Result<Instant, CastError> {
    let zone = config.default_time_zone();
    match (input, target) {
        (TemporalInput::Integer(value), TemporalTarget::Date) => {
            parse_date_literal(value, source_type, zone)
        }
        (TemporalInput::Text(text), TemporalTarget::Date) => parse_date(text, source_type, zone),
        (TemporalInput::Text(text), TemporalTarget::Timestamp) => {
            parse_timestamp(text, source_type, zone)
        }
        (TemporalInput::Integer(_), TemporalTarget::Timestamp) => {
            Err(CastError::unsupported(source_type, SqlType::Timestamp))
        }
    }
}

/// Interpret an integer as an eight-digit `yyyyMMdd` date
pub fn parse_date_literal(value: i64, source_type: SqlType, zone: Tz) -> Result<Instant, CastError> {
    let digits = value.to_string();
    let date = match DATE_LITERAL_FORMAT.attempt(&digits) {
        ParseAttempt::Matched { local, .. } => local.date(),
        ParseAttempt::NoMatch => {
            return Err(CastError::date_parse(
                source_type,
                value,
                "expected an eight digit yyyyMMdd value",
            ))
        }
    };
    date_instant(date, zone).ok_or_else(|| {
        CastError::date_parse(source_type, value, format!("no start of day in {}", zone.name()))
    })
}

/// Interpret text as a date, trying each DATE format in order
pub fn parse_date(input: &str, source_type: SqlType, zone: Tz) -> Result<Instant, CastError> {
    match first_match(&DATE_FORMATS, input) {
        ParseAttempt::Matched { local, .. } => date_instant(local.date(), zone).ok_or_else(|| {
            CastError::date_parse(source_type, input, format!("no start of day in {}", zone.name()))
        }),
        ParseAttempt::NoMatch => {
            log::debug!("[TemporalParser] no DATE format matches '{}'", input);
            Err(CastError::date_parse(
                source_type,
                input,
                format!("expected one of {}", patterns(&DATE_FORMATS)),
            ))
        }
    }
}

/// Interpret text as a timestamp, trying each TIMESTAMP format in order.
///
/// Without a zone token the wall-clock time is placed in `default_zone`.
pub fn parse_timestamp(
    input: &str,
    source_type: SqlType,
    default_zone: Tz,
) -> Result<Instant, CastError> {
    let (local, zone_token) = match first_match(&TIMESTAMP_FORMATS, input) {
        ParseAttempt::Matched { local, zone } => (local, zone),
        ParseAttempt::NoMatch => {
            log::debug!("[TemporalParser] no TIMESTAMP format matches '{}'", input);
            return Err(CastError::timestamp_parse(
                source_type,
                input,
                format!("expected one of {}", patterns(&TIMESTAMP_FORMATS)),
            ));
        }
    };

    let zone = match zone_token {
        Some(token) => resolve_zone(token).ok_or_else(|| {
            CastError::timestamp_parse(source_type, input, format!("unknown time zone '{}'", token))
        })?,
        None => default_zone,
    };

    let zoned = localize(zone, &local).ok_or_else(|| {
        CastError::timestamp_parse(
            source_type,
            input,
            format!("local time {} does not exist in {}", local, zone.name()),
        )
    })?;

    // Round the instant, not the wall clock, so a carry can cross a DST transition
    let rounded = round_to_second(zoned.naive_utc()).ok_or_else(|| {
        CastError::timestamp_parse(source_type, input, "timestamp out of range after rounding")
    })?;
    Ok(Instant::from_datetime(&zone.from_utc_datetime(&rounded)))
}

fn date_instant(date: NaiveDate, zone: Tz) -> Option<Instant> {
    start_of_day(zone, date).map(|dt| Instant::from_datetime(&dt))
}

fn patterns(formats: &[TemporalFormat]) -> String {
    formats
        .iter()
        .map(|f| f.pattern)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Start of the local day of `instant`, in the instant's own offset
pub fn truncate_to_date(instant: &Instant) -> Option<Instant> {
    let offset: FixedOffset = instant.offset();
    let midnight = instant.to_datetime().date_naive().and_hms_opt(0, 0, 0)?;
    offset
        .from_local_datetime(&midnight)
        .single()
        .map(|dt| Instant::from_datetime(&dt))
}

/// `yyyy-MM-dd` in the instant's own offset
pub fn format_date(instant: &Instant) -> String {
    instant.to_datetime().format("%Y-%m-%d").to_string()
}

/// `HH:mm:ss` in the instant's own offset
pub fn format_time(instant: &Instant) -> String {
    instant.to_datetime().format("%H:%M:%S").to_string()
}

/// `yyyy-MM-dd HH:mm:ss` in the instant's own offset
pub fn format_timestamp(instant: &Instant) -> String {
    instant.to_datetime().format("%Y-%m-%d %H:%M:%S").to_string()
}
