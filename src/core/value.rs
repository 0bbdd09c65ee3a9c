// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed Values
//!
//! Operands and results of a CAST. Every value carries its SQL type tag
//! implicitly through its variant, so a value can never disagree with its tag.

use crate::query_api::definition::sql_type::SqlType;
use chrono::{DateTime, FixedOffset, Offset, TimeZone};
use std::fmt;

/// An absolute point in time together with the UTC offset it was resolved in.
///
/// Two instants are equal only when both the point in time and the offset
/// match: `2017-05-22T00:00:00-07:00` and `2017-05-22T07:00:00Z` are the same
/// moment but different instants. Use [`Instant::same_moment`] to compare the
/// point in time alone.
#[derive(Debug, Clone, Copy)]
pub struct Instant {
    datetime: DateTime<FixedOffset>,
}

impl Instant {
    /// Capture a zoned date-time, fixing its current offset
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let offset = datetime.offset().fix();
        Self {
            datetime: datetime.with_timezone(&offset),
        }
    }

    /// Milliseconds since the Unix epoch
    #[inline]
    pub fn epoch_millis(&self) -> i64 {
        self.datetime.timestamp_millis()
    }

    /// The resolved UTC offset
    #[inline]
    pub fn offset(&self) -> FixedOffset {
        *self.datetime.offset()
    }

    /// The instant as a chrono date-time in its own offset
    #[inline]
    pub fn to_datetime(&self) -> DateTime<FixedOffset> {
        self.datetime
    }

    /// True when both instants denote the same moment, whatever their offsets
    #[inline]
    pub fn same_moment(&self, other: &Instant) -> bool {
        self.datetime == other.datetime
    }
}

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        self.datetime == other.datetime && self.offset() == other.offset()
    }
}

impl Eq for Instant {}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z"))
    }
}

/// A value tagged with its SQL type
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Integer(i32),
    BigInt(i64),
    Double(f64),
    Varchar(String),
    /// Start-of-day instant in the zone the date was resolved in
    Date(Instant),
    Time(Instant),
    Timestamp(Instant),
}

impl TypedValue {
    /// Build a VARCHAR value
    pub fn varchar(text: impl Into<String>) -> Self {
        TypedValue::Varchar(text.into())
    }

    /// The SQL type tag of this value
    #[inline]
    pub const fn sql_type(&self) -> SqlType {
        match self {
            TypedValue::Integer(_) => SqlType::Integer,
            TypedValue::BigInt(_) => SqlType::BigInt,
            TypedValue::Double(_) => SqlType::Double,
            TypedValue::Varchar(_) => SqlType::Varchar,
            TypedValue::Date(_) => SqlType::Date,
            TypedValue::Time(_) => SqlType::Time,
            TypedValue::Timestamp(_) => SqlType::Timestamp,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(i) => Some(i64::from(*i)),
            TypedValue::BigInt(l) => Some(*l),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::Varchar(s) => Some(s),
            _ => None,
        }
    }

    /// The instant behind a DATE, TIME or TIMESTAMP value
    pub fn as_instant(&self) -> Option<Instant> {
        match self {
            TypedValue::Date(i) | TypedValue::Time(i) | TypedValue::Timestamp(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    /// Raw rendering used in diagnostics
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Integer(i) => write!(f, "{}", i),
            TypedValue::BigInt(l) => write!(f, "{}", l),
            TypedValue::Double(d) => write!(f, "{}", d),
            TypedValue::Varchar(s) => f.write_str(s),
            TypedValue::Date(i) | TypedValue::Time(i) | TypedValue::Timestamp(i) => {
                write!(f, "{}", i)
            }
        }
    }
}
