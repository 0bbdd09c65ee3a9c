// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQL Type Tags
//!
//! The closed set of SQL types a value can carry into a CAST.

use std::fmt;

/// SQL type tag attached to every operand and cast target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    BigInt,
    /// 64-bit IEEE floating point
    Double,
    /// Variable-length text
    Varchar,
    /// Calendar date, normalized to start-of-day
    Date,
    /// Time of day
    Time,
    /// Absolute point in time
    Timestamp,
}

impl SqlType {
    /// All type tags, in declaration order
    pub const ALL: [SqlType; 7] = [
        SqlType::Integer,
        SqlType::BigInt,
        SqlType::Double,
        SqlType::Varchar,
        SqlType::Date,
        SqlType::Time,
        SqlType::Timestamp,
    ];

    /// Canonical SQL spelling of the type
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Double => "DOUBLE",
            SqlType::Varchar => "VARCHAR",
            SqlType::Date => "DATE",
            SqlType::Time => "TIME",
            SqlType::Timestamp => "TIMESTAMP",
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
