// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numeric Coercion
//!
//! Conversions into the integer domains (INTEGER, BIGINT) and into DOUBLE.
//! Floating point sources are truncated toward zero, never rounded or floored,
//! and values outside the target range are rejected instead of wrapped.

use crate::core::error::CastError;
use crate::query_api::definition::sql_type::SqlType;

/// A numeric operand
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Double(f64),
}

/// Width of an integer target domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerWidth {
    /// INTEGER
    Bits32,
    /// BIGINT
    Bits64,
}

impl IntegerWidth {
    #[inline]
    pub const fn sql_type(&self) -> SqlType {
        match self {
            IntegerWidth::Bits32 => SqlType::Integer,
            IntegerWidth::Bits64 => SqlType::BigInt,
        }
    }

    #[inline]
    const fn bounds(&self) -> (i64, i64) {
        match self {
            IntegerWidth::Bits32 => (i32::MIN as i64, i32::MAX as i64),
            IntegerWidth::Bits64 => (i64::MIN, i64::MAX),
        }
    }
}

// 2^63 as f64. Every finite double strictly below it and at or above -2^63
// truncates to a representable i64.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Convert a number into an integer domain.
///
/// `source_type` is only used to label the overflow error.
pub fn to_integer_domain(
    value: Number,
    target: IntegerWidth,
    source_type: SqlType,
) -> Result<i64, CastError> {
    let overflow = || match value {
        Number::Integer(i) => CastError::overflow(source_type, target.sql_type(), i),
        Number::Double(d) => CastError::overflow(source_type, target.sql_type(), d),
    };

    let wide = match value {
        Number::Integer(i) => i,
        Number::Double(d) => {
            let truncated = d.trunc();
            // NaN fails both comparisons
            if !(truncated >= -TWO_POW_63 && truncated < TWO_POW_63) {
                return Err(overflow());
            }
            truncated as i64
        }
    };

    let (min, max) = target.bounds();
    if wide < min || wide > max {
        return Err(overflow());
    }
    Ok(wide)
}

/// Convert a number into DOUBLE. Integers beyond 2^53 lose precision.
#[inline]
pub fn to_double(value: Number) -> f64 {
    match value {
        Number::Integer(i) => i as f64,
        Number::Double(d) => d,
    }
}

/// Parse trimmed decimal text into an integer domain
pub fn parse_integer(text: &str, target: IntegerWidth) -> Result<i64, CastError> {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => to_integer_domain(Number::Integer(value), target, SqlType::Varchar)
            .map_err(|_| CastError::overflow(SqlType::Varchar, target.sql_type(), text)),
        Err(e) => match e.kind() {
            std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
                Err(CastError::overflow(SqlType::Varchar, target.sql_type(), text))
            }
            _ => Err(CastError::NumberParseFailure {
                source_type: SqlType::Varchar,
                target_type: target.sql_type(),
                input: text.to_string(),
            }),
        },
    }
}

/// Parse trimmed decimal text into DOUBLE
pub fn parse_double(text: &str) -> Result<f64, CastError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| CastError::NumberParseFailure {
            source_type: SqlType::Varchar,
            target_type: SqlType::Double,
            input: text.to_string(),
        })
}
