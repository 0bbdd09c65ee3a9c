// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cast Expression Executor
//!
//! Executes CAST expressions over already-evaluated operands:
//! - Numeric widening and truncating narrowing (INTEGER, BIGINT, DOUBLE)
//! - Text to numeric, DATE and TIMESTAMP parsing
//! - Integer `yyyyMMdd` literals to DATE
//! - Any value to VARCHAR
//! - DATE <-> TIMESTAMP
//!
//! The capability table is an exhaustive match over (source, target), so a new
//! [`SqlType`] does not compile until every pair involving it has a rule.

use super::numeric_coercion::{self, IntegerWidth, Number};
use super::temporal_parser::{self, TemporalInput, TemporalTarget};
use crate::core::config::CastConfig;
use crate::core::error::{CastError, CastResult};
use crate::core::value::TypedValue;
use crate::query_api::definition::sql_type::SqlType;
use crate::query_api::expression::cast::CastRequest;

/// Conversion routine selected for a (source, target) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastRule {
    /// Same type, value passes through
    Identity,
    /// INTEGER/BIGINT/DOUBLE into an integer domain
    ToIntegerDomain(IntegerWidth),
    /// INTEGER/BIGINT into DOUBLE
    ToDouble,
    /// VARCHAR into an integer domain
    ParseInteger(IntegerWidth),
    /// VARCHAR into DOUBLE
    ParseDouble,
    /// Any value rendered as text
    ToVarchar,
    /// INTEGER/BIGINT `yyyyMMdd` or VARCHAR into DATE
    ParseTemporal(TemporalTarget),
    /// DATE re-tagged as TIMESTAMP
    DateToTimestamp,
    /// TIMESTAMP truncated to the start of its day
    TimestampToDate,
}

impl CastRule {
    /// Look up the rule for a pair, `None` when the cast is not supported
    pub fn resolve(source: SqlType, target: SqlType) -> Option<CastRule> {
        use CastRule::*;
        use SqlType as T;

        let rule = match source {
            T::Integer => match target {
                T::Integer => Identity,
                T::BigInt => ToIntegerDomain(IntegerWidth::Bits64),
                T::Double => ToDouble,
                T::Varchar => ToVarchar,
                T::Date => ParseTemporal(TemporalTarget::Date),
                T::Time | T::Timestamp => return None,
            },
            T::BigInt => match target {
                T::Integer => ToIntegerDomain(IntegerWidth::Bits32),
                T::BigInt => Identity,
                T::Double => ToDouble,
                T::Varchar => ToVarchar,
                T::Date => ParseTemporal(TemporalTarget::Date),
                T::Time | T::Timestamp => return None,
            },
            T::Double => match target {
                T::Integer => ToIntegerDomain(IntegerWidth::Bits32),
                T::BigInt => ToIntegerDomain(IntegerWidth::Bits64),
                T::Double => Identity,
                T::Varchar => ToVarchar,
                T::Date | T::Time | T::Timestamp => return None,
            },
            T::Varchar => match target {
                T::Integer => ParseInteger(IntegerWidth::Bits32),
                T::BigInt => ParseInteger(IntegerWidth::Bits64),
                T::Double => ParseDouble,
                T::Varchar => Identity,
                T::Date => ParseTemporal(TemporalTarget::Date),
                T::Timestamp => ParseTemporal(TemporalTarget::Timestamp),
                T::Time => return None,
            },
            T::Date => match target {
                T::Date => Identity,
                T::Timestamp => DateToTimestamp,
                T::Varchar => ToVarchar,
                T::Integer | T::BigInt | T::Double | T::Time => return None,
            },
            T::Time => match target {
                T::Time => Identity,
                T::Varchar => ToVarchar,
                T::Integer | T::BigInt | T::Double | T::Date | T::Timestamp => return None,
            },
            T::Timestamp => match target {
                T::Timestamp => Identity,
                T::Date => TimestampToDate,
                T::Varchar => ToVarchar,
                T::Integer | T::BigInt | T::Double | T::Time => return None,
            },
        };
        Some(rule)
    }
}

/// Evaluate a CAST request
pub fn cast(request: &CastRequest, config: &CastConfig) -> CastResult {
    CastExecutor::new(request.target_type, *config).execute(&request.operands)
}

/// Executor for CAST expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastExecutor {
    /// The target type to cast to
    target_type: SqlType,
    config: CastConfig,
}

impl CastExecutor {
    /// Create a new CastExecutor
    pub fn new(target_type: SqlType, config: CastConfig) -> Self {
        Self {
            target_type,
            config,
        }
    }

    /// Whether this CAST applies to the operand list at all
    #[inline]
    pub fn accept(&self, operands: &[TypedValue]) -> bool {
        operands.len() == 1
    }

    /// Cast the single operand to the target type
    pub fn execute(&self, operands: &[TypedValue]) -> CastResult {
        let value = match operands {
            [value] => value,
            _ => {
                return Err(CastError::InapplicableCast {
                    operand_count: operands.len(),
                })
            }
        };

        let source_type = value.sql_type();
        let rule = CastRule::resolve(source_type, self.target_type).ok_or_else(|| {
            log::debug!(
                "[CastExecutor] rejecting cast from {} to {}",
                source_type,
                self.target_type
            );
            CastError::unsupported(source_type, self.target_type)
        })?;

        self.cast_value(rule, value)
    }

    pub fn get_return_type(&self) -> SqlType {
        self.target_type
    }

    /// Perform the actual type conversion
    fn cast_value(&self, rule: CastRule, value: &TypedValue) -> CastResult {
        let source_type = value.sql_type();
        let unsupported = || CastError::unsupported(source_type, self.target_type);

        match rule {
            CastRule::Identity => Ok(value.clone()),

            // === Numeric conversions ===
            CastRule::ToIntegerDomain(width) => {
                let number = match value {
                    TypedValue::Integer(i) => Number::Integer(i64::from(*i)),
                    TypedValue::BigInt(l) => Number::Integer(*l),
                    TypedValue::Double(d) => Number::Double(*d),
                    _ => return Err(unsupported()),
                };
                let wide = numeric_coercion::to_integer_domain(number, width, source_type)?;
                Ok(integer_value(wide, width))
            }
            CastRule::ToDouble => {
                let wide = value.as_i64().ok_or_else(unsupported)?;
                Ok(TypedValue::Double(numeric_coercion::to_double(Number::Integer(wide))))
            }
            CastRule::ParseInteger(width) => {
                let text = value.as_str().ok_or_else(unsupported)?;
                let wide = numeric_coercion::parse_integer(text, width)?;
                Ok(integer_value(wide, width))
            }
            CastRule::ParseDouble => {
                let text = value.as_str().ok_or_else(unsupported)?;
                Ok(TypedValue::Double(numeric_coercion::parse_double(text)?))
            }

            // === Text conversions ===
            CastRule::ToVarchar => Ok(TypedValue::Varchar(render(value))),

            // === Temporal conversions ===
            CastRule::ParseTemporal(target) => {
                let input = match value {
                    TypedValue::Integer(i) => TemporalInput::Integer(i64::from(*i)),
                    TypedValue::BigInt(l) => TemporalInput::Integer(*l),
                    TypedValue::Varchar(s) => TemporalInput::Text(s),
                    _ => return Err(unsupported()),
                };
                let instant =
                    temporal_parser::parse_temporal(input, target, source_type, &self.config)?;
                Ok(match target {
                    TemporalTarget::Date => TypedValue::Date(instant),
                    TemporalTarget::Timestamp => TypedValue::Timestamp(instant),
                })
            }
            CastRule::DateToTimestamp => match value {
                TypedValue::Date(instant) => Ok(TypedValue::Timestamp(*instant)),
                _ => Err(unsupported()),
            },
            CastRule::TimestampToDate => match value {
                TypedValue::Timestamp(instant) => temporal_parser::truncate_to_date(instant)
                    .map(TypedValue::Date)
                    .ok_or_else(|| {
                        CastError::date_parse(source_type, instant, "no start of day in offset")
                    }),
                _ => Err(unsupported()),
            },
        }
    }
}

fn integer_value(value: i64, width: IntegerWidth) -> TypedValue {
    match width {
        // Range already checked by the coercion
        IntegerWidth::Bits32 => TypedValue::Integer(value as i32),
        IntegerWidth::Bits64 => TypedValue::BigInt(value),
    }
}

/// Text form of a value for CAST(... AS VARCHAR)
fn render(value: &TypedValue) -> String {
    match value {
        TypedValue::Integer(i) => i.to_string(),
        TypedValue::BigInt(l) => l.to_string(),
        TypedValue::Double(d) => d.to_string(),
        TypedValue::Varchar(s) => s.clone(),
        TypedValue::Date(instant) => temporal_parser::format_date(instant),
        TypedValue::Time(instant) => temporal_parser::format_time(instant),
        TypedValue::Timestamp(instant) => temporal_parser::format_timestamp(instant),
    }
}
