// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cast Error Types
//!
//! Every CAST either fully succeeds or fails with one of these errors.
//! Only [`CastError::InapplicableCast`] is a soft failure: the expression
//! declares itself a non-match and the caller may try another interpretation.

use crate::core::value::TypedValue;
use crate::query_api::definition::sql_type::SqlType;
use thiserror::Error;

/// Result of evaluating a CAST
pub type CastResult = Result<TypedValue, CastError>;

/// CAST failure taxonomy
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CastError {
    #[error("CAST requires exactly one operand, got {operand_count}")]
    InapplicableCast { operand_count: usize },

    #[error("Cast from {source_type} to {target_type} is not supported")]
    UnsupportedCastPair {
        source_type: SqlType,
        target_type: SqlType,
    },

    #[error("Numeric overflow casting {source_type} '{input}' to {target_type}")]
    NumericOverflow {
        source_type: SqlType,
        target_type: SqlType,
        input: String,
    },

    #[error("Cannot parse {source_type} '{input}' as {target_type}")]
    NumberParseFailure {
        source_type: SqlType,
        target_type: SqlType,
        input: String,
    },

    #[error("Cannot parse {source_type} '{input}' as DATE: {reason}")]
    DateParseFailure {
        source_type: SqlType,
        input: String,
        reason: String,
    },

    #[error("Cannot parse {source_type} '{input}' as TIMESTAMP: {reason}")]
    TimestampParseFailure {
        source_type: SqlType,
        input: String,
        reason: String,
    },
}

impl CastError {
    /// Create an unsupported cast pair error
    pub fn unsupported(source_type: SqlType, target_type: SqlType) -> Self {
        Self::UnsupportedCastPair {
            source_type,
            target_type,
        }
    }

    /// Create a numeric overflow error for the given raw input
    pub fn overflow(source_type: SqlType, target_type: SqlType, input: impl ToString) -> Self {
        Self::NumericOverflow {
            source_type,
            target_type,
            input: input.to_string(),
        }
    }

    /// Create a date parse error
    pub fn date_parse(source_type: SqlType, input: impl ToString, reason: impl Into<String>) -> Self {
        Self::DateParseFailure {
            source_type,
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a timestamp parse error
    pub fn timestamp_parse(
        source_type: SqlType,
        input: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::TimestampParseFailure {
            source_type,
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// True for the soft "wrong operand arity" failure
    #[inline]
    pub fn is_inapplicable(&self) -> bool {
        matches!(self, CastError::InapplicableCast { .. })
    }

    /// Type of the operand that failed to convert
    pub fn source_type(&self) -> Option<SqlType> {
        match self {
            CastError::InapplicableCast { .. } => None,
            CastError::UnsupportedCastPair { source_type, .. }
            | CastError::NumericOverflow { source_type, .. }
            | CastError::NumberParseFailure { source_type, .. }
            | CastError::DateParseFailure { source_type, .. }
            | CastError::TimestampParseFailure { source_type, .. } => Some(*source_type),
        }
    }

    /// Type the cast was asked to produce
    pub fn target_type(&self) -> Option<SqlType> {
        match self {
            CastError::InapplicableCast { .. } => None,
            CastError::UnsupportedCastPair { target_type, .. }
            | CastError::NumericOverflow { target_type, .. }
            | CastError::NumberParseFailure { target_type, .. } => Some(*target_type),
            CastError::DateParseFailure { .. } => Some(SqlType::Date),
            CastError::TimestampParseFailure { .. } => Some(SqlType::Timestamp),
        }
    }

    /// Raw input that could not be converted
    pub fn input(&self) -> Option<&str> {
        match self {
            CastError::InapplicableCast { .. } | CastError::UnsupportedCastPair { .. } => None,
            CastError::NumericOverflow { input, .. }
            | CastError::NumberParseFailure { input, .. }
            | CastError::DateParseFailure { input, .. }
            | CastError::TimestampParseFailure { input, .. } => Some(input),
        }
    }
}

/// Errors raised while loading a [`CastConfig`](crate::core::config::CastConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown time zone '{zone}' for '{config_key}'")]
    UnknownTimeZone { zone: String, config_key: String },
}
