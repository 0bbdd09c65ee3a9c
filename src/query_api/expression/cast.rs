// SPDX-License-Identifier: MIT OR Apache-2.0

//! CAST Expression
//!
//! Represents a type conversion request: CAST(operand AS type)

use crate::core::value::TypedValue;
use crate::query_api::definition::sql_type::SqlType;

/// CAST request over already-evaluated operands
///
/// SQL syntax: `CAST(expression AS target_type)`
///
/// A well-formed request has exactly one operand. Requests with any other
/// operand count are still representable; the executor rejects them as
/// inapplicable instead of attempting a conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct CastRequest {
    /// The evaluated operands
    pub operands: Vec<TypedValue>,
    /// The target type to convert to
    pub target_type: SqlType,
}

impl CastRequest {
    /// Create a new CAST request
    pub fn new(operands: Vec<TypedValue>, target_type: SqlType) -> Self {
        Self {
            operands,
            target_type,
        }
    }

    /// Request with a single operand
    pub fn single(operand: TypedValue, target_type: SqlType) -> Self {
        Self::new(vec![operand], target_type)
    }
}
