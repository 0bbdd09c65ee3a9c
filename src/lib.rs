// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed SQL CAST evaluation.
//!
//! A CAST takes one already-evaluated operand tagged with its SQL type and
//! converts it to a target type, or fails with a typed [`CastError`].
//!
//! ```rust
//! use eventflux_cast::{cast, CastConfig, CastRequest, SqlType, TypedValue};
//!
//! let request = CastRequest::single(TypedValue::Double(-5.45), SqlType::BigInt);
//! assert_eq!(cast(&request, &CastConfig::default()), Ok(TypedValue::BigInt(-5)));
//! ```

pub mod core;
pub mod query_api;

pub use crate::core::config::CastConfig;
pub use crate::core::error::{CastError, CastResult, ConfigError};
pub use crate::core::executor::cast_executor::{cast, CastExecutor, CastRule};
pub use crate::core::value::{Instant, TypedValue};
pub use crate::query_api::definition::sql_type::SqlType;
pub use crate::query_api::expression::cast::CastRequest;
