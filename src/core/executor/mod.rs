// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod cast_executor;
pub mod numeric_coercion;
pub mod temporal_parser;
