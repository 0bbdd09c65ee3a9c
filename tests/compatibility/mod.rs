// SPDX-License-Identifier: MIT OR Apache-2.0

#[path = "../common/mod.rs"]
pub mod common;

pub mod cast_functions;
