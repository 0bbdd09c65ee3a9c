// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod config;
pub mod error;
pub mod executor;
pub mod util;
pub mod value;
