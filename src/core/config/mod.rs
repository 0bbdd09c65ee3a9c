// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod cast_config;

pub use cast_config::CastConfig;
