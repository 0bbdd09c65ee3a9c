// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Cast Configuration
//!
//! Settings the cast evaluator needs from its environment. The only one today
//! is the default time zone, applied to DATE results and to timestamp literals
//! without a trailing zone token. It is passed explicitly to every cast so the
//! evaluation never depends on the process' local zone.
//!
//! ## TOML Layout
//!
//! ```toml
//! [cast]
//! default_time_zone = "US/Pacific"   # IANA id or a known abbreviation (PST, UTC, ...)
//! ```

use crate::core::error::ConfigError;
use crate::core::util::timezone::resolve_zone;
use chrono_tz::Tz;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TIME_ZONE_KEY: &str = "cast.default_time_zone";

/// Configuration for cast evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastConfig {
    default_time_zone: Tz,
}

impl CastConfig {
    /// Create a configuration with the given default zone
    #[inline]
    pub const fn new(default_time_zone: Tz) -> Self {
        Self { default_time_zone }
    }

    /// Replace the default zone
    #[inline]
    pub const fn with_default_time_zone(mut self, default_time_zone: Tz) -> Self {
        self.default_time_zone = default_time_zone;
        self
    }

    /// Zone used when a value carries no zone of its own
    #[inline]
    pub const fn default_time_zone(&self) -> Tz {
        self.default_time_zone
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfigFile = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(zone) = raw.cast.default_time_zone {
            let tz = resolve_zone(&zone).ok_or_else(|| ConfigError::UnknownTimeZone {
                zone: zone.clone(),
                config_key: DEFAULT_TIME_ZONE_KEY.to_string(),
            })?;
            config = config.with_default_time_zone(tz);
        }

        log::debug!(
            "[CastConfig] default time zone: {}",
            config.default_time_zone.name()
        );
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}

impl Default for CastConfig {
    /// UTC
    #[inline]
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfigFile {
    #[serde(default)]
    cast: RawCastSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCastSection {
    default_time_zone: Option<String>,
}
