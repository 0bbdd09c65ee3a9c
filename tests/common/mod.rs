// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]

use chrono::TimeZone;
use chrono_tz::Tz;
use eventflux_cast::{cast, CastConfig, CastRequest, CastResult, Instant, SqlType, TypedValue};

/// Route crate logs to the test output (RUST_LOG=trace to see format attempts)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Cast a single operand under the given configuration
pub fn cast_with(config: CastConfig, value: TypedValue, target_type: SqlType) -> CastResult {
    init_logging();
    cast(&CastRequest::single(value, target_type), &config)
}

/// Cast a single operand with UTC as the default zone
pub fn cast_utc(value: TypedValue, target_type: SqlType) -> CastResult {
    cast_with(CastConfig::default(), value, target_type)
}

/// Wall-clock instant in `zone`
pub fn instant_in(zone: Tz, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
    let dt = zone
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("unambiguous local time");
    Instant::from_datetime(&dt)
}
