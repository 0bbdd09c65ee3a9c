// SPDX-License-Identifier: MIT OR Apache-2.0
//
// CAST function compatibility tests.

use super::common::{cast_utc, cast_with, init_logging, instant_in};
use chrono_tz::Tz;
use eventflux_cast::{
    cast, CastConfig, CastError, CastExecutor, CastRequest, Instant, SqlType, TypedValue,
};

// ============================================================================
// OPERAND ARITY
// ============================================================================

/// Two operands make the CAST inapplicable rather than a hard failure
#[test]
fn cast_operands_two_rejected() {
    init_logging();
    let operands = vec![TypedValue::Integer(1), TypedValue::varchar("aaa")];
    let executor = CastExecutor::new(SqlType::BigInt, CastConfig::default());
    assert!(!executor.accept(&operands));

    let err = cast(&CastRequest::new(operands, SqlType::BigInt), &CastConfig::default())
        .unwrap_err();
    assert!(err.is_inapplicable());
}

#[test]
fn cast_operands_none_rejected() {
    let err = cast(&CastRequest::new(vec![], SqlType::Date), &CastConfig::default()).unwrap_err();
    assert_eq!(err, CastError::InapplicableCast { operand_count: 0 });
}

// ============================================================================
// NUMERIC
// ============================================================================

#[test]
fn cast_integer_to_bigint() {
    assert_eq!(cast_utc(TypedValue::Integer(5), SqlType::BigInt), Ok(TypedValue::BigInt(5)));
}

#[test]
fn cast_integer_to_bigint_round_trips() {
    for value in [i32::MIN, -1, 0, 1, i32::MAX] {
        let wide = cast_utc(TypedValue::Integer(value), SqlType::BigInt).unwrap();
        assert_eq!(cast_utc(wide, SqlType::Integer), Ok(TypedValue::Integer(value)));
    }
}

#[test]
fn cast_double_to_bigint_truncates() {
    assert_eq!(cast_utc(TypedValue::Double(5.45), SqlType::BigInt), Ok(TypedValue::BigInt(5)));
    assert_eq!(cast_utc(TypedValue::Double(-5.45), SqlType::BigInt), Ok(TypedValue::BigInt(-5)));
}

#[test]
fn cast_double_to_bigint_overflow() {
    let err = cast_utc(TypedValue::Double(f64::MAX), SqlType::BigInt).unwrap_err();
    assert!(matches!(err, CastError::NumericOverflow { .. }));
    assert_eq!(err.source_type(), Some(SqlType::Double));
    assert_eq!(err.target_type(), Some(SqlType::BigInt));
}

// ============================================================================
// DATE
// ============================================================================

#[test]
fn cast_integer_to_date_yyyymmdd() {
    assert_eq!(
        cast_utc(TypedValue::Integer(20170521), SqlType::Date),
        Ok(TypedValue::Date(instant_in(Tz::UTC, 2017, 5, 21, 0, 0, 0)))
    );
}

#[test]
fn cast_integer_to_date_bad_layout() {
    let err = cast_utc(TypedValue::Integer(170521), SqlType::Date).unwrap_err();
    assert!(matches!(err, CastError::DateParseFailure { .. }));
    assert_eq!(err.input(), Some("170521"));
}

#[test]
fn cast_varchar_to_date_formats_converge() {
    let config = CastConfig::new(Tz::Europe__Berlin);
    let expected = TypedValue::Date(instant_in(Tz::Europe__Berlin, 2017, 5, 21, 0, 0, 0));

    assert_eq!(
        cast_with(config, TypedValue::Integer(20170521), SqlType::Date),
        Ok(expected.clone())
    );
    assert_eq!(
        cast_with(config, TypedValue::varchar("2017-05-21"), SqlType::Date),
        Ok(expected.clone())
    );
    assert_eq!(
        cast_with(config, TypedValue::varchar("17.05.21"), SqlType::Date),
        Ok(expected)
    );
}

#[test]
fn cast_varchar_to_date_unparseable() {
    let err = cast_utc(TypedValue::varchar("21/05/2017"), SqlType::Date).unwrap_err();
    match err {
        CastError::DateParseFailure {
            source_type,
            input,
            ..
        } => {
            assert_eq!(source_type, SqlType::Varchar);
            assert_eq!(input, "21/05/2017");
        }
        other => panic!("Expected DateParseFailure, got {:?}", other),
    }
}

// ============================================================================
// TIMESTAMP
// ============================================================================

#[test]
fn cast_varchar_to_timestamp_output_type() {
    let result = cast_utc(TypedValue::varchar("17-05-21 23:59:59.989"), SqlType::Timestamp).unwrap();
    assert_eq!(result.sql_type(), SqlType::Timestamp);
}

#[test]
fn cast_varchar_to_timestamp_millis_carry() {
    assert_eq!(
        cast_utc(TypedValue::varchar("2017-05-21 23:59:59.989"), SqlType::Timestamp),
        Ok(TypedValue::Timestamp(instant_in(Tz::UTC, 2017, 5, 22, 0, 0, 0)))
    );
}

#[test]
fn cast_varchar_to_timestamp_with_zone() {
    let result = cast_utc(
        TypedValue::varchar("2017-05-21 23:59:59.89079 PST"),
        SqlType::Timestamp,
    )
    .unwrap();
    let expected = instant_in(Tz::US__Pacific, 2017, 5, 22, 0, 0, 0);
    assert_eq!(result, TypedValue::Timestamp(expected));
}

#[test]
fn cast_varchar_to_timestamp_zone_overrides_default() {
    let config = CastConfig::new(Tz::Asia__Tokyo);
    let result = cast_with(
        config,
        TypedValue::varchar("2017-05-21 23:59:59.89079 PST"),
        SqlType::Timestamp,
    )
    .unwrap();
    assert_eq!(
        result,
        TypedValue::Timestamp(instant_in(Tz::US__Pacific, 2017, 5, 22, 0, 0, 0))
    );
}

#[test]
fn cast_varchar_to_timestamp_whole_seconds() {
    assert_eq!(
        cast_utc(TypedValue::varchar("2017-05-21 23:59:59"), SqlType::Timestamp),
        Ok(TypedValue::Timestamp(instant_in(Tz::UTC, 2017, 5, 21, 23, 59, 59)))
    );
}

#[test]
fn cast_varchar_to_timestamp_default_zone() {
    let config = CastConfig::new(Tz::Europe__Berlin);
    let result = cast_with(config, TypedValue::varchar("2017-05-21 23:59:59"), SqlType::Timestamp);
    assert_eq!(
        result,
        Ok(TypedValue::Timestamp(instant_in(Tz::Europe__Berlin, 2017, 5, 21, 23, 59, 59)))
    );
}

#[test]
fn cast_varchar_to_timestamp_carry_across_dst_start() {
    assert_eq!(
        cast_utc(TypedValue::varchar("2017-03-12 01:59:59.989 PST"), SqlType::Timestamp),
        Ok(TypedValue::Timestamp(instant_in(Tz::US__Pacific, 2017, 3, 12, 3, 0, 0)))
    );
}

#[test]
fn cast_varchar_to_timestamp_unknown_zone() {
    let err = cast_utc(TypedValue::varchar("2017-05-21 23:59:59 QQQ"), SqlType::Timestamp)
        .unwrap_err();
    assert!(matches!(err, CastError::TimestampParseFailure { .. }));
    assert_eq!(err.input(), Some("2017-05-21 23:59:59 QQQ"));
}

#[test]
fn cast_timestamp_to_varchar_round_trip() {
    let ts = cast_utc(TypedValue::varchar("2017-05-21 23:59:59"), SqlType::Timestamp).unwrap();
    let text = cast_utc(ts.clone(), SqlType::Varchar).unwrap();
    assert_eq!(text, TypedValue::varchar("2017-05-21 23:59:59"));
    assert_eq!(cast_utc(text, SqlType::Timestamp), Ok(ts));
}

// ============================================================================
// UNSUPPORTED
// ============================================================================

#[test]
fn cast_time_to_timestamp_not_supported() {
    let now = Instant::from_datetime(&chrono::Utc::now());
    let err = cast_utc(TypedValue::Time(now), SqlType::Timestamp).unwrap_err();
    assert_eq!(
        err,
        CastError::UnsupportedCastPair {
            source_type: SqlType::Time,
            target_type: SqlType::Timestamp,
        }
    );
}

// ============================================================================
// CONCURRENCY
// ============================================================================

#[test]
fn cast_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CastExecutor>();
    assert_send_sync::<CastRequest>();
    assert_send_sync::<CastError>();

    let config = CastConfig::new(Tz::US__Pacific);
    let expected = TypedValue::Timestamp(instant_in(Tz::US__Pacific, 2017, 5, 22, 0, 0, 0));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    cast_with(
                        config,
                        TypedValue::varchar("2017-05-21 23:59:59.989"),
                        SqlType::Timestamp,
                    )
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(expected.clone()));
        }
    });
}
