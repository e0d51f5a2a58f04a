// ABOUTME: Tests for training session file parsing used by batch load replay
// ABOUTME: Covers TRIMP and heart-rate entries, date ordering and error reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;

use chrono::NaiveDate;
use stride_engine::config::CapacityConfig;
use stride_engine::errors::ErrorCode;
use stride_engine::intelligence::algorithms::TrimpAlgorithm;
use stride_engine::intelligence::training_load::{BanisterModel, LoadState};
use stride_engine::sessions::{parse_sessions, read_sessions, SessionRecord};
use tempfile::NamedTempFile;

const SESSIONS: &str = r#"[
    { "date": "2025-03-03", "trimp": 40.0 },
    { "date": "2025-03-01", "duration_minutes": 60, "avg_hr": 150, "resting_hr": 60, "max_hr": 190 },
    { "date": "2025-03-02", "duration_minutes": 30, "avg_hr": 140 }
]"#;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

#[test]
fn test_parse_mixed_entries_sorted_by_date() {
    let defaults = CapacityConfig::default();
    let sessions = parse_sessions(SESSIONS, TrimpAlgorithm::BannisterMale, &defaults).unwrap();

    let dates: Vec<_> = sessions.iter().map(|s| s.date).collect();
    assert_eq!(dates, vec![date(1), date(2), date(3)]);

    assert!((sessions[0].trimp - 100.440_293).abs() < 1e-5);
    let expected_default_hr = TrimpAlgorithm::BannisterMale
        .calculate(30.0, 140.0, 60.0, 180.0)
        .unwrap();
    assert!((sessions[1].trimp - expected_default_hr).abs() < 1e-9);
    assert!((sessions[2].trimp - 40.0).abs() < f64::EPSILON);
}

#[test]
fn test_record_variants_are_detected() {
    let records: Vec<SessionRecord> = serde_json::from_str(SESSIONS).unwrap();
    assert!(matches!(records[0], SessionRecord::Impulse { .. }));
    assert!(matches!(
        records[2],
        SessionRecord::HeartRate {
            resting_hr: None,
            max_hr: None,
            ..
        }
    ));
}

#[test]
fn test_read_sessions_from_file_and_replay() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SESSIONS.as_bytes()).unwrap();

    let sessions = read_sessions(
        file.path(),
        TrimpAlgorithm::BannisterMale,
        &CapacityConfig::default(),
    )
    .unwrap();
    assert_eq!(sessions.len(), 3);

    let mut state = LoadState::new();
    BanisterModel::default().replay(&mut state, &sessions);
    assert_eq!(state.last_update_date, Some(date(3)));
    assert!(state.fitness > state.fatigue);
}

#[test]
fn test_missing_file_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_sessions(
        &dir.path().join("missing.json"),
        TrimpAlgorithm::BannisterMale,
        &CapacityConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let err = parse_sessions(
        r#"[{ "date": "yesterday", "trimp": 10 }]"#,
        TrimpAlgorithm::BannisterMale,
        &CapacityConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_inverted_heart_rate_entry_is_rejected() {
    let err = parse_sessions(
        r#"[{ "date": "2025-03-01", "duration_minutes": 45, "avg_hr": 150, "resting_hr": 190, "max_hr": 180 }]"#,
        TrimpAlgorithm::BannisterFemale,
        &CapacityConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}
