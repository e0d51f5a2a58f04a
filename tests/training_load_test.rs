// ABOUTME: Integration tests for the Banister training load simulator and TRIMP
// ABOUTME: Covers every update branch, non-mutating projections, replay and status interpretation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Days, NaiveDate};
use stride_engine::config::LoadModelConfig;
use stride_engine::errors::ErrorCode;
use stride_engine::intelligence::algorithms::{calculate_trimp, TrimpAlgorithm};
use stride_engine::intelligence::training_load::{
    recommend_recovery_days, BanisterModel, LoadState, LoadTransition, TrainingSession,
    TrainingStatus,
};

const EPS: f64 = 1e-9;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

#[test]
fn test_first_update_seeds_both_accumulators() {
    let mut state = LoadState::new();
    let transition = state.update(day(1), 50.0);

    assert_eq!(transition, LoadTransition::Initialized);
    assert!((state.fitness - 50.0).abs() < EPS);
    assert!((state.fatigue - 50.0).abs() < EPS);
    assert_eq!(state.last_update_date, Some(day(1)));
}

#[test]
fn test_rest_day_decays_without_advancing_date() {
    let mut state = LoadState::new();
    state.update(day(1), 50.0);
    let transition = state.update(day(2), 0.0);

    assert_eq!(transition, LoadTransition::Decayed { days: 1 });
    assert!((state.fitness - 48.823_584).abs() < 1e-5);
    assert!((state.fatigue - 45.241_871).abs() < 1e-5);
    assert_eq!(state.last_update_date, Some(day(1)));

    let prediction = state.performance();
    assert!((prediction.performance - 58.339_843).abs() < 1e-5);
}

#[test]
fn test_repeated_rest_updates_decay_the_same_interval_again() {
    let mut state = LoadState::new();
    state.update(day(1), 50.0);
    state.update(day(2), 0.0);
    state.update(day(2), 0.0);

    let expected_fitness = 50.0 * (-2.0_f64 / 42.0).exp();
    let expected_fatigue = 50.0 * (-2.0_f64 / 10.0).exp();
    assert!((state.fitness - expected_fitness).abs() < 1e-9);
    assert!((state.fatigue - expected_fatigue).abs() < 1e-9);
    assert_eq!(state.last_update_date, Some(day(1)));
}

#[test]
fn test_fitness_decays_to_one_over_e_after_one_time_constant() {
    let mut state = LoadState::new();
    state.update(day(1), 100.0);
    let later = day(1).checked_add_days(Days::new(42)).unwrap();
    let transition = state.update(later, 0.0);

    assert_eq!(transition, LoadTransition::Decayed { days: 42 });
    assert!((state.fitness - 100.0 * (-1.0_f64).exp()).abs() < EPS);
    assert!((state.fatigue - 100.0 * (-4.2_f64).exp()).abs() < EPS);
    assert_eq!(state.last_update_date, Some(day(1)));
}

#[test]
fn test_training_after_gap_decays_then_loads() {
    let mut state = LoadState::new();
    state.update(day(1), 50.0);
    let transition = state.update(day(3), 20.0);

    assert_eq!(transition, LoadTransition::DecayedAndLoaded { days: 2 });
    let expected_fitness = 50.0_f64.mul_add((-2.0_f64 / 42.0).exp(), 20.0);
    let expected_fatigue = 50.0_f64.mul_add((-2.0_f64 / 10.0).exp(), 20.0);
    assert!((state.fitness - expected_fitness).abs() < EPS);
    assert!((state.fatigue - expected_fatigue).abs() < EPS);
    assert_eq!(state.last_update_date, Some(day(3)));
}

#[test]
fn test_same_day_sessions_add_without_decay() {
    let mut state = LoadState::new();
    state.update(day(5), 50.0);
    let transition = state.update(day(5), 30.0);

    assert_eq!(transition, LoadTransition::SameDayLoad);
    assert!((state.fitness - 80.0).abs() < EPS);
    assert!((state.fatigue - 80.0).abs() < EPS);
    assert_eq!(state.last_update_date, Some(day(5)));
}

#[test]
fn test_same_day_without_training_is_noop() {
    let mut state = LoadState::new();
    state.update(day(5), 50.0);
    let before = state;

    assert_eq!(state.update(day(5), 0.0), LoadTransition::Unchanged);
    assert_eq!(state, before);
}

#[test]
fn test_backdated_session_never_moves_date_backwards() {
    let mut state = LoadState::new();
    state.update(day(10), 40.0);
    let transition = state.update(day(8), 10.0);

    assert_eq!(transition, LoadTransition::SameDayLoad);
    assert!((state.fitness - 50.0).abs() < EPS);
    assert_eq!(state.last_update_date, Some(day(10)));
}

#[test]
fn test_projection_does_not_mutate_state() {
    let mut state = LoadState::new();
    state.update(day(1), 60.0);
    let before = state;

    let projected = state.performance_for_date(day(15));
    assert_eq!(state, before);

    let expected_fitness = 60.0 * (-14.0_f64 / 42.0).exp();
    let expected_fatigue = 60.0 * (-14.0_f64 / 10.0).exp();
    assert_eq!(projected.date, Some(day(15)));
    assert!((projected.fitness - expected_fitness).abs() < EPS);
    assert!((projected.fatigue - expected_fatigue).abs() < EPS);
    assert!(
        (projected.performance - (100.0 + expected_fitness - 2.0 * expected_fatigue)).abs() < EPS
    );
}

#[test]
fn test_projection_without_history_returns_baseline() {
    let state = LoadState::new();
    let projected = state.performance_for_date(day(20));

    assert!((projected.performance - 100.0).abs() < EPS);
    assert!(projected.form.abs() < EPS);
    assert_eq!(projected.status, TrainingStatus::Fresh);
}

#[test]
fn test_projection_before_last_update_is_not_decayed() {
    let mut state = LoadState::new();
    state.update(day(10), 30.0);
    let projected = state.performance_for_date(day(3));

    assert!((projected.fitness - 30.0).abs() < EPS);
    assert!((projected.fatigue - 30.0).abs() < EPS);
}

#[test]
fn test_reset_clears_everything() {
    let mut state = LoadState::new();
    state.update(day(1), 75.0);
    state.reset();

    assert_eq!(state, LoadState::default());
    assert_eq!(state.update(day(2), 10.0), LoadTransition::Initialized);
}

#[test]
fn test_replay_matches_sequential_updates() {
    let sessions = [
        TrainingSession { date: day(1), trimp: 60.0 },
        TrainingSession { date: day(2), trimp: 45.0 },
        TrainingSession { date: day(2), trimp: 15.0 },
        TrainingSession { date: day(5), trimp: 90.0 },
    ];
    let model = BanisterModel::default();

    let mut replayed = LoadState::new();
    model.replay(&mut replayed, &sessions);

    let mut manual = LoadState::new();
    for session in &sessions {
        manual.update(session.date, session.trimp);
    }

    assert_eq!(replayed, manual);
}

#[test]
fn test_configured_model_changes_gains() {
    let config = LoadModelConfig {
        k_fatigue: 1.0,
        ..LoadModelConfig::default()
    };
    let model = config.model();

    let mut state = LoadState::new();
    model.update(&mut state, day(1), 40.0);
    let prediction = model.performance(&state);

    assert!((prediction.performance - 100.0).abs() < EPS);
}

#[test]
fn test_training_status_bands() {
    assert_eq!(TrainingStatus::from_form(-25.0), TrainingStatus::Overreaching);
    assert_eq!(TrainingStatus::from_form(-10.0), TrainingStatus::Productive);
    assert_eq!(TrainingStatus::from_form(-0.1), TrainingStatus::Productive);
    assert_eq!(TrainingStatus::from_form(0.0), TrainingStatus::Fresh);
    assert_eq!(TrainingStatus::from_form(10.0), TrainingStatus::Fresh);
    assert_eq!(TrainingStatus::from_form(10.5), TrainingStatus::Detraining);
}

#[test]
fn test_recovery_days_by_form() {
    assert_eq!(recommend_recovery_days(-30.0), 5);
    assert_eq!(recommend_recovery_days(-16.0), 3);
    assert_eq!(recommend_recovery_days(-12.0), 2);
    assert_eq!(recommend_recovery_days(-5.0), 1);
    assert_eq!(recommend_recovery_days(5.0), 0);
}

#[test]
fn test_trimp_reference_session() {
    let trimp = calculate_trimp(3_600.0, 150.0, 60.0, 190.0).unwrap();
    assert!((trimp - 100.440_293).abs() < 1e-5);

    let female = TrimpAlgorithm::BannisterFemale
        .calculate(60.0, 150.0, 60.0, 190.0)
        .unwrap();
    assert!((female - 84.477_610).abs() < 1e-5);
}

#[test]
fn test_trimp_at_resting_heart_rate_is_zero() {
    let trimp = calculate_trimp(1_800.0, 60.0, 60.0, 190.0).unwrap();
    assert!(trimp.abs() < EPS);
}

#[test]
fn test_trimp_strictly_increases_with_average_heart_rate() {
    for algorithm in [TrimpAlgorithm::BannisterMale, TrimpAlgorithm::BannisterFemale] {
        let mut previous = algorithm.calculate(60.0, 60.0, 60.0, 190.0).unwrap();
        for hr in 61..=190 {
            let trimp = algorithm.calculate(60.0, f64::from(hr), 60.0, 190.0).unwrap();
            assert!(trimp > previous, "{algorithm:?} at {hr} bpm: {trimp} <= {previous}");
            previous = trimp;
        }
    }
}

#[test]
fn test_trimp_rejects_inverted_heart_rate_bounds() {
    let err = calculate_trimp(3_600.0, 150.0, 190.0, 190.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let err = calculate_trimp(3_600.0, 150.0, 200.0, 190.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_trimp_algorithm_parsing() {
    assert_eq!(
        "female".parse::<TrimpAlgorithm>().unwrap(),
        TrimpAlgorithm::BannisterFemale
    );
    assert_eq!(
        "Bannister_Male".parse::<TrimpAlgorithm>().unwrap(),
        TrimpAlgorithm::BannisterMale
    );
    let err = "edwards".parse::<TrimpAlgorithm>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
