// ABOUTME: Integration tests for the periodization planner
// ABOUTME: Checks stage availability, week allocation invariants and start-stage recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stride_engine::constants::periodization::DEFAULT_TARGET_DISTANCE_KM;
use stride_engine::intelligence::periodization::{
    calculate_training_periods, is_stage_available, recommend_start_stage,
    standard_training_weeks, RiskLevel, TrainingDistribution, TrainingStagePhase,
};

const MARATHON_KM: f64 = 42.195;

#[test]
fn test_stage_availability() {
    for weeks in 0..30 {
        assert!(is_stage_available(TrainingStagePhase::Peak, weeks));
        assert!(!is_stage_available(TrainingStagePhase::Conversion, weeks));
        assert!(!is_stage_available(TrainingStagePhase::Taper, weeks));
        assert_eq!(is_stage_available(TrainingStagePhase::Build, weeks), weeks >= 3);
        assert_eq!(is_stage_available(TrainingStagePhase::Base, weeks), weeks >= 6);
    }
}

#[test]
fn test_standard_training_weeks() {
    assert_eq!(standard_training_weeks(MARATHON_KM), 18);
    assert_eq!(standard_training_weeks(42.0), 18);
    assert_eq!(standard_training_weeks(21.0975), 14);
    assert_eq!(standard_training_weeks(21.0), 14);
    assert_eq!(standard_training_weeks(10.0), 11);
    assert_eq!(standard_training_weeks(5.0), 9);
}

#[test]
fn test_distribution_always_sums_to_total_weeks() {
    for total in 0..=40 {
        for distance in [5.0, 10.0, 21.1, 21.2, MARATHON_KM] {
            for stage in TrainingStagePhase::ALL {
                let distribution = calculate_training_periods(total, distance, stage);
                assert_eq!(
                    distribution.total(),
                    total,
                    "{total} weeks, {distance} km, start {stage}: {distribution:?}"
                );
                assert_eq!(distribution.conversion_weeks, 0);
            }
        }
    }
}

#[test]
fn test_taper_policy() {
    let taper = |total, distance| {
        calculate_training_periods(total, distance, TrainingStagePhase::Peak).taper_weeks
    };
    assert_eq!(taper(2, MARATHON_KM), 0);
    assert_eq!(taper(3, MARATHON_KM), 1);
    assert_eq!(taper(4, MARATHON_KM), 2);
    assert_eq!(taper(4, 21.1), 1);
    assert_eq!(taper(16, 10.0), 1);
}

#[test]
fn test_eight_week_marathon_from_base() {
    let distribution = calculate_training_periods(8, 42.2, TrainingStagePhase::Base);
    assert_eq!(
        distribution,
        TrainingDistribution {
            conversion_weeks: 0,
            base_weeks: 2,
            build_weeks: 2,
            peak_weeks: 2,
            taper_weeks: 2,
        }
    );
}

#[test]
fn test_long_base_plan_splits_proportionally() {
    // 18 weeks, marathon: taper 2, remaining 16 -> base 6, build 4, peak 6
    let distribution = calculate_training_periods(18, MARATHON_KM, TrainingStagePhase::Base);
    assert_eq!(distribution.base_weeks, 6);
    assert_eq!(distribution.build_weeks, 4);
    assert_eq!(distribution.peak_weeks, 6);
    assert_eq!(distribution.taper_weeks, 2);
}

#[test]
fn test_base_split_handles_largest_week_counts() {
    for total in [u32::MAX / 2, u32::MAX] {
        let distribution = calculate_training_periods(total, 42.2, TrainingStagePhase::Base);
        let remaining = u64::from(total - 2);

        assert_eq!(u64::from(distribution.base_weeks), remaining * 4 / 10);
        assert_eq!(u64::from(distribution.build_weeks), remaining * 3 / 10);
        assert_eq!(distribution.taper_weeks, 2);
        assert_eq!(distribution.total(), total);
    }
}

#[test]
fn test_short_base_plans() {
    // remaining 4 -> base 1, build 1, peak 2
    let distribution = calculate_training_periods(5, 10.0, TrainingStagePhase::Base);
    assert_eq!(
        (distribution.base_weeks, distribution.build_weeks, distribution.peak_weeks),
        (1, 1, 2)
    );

    // remaining 2 -> all base
    let distribution = calculate_training_periods(3, 10.0, TrainingStagePhase::Base);
    assert_eq!(
        (distribution.base_weeks, distribution.build_weeks, distribution.peak_weeks),
        (2, 0, 0)
    );
}

#[test]
fn test_build_start_rounds_build_up() {
    // 10 weeks, half marathon: taper 1, remaining 9 -> build 5, peak 4
    let distribution = calculate_training_periods(10, 21.1, TrainingStagePhase::Build);
    assert_eq!(distribution.build_weeks, 5);
    assert_eq!(distribution.peak_weeks, 4);
    assert_eq!(distribution.base_weeks, 0);

    let distribution = calculate_training_periods(1, 21.1, TrainingStagePhase::Build);
    assert_eq!(distribution.build_weeks, 1);
    assert_eq!(distribution.peak_weeks, 0);
}

#[test]
fn test_invalid_start_phases_fall_back_to_peak() {
    for stage in [TrainingStagePhase::Conversion, TrainingStagePhase::Taper] {
        let distribution = calculate_training_periods(9, MARATHON_KM, stage);
        assert_eq!(distribution.peak_weeks, 7);
        assert_eq!(distribution.base_weeks + distribution.build_weeks, 0);
    }
}

#[test]
fn test_too_short_recommendation() {
    for weeks in [0, 1] {
        let recommendation = recommend_start_stage(weeks, MARATHON_KM);
        assert_eq!(recommendation.recommended_stage, TrainingStagePhase::Peak);
        assert_eq!(recommendation.risk_level, RiskLevel::High);
        assert!(recommendation.is_too_short());
        assert!(recommendation.alternatives.is_empty());
        assert!(recommendation.reason.contains("too short"));
        assert_eq!(recommendation.distribution.total(), weeks);
    }
}

#[test]
fn test_two_week_recommendation() {
    let recommendation = recommend_start_stage(2, DEFAULT_TARGET_DISTANCE_KM);
    assert_eq!(recommendation.recommended_stage, TrainingStagePhase::Peak);
    assert_eq!(recommendation.risk_level, RiskLevel::Medium);
    assert!(!recommendation.is_too_short());
    assert!(recommendation.alternatives.is_empty());
}

#[test]
fn test_build_recommendation_alternatives() {
    let recommendation = recommend_start_stage(4, DEFAULT_TARGET_DISTANCE_KM);
    assert_eq!(recommendation.recommended_stage, TrainingStagePhase::Build);
    assert_eq!(recommendation.risk_level, RiskLevel::Low);
    let stages: Vec<_> = recommendation.alternatives.iter().map(|a| a.stage).collect();
    assert_eq!(stages, vec![TrainingStagePhase::Peak]);
    assert_eq!(recommendation.alternatives[0].risk_level, RiskLevel::Medium);

    let recommendation = recommend_start_stage(8, DEFAULT_TARGET_DISTANCE_KM);
    let base = recommendation
        .alternatives
        .iter()
        .find(|a| a.stage == TrainingStagePhase::Base)
        .unwrap();
    assert_eq!(base.risk_level, RiskLevel::Medium);

    let recommendation = recommend_start_stage(11, DEFAULT_TARGET_DISTANCE_KM);
    assert_eq!(recommendation.recommended_stage, TrainingStagePhase::Build);
    let base = recommendation
        .alternatives
        .iter()
        .find(|a| a.stage == TrainingStagePhase::Base)
        .unwrap();
    assert_eq!(base.risk_level, RiskLevel::Low);
}

#[test]
fn test_base_recommendation() {
    let recommendation = recommend_start_stage(16, MARATHON_KM);
    assert_eq!(recommendation.recommended_stage, TrainingStagePhase::Base);
    assert_eq!(recommendation.risk_level, RiskLevel::Low);
    assert!(recommendation.is_full_marathon);
    assert_eq!(recommendation.weeks_remaining, 16);
    assert_eq!(recommendation.distribution.total(), 16);
    assert_eq!(recommendation.distribution.taper_weeks, 2);

    assert_eq!(recommendation.alternatives.len(), 1);
    assert_eq!(recommendation.alternatives[0].stage, TrainingStagePhase::Build);
    assert_eq!(recommendation.alternatives[0].risk_level, RiskLevel::Medium);
}

#[test]
fn test_default_distance_is_not_full_marathon() {
    let recommendation = recommend_start_stage(12, DEFAULT_TARGET_DISTANCE_KM);
    assert!(!recommendation.is_full_marathon);
    assert_eq!(recommendation.distribution.taper_weeks, 1);
}

#[test]
fn test_stage_order_and_helpers() {
    assert!(TrainingStagePhase::Conversion < TrainingStagePhase::Base);
    assert!(TrainingStagePhase::Peak < TrainingStagePhase::Taper);
    assert_eq!(TrainingStagePhase::Base.next(), Some(TrainingStagePhase::Build));
    assert_eq!(TrainingStagePhase::Taper.next(), None);
    assert_eq!(TrainingStagePhase::Peak.to_string(), "Peak");
    assert!(!TrainingStagePhase::Base.focus().is_empty());
}

#[test]
fn test_recommendation_serializes_snake_case() {
    let recommendation = recommend_start_stage(16, MARATHON_KM);
    let json = serde_json::to_value(&recommendation).unwrap();

    assert_eq!(json["recommended_stage"], "base");
    assert_eq!(json["risk_level"], "low");
    assert_eq!(json["distribution"]["taper_weeks"], 2);
    assert_eq!(json["alternatives"][0]["stage"], "build");
}
