// ABOUTME: Periodization planner choosing a start stage and splitting weeks across training phases
// ABOUTME: Scores start-stage risk from weeks remaining and allocates base/build/peak/taper weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Periodization Planner
//!
//! Given the weeks remaining until a race and its distance, the planner picks
//! the phase to start training from, rates the risk of that choice, offers
//! alternatives, and allocates the weeks across phases.
//!
//! Phases run in a fixed order: conversion, base, build, peak, taper.
//! Conversion and taper are never valid start phases. Every
//! [`TrainingDistribution`] produced here sums exactly to the requested
//! number of weeks.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::periodization::{
    BASE_LOW_RISK_WEEKS, BASE_MIN_WEEKS, BASE_RECOMMENDED_WEEKS, BASE_SHARE_TENTHS,
    BUILD_MIN_WEEKS, BUILD_SHARE_TENTHS, FULL_MARATHON_TAPER_WEEKS, FULL_MARATHON_THRESHOLD_KM,
    HALF_CLASS_KM, MARATHON_CLASS_KM, MID_SPLIT_BASE_WEEKS, MIN_PLAN_WEEKS,
    PROPORTIONAL_SPLIT_WEEKS, SHORT_PLAN_WEEKS, STANDARD_TAPER_WEEKS, STANDARD_WEEKS_10K,
    STANDARD_WEEKS_HALF, STANDARD_WEEKS_MARATHON, STANDARD_WEEKS_SHORT, TEN_K_CLASS_KM,
};

/// Training phases in periodization order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStagePhase {
    /// Transition from unstructured running into a plan
    Conversion,
    /// Aerobic foundation and volume
    Base,
    /// Threshold and race-specific work
    Build,
    /// Highest-intensity sharpening
    Peak,
    /// Volume reduction before race day
    Taper,
}

impl TrainingStagePhase {
    /// All phases in periodization order
    pub const ALL: [Self; 5] = [
        Self::Conversion,
        Self::Base,
        Self::Build,
        Self::Peak,
        Self::Taper,
    ];

    /// The phase that follows this one, if any
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Conversion => Some(Self::Base),
            Self::Base => Some(Self::Build),
            Self::Build => Some(Self::Peak),
            Self::Peak => Some(Self::Taper),
            Self::Taper => None,
        }
    }

    /// Human-readable phase name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Conversion => "Conversion",
            Self::Base => "Base",
            Self::Build => "Build",
            Self::Peak => "Peak",
            Self::Taper => "Taper",
        }
    }

    /// Training emphasis of the phase
    #[must_use]
    pub const fn focus(self) -> &'static str {
        match self {
            Self::Conversion => "Establish a consistent running habit",
            Self::Base => "Aerobic endurance and easy volume",
            Self::Build => "Threshold work and race-specific endurance",
            Self::Peak => "Race-pace sharpening at peak intensity",
            Self::Taper => "Reduced volume to arrive fresh on race day",
        }
    }
}

impl fmt::Display for TrainingStagePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Risk of starting a plan from a given phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Enough time for the phase
    Low,
    /// Workable with compromises
    Medium,
    /// Likely to compromise the race
    High,
}

impl RiskLevel {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weeks allotted to each phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrainingDistribution {
    /// Conversion weeks
    pub conversion_weeks: u32,
    /// Base weeks
    pub base_weeks: u32,
    /// Build weeks
    pub build_weeks: u32,
    /// Peak weeks
    pub peak_weeks: u32,
    /// Taper weeks
    pub taper_weeks: u32,
}

impl TrainingDistribution {
    /// Sum of all phase weeks
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.conversion_weeks + self.base_weeks + self.build_weeks + self.peak_weeks + self.taper_weeks
    }

    /// Weeks allotted to `stage`
    #[must_use]
    pub const fn weeks_for(&self, stage: TrainingStagePhase) -> u32 {
        match stage {
            TrainingStagePhase::Conversion => self.conversion_weeks,
            TrainingStagePhase::Base => self.base_weeks,
            TrainingStagePhase::Build => self.build_weeks,
            TrainingStagePhase::Peak => self.peak_weeks,
            TrainingStagePhase::Taper => self.taper_weeks,
        }
    }
}

/// A start phase offered next to the recommended one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageAlternative {
    /// Alternative start phase
    pub stage: TrainingStagePhase,
    /// Risk of starting from it
    pub risk_level: RiskLevel,
    /// Who the alternative suits
    pub suitability: String,
    /// What starting from it means for the plan
    pub description: String,
}

/// Start-phase recommendation with its distribution and alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRecommendation {
    /// Phase to start from
    pub recommended_stage: TrainingStagePhase,
    /// Risk of the recommended start
    pub risk_level: RiskLevel,
    /// Why this phase was chosen
    pub reason: String,
    /// Weeks until race day
    pub weeks_remaining: u32,
    /// Other viable start phases
    pub alternatives: Vec<StageAlternative>,
    /// Weeks per phase when starting from the recommended phase
    pub distribution: TrainingDistribution,
    /// Whether the target is longer than a half marathon
    pub is_full_marathon: bool,
}

impl StageRecommendation {
    /// Fewer than two weeks remain
    #[must_use]
    pub const fn is_too_short(&self) -> bool {
        self.weeks_remaining < MIN_PLAN_WEEKS
    }
}

/// Whether a plan can start from `stage` with `weeks_remaining` weeks left
#[must_use]
pub const fn is_stage_available(stage: TrainingStagePhase, weeks_remaining: u32) -> bool {
    match stage {
        TrainingStagePhase::Peak => true,
        TrainingStagePhase::Build => weeks_remaining >= BUILD_MIN_WEEKS,
        TrainingStagePhase::Base => weeks_remaining >= BASE_MIN_WEEKS,
        TrainingStagePhase::Conversion | TrainingStagePhase::Taper => false,
    }
}

/// Typical full plan length for a race of `distance_km`
#[must_use]
pub fn standard_training_weeks(distance_km: f64) -> u32 {
    if distance_km >= MARATHON_CLASS_KM {
        STANDARD_WEEKS_MARATHON
    } else if distance_km >= HALF_CLASS_KM {
        STANDARD_WEEKS_HALF
    } else if distance_km >= TEN_K_CLASS_KM {
        STANDARD_WEEKS_10K
    } else {
        STANDARD_WEEKS_SHORT
    }
}

fn taper_weeks(total_weeks: u32, is_full_marathon: bool) -> u32 {
    if total_weeks < SHORT_PLAN_WEEKS {
        0
    } else if total_weeks == SHORT_PLAN_WEEKS || !is_full_marathon {
        STANDARD_TAPER_WEEKS
    } else {
        FULL_MARATHON_TAPER_WEEKS
    }
}

/// `floor(weeks * tenths / 10)` without overflowing for any `u32` week count
const fn share_of(weeks: u32, tenths: u32) -> u32 {
    weeks / 10 * tenths + weeks % 10 * tenths / 10
}

/// `(base, build, peak)` weeks for a base start with `remaining` non-taper weeks
fn base_start_split(remaining: u32) -> (u32, u32, u32) {
    if remaining >= PROPORTIONAL_SPLIT_WEEKS {
        let base = share_of(remaining, BASE_SHARE_TENTHS);
        let build = share_of(remaining, BUILD_SHARE_TENTHS);
        (base, build, remaining - base - build)
    } else if remaining >= BASE_MIN_WEEKS {
        let build = (remaining - MID_SPLIT_BASE_WEEKS).div_ceil(2);
        (
            MID_SPLIT_BASE_WEEKS,
            build,
            remaining - MID_SPLIT_BASE_WEEKS - build,
        )
    } else if remaining >= BUILD_MIN_WEEKS {
        (1, 1, remaining - 2)
    } else {
        (remaining, 0, 0)
    }
}

/// Allocate `total_weeks` across phases when starting from `start_from`
///
/// The taper takes 0 weeks for plans of two weeks or fewer, 1 week for
/// three-week plans, and otherwise 2 weeks for full marathons (over 21.1 km)
/// or 1 week for shorter races. The remaining weeks are split by start phase.
/// Conversion and taper starts fall back to peak. The result always sums to
/// `total_weeks`.
#[must_use]
pub fn calculate_training_periods(
    total_weeks: u32,
    target_distance_km: f64,
    start_from: TrainingStagePhase,
) -> TrainingDistribution {
    let is_full_marathon = target_distance_km > FULL_MARATHON_THRESHOLD_KM;
    let taper = taper_weeks(total_weeks, is_full_marathon);
    let remaining = total_weeks.saturating_sub(taper);

    let (base, build, peak) = match start_from {
        TrainingStagePhase::Base => base_start_split(remaining),
        TrainingStagePhase::Build => {
            let build = remaining.div_ceil(2);
            (0, build, remaining - build)
        }
        TrainingStagePhase::Peak | TrainingStagePhase::Conversion | TrainingStagePhase::Taper => {
            (0, 0, remaining)
        }
    };

    TrainingDistribution {
        conversion_weeks: 0,
        base_weeks: base,
        build_weeks: build,
        peak_weeks: peak,
        taper_weeks: taper,
    }
}

fn alternative(
    stage: TrainingStagePhase,
    risk_level: RiskLevel,
    suitability: &str,
    description: &str,
) -> StageAlternative {
    StageAlternative {
        stage,
        risk_level,
        suitability: suitability.to_owned(),
        description: description.to_owned(),
    }
}

fn alternatives_for(recommended: TrainingStagePhase, weeks_remaining: u32) -> Vec<StageAlternative> {
    let mut alternatives = Vec::new();
    if weeks_remaining < MIN_PLAN_WEEKS {
        return alternatives;
    }

    match recommended {
        TrainingStagePhase::Build => {
            alternatives.push(alternative(
                TrainingStagePhase::Peak,
                RiskLevel::Medium,
                "Runners already training consistently at volume",
                "Skip build and go straight to race-specific sharpening",
            ));
            if is_stage_available(TrainingStagePhase::Base, weeks_remaining) {
                let risk = if weeks_remaining >= BASE_LOW_RISK_WEEKS {
                    RiskLevel::Low
                } else {
                    RiskLevel::Medium
                };
                alternatives.push(alternative(
                    TrainingStagePhase::Base,
                    risk,
                    "Runners returning from a break or with low recent mileage",
                    "Rebuild aerobic volume first at the cost of shorter build and peak phases",
                ));
            }
        }
        TrainingStagePhase::Peak => {
            if is_stage_available(TrainingStagePhase::Build, weeks_remaining) {
                alternatives.push(alternative(
                    TrainingStagePhase::Build,
                    RiskLevel::Low,
                    "Runners who want some threshold work before peaking",
                    "Spend part of the remaining time on build before sharpening",
                ));
            }
            if is_stage_available(TrainingStagePhase::Base, weeks_remaining) {
                alternatives.push(alternative(
                    TrainingStagePhase::Base,
                    RiskLevel::High,
                    "Runners without a recent aerobic base",
                    "Prioritise aerobic volume with little time left for race-specific work",
                ));
            }
        }
        TrainingStagePhase::Base => {
            alternatives.push(alternative(
                TrainingStagePhase::Build,
                RiskLevel::Medium,
                "Runners with a solid recent aerobic base",
                "Skip base and spend more weeks on threshold and race-specific work",
            ));
        }
        TrainingStagePhase::Conversion | TrainingStagePhase::Taper => {}
    }

    alternatives
}

/// Recommend a start phase for a race `weeks_remaining` weeks away
///
/// | weeks remaining | start | risk   |
/// |-----------------|-------|--------|
/// | < 2             | peak  | high   |
/// | 2               | peak  | medium |
/// | 3..=11          | build | low    |
/// | >= 12           | base  | low    |
///
/// Use [`DEFAULT_TARGET_DISTANCE_KM`](crate::constants::periodization::DEFAULT_TARGET_DISTANCE_KM)
/// when the race distance is not known.
#[must_use]
pub fn recommend_start_stage(weeks_remaining: u32, target_distance_km: f64) -> StageRecommendation {
    let (recommended_stage, risk_level, reason) = if weeks_remaining < MIN_PLAN_WEEKS {
        (
            TrainingStagePhase::Peak,
            RiskLevel::High,
            format!("Only {weeks_remaining} week(s) until race day: too short for a structured plan"),
        )
    } else if weeks_remaining == MIN_PLAN_WEEKS {
        (
            TrainingStagePhase::Peak,
            RiskLevel::Medium,
            "Two weeks remain: keep sharpness and arrive fresh".to_owned(),
        )
    } else if weeks_remaining < BASE_RECOMMENDED_WEEKS {
        (
            TrainingStagePhase::Build,
            RiskLevel::Low,
            format!("{weeks_remaining} weeks allow a build phase followed by peak and taper"),
        )
    } else {
        (
            TrainingStagePhase::Base,
            RiskLevel::Low,
            format!("{weeks_remaining} weeks allow a complete base, build, peak and taper cycle"),
        )
    };

    let distribution =
        calculate_training_periods(weeks_remaining, target_distance_km, recommended_stage);
    let alternatives = alternatives_for(recommended_stage, weeks_remaining);

    debug!(
        weeks_remaining,
        target_distance_km,
        stage = %recommended_stage,
        risk = %risk_level,
        alternatives = alternatives.len(),
        "start stage recommended"
    );

    StageRecommendation {
        recommended_stage,
        risk_level,
        reason,
        weeks_remaining,
        alternatives,
        distribution,
        is_full_marathon: target_distance_km > FULL_MARATHON_THRESHOLD_KM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taper_policy() {
        assert_eq!(taper_weeks(0, true), 0);
        assert_eq!(taper_weeks(2, true), 0);
        assert_eq!(taper_weeks(3, true), 1);
        assert_eq!(taper_weeks(4, true), 2);
        assert_eq!(taper_weeks(4, false), 1);
    }

    #[test]
    fn test_base_start_split_bands() {
        assert_eq!(base_start_split(0), (0, 0, 0));
        assert_eq!(base_start_split(2), (2, 0, 0));
        assert_eq!(base_start_split(5), (1, 1, 3));
        assert_eq!(base_start_split(7), (2, 3, 2));
        assert_eq!(base_start_split(16), (6, 4, 6));
    }
}
