// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Aerobic capacity commands for stride-cli
// ABOUTME: Implements the vdot, paces and target subcommands

use std::collections::BTreeMap;

use serde::Serialize;
use stride_engine::config::EngineConfig;
use stride_engine::errors::{AppError, AppResult};
use stride_engine::intelligence::aerobic_capacity::{
    calculate_difficulty_index, calculate_dynamic_vdot, calculate_progressive_vdot,
    calculate_proposed_vdot, calculate_vdot, calculate_weekly_vdot, race_predictions,
    training_paces, workout_paces, PaceZone, RacePrediction, WorkoutPaceZone,
};
use stride_engine::intelligence::pace::parse_duration;
use tracing::info;

use super::Output;
use crate::helpers::display;

/// Result of the `vdot` subcommand
#[derive(Serialize)]
pub struct VdotReport {
    pub distance_meters: f64,
    pub time_seconds: f64,
    pub vdot: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_vdot: Option<f64>,
    pub predictions: Vec<RacePrediction>,
}

/// Result of the `paces` subcommand
#[derive(Serialize)]
pub struct PacesReport {
    pub vdot: f64,
    pub predictions: Vec<RacePrediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training: Option<BTreeMap<PaceZone, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout: Option<BTreeMap<WorkoutPaceZone, String>>,
}

/// One plan week of a capacity progression
#[derive(Serialize)]
pub struct WeekTarget {
    pub week: u32,
    pub weekly_vdot: f64,
    pub progressive_vdot: f64,
}

/// Result of the `target` subcommand
#[derive(Serialize)]
pub struct TargetReport {
    pub current_vdot: f64,
    pub difficulty: f64,
    pub weeks: u32,
    pub age: u32,
    pub proposed_vdot: f64,
    pub achieved_difficulty: f64,
    pub progression: Vec<WeekTarget>,
}

/// VDOT (and optionally heart-rate adjusted VDOT) for a race result
pub fn vdot(
    output: &Output,
    config: &EngineConfig,
    distance_meters: f64,
    time: &str,
    hr: Option<f64>,
    max_hr: Option<f64>,
    resting_hr: Option<f64>,
) -> AppResult<()> {
    let time_seconds = parse_duration(time).ok_or_else(|| {
        AppError::invalid_format(format!(
            "Invalid finish time '{time}', expected h:mm:ss, m:ss or seconds"
        ))
    })?;
    let vdot = calculate_vdot(distance_meters, time_seconds)?;

    let dynamic_vdot = match hr {
        Some(hr) => {
            let mut params = config.capacity.dynamic_params();
            params.max_hr = max_hr.unwrap_or(params.max_hr);
            params.resting_hr = resting_hr.unwrap_or(params.resting_hr);
            Some(calculate_dynamic_vdot(
                distance_meters / 1000.0,
                time_seconds,
                hr,
                &params,
            )?)
        }
        None => None,
    };
    info!(distance_meters, time_seconds, vdot, ?dynamic_vdot, "VDOT calculated");

    let report = VdotReport {
        distance_meters,
        time_seconds,
        vdot,
        dynamic_vdot,
        predictions: race_predictions(vdot),
    };
    output.emit(&report, display::vdot_report)
}

/// Race predictions and zone paces for a VDOT
pub fn paces(output: &Output, vdot: f64, workout: bool) -> AppResult<()> {
    if !vdot.is_finite() || vdot <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "VDOT must be positive, got {vdot}"
        )));
    }

    let report = PacesReport {
        vdot,
        predictions: race_predictions(vdot),
        training: (!workout).then(|| training_paces(vdot)),
        workout: workout.then(|| workout_paces(vdot)),
    };
    output.emit(&report, display::paces_report)
}

/// Proposed VDOT for a difficulty budget and the week-by-week progression toward it
pub fn target(output: &Output, vdot: f64, difficulty: f64, weeks: u32, age: u32) -> AppResult<()> {
    if !vdot.is_finite() || vdot <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "VDOT must be positive, got {vdot}"
        )));
    }

    let proposed_vdot = calculate_proposed_vdot(vdot, difficulty, weeks, age);
    let progression = (1..=weeks)
        .map(|week| WeekTarget {
            week,
            weekly_vdot: calculate_weekly_vdot(vdot, proposed_vdot, week, weeks),
            progressive_vdot: calculate_progressive_vdot(vdot, proposed_vdot, weeks, week),
        })
        .collect();

    let report = TargetReport {
        current_vdot: vdot,
        difficulty,
        weeks,
        age,
        proposed_vdot,
        achieved_difficulty: calculate_difficulty_index(vdot, proposed_vdot, weeks, age),
        progression,
    };
    output.emit(&report, display::target_report)
}
