// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Training load commands for stride-cli
// ABOUTME: Implements the trimp and load (session replay) subcommands

use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use stride_engine::config::EngineConfig;
use stride_engine::errors::AppResult;
use stride_engine::intelligence::algorithms::TrimpAlgorithm;
use stride_engine::intelligence::training_load::{
    recommend_recovery_days, LoadState, PerformancePrediction,
};
use stride_engine::sessions::read_sessions;
use tracing::info;

use super::Output;
use crate::helpers::display;

/// Result of the `trimp` subcommand
#[derive(Serialize)]
pub struct TrimpReport {
    pub algorithm: &'static str,
    pub duration_minutes: f64,
    pub avg_hr: f64,
    pub resting_hr: f64,
    pub max_hr: f64,
    pub trimp: f64,
}

/// Result of the `load` subcommand
#[derive(Serialize)]
pub struct LoadReport {
    pub sessions: usize,
    pub state: LoadState,
    pub current: PerformancePrediction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected: Option<PerformancePrediction>,
    pub recovery_days: u32,
}

/// Training impulse of one session
pub fn trimp(
    output: &Output,
    config: &EngineConfig,
    duration_minutes: f64,
    avg_hr: f64,
    resting_hr: Option<f64>,
    max_hr: Option<f64>,
    algorithm: &str,
) -> AppResult<()> {
    let algorithm: TrimpAlgorithm = algorithm.parse()?;
    let resting_hr = resting_hr.unwrap_or(config.capacity.default_resting_hr);
    let max_hr = max_hr.unwrap_or(config.capacity.default_max_hr);
    let trimp = algorithm.calculate(duration_minutes, avg_hr, resting_hr, max_hr)?;

    let report = TrimpReport {
        algorithm: algorithm.name(),
        duration_minutes,
        avg_hr,
        resting_hr,
        max_hr,
        trimp,
    };
    output.emit(&report, display::trimp_report)
}

/// Replay a session file through the load model
pub fn replay(
    output: &Output,
    config: &EngineConfig,
    path: &Path,
    date: Option<NaiveDate>,
    algorithm: &str,
) -> AppResult<()> {
    let algorithm: TrimpAlgorithm = algorithm.parse()?;
    let sessions = read_sessions(path, algorithm, &config.capacity)?;

    let model = config.load.model();
    let mut state = LoadState::new();
    model.replay(&mut state, &sessions);
    info!(
        sessions = sessions.len(),
        fitness = state.fitness,
        fatigue = state.fatigue,
        "sessions replayed"
    );

    let current = model.performance(&state);
    let projected = date.map(|date| model.performance_for_date(&state, date));
    let recovery_days = recommend_recovery_days(projected.as_ref().unwrap_or(&current).form);

    let report = LoadReport {
        sessions: sessions.len(),
        state,
        current,
        projected,
        recovery_days,
    };
    output.emit(&report, display::load_report)
}
