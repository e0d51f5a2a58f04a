// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Periodization command for stride-cli
// ABOUTME: Implements the plan subcommand (start-stage recommendation)

use stride_engine::errors::{AppError, AppResult};
use stride_engine::intelligence::periodization::recommend_start_stage;

use super::Output;
use crate::helpers::display;

/// Start-stage recommendation for a race `weeks` weeks away
pub fn recommend(output: &Output, weeks: u32, distance_km: f64) -> AppResult<()> {
    if !distance_km.is_finite() || distance_km <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Race distance must be positive, got {distance_km} km"
        )));
    }

    let recommendation = recommend_start_stage(weeks, distance_km);
    output.emit(&recommendation, display::plan_report)
}
