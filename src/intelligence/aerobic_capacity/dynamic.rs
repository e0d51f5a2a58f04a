// ABOUTME: Heart-rate adjusted VDOT that credits performances achieved at low relative effort
// ABOUTME: Combines race VDOT with the heart rate reserve ratio recorded during the effort
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::calculate_vdot;
use crate::constants::dynamic_vdot::{
    DEFAULT_MAX_HR, DEFAULT_RESTING_HR, EFFORT_BONUS_EXPONENT, EFFORT_BONUS_SCALE,
};
use crate::errors::{AppError, AppResult};
use crate::intelligence::pace::parse_pace;

/// Heart-rate bounds and effort bonus shape for dynamic VDOT
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicVdotParams {
    /// Maximum heart rate (bpm)
    pub max_hr: f64,
    /// Resting heart rate (bpm)
    pub resting_hr: f64,
    /// Bonus at zero relative effort (`a`)
    pub effort_scale: f64,
    /// Curvature of the bonus (`b`)
    pub effort_exponent: f64,
}

impl Default for DynamicVdotParams {
    fn default() -> Self {
        Self {
            max_hr: DEFAULT_MAX_HR,
            resting_hr: DEFAULT_RESTING_HR,
            effort_scale: EFFORT_BONUS_SCALE,
            effort_exponent: EFFORT_BONUS_EXPONENT,
        }
    }
}

/// Heart rate reserve ratio `(hr − resting) / (max − resting)`
///
/// `hr` is clamped into `[resting_hr, max_hr]` first, so the result is
/// always within `[0, 1]`.
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` if `max_hr` is not greater than
/// `resting_hr`.
pub fn calculate_hrr_ratio(hr: f64, max_hr: f64, resting_hr: f64) -> AppResult<f64> {
    if max_hr.is_nan() || resting_hr.is_nan() || max_hr <= resting_hr {
        return Err(AppError::invalid_range(format!(
            "Max HR ({max_hr}) must be greater than resting HR ({resting_hr})"
        )));
    }
    let clamped = hr.clamp(resting_hr, max_hr);
    Ok((clamped - resting_hr) / (max_hr - resting_hr))
}

/// VDOT adjusted for the relative effort of the performance
///
/// `vdot + a × (1 − hrr)^b`. A race run at maximum heart rate earns no
/// bonus; the same time at a lower heart rate implies higher capacity.
///
/// # Errors
///
/// Returns an error if distance or time is not positive, or if the heart
/// rate bounds in `params` are inverted.
pub fn calculate_dynamic_vdot(
    distance_km: f64,
    time_seconds: f64,
    hr: f64,
    params: &DynamicVdotParams,
) -> AppResult<f64> {
    let base = calculate_vdot(distance_km * 1000.0, time_seconds)?;
    let ratio = calculate_hrr_ratio(hr, params.max_hr, params.resting_hr)?;
    let bonus = params.effort_scale * (1.0 - ratio).powf(params.effort_exponent);

    debug!(base, ratio, bonus, "dynamic VDOT calculated");
    Ok(base + bonus)
}

/// Dynamic VDOT from an average pace string (`m:ss` per km)
///
/// Unparsable paces and a zero pace (`0:00`) yield `0.0` rather than an
/// error.
///
/// # Errors
///
/// Returns an error under the same conditions as [`calculate_dynamic_vdot`].
pub fn calculate_dynamic_vdot_from_pace(
    distance_km: f64,
    pace: &str,
    hr: f64,
    params: &DynamicVdotParams,
) -> AppResult<f64> {
    let Some(seconds_per_km) = parse_pace(pace).filter(|seconds| *seconds > 0.0) else {
        debug!(pace, "unusable pace, dynamic VDOT defaults to zero");
        return Ok(0.0);
    };
    calculate_dynamic_vdot(distance_km, seconds_per_km * distance_km, hr, params)
}
