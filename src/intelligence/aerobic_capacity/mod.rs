// ABOUTME: Aerobic capacity estimation with Jack Daniels' VDOT and race-time inversion
// ABOUTME: Converts race performances to VDOT and solves VDOT back into finish times and paces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Aerobic Capacity Estimator
//!
//! VDOT is the VO2 cost of a race pace divided by the fraction of VO2max
//! that can be sustained for the race duration:
//!
//! ```text
//! velocity = distance / time_min                      (m/min)
//! VO2      = −4.60 + 0.182258·v + 0.000104·v²
//! pctMax   = 0.8 + 0.1894393·e^(−0.012778·t) + 0.2989558·e^(−0.1932605·t)
//! VDOT     = VO2 / pctMax
//! ```
//!
//! The forward direction is closed form. Race predictions invert it with
//! bisection over finish times of 1 to 600 minutes; training paces invert
//! only the VO2 quadratic. All functions are pure.
//!
//! # Scientific References
//!
//! - Daniels, J. & Gilbert, J. (1979). *Oxygen Power: Performance Tables for Distance Runners*.
//! - Daniels, J. (2013). *Daniels' Running Formula* (3rd ed.). Human Kinetics.

mod dynamic;
mod progression;
mod zones;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::race_distances::{
    FIVE_K_METERS, HALF_MARATHON_METERS, MARATHON_METERS, TEN_K_METERS,
};
use crate::constants::vdot::{
    PERCENT_MAX_BASE, PERCENT_MAX_FAST_AMPLITUDE, PERCENT_MAX_FAST_RATE,
    PERCENT_MAX_SLOW_AMPLITUDE, PERCENT_MAX_SLOW_RATE, SOLVER_MAX_MINUTES, SOLVER_MIN_MINUTES,
    VO2_INTERCEPT, VO2_LINEAR, VO2_QUADRATIC,
};
use crate::errors::{AppError, AppResult};
use crate::intelligence::algorithms::bisect;
use crate::intelligence::pace::{format_duration, format_pace};

pub use dynamic::{
    calculate_dynamic_vdot, calculate_dynamic_vdot_from_pace, calculate_hrr_ratio,
    DynamicVdotParams,
};
pub use progression::{
    calculate_difficulty_index, calculate_progressive_vdot, calculate_proposed_vdot,
    calculate_weekly_vdot,
};
pub use zones::{pace_range, training_paces, workout_paces, PaceZone, WorkoutPaceZone};

/// Standard race distances used for pace tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RaceDistance {
    /// 5 km
    #[serde(rename = "5K")]
    FiveK,
    /// 10 km
    #[serde(rename = "10K")]
    TenK,
    /// 21.0975 km
    #[serde(rename = "Half Marathon")]
    HalfMarathon,
    /// 42.195 km
    #[serde(rename = "Marathon")]
    Marathon,
}

impl RaceDistance {
    /// All standard distances, shortest first
    pub const ALL: [Self; 4] = [Self::FiveK, Self::TenK, Self::HalfMarathon, Self::Marathon];

    /// Distance in meters
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::FiveK => FIVE_K_METERS,
            Self::TenK => TEN_K_METERS,
            Self::HalfMarathon => HALF_MARATHON_METERS,
            Self::Marathon => MARATHON_METERS,
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
        }
    }
}

/// Predicted result for one race distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RacePrediction {
    /// Race distance
    pub distance: RaceDistance,
    /// Predicted finish time in minutes
    pub finish_minutes: f64,
    /// Average pace in seconds per kilometre
    pub pace_seconds_per_km: f64,
}

impl RacePrediction {
    /// Finish time formatted as `h:mm:ss` (or `m:ss` under an hour)
    #[must_use]
    pub fn finish_time(&self) -> String {
        format_duration(self.finish_minutes * 60.0)
    }

    /// Pace formatted as `m:ss` per km
    #[must_use]
    pub fn pace(&self) -> String {
        format_pace(self.pace_seconds_per_km)
    }
}

/// Oxygen cost (ml/kg/min) of running at `velocity` meters per minute
#[must_use]
pub fn vo2_at_velocity(velocity: f64) -> f64 {
    (VO2_QUADRATIC * velocity).mul_add(velocity, VO2_LINEAR.mul_add(velocity, VO2_INTERCEPT))
}

/// Velocity (m/min) whose oxygen cost equals `vo2`
///
/// Positive root of `0.000104·v² + 0.182258·v − (4.60 + vo2) = 0`; zero when
/// no real root exists.
#[must_use]
pub fn velocity_at_vo2(vo2: f64) -> f64 {
    let c = VO2_INTERCEPT - vo2;
    let discriminant = VO2_LINEAR.mul_add(VO2_LINEAR, -(4.0 * VO2_QUADRATIC * c));
    if discriminant < 0.0 {
        return 0.0;
    }
    (discriminant.sqrt() - VO2_LINEAR) / (2.0 * VO2_QUADRATIC)
}

/// Fraction of VO2max sustainable for a race lasting `time_minutes`
#[must_use]
pub fn percent_max(time_minutes: f64) -> f64 {
    PERCENT_MAX_SLOW_AMPLITUDE.mul_add(
        (-PERCENT_MAX_SLOW_RATE * time_minutes).exp(),
        PERCENT_MAX_FAST_AMPLITUDE.mul_add(
            (-PERCENT_MAX_FAST_RATE * time_minutes).exp(),
            PERCENT_MAX_BASE,
        ),
    )
}

/// VDOT for a race of `distance_meters` finished in `time_minutes`, unchecked
fn daniels_vdot(distance_meters: f64, time_minutes: f64) -> f64 {
    let velocity = distance_meters / time_minutes;
    vo2_at_velocity(velocity) / percent_max(time_minutes)
}

/// Calculate VDOT from a race performance
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` if distance or time is not a positive,
/// finite number.
///
/// # Example
///
/// ```rust
/// use stride_engine::intelligence::aerobic_capacity::calculate_vdot;
///
/// # fn main() -> stride_engine::errors::AppResult<()> {
/// let vdot = calculate_vdot(10_000.0, 2_400.0)?; // 10K in 40:00
/// assert!((vdot - 51.9).abs() < 0.1);
/// # Ok(())
/// # }
/// ```
pub fn calculate_vdot(distance_meters: f64, time_seconds: f64) -> AppResult<f64> {
    if !distance_meters.is_finite() || distance_meters <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Distance must be positive, got {distance_meters} m"
        )));
    }
    if !time_seconds.is_finite() || time_seconds <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Time must be positive, got {time_seconds} s"
        )));
    }

    Ok(daniels_vdot(distance_meters, time_seconds / 60.0))
}

/// Predicted finish time in minutes for `distance_meters` at `vdot`
///
/// Solves `vdot(distance, t) − vdot = 0` over `t ∈ [1, 600]` minutes. VDOT
/// values whose finish time falls outside that window return the nearest
/// bound.
#[must_use]
pub fn predict_race_minutes(vdot: f64, distance_meters: f64) -> f64 {
    bisect(
        |minutes| daniels_vdot(distance_meters, minutes) - vdot,
        SOLVER_MIN_MINUTES,
        SOLVER_MAX_MINUTES,
    )
}

/// Predicted finish time and pace for each standard race distance
#[must_use]
pub fn race_predictions(vdot: f64) -> Vec<RacePrediction> {
    RaceDistance::ALL
        .iter()
        .map(|&distance| {
            let finish_minutes = predict_race_minutes(vdot, distance.meters());
            RacePrediction {
                distance,
                finish_minutes,
                pace_seconds_per_km: finish_minutes * 60.0 / (distance.meters() / 1000.0),
            }
        })
        .collect()
}

/// Race pace (`m:ss` per km) for each standard distance at `vdot`
#[must_use]
pub fn paces(vdot: f64) -> BTreeMap<RaceDistance, String> {
    race_predictions(vdot)
        .into_iter()
        .map(|prediction| (prediction.distance, prediction.pace()))
        .collect()
}
