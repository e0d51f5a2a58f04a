// ABOUTME: Training pace zones expressed as fractions of VDOT
// ABOUTME: Inverts the VO2 quadratic to turn each zone into a "fast ~ slow" pace range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::velocity_at_vo2;
use crate::constants::pace_zones::{
    EASY, INTERVAL, MARATHON, RECOVERY, REPETITION, TEMPO, THRESHOLD,
};
use crate::intelligence::pace::{format_pace, seconds_per_km};

/// Daniels training intensities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaceZone {
    /// Easy and long runs
    Easy,
    /// Marathon race pace
    Marathon,
    /// Comfortably hard, lactate threshold
    Threshold,
    /// VO2max intervals
    Interval,
    /// Short fast repetitions
    Repetition,
}

impl PaceZone {
    /// All zones, slowest first
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Marathon,
        Self::Threshold,
        Self::Interval,
        Self::Repetition,
    ];

    /// `(min, max)` fraction of VDOT
    #[must_use]
    pub const fn percent_range(self) -> (f64, f64) {
        match self {
            Self::Easy => EASY,
            Self::Marathon => MARATHON,
            Self::Threshold => THRESHOLD,
            Self::Interval => INTERVAL,
            Self::Repetition => REPETITION,
        }
    }
}

/// Pace zones used when building weekly workouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutPaceZone {
    /// Recovery jogs
    Recovery,
    /// Easy runs
    Easy,
    /// Tempo runs
    Tempo,
    /// Marathon-pace segments
    Marathon,
    /// Threshold sessions
    Threshold,
    /// Interval sessions
    Interval,
}

impl WorkoutPaceZone {
    /// All zones, slowest first
    pub const ALL: [Self; 6] = [
        Self::Recovery,
        Self::Easy,
        Self::Tempo,
        Self::Marathon,
        Self::Threshold,
        Self::Interval,
    ];

    /// `(min, max)` fraction of VDOT
    #[must_use]
    pub const fn percent_range(self) -> (f64, f64) {
        match self {
            Self::Recovery => RECOVERY,
            Self::Easy => EASY,
            Self::Tempo => TEMPO,
            Self::Marathon => MARATHON,
            Self::Threshold => THRESHOLD,
            Self::Interval => INTERVAL,
        }
    }
}

/// `(fast, slow)` pace in seconds per km for a `(min, max)` fraction of `vdot`
#[must_use]
pub fn pace_range(vdot: f64, (low, high): (f64, f64)) -> (f64, f64) {
    let fast = seconds_per_km(velocity_at_vo2(high * vdot));
    let slow = seconds_per_km(velocity_at_vo2(low * vdot));
    (fast, slow)
}

fn format_range(vdot: f64, range: (f64, f64)) -> String {
    let (fast, slow) = pace_range(vdot, range);
    format!("{} ~ {}", format_pace(fast), format_pace(slow))
}

/// `"fast ~ slow"` pace per km for each Daniels zone at `vdot`
#[must_use]
pub fn training_paces(vdot: f64) -> BTreeMap<PaceZone, String> {
    PaceZone::ALL
        .iter()
        .map(|&zone| (zone, format_range(vdot, zone.percent_range())))
        .collect()
}

/// `"fast ~ slow"` pace per km for each workout zone at `vdot`
#[must_use]
pub fn workout_paces(vdot: f64) -> BTreeMap<WorkoutPaceZone, String> {
    WorkoutPaceZone::ALL
        .iter()
        .map(|&zone| (zone, format_range(vdot, zone.percent_range())))
        .collect()
}
