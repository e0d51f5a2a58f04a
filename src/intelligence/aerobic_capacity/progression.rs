// ABOUTME: Capacity improvement modelling: difficulty index, proposed targets and weekly VDOT curves
// ABOUTME: Scales improvement cost by plan length and age, and interpolates VDOT across plan weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::debug;

use crate::constants::difficulty::{
    AGE_DOUBLING_YEARS, AGE_THRESHOLD, CAPACITY_EXPONENT, INDEX_SCALE, REFERENCE_VDOT,
    WEEK_FACTOR_FLOOR, WEEK_WINDOW_END, WEEK_WINDOW_START,
};
use crate::constants::vdot::PROPOSED_VDOT_SEARCH_SPAN;
use crate::intelligence::algorithms::bisect;

/// First plan week of the progressive VDOT window
const PROGRESSION_START_WEEK: u32 = 3;
/// Weeks before race day at which the progressive window closes
const PROGRESSION_END_OFFSET: u32 = 4;
/// Plans this short or shorter keep their starting VDOT throughout
const PROGRESSION_MIN_TOTAL_WEEKS: u32 = 7;
/// Weeks before race day at which the weekly curve reaches its target
const WEEKLY_TARGET_OFFSET: i64 = 2;

fn week_factor(week: u32) -> f64 {
    if !(WEEK_WINDOW_START..=WEEK_WINDOW_END).contains(&week) {
        return 1.0;
    }
    let progress =
        f64::from(week - WEEK_WINDOW_START) / f64::from(WEEK_WINDOW_END - WEEK_WINDOW_START);
    (WEEK_FACTOR_FLOOR - 1.0).mul_add(progress, 1.0)
}

fn age_factor(age: u32) -> f64 {
    if age <= AGE_THRESHOLD {
        1.0
    } else {
        1.0 + f64::from(age - AGE_THRESHOLD) / AGE_DOUBLING_YEARS
    }
}

/// Perceived difficulty of improving from `vdot1` to `vdot2`
///
/// `100 × ((vdot2/40)^2.4 − (vdot1/40)^2.4)`, discounted linearly from ×1.0
/// at week 12 to ×0.75 at week 24 of plan length, and scaled up by
/// `1 + (age − 40)/20` above age 40. Zero whenever `vdot1 == vdot2`.
#[must_use]
pub fn calculate_difficulty_index(vdot1: f64, vdot2: f64, week: u32, age: u32) -> f64 {
    let base = INDEX_SCALE
        * ((vdot2 / REFERENCE_VDOT).powf(CAPACITY_EXPONENT)
            - (vdot1 / REFERENCE_VDOT).powf(CAPACITY_EXPONENT));
    base * week_factor(week) * age_factor(age)
}

/// VDOT reachable from `vdot1` for a given difficulty budget
///
/// Bisection over `[vdot1, vdot1 + 50]`. A non-positive budget means no
/// improvement and returns `vdot1` unchanged.
#[must_use]
pub fn calculate_proposed_vdot(vdot1: f64, target_difficulty: f64, week: u32, age: u32) -> f64 {
    if target_difficulty <= 0.0 {
        return vdot1;
    }
    let proposed = bisect(
        |vdot2| calculate_difficulty_index(vdot1, vdot2, week, age) - target_difficulty,
        vdot1,
        vdot1 + PROPOSED_VDOT_SEARCH_SPAN,
    );
    debug!(vdot1, target_difficulty, week, age, proposed, "proposed VDOT solved");
    proposed
}

/// VDOT for `current_week` on a straight line reaching `target` two weeks before race day
///
/// Weeks outside `1..=total_weeks` return `current` unchanged.
#[must_use]
pub fn calculate_weekly_vdot(current: f64, target: f64, current_week: u32, total_weeks: u32) -> f64 {
    if current_week == 0 || current_week > total_weeks {
        return current;
    }
    let target_week = i64::from(total_weeks) - WEEKLY_TARGET_OFFSET;
    let week = i64::from(current_week);
    if week >= target_week {
        return target;
    }
    (target - current).mul_add(week as f64 / target_week as f64, current)
}

/// VDOT for `current_week` on a curve rising through weeks `3..=total_weeks − 4`
///
/// Plans of seven weeks or fewer return `current` unchanged. Before the
/// window the starting VDOT is kept, after it the target is held.
#[must_use]
pub fn calculate_progressive_vdot(
    current: f64,
    target: f64,
    total_weeks: u32,
    current_week: u32,
) -> f64 {
    if total_weeks <= PROGRESSION_MIN_TOTAL_WEEKS {
        return current;
    }
    let start_week = PROGRESSION_START_WEEK;
    let end_week = total_weeks - PROGRESSION_END_OFFSET;

    if current_week < start_week {
        return current;
    }
    if current_week > end_week {
        return target;
    }

    let progress =
        f64::from(current_week - start_week + 1) / f64::from(end_week - start_week + 1);
    (target - current).mul_add(progress, current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_factor_window() {
        assert!((week_factor(11) - 1.0).abs() < f64::EPSILON);
        assert!((week_factor(12) - 1.0).abs() < f64::EPSILON);
        assert!((week_factor(18) - 0.875).abs() < 1e-12);
        assert!((week_factor(24) - 0.75).abs() < 1e-12);
        assert!((week_factor(25) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_age_factor() {
        assert!((age_factor(30) - 1.0).abs() < f64::EPSILON);
        assert!((age_factor(40) - 1.0).abs() < f64::EPSILON);
        assert!((age_factor(50) - 1.5).abs() < 1e-12);
        assert!((age_factor(60) - 2.0).abs() < 1e-12);
    }
}
