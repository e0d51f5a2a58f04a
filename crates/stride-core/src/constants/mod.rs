// ABOUTME: Model constants with domain-separated organization
// ABOUTME: Load model, VDOT, pace zone, race distance and periodization constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Scientifically-established constants used by the training science engine,
//! grouped by the component that consumes them.

/// Banister impulse-response model constants
///
/// References:
/// - Banister, E.W. (1991). Modeling elite athletic performance. *Physiological Testing of Elite Athletes*.
/// - Busso, T. (2003). Variable dose-response relationship between exercise training and performance.
pub mod load_model {
    /// Fitness decay time constant in days
    pub const TAU_FITNESS_DAYS: f64 = 42.0;
    /// Fatigue decay time constant in days
    pub const TAU_FATIGUE_DAYS: f64 = 10.0;
    /// Performance baseline before any training is recorded
    pub const PERFORMANCE_BASELINE: f64 = 100.0;
    /// Fitness gain coefficient (k1)
    pub const K_FITNESS: f64 = 1.0;
    /// Fatigue gain coefficient (k2)
    pub const K_FATIGUE: f64 = 2.0;

    /// Form below this value indicates overreaching
    pub const FORM_OVERREACHING: f64 = -10.0;
    /// Form above this value indicates detraining
    pub const FORM_DETRAINING: f64 = 10.0;
}

/// Training impulse (TRIMP) weighting constants
///
/// Reference: Bannister, E.W. (1991), exponential heart-rate-reserve weighting
pub mod trimp {
    /// Base multiplier applied to the exponential weighting
    pub const BASE_MULTIPLIER: f64 = 0.64;
    /// Exponential factor for males
    pub const MALE_EXPONENTIAL_FACTOR: f64 = 1.92;
    /// Exponential factor for females
    pub const FEMALE_EXPONENTIAL_FACTOR: f64 = 1.67;
}

/// Jack Daniels' VDOT formula coefficients
///
/// Reference: Daniels, J. (2013). *Daniels' Running Formula* (3rd ed.). Human Kinetics.
pub mod vdot {
    /// VO2 formula constant term
    pub const VO2_INTERCEPT: f64 = -4.60;
    /// VO2 formula coefficient for velocity (m/min)
    pub const VO2_LINEAR: f64 = 0.182_258;
    /// VO2 formula coefficient for velocity squared
    pub const VO2_QUADRATIC: f64 = 0.000_104;

    /// Asymptotic fraction of VO2max sustainable for very long efforts
    pub const PERCENT_MAX_BASE: f64 = 0.8;
    /// Amplitude of the slow percent-max exponential
    pub const PERCENT_MAX_SLOW_AMPLITUDE: f64 = 0.189_439_3;
    /// Rate of the slow percent-max exponential (per minute)
    pub const PERCENT_MAX_SLOW_RATE: f64 = 0.012_778;
    /// Amplitude of the fast percent-max exponential
    pub const PERCENT_MAX_FAST_AMPLITUDE: f64 = 0.298_955_8;
    /// Rate of the fast percent-max exponential (per minute)
    pub const PERCENT_MAX_FAST_RATE: f64 = 0.193_260_5;

    /// Lower bound of the finish-time search in minutes
    pub const SOLVER_MIN_MINUTES: f64 = 1.0;
    /// Upper bound of the finish-time search in minutes
    pub const SOLVER_MAX_MINUTES: f64 = 600.0;
    /// Default bisection tolerance
    pub const SOLVER_TOLERANCE: f64 = 1e-5;
    /// Width of the capacity search window above the current VDOT
    pub const PROPOSED_VDOT_SEARCH_SPAN: f64 = 50.0;
}

/// Difficulty index scaling for capacity improvement targets
pub mod difficulty {
    /// Reference VDOT used to normalise capacity values
    pub const REFERENCE_VDOT: f64 = 40.0;
    /// Exponent applied to normalised capacity
    pub const CAPACITY_EXPONENT: f64 = 2.4;
    /// Scale of the base index
    pub const INDEX_SCALE: f64 = 100.0;
    /// First plan week of the duration discount window
    pub const WEEK_WINDOW_START: u32 = 12;
    /// Last plan week of the duration discount window
    pub const WEEK_WINDOW_END: u32 = 24;
    /// Week factor reached at the end of the discount window
    pub const WEEK_FACTOR_FLOOR: f64 = 0.75;
    /// Age above which improvement becomes harder
    pub const AGE_THRESHOLD: u32 = 40;
    /// Years over the threshold that double the difficulty
    pub const AGE_DOUBLING_YEARS: f64 = 20.0;
}

/// Dynamic (heart-rate adjusted) VDOT defaults
pub mod dynamic_vdot {
    /// Default maximum heart rate (bpm)
    pub const DEFAULT_MAX_HR: f64 = 180.0;
    /// Default resting heart rate (bpm)
    pub const DEFAULT_RESTING_HR: f64 = 60.0;
    /// Bonus scale for efforts run below maximum heart rate reserve
    pub const EFFORT_BONUS_SCALE: f64 = 33.0;
    /// Curvature of the effort bonus
    pub const EFFORT_BONUS_EXPONENT: f64 = 1.2;
}

/// Training pace zones as fractions of VDOT
///
/// Reference: Daniels, J. (2013), training intensity tables
pub mod pace_zones {
    /// Recovery running
    pub const RECOVERY: (f64, f64) = (0.55, 0.65);
    /// Easy / long runs
    pub const EASY: (f64, f64) = (0.59, 0.74);
    /// Marathon pace
    pub const MARATHON: (f64, f64) = (0.75, 0.84);
    /// Tempo running
    pub const TEMPO: (f64, f64) = (0.80, 0.85);
    /// Lactate threshold
    pub const THRESHOLD: (f64, f64) = (0.83, 0.88);
    /// VO2max intervals
    pub const INTERVAL: (f64, f64) = (0.95, 1.00);
    /// Repetitions (speed and economy)
    pub const REPETITION: (f64, f64) = (1.05, 1.20);
}

/// Standard race distances
pub mod race_distances {
    /// 5K in meters
    pub const FIVE_K_METERS: f64 = 5_000.0;
    /// 10K in meters
    pub const TEN_K_METERS: f64 = 10_000.0;
    /// Half marathon in meters
    pub const HALF_MARATHON_METERS: f64 = 21_097.5;
    /// Marathon in meters
    pub const MARATHON_METERS: f64 = 42_195.0;
}

/// Periodization thresholds
pub mod periodization {
    /// Target distances above this (km) are planned as full marathons
    pub const FULL_MARATHON_THRESHOLD_KM: f64 = 21.1;
    /// Default target distance for stage recommendations (km)
    pub const DEFAULT_TARGET_DISTANCE_KM: f64 = 21.1;

    /// Minimum weeks remaining for a build start
    pub const BUILD_MIN_WEEKS: u32 = 3;
    /// Minimum weeks remaining for a base start
    pub const BASE_MIN_WEEKS: u32 = 6;
    /// Weeks remaining from which a base start is recommended
    pub const BASE_RECOMMENDED_WEEKS: u32 = 12;
    /// Weeks remaining from which a base alternative is low risk
    pub const BASE_LOW_RISK_WEEKS: u32 = 10;
    /// Fewer weeks than this is too short for structured training
    pub const MIN_PLAN_WEEKS: u32 = 2;

    /// Remaining weeks from which base/build/peak are split proportionally
    pub const PROPORTIONAL_SPLIT_WEEKS: u32 = 10;
    /// Tenths of remaining weeks allotted to base in a proportional split
    pub const BASE_SHARE_TENTHS: u32 = 4;
    /// Tenths of remaining weeks allotted to build in a proportional split
    pub const BUILD_SHARE_TENTHS: u32 = 3;

    /// Taper weeks for full marathon plans
    pub const FULL_MARATHON_TAPER_WEEKS: u32 = 2;
    /// Taper weeks for three-week plans and races up to the half marathon
    pub const STANDARD_TAPER_WEEKS: u32 = 1;
    /// Plan length that gets a single taper week regardless of distance
    pub const SHORT_PLAN_WEEKS: u32 = 3;
    /// Base weeks in a base start with 6 to 9 non-taper weeks
    pub const MID_SPLIT_BASE_WEEKS: u32 = 2;

    /// Distances from this (km) use the marathon plan length
    pub const MARATHON_CLASS_KM: f64 = 42.0;
    /// Distances from this (km) use the half marathon plan length
    pub const HALF_CLASS_KM: f64 = 21.0;
    /// Distances from this (km) use the 10K plan length
    pub const TEN_K_CLASS_KM: f64 = 10.0;

    /// Standard plan length for marathons and longer
    pub const STANDARD_WEEKS_MARATHON: u32 = 18;
    /// Standard plan length for half marathons
    pub const STANDARD_WEEKS_HALF: u32 = 14;
    /// Standard plan length for 10K
    pub const STANDARD_WEEKS_10K: u32 = 11;
    /// Standard plan length for shorter races
    pub const STANDARD_WEEKS_SHORT: u32 = 9;
}
