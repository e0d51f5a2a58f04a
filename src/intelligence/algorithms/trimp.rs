// ABOUTME: Training Impulse (TRIMP) calculation with gender-specific Banister weighting
// ABOUTME: Converts session duration and heart-rate-reserve ratio into a training stimulus

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::trimp::{
    BASE_MULTIPLIER, FEMALE_EXPONENTIAL_FACTOR, MALE_EXPONENTIAL_FACTOR,
};
use crate::errors::{AppError, AppResult};

/// TRIMP calculation algorithm selection
///
/// - `BannisterMale`: Classic Bannister formula for males (exp(1.92))
/// - `BannisterFemale`: Classic Bannister formula for females (exp(1.67))
///
/// # Scientific References
///
/// - Bannister, E.W. (1991). "Modeling elite athletic performance." *Physiological Testing of Elite Athletes*.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrimpAlgorithm {
    /// Bannister formula for males
    ///
    /// Formula: `duration_minutes × HR_reserve_fraction × 0.64 × exp(1.92 × HR_reserve_fraction)`
    ///
    /// Where `HR_reserve_fraction = (avg_hr - resting_hr) / (max_hr - resting_hr)`
    #[default]
    BannisterMale,

    /// Bannister formula for females
    ///
    /// Uses the lower exponential factor (1.67 vs 1.92)
    BannisterFemale,
}

impl TrimpAlgorithm {
    /// Calculate TRIMP for a session
    ///
    /// The heart-rate-reserve ratio is not clamped: an average below resting
    /// heart rate yields a negative impulse, which the load simulator treats
    /// like a rest day.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if `max_hr <= resting_hr`, and
    /// `ErrorCode::InvalidInput` if the duration is negative or any input is
    /// not finite.
    pub fn calculate(
        self,
        duration_minutes: f64,
        avg_hr: f64,
        resting_hr: f64,
        max_hr: f64,
    ) -> AppResult<f64> {
        if ![duration_minutes, avg_hr, resting_hr, max_hr]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(AppError::invalid_input(
                "TRIMP inputs must be finite numbers",
            ));
        }
        if duration_minutes < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Duration must not be negative, got {duration_minutes} minutes"
            )));
        }
        if max_hr <= resting_hr {
            return Err(AppError::invalid_range(format!(
                "Maximum heart rate ({max_hr}) must exceed resting heart rate ({resting_hr})"
            )));
        }

        let hr_ratio = (avg_hr - resting_hr) / (max_hr - resting_hr);
        let weight = BASE_MULTIPLIER * (self.exponential_factor() * hr_ratio).exp();

        Ok(duration_minutes * hr_ratio * weight)
    }

    const fn exponential_factor(self) -> f64 {
        match self {
            Self::BannisterMale => MALE_EXPONENTIAL_FACTOR,
            Self::BannisterFemale => FEMALE_EXPONENTIAL_FACTOR,
        }
    }

    /// Get algorithm name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BannisterMale => "bannister_male",
            Self::BannisterFemale => "bannister_female",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::BannisterMale => {
                "duration × HR_reserve_fraction × 0.64 × exp(1.92 × HR_reserve_fraction)"
            }
            Self::BannisterFemale => {
                "duration × HR_reserve_fraction × 0.64 × exp(1.67 × HR_reserve_fraction)"
            }
        }
    }
}

impl FromStr for TrimpAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bannister_male" | "bannister" | "male" => Ok(Self::BannisterMale),
            "bannister_female" | "female" => Ok(Self::BannisterFemale),
            other => Err(AppError::invalid_input(format!(
                "Unknown TRIMP algorithm: '{other}'. Valid options: bannister_male, bannister_female"
            ))),
        }
    }
}

/// Training impulse for a session, using the standard (male) Banister weighting
///
/// `duration_seconds` is converted to minutes before weighting.
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` if `max_hr <= resting_hr`.
pub fn calculate_trimp(
    duration_seconds: f64,
    avg_hr: f64,
    resting_hr: f64,
    max_hr: f64,
) -> AppResult<f64> {
    TrimpAlgorithm::BannisterMale.calculate(duration_seconds / 60.0, avg_hr, resting_hr, max_hr)
}
