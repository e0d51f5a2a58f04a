// ABOUTME: Engine parameter configuration with environment variable overrides and validation
// ABOUTME: Holds Banister load model constants and dynamic VDOT heart-rate defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::constants::dynamic_vdot::{
    DEFAULT_MAX_HR, DEFAULT_RESTING_HR, EFFORT_BONUS_EXPONENT, EFFORT_BONUS_SCALE,
};
use crate::constants::load_model::{
    K_FATIGUE, K_FITNESS, PERFORMANCE_BASELINE, TAU_FATIGUE_DAYS, TAU_FITNESS_DAYS,
};
use crate::intelligence::aerobic_capacity::DynamicVdotParams;
use crate::intelligence::training_load::BanisterModel;

/// Banister impulse-response model parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadModelConfig {
    /// Fitness decay time constant in days
    pub tau_fitness: f64,
    /// Fatigue decay time constant in days
    pub tau_fatigue: f64,
    /// Performance with empty accumulators
    pub baseline: f64,
    /// Fitness gain (k1)
    pub k_fitness: f64,
    /// Fatigue gain (k2)
    pub k_fatigue: f64,
}

impl Default for LoadModelConfig {
    fn default() -> Self {
        Self {
            tau_fitness: TAU_FITNESS_DAYS,
            tau_fatigue: TAU_FATIGUE_DAYS,
            baseline: PERFORMANCE_BASELINE,
            k_fitness: K_FITNESS,
            k_fatigue: K_FATIGUE,
        }
    }
}

impl LoadModelConfig {
    /// Build the simulator model from these parameters
    #[must_use]
    pub const fn model(&self) -> BanisterModel {
        BanisterModel {
            tau_fitness: self.tau_fitness,
            tau_fatigue: self.tau_fatigue,
            baseline: self.baseline,
            k_fitness: self.k_fitness,
            k_fatigue: self.k_fatigue,
        }
    }
}

/// Dynamic VDOT defaults used when a caller does not supply heart-rate bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityConfig {
    /// Bonus at zero relative effort (`a`)
    pub dynamic_vdot_a: f64,
    /// Curvature of the effort bonus (`b`)
    pub dynamic_vdot_b: f64,
    /// Default maximum heart rate (bpm)
    pub default_max_hr: f64,
    /// Default resting heart rate (bpm)
    pub default_resting_hr: f64,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            dynamic_vdot_a: EFFORT_BONUS_SCALE,
            dynamic_vdot_b: EFFORT_BONUS_EXPONENT,
            default_max_hr: DEFAULT_MAX_HR,
            default_resting_hr: DEFAULT_RESTING_HR,
        }
    }
}

impl CapacityConfig {
    /// Dynamic VDOT parameters from these defaults
    #[must_use]
    pub const fn dynamic_params(&self) -> DynamicVdotParams {
        DynamicVdotParams {
            max_hr: self.default_max_hr,
            resting_hr: self.default_resting_hr,
            effort_scale: self.dynamic_vdot_a,
            effort_exponent: self.dynamic_vdot_b,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Training load simulator parameters
    pub load: LoadModelConfig,
    /// Aerobic capacity estimator parameters
    pub capacity: CapacityConfig,
}

impl EngineConfig {
    /// Load configuration from defaults and `STRIDE_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed or the
    /// resulting configuration fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns an error if a time constant is not positive, a gain is
    /// negative, or the default heart-rate bounds are inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let load = &self.load;
        if load.tau_fitness.is_nan() || load.tau_fitness <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Fitness time constant must be positive",
            ));
        }
        if load.tau_fatigue.is_nan() || load.tau_fatigue <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Fatigue time constant must be positive",
            ));
        }
        if load.k_fitness.is_nan() || load.k_fitness < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Fitness gain must not be negative",
            ));
        }
        if load.k_fatigue.is_nan() || load.k_fatigue < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Fatigue gain must not be negative",
            ));
        }
        if !load.baseline.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "Performance baseline must be finite",
            ));
        }

        let capacity = &self.capacity;
        if capacity.default_max_hr <= capacity.default_resting_hr
            || capacity.default_max_hr.is_nan()
            || capacity.default_resting_hr.is_nan()
        {
            return Err(ConfigError::InvalidRange(
                "default_resting_hr must be < default_max_hr",
            ));
        }
        if capacity.dynamic_vdot_a < 0.0 || capacity.dynamic_vdot_b <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Dynamic VDOT bonus scale must be >= 0 and exponent > 0",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("STRIDE_LOAD_TAU_FITNESS", &mut self.load.tau_fitness)?;
        Self::apply_env_var("STRIDE_LOAD_TAU_FATIGUE", &mut self.load.tau_fatigue)?;
        Self::apply_env_var("STRIDE_LOAD_BASELINE", &mut self.load.baseline)?;
        Self::apply_env_var("STRIDE_LOAD_K_FITNESS", &mut self.load.k_fitness)?;
        Self::apply_env_var("STRIDE_LOAD_K_FATIGUE", &mut self.load.k_fatigue)?;

        Self::apply_env_var("STRIDE_DYNAMIC_VDOT_A", &mut self.capacity.dynamic_vdot_a)?;
        Self::apply_env_var("STRIDE_DYNAMIC_VDOT_B", &mut self.capacity.dynamic_vdot_b)?;
        Self::apply_env_var("STRIDE_DEFAULT_MAX_HR", &mut self.capacity.default_max_hr)?;
        Self::apply_env_var(
            "STRIDE_DEFAULT_RESTING_HR",
            &mut self.capacity.default_resting_hr,
        )?;

        Ok(self)
    }
}
