// ABOUTME: Banister impulse-response training load simulator over a caller-owned state
// ABOUTME: Decays fitness and fatigue accumulators by calendar day and predicts performance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Load Simulator
//!
//! Fitness and fatigue are two exponentially decaying accumulators fed by
//! training impulses (TRIMP). Performance is modelled as
//! `baseline + k1 × fitness − k2 × fatigue`.
//!
//! The simulator owns no state. Each athlete (or session) owns one
//! [`LoadState`] and passes it to [`BanisterModel`] operations; sharing one
//! state between threads requires external synchronisation.
//!
//! Elapsed time is always measured in whole calendar days between
//! [`NaiveDate`]s, never fractional hours.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::load_model::{
    FORM_DETRAINING, FORM_OVERREACHING, K_FATIGUE, K_FITNESS, PERFORMANCE_BASELINE,
    TAU_FATIGUE_DAYS, TAU_FITNESS_DAYS,
};

/// Fitness/fatigue accumulators for one athlete
///
/// Created empty, mutated only through [`BanisterModel::update`] (or the
/// [`LoadState::update`] shorthand) and cleared with [`LoadState::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadState {
    /// Long-term adaptation accumulator
    pub fitness: f64,
    /// Short-term fatigue accumulator
    pub fatigue: f64,
    /// Calendar date of the last impulse applied (None before the first update)
    pub last_update_date: Option<NaiveDate>,
}

impl LoadState {
    /// Create an empty state (zero accumulators, no update date)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fitness: 0.0,
            fatigue: 0.0,
            last_update_date: None,
        }
    }

    /// Zero both accumulators and forget the last update date
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Apply a session with the standard model constants
    pub fn update(&mut self, date: NaiveDate, trimp: f64) -> LoadTransition {
        BanisterModel::default().update(self, date, trimp)
    }

    /// Current performance with the standard model constants
    #[must_use]
    pub fn performance(&self) -> PerformancePrediction {
        BanisterModel::default().performance(self)
    }

    /// Projected performance on `date` with the standard model constants
    #[must_use]
    pub fn performance_for_date(&self, date: NaiveDate) -> PerformancePrediction {
        BanisterModel::default().performance_for_date(self, date)
    }
}

/// A dated training impulse
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Training impulse of the session
    pub trimp: f64,
}

/// Which branch an update took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadTransition {
    /// First update on an empty state: accumulators seeded with the impulse
    Initialized,
    /// Days elapsed and an impulse was recorded: decay, then add
    DecayedAndLoaded {
        /// Whole calendar days since the previous update
        days: i64,
    },
    /// Days elapsed without training: decay only, update date kept
    Decayed {
        /// Whole calendar days since the previous update
        days: i64,
    },
    /// Additional session on the same day: add without decay
    SameDayLoad,
    /// Nothing to apply
    Unchanged,
}

/// Training status derived from form (fitness − fatigue)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingStatus {
    /// Form < -10: Overreaching, high fatigue
    Overreaching,
    /// Form -10 to 0: Productive training zone
    Productive,
    /// Form 0 to +10: Fresh, ready to perform
    Fresh,
    /// Form > +10: Risk of detraining
    Detraining,
}

impl TrainingStatus {
    /// Interpret a form value
    #[must_use]
    pub fn from_form(form: f64) -> Self {
        if form < FORM_OVERREACHING {
            Self::Overreaching
        } else if form < 0.0 {
            Self::Productive
        } else if form <= FORM_DETRAINING {
            Self::Fresh
        } else {
            Self::Detraining
        }
    }
}

/// Performance predicted from the accumulators at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformancePrediction {
    /// Date the prediction refers to (None when read from an empty state)
    pub date: Option<NaiveDate>,
    /// Fitness accumulator at that date
    pub fitness: f64,
    /// Fatigue accumulator at that date
    pub fatigue: f64,
    /// `fitness − fatigue`
    pub form: f64,
    /// `baseline + k1 × fitness − k2 × fatigue`
    pub performance: f64,
    /// Interpretation of `form`
    pub status: TrainingStatus,
}

/// Banister impulse-response model parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BanisterModel {
    /// Fitness decay time constant (days)
    pub tau_fitness: f64,
    /// Fatigue decay time constant (days)
    pub tau_fatigue: f64,
    /// Performance with empty accumulators
    pub baseline: f64,
    /// Fitness gain (k1)
    pub k_fitness: f64,
    /// Fatigue gain (k2)
    pub k_fatigue: f64,
}

impl Default for BanisterModel {
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

impl BanisterModel {
    /// Apply one training impulse dated `date` to `state`
    ///
    /// - First update: both accumulators are set to `trimp`.
    /// - Days elapsed with `trimp > 0`: decay by `e^(−days/τ)`, add `trimp`,
    ///   advance the update date.
    /// - Days elapsed with no training: decay only. The update date is NOT
    ///   advanced, so the next call decays the same interval again. Callers
    ///   persisting state rely on this behaviour.
    /// - Same day with `trimp > 0`: add without decay.
    ///
    /// Dates earlier than the last update are applied as same-day sessions;
    /// the update date never moves backwards.
    pub fn update(&self, state: &mut LoadState, date: NaiveDate, trimp: f64) -> LoadTransition {
        let Some(last) = state.last_update_date else {
            state.fitness = trimp;
            state.fatigue = trimp;
            state.last_update_date = Some(date);
            debug!(%date, trimp, "load state initialized");
            return LoadTransition::Initialized;
        };

        let days = (date - last).num_days();
        let loaded = trimp > 0.0;

        let transition = if days > 0 {
            let (fitness_decay, fatigue_decay) = self.decay_factors(days);
            state.fitness *= fitness_decay;
            state.fatigue *= fatigue_decay;
            if loaded {
                state.fitness += trimp;
                state.fatigue += trimp;
                state.last_update_date = Some(date);
                LoadTransition::DecayedAndLoaded { days }
            } else {
                LoadTransition::Decayed { days }
            }
        } else if loaded {
            if days < 0 {
                warn!(%date, %last, "session dated before last update, applied without decay");
            }
            state.fitness += trimp;
            state.fatigue += trimp;
            LoadTransition::SameDayLoad
        } else {
            LoadTransition::Unchanged
        };

        debug!(
            %date,
            trimp,
            fitness = state.fitness,
            fatigue = state.fatigue,
            ?transition,
            "load state updated"
        );
        transition
    }

    /// Apply sessions in order
    pub fn replay(&self, state: &mut LoadState, sessions: &[TrainingSession]) {
        for session in sessions {
            self.update(state, session.date, session.trimp);
        }
    }

    /// Performance from the current accumulators, without decay
    #[must_use]
    pub fn performance(&self, state: &LoadState) -> PerformancePrediction {
        self.prediction(state.last_update_date, state.fitness, state.fatigue)
    }

    /// Performance projected to `date` without mutating `state`
    ///
    /// Returns the baseline when the state has never been updated. Dates on
    /// or before the last update are not decayed.
    #[must_use]
    pub fn performance_for_date(&self, state: &LoadState, date: NaiveDate) -> PerformancePrediction {
        let Some(last) = state.last_update_date else {
            return self.prediction(Some(date), 0.0, 0.0);
        };

        let days = (date - last).num_days().max(0);
        let (fitness_decay, fatigue_decay) = self.decay_factors(days);
        self.prediction(
            Some(date),
            state.fitness * fitness_decay,
            state.fatigue * fatigue_decay,
        )
    }

    fn decay_factors(&self, days: i64) -> (f64, f64) {
        let days = days as f64;
        (
            (-days / self.tau_fitness).exp(),
            (-days / self.tau_fatigue).exp(),
        )
    }

    fn prediction(&self, date: Option<NaiveDate>, fitness: f64, fatigue: f64) -> PerformancePrediction {
        let form = fitness - fatigue;
        PerformancePrediction {
            date,
            fitness,
            fatigue,
            form,
            performance: self
                .k_fitness
                .mul_add(fitness, (-self.k_fatigue).mul_add(fatigue, self.baseline)),
            status: TrainingStatus::from_form(form),
        }
    }
}

/// Recommended recovery days for a given form value
#[must_use]
pub fn recommend_recovery_days(form: f64) -> u32 {
    // Multi-level threshold function for recovery recommendations
    const VERY_DEEP_FATIGUE: f64 = -20.0;
    const DEEP_FATIGUE: f64 = -15.0;
    const MODERATE_FATIGUE: f64 = -10.0;
    const LIGHT_FATIGUE: f64 = 0.0;

    if form < VERY_DEEP_FATIGUE {
        return 5;
    }
    if form < DEEP_FATIGUE {
        return 3;
    }
    if form < MODERATE_FATIGUE {
        return 2;
    }
    if form < LIGHT_FATIGUE {
        return 1;
    }
    0
}
