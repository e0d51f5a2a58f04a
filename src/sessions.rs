// ABOUTME: Training session file parsing for batch load replay
// ABOUTME: Accepts sessions as precomputed TRIMP or as duration plus heart-rate summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session files are JSON arrays. Each entry is either
//!
//! ```json
//! { "date": "2025-03-01", "trimp": 85.0 }
//! ```
//!
//! or a heart-rate summary that is converted with the Banister TRIMP
//! formula. Missing heart-rate bounds fall back to the configured defaults:
//!
//! ```json
//! { "date": "2025-03-02", "duration_minutes": 45, "avg_hr": 150, "max_hr": 188 }
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CapacityConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::algorithms::TrimpAlgorithm;
use crate::intelligence::training_load::TrainingSession;

/// One entry of a session file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionRecord {
    /// Session with a precomputed training impulse
    Impulse {
        /// Calendar date of the session
        date: NaiveDate,
        /// Training impulse
        trimp: f64,
    },
    /// Session described by duration and heart rate
    HeartRate {
        /// Calendar date of the session
        date: NaiveDate,
        /// Session duration in minutes
        duration_minutes: f64,
        /// Average heart rate (bpm)
        avg_hr: f64,
        /// Resting heart rate (bpm), configured default when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        resting_hr: Option<f64>,
        /// Maximum heart rate (bpm), configured default when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_hr: Option<f64>,
    },
}

impl SessionRecord {
    /// Calendar date of the entry
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        match self {
            Self::Impulse { date, .. } | Self::HeartRate { date, .. } => *date,
        }
    }

    /// Resolve the entry into a dated training impulse
    ///
    /// # Errors
    ///
    /// Returns an error if a heart-rate entry has invalid heart-rate bounds
    /// or a negative duration.
    pub fn to_session(
        &self,
        algorithm: TrimpAlgorithm,
        defaults: &CapacityConfig,
    ) -> AppResult<TrainingSession> {
        let trimp = match *self {
            Self::Impulse { trimp, .. } => trimp,
            Self::HeartRate {
                duration_minutes,
                avg_hr,
                resting_hr,
                max_hr,
                ..
            } => algorithm.calculate(
                duration_minutes,
                avg_hr,
                resting_hr.unwrap_or(defaults.default_resting_hr),
                max_hr.unwrap_or(defaults.default_max_hr),
            )?,
        };
        Ok(TrainingSession {
            date: self.date(),
            trimp,
        })
    }
}

/// Parse a JSON session list into training sessions ordered by date
///
/// Entries sharing a date keep their file order.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or an entry cannot be
/// converted to a training impulse.
pub fn parse_sessions(
    json: &str,
    algorithm: TrimpAlgorithm,
    defaults: &CapacityConfig,
) -> AppResult<Vec<TrainingSession>> {
    let records: Vec<SessionRecord> = serde_json::from_str(json)?;
    let mut sessions = records
        .iter()
        .map(|record| record.to_session(algorithm, defaults))
        .collect::<AppResult<Vec<_>>>()?;
    sessions.sort_by_key(|session| session.date);
    debug!(count = sessions.len(), "training sessions parsed");
    Ok(sessions)
}

/// Read and parse a session file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are invalid.
pub fn read_sessions(
    path: &Path,
    algorithm: TrimpAlgorithm,
    defaults: &CapacityConfig,
) -> AppResult<Vec<TrainingSession>> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read session file {}", path.display()))
            .with_source(e)
    })?;
    parse_sessions(&json, algorithm, defaults)
}
