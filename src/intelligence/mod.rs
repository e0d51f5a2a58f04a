// ABOUTME: Training science components: load simulation, aerobic capacity and periodization
// ABOUTME: Groups the pure numerical engines and re-exports their most used types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Training science computations for running plans. Every component is
//! synchronous and free of I/O; the only mutable value is the caller-owned
//! [`LoadState`].

/// VDOT estimation, pace tables and capacity progression
pub mod aerobic_capacity;
/// Numerical building blocks (bisection, TRIMP)
pub mod algorithms;
/// Pace string formatting and parsing
pub mod pace;
/// Start-stage recommendation and phase allocation
pub mod periodization;
/// Banister fitness/fatigue simulator
pub mod training_load;

pub use aerobic_capacity::{
    calculate_difficulty_index, calculate_dynamic_vdot, calculate_proposed_vdot, calculate_vdot,
    paces, race_predictions, training_paces, PaceZone, RaceDistance, RacePrediction,
};
pub use algorithms::{calculate_trimp, TrimpAlgorithm};
pub use periodization::{
    calculate_training_periods, recommend_start_stage, RiskLevel, StageRecommendation,
    TrainingDistribution, TrainingStagePhase,
};
pub use training_load::{
    BanisterModel, LoadState, PerformancePrediction, TrainingSession, TrainingStatus,
};
