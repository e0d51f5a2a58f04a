// ABOUTME: Main library entry point for the Stride training science engine
// ABOUTME: Exposes load simulation, aerobic capacity estimation and periodization planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride Engine
//!
//! The deterministic numerical core behind a runner's training plan. Three
//! independent, side-effect-free components live under [`intelligence`]:
//!
//! - **Training load simulator**: heart-rate based training impulse (TRIMP)
//!   and a Banister impulse-response model over a caller-owned `LoadState`
//! - **Aerobic capacity estimator**: Jack Daniels' VDOT, race and training
//!   paces, difficulty-scaled capacity targets and VDOT progressions
//! - **Periodization planner**: start-stage recommendation, risk scoring and
//!   allocation of the remaining weeks across training phases
//!
//! None of them perform I/O. Persistence of `LoadState`, rendering of pace
//! tables and construction of weekly schedules belong to the caller.
//!
//! ## Example Usage
//!
//! ```rust
//! use stride_engine::intelligence::aerobic_capacity::{calculate_vdot, paces, RaceDistance};
//! use stride_engine::intelligence::periodization::recommend_start_stage;
//!
//! # fn main() -> stride_engine::errors::AppResult<()> {
//! let vdot = calculate_vdot(10_000.0, 2_400.0)?;
//! let race_paces = paces(vdot);
//! let recommendation = recommend_start_stage(16, 42.195);
//! println!("VDOT {vdot:.1}, marathon pace {}", race_paces[&RaceDistance::Marathon]);
//! println!("start with {:?}", recommendation.recommended_stage);
//! # Ok(())
//! # }
//! ```

/// Environment-driven engine configuration
pub mod config;

/// Model constants organized by domain
pub mod constants;

/// Unified error handling with standard error codes
pub mod errors;

/// Training science algorithms (load model, VDOT, periodization)
pub mod intelligence;

/// Structured logging setup on top of `tracing`
pub mod logging;

/// Session file parsing for batch load replay
pub mod sessions;
