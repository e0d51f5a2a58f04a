// ABOUTME: Configuration management module for the training science engine
// ABOUTME: Loads load-model and capacity-estimator parameters from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Stride engine
//!
//! - **Engine**: Banister model constants and dynamic VDOT defaults
//! - **Error**: Validation and parse failures raised while loading

/// Engine parameters loaded from environment variables
pub mod engine;
/// Configuration error types
pub mod error;

pub use engine::{CapacityConfig, EngineConfig, LoadModelConfig};
pub use error::ConfigError;
