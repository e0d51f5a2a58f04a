// ABOUTME: Configuration error types for engine parameter validation
// ABOUTME: Defines error variants for invalid ranges and unparsable environment values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use crate::errors::{AppError, ErrorCode};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related values are not ordered as required
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::Parse(_) => ErrorCode::ConfigError,
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                ErrorCode::ConfigInvalid
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
