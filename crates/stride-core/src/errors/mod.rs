// ABOUTME: Unified error handling for the Stride training science engine
// ABOUTME: Defines ErrorCode, AppError and the AppResult alias shared by all crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Domain computations in the engine mostly degrade silently (progression
//! helpers return their input unchanged, pace parsing yields a sentinel).
//! The few conditions that cannot produce a meaningful number, such as a
//! heart-rate reserve of zero, surface as an [`AppError`] carrying one of the
//! codes below.

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    InvalidInput = 3000,
    /// Input could not be parsed
    InvalidFormat = 3002,
    /// Numeric input outside the range the model is defined on
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Generic configuration failure
    ConfigError = 6000,
    /// Configuration value present but invalid
    ConfigInvalid = 6002,

    // Serialization (9000-9999)
    /// Serialization or deserialization failure
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Additional key-value context
    pub details: Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            details: Value::Object(Map::new()),
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Unparsable input
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Numeric input outside the model's domain
    #[must_use]
    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}
