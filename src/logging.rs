// ABOUTME: Logging configuration and structured logging setup for the engine and its CLI
// ABOUTME: Configures log level, output format and source locations on top of tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Library code only emits `tracing` events. Binaries call
//! [`LoggingConfig::init`] once to install a subscriber. Output goes to
//! stderr so that command results on stdout stay machine readable.

use std::env;
use std::fmt;
use std::io;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::{
    fmt as subscriber_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Default service name attached to startup events
pub const DEFAULT_SERVICE_NAME: &str = "stride-engine";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to compact
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            service_name: DEFAULT_SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION` and
    /// `SERVICE_NAME`; anything unset keeps its default.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |name| LogFormat::from_name(&name)),
            include_location: env::var("LOG_INCLUDE_LOCATION")
                .map_or(defaults.include_location, |v| v != "false" && v != "0"),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: defaults.service_version,
        }
    }

    /// Override the level, keeping everything else
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Build the filter applied to every event
    ///
    /// A bare level such as `debug` is scoped to this crate; full directive
    /// strings (`stride_engine=trace,info`) are used as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is not a valid filter directive.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let directive = if self.level.contains('=') || self.level.contains(',') {
            self.level.clone()
        } else {
            format!("warn,stride_engine={level},stride_cli={level}", level = self.level)
        };
        EnvFilter::try_new(&directive)
            .with_context(|| format!("Invalid log filter directive: {directive}"))
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the filter is invalid or a global subscriber is
    /// already installed.
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter()?);

        match self.format {
            LogFormat::Json => registry
                .with(
                    subscriber_fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    subscriber_fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    subscriber_fmt::layer()
                        .compact()
                        .with_file(false)
                        .with_line_number(false)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        }
        .context("Failed to install tracing subscriber")?;

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = %self.format,
            "logging initialized"
        );

        Ok(())
    }
}
