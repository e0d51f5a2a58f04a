// ABOUTME: Core types and constants for the Stride training science engine
// ABOUTME: Foundation crate with error handling and physiological model constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing shared types and constants for the Stride
//! training science engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Model constants organized by domain (load model, VDOT, pace zones, periodization)

/// Unified error handling system with standard error codes
pub mod errors;

/// Model constants organized by domain
pub mod constants;
