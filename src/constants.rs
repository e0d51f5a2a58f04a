// ABOUTME: Constants module re-exports from stride-core crate
// ABOUTME: Keeps crate::constants import paths stable for the engine modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use stride_core::constants::*;
