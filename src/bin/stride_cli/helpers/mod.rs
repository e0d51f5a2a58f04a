// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for stride-cli
// ABOUTME: Provides text formatting for command results

pub mod display;
