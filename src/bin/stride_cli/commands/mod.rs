// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command implementations for stride-cli
// ABOUTME: Shared output mode handling plus capacity, load and plan commands

use serde::Serialize;
use stride_engine::errors::AppResult;

pub mod capacity;
pub mod load;
pub mod plan;

/// Output mode selected on the command line
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Print `value` as pretty JSON, or run `human` for the text view
    pub fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce(&T)) -> AppResult<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human(value);
        }
        Ok(())
    }
}
