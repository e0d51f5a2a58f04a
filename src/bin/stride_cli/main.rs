// ABOUTME: Stride CLI - command-line front end for the training science engine
// ABOUTME: Computes VDOT, pace tables, TRIMP, capacity targets, plan starts and load projections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # VDOT from a 10K in 40:00
//! stride-cli vdot --distance 10000 --time 40:00
//!
//! # Heart-rate adjusted VDOT for the same race run at 165 bpm
//! stride-cli vdot --distance 10000 --time 40:00 --hr 165
//!
//! # Race and training paces for VDOT 50
//! stride-cli paces --vdot 50
//!
//! # Training impulse of a 60 minute session
//! stride-cli trimp --duration 60 --avg-hr 150 --resting-hr 55 --max-hr 190
//!
//! # Capacity target for a difficulty budget over 16 weeks
//! stride-cli target --vdot 45 --difficulty 25 --weeks 16 --age 35
//!
//! # Start-stage recommendation for a marathon 16 weeks away
//! stride-cli plan --weeks 16 --distance 42.195
//!
//! # Replay a session file and project performance
//! stride-cli load --sessions sessions.json --date 2025-05-01 --json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use stride_engine::config::EngineConfig;
use stride_engine::constants::periodization::DEFAULT_TARGET_DISTANCE_KM;
use stride_engine::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "stride-cli",
    about = "Stride training science engine",
    long_about = "Training load, aerobic capacity (VDOT) and periodization calculations for running plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// VDOT from a race performance
    Vdot {
        /// Race distance in meters
        #[arg(long)]
        distance: f64,

        /// Finish time as h:mm:ss, m:ss or seconds
        #[arg(long)]
        time: String,

        /// Average heart rate, enables the heart-rate adjusted VDOT
        #[arg(long)]
        hr: Option<f64>,

        /// Maximum heart rate (defaults to STRIDE_DEFAULT_MAX_HR)
        #[arg(long)]
        max_hr: Option<f64>,

        /// Resting heart rate (defaults to STRIDE_DEFAULT_RESTING_HR)
        #[arg(long)]
        resting_hr: Option<f64>,
    },

    /// Race predictions and training paces for a VDOT
    Paces {
        /// VDOT value
        #[arg(long)]
        vdot: f64,

        /// Show planner workout zones instead of Daniels zones
        #[arg(long)]
        workout: bool,
    },

    /// Training impulse of a session
    Trimp {
        /// Duration in minutes
        #[arg(long)]
        duration: f64,

        /// Average heart rate
        #[arg(long)]
        avg_hr: f64,

        /// Resting heart rate (defaults to STRIDE_DEFAULT_RESTING_HR)
        #[arg(long)]
        resting_hr: Option<f64>,

        /// Maximum heart rate (defaults to STRIDE_DEFAULT_MAX_HR)
        #[arg(long)]
        max_hr: Option<f64>,

        /// Weighting: male or female
        #[arg(long, default_value = "male")]
        algorithm: String,
    },

    /// Capacity target reachable for a difficulty budget
    Target {
        /// Current VDOT
        #[arg(long)]
        vdot: f64,

        /// Difficulty budget
        #[arg(long)]
        difficulty: f64,

        /// Plan length in weeks
        #[arg(long)]
        weeks: u32,

        /// Athlete age in years
        #[arg(long)]
        age: u32,
    },

    /// Start-stage recommendation and phase allocation
    Plan {
        /// Weeks until race day
        #[arg(long)]
        weeks: u32,

        /// Race distance in kilometres
        #[arg(long, default_value_t = DEFAULT_TARGET_DISTANCE_KM)]
        distance: f64,
    },

    /// Replay a session file and project performance
    Load {
        /// JSON file with training sessions
        #[arg(long)]
        sessions: PathBuf,

        /// Project performance to this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Weighting for heart-rate sessions: male or female
        #[arg(long, default_value = "male")]
        algorithm: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = EngineConfig::from_env()?;
    debug!(?config, "engine configuration loaded");

    let output = commands::Output { json: cli.json };

    match cli.command {
        Command::Vdot {
            distance,
            time,
            hr,
            max_hr,
            resting_hr,
        } => commands::capacity::vdot(
            &output,
            &config,
            distance,
            &time,
            hr,
            max_hr,
            resting_hr,
        )?,
        Command::Paces { vdot, workout } => commands::capacity::paces(&output, vdot, workout)?,
        Command::Trimp {
            duration,
            avg_hr,
            resting_hr,
            max_hr,
            algorithm,
        } => commands::load::trimp(
            &output,
            &config,
            duration,
            avg_hr,
            resting_hr,
            max_hr,
            &algorithm,
        )?,
        Command::Target {
            vdot,
            difficulty,
            weeks,
            age,
        } => commands::capacity::target(&output, vdot, difficulty, weeks, age)?,
        Command::Plan { weeks, distance } => commands::plan::recommend(&output, weeks, distance)?,
        Command::Load {
            sessions,
            date,
            algorithm,
        } => commands::load::replay(&output, &config, &sessions, date, &algorithm)?,
    }

    Ok(())
}
