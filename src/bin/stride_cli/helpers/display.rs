// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Text output formatting for stride-cli
// ABOUTME: Renders command reports as aligned, human-readable tables

use stride_engine::intelligence::periodization::{StageRecommendation, TrainingStagePhase};
use stride_engine::intelligence::training_load::PerformancePrediction;
use stride_engine::intelligence::RacePrediction;

use crate::commands::capacity::{PacesReport, TargetReport, VdotReport};
use crate::commands::load::{LoadReport, TrimpReport};

fn predictions_table(predictions: &[RacePrediction]) {
    println!("   {:<14} {:>9} {:>8}", "Race", "Time", "Pace/km");
    for prediction in predictions {
        println!(
            "   {:<14} {:>9} {:>8}",
            prediction.distance.name(),
            prediction.finish_time(),
            prediction.pace()
        );
    }
}

fn prediction_lines(label: &str, prediction: &PerformancePrediction) {
    match prediction.date {
        Some(date) => println!("{label} ({date}):"),
        None => println!("{label}:"),
    }
    println!("   Fitness:     {:.1}", prediction.fitness);
    println!("   Fatigue:     {:.1}", prediction.fatigue);
    println!("   Form:        {:.1} ({:?})", prediction.form, prediction.status);
    println!("   Performance: {:.1}", prediction.performance);
}

/// Display a VDOT calculation
pub fn vdot_report(report: &VdotReport) {
    println!("VDOT: {:.1}", report.vdot);
    if let Some(dynamic) = report.dynamic_vdot {
        println!("Heart-rate adjusted VDOT: {dynamic:.1}");
    }
    println!("\nEquivalent performances:");
    predictions_table(&report.predictions);
}

/// Display race predictions and zone paces
pub fn paces_report(report: &PacesReport) {
    println!("Paces for VDOT {:.1}", report.vdot);
    println!("{}", "=".repeat(40));
    predictions_table(&report.predictions);

    println!("\nTraining zones (min/km, fast ~ slow):");
    if let Some(training) = &report.training {
        for (zone, range) in training {
            println!("   {:<12} {range}", format!("{zone:?}"));
        }
    }
    if let Some(workout) = &report.workout {
        for (zone, range) in workout {
            println!("   {:<12} {range}", format!("{zone:?}"));
        }
    }
}

/// Display a capacity target and its progression
pub fn target_report(report: &TargetReport) {
    println!(
        "Target VDOT: {:.1} -> {:.1} over {} weeks (age {})",
        report.current_vdot, report.proposed_vdot, report.weeks, report.age
    );
    println!(
        "Difficulty: {:.2} requested, {:.2} achieved",
        report.difficulty, report.achieved_difficulty
    );
    if report.progression.is_empty() {
        return;
    }
    println!("\n   {:>4} {:>8} {:>12}", "Week", "Linear", "Progressive");
    for week in &report.progression {
        println!(
            "   {:>4} {:>8.1} {:>12.1}",
            week.week, week.weekly_vdot, week.progressive_vdot
        );
    }
}

/// Display a training impulse
pub fn trimp_report(report: &TrimpReport) {
    println!(
        "TRIMP: {:.1} ({}, {:.0} min at {:.0} bpm, HR {:.0}-{:.0})",
        report.trimp,
        report.algorithm,
        report.duration_minutes,
        report.avg_hr,
        report.resting_hr,
        report.max_hr
    );
}

/// Display a session replay
pub fn load_report(report: &LoadReport) {
    println!("Replayed {} session(s)", report.sessions);
    prediction_lines("\nCurrent", &report.current);
    if let Some(projected) = &report.projected {
        prediction_lines("\nProjected", projected);
    }
    println!("\nRecommended recovery: {} day(s)", report.recovery_days);
}

/// Display a start-stage recommendation
pub fn plan_report(recommendation: &StageRecommendation) {
    println!(
        "Start from: {} (risk: {})",
        recommendation.recommended_stage, recommendation.risk_level
    );
    println!("Reason: {}", recommendation.reason);
    if recommendation.is_too_short() {
        println!("Warning: fewer than 2 weeks remain");
    }

    println!("\nPhase allocation ({} weeks):", recommendation.weeks_remaining);
    for stage in TrainingStagePhase::ALL {
        let weeks = recommendation.distribution.weeks_for(stage);
        if weeks > 0 {
            println!("   {:<12} {weeks:>2}  {}", stage.display_name(), stage.focus());
        }
    }

    if !recommendation.alternatives.is_empty() {
        println!("\nAlternatives:");
        for alternative in &recommendation.alternatives {
            println!(
                "   {} (risk: {}): {}",
                alternative.stage, alternative.risk_level, alternative.description
            );
            println!("      Suits: {}", alternative.suitability);
        }
    }
}
