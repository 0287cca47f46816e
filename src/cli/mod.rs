// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Uses the `clap` crate
// to parse command line arguments and delegates all work to
// Layer 2 (application).
//
// Three commands are supported:
//   1. `extract`  — syllabus file → study plan JSON
//   2. `toggle`   — tick / untick a sub-topic in a saved plan
//   3. `progress` — completion report and exam countdown
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExtractArgs, ProgressArgs, ToggleArgs};

use crate::domain::error::ExtractionError;

/// Exit code for a syllabus that cannot be weighted
pub const EXIT_INVALID_INPUT: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "syllabus-planner",
    version,
    about = "Turn a course syllabus into a weighted, trackable study plan."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Extract(args)  => run_extract(args),
            Commands::Toggle(args)   => run_toggle(args),
            Commands::Progress(args) => run_progress(args),
        }
    }
}

/// Map a failed run to a process exit code: bad syllabus input
/// gets its own code, everything else is a generic failure.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ExtractionError>() {
        Some(ExtractionError::DegenerateInput) => EXIT_INVALID_INPUT,
        None => 1,
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    use crate::application::extract_use_case::ExtractUseCase;

    let output   = args.output.clone();
    let use_case = ExtractUseCase::new(args.into());
    let plan     = use_case.execute()?;

    match output {
        Some(path) => println!(
            "{}: {} topic(s), {} sub-topic(s) saved to {}",
            plan.exam_name,
            plan.topics.len(),
            plan.sub_topic_count(),
            path
        ),
        None => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}

fn run_toggle(args: ToggleArgs) -> Result<()> {
    use crate::application::progress_use_case::ProgressUseCase;

    let completed = ProgressUseCase::new(args.plan).toggle(&args.topic, &args.sub_topic)?;
    println!(
        "{} {}",
        args.sub_topic,
        if completed { "completed" } else { "not completed" }
    );
    Ok(())
}

fn run_progress(args: ProgressArgs) -> Result<()> {
    use crate::application::progress_use_case::ProgressUseCase;

    let now    = chrono::Local::now().naive_local();
    let report = ProgressUseCase::new(args.plan).report(now)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.exam_name);
    for topic in &report.topics {
        println!("  {:<4} {:<40} {:>6.2}% of {:>6.2}%", topic.id, topic.title, topic.completed, topic.weight);
    }
    println!("Overall progress: {}", format_overall(report.overall));
    if let Some(countdown) = &report.countdown {
        println!("Time until exam: {countdown}");
    }
    Ok(())
}

/// Whole-percent display; halves round away from zero (62.5 → 63)
fn format_overall(overall: f64) -> String {
    format!("{}%", overall.round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let degenerate = anyhow::Error::new(ExtractionError::DegenerateInput).context("while extracting");
        assert_eq!(exit_code(&degenerate), EXIT_INVALID_INPUT);
        assert_eq!(exit_code(&anyhow::anyhow!("disk on fire")), 1);
    }

    #[test]
    fn test_overall_progress_rounds_halves_up() {
        assert_eq!(format_overall(62.5), "63%");
        assert_eq!(format_overall(0.5), "1%");
        assert_eq!(format_overall(26.67), "27%");
        assert_eq!(format_overall(0.0), "0%");
        assert_eq!(format_overall(100.0), "100%");
    }
}
