// ============================================================
// Layer 2 — ProgressUseCase
// ============================================================
// Works on a study plan saved by `extract --output`:
//
//   toggle  → load plan, flip one sub-topic, save plan
//   report  → load plan, sum completed weightage per topic,
//             work out the time left until the exam
//
// Reference: Rust Book §5 (Structs), §9 (Error Handling)

use anyhow::Result;
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::plan::{format_countdown, topic_progress, StudyPlan};
use crate::domain::traits::Persistable;
use crate::parser::weight::round2;

/// Completion of one topic, in percent of the whole course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicProgress {
    pub id:        String,
    pub title:     String,
    pub completed: f64,
    pub weight:    f64,
}

/// Snapshot of a plan's progress at a given moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub exam_name: String,
    /// Percent of the course completed, rounded to 2 decimals
    pub overall:   f64,
    pub topics:    Vec<TopicProgress>,
    /// "3d 4h 15m", None when the plan has no valid exam date
    pub countdown: Option<String>,
}

impl ProgressReport {
    pub fn from_plan(plan: &StudyPlan, now: NaiveDateTime) -> Self {
        let topics = plan
            .topics
            .iter()
            .map(|t| TopicProgress {
                id:        t.id.clone(),
                title:     t.title.clone(),
                completed: round2(topic_progress(t)),
                weight:    t.weight,
            })
            .collect();

        Self {
            exam_name: plan.exam_name.clone(),
            overall:   round2(plan.progress()),
            topics,
            countdown: plan.time_until_exam(now).map(format_countdown),
        }
    }
}

// ─── ProgressUseCase ──────────────────────────────────────────────────────────
pub struct ProgressUseCase {
    plan_path: String,
}

impl ProgressUseCase {
    pub fn new(plan_path: impl Into<String>) -> Self {
        Self { plan_path: plan_path.into() }
    }

    /// Flip one sub-topic and save the plan. Returns the new state.
    pub fn toggle(&self, topic_id: &str, sub_topic_id: &str) -> Result<bool> {
        let mut plan  = StudyPlan::load(&self.plan_path)?;
        let completed = plan.toggle(topic_id, sub_topic_id)?;
        plan.save(&self.plan_path)?;

        tracing::info!(
            "{} / {} marked {}",
            topic_id,
            sub_topic_id,
            if completed { "complete" } else { "incomplete" }
        );
        Ok(completed)
    }

    /// Progress of the saved plan as of `now`.
    pub fn report(&self, now: NaiveDateTime) -> Result<ProgressReport> {
        let plan = StudyPlan::load(&self.plan_path)?;
        Ok(ProgressReport::from_plan(&plan, now))
    }
}
