// ============================================================
// Layer 3 — Study Plan
// ============================================================
// The JSON document a learner works with after extraction:
//
//   {
//     "examName": "BCSE408L Cloud Computing",
//     "examDate": "2025-12-20T10:00:00",
//     "totalWeightage": 100,
//     "topics": [ { "id": "t1", "title": ..., "topicWeightage": 20.0,
//                   "subTopics": [ { "id": "st1-1", ..., "completed": false } ] } ]
//   }
//
// The extraction engine never produces the exam date — the
// caller supplies it. Everything else comes from the Outline.
//
// Progress is the sum of the weightage of completed
// sub-topics, so a fully ticked plan reads ~100%.
//
// Reference: Rust Book §5 (Structs), §9 (Error Handling)

use anyhow::{anyhow, Result};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::outline::{Module, Outline};

/// Formats accepted for the exam date (datetime-local style).
const EXAM_DATE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub exam_name:       String,
    /// Empty when the caller did not supply a date
    pub exam_date:       String,
    pub total_weightage: u32,
    pub topics:          Vec<Module>,
}

impl StudyPlan {
    /// Wrap an extracted outline together with the caller's exam date.
    pub fn from_outline(outline: Outline, exam_date: impl Into<String>) -> Self {
        Self {
            exam_name:       outline.course_label,
            exam_date:       exam_date.into(),
            total_weightage: outline.total_weight,
            topics:          outline.modules,
        }
    }

    /// Flip the completion flag of one sub-topic.
    /// Returns the new state, or an error if either id is unknown.
    pub fn toggle(&mut self, topic_id: &str, sub_topic_id: &str) -> Result<bool> {
        let topic = self
            .topics
            .iter_mut()
            .find(|t| t.id == topic_id)
            .ok_or_else(|| anyhow!("No topic with id '{topic_id}'"))?;

        let sub = topic
            .sub_items
            .iter_mut()
            .find(|s| s.id == sub_topic_id)
            .ok_or_else(|| anyhow!("No sub-topic '{sub_topic_id}' in topic '{topic_id}'"))?;

        sub.completed = !sub.completed;
        Ok(sub.completed)
    }

    /// Number of sub-topics across all topics
    pub fn sub_topic_count(&self) -> usize {
        self.topics.iter().map(|t| t.sub_items.len()).sum()
    }

    /// Percentage of the course completed: the summed weightage
    /// of every ticked sub-topic.
    pub fn progress(&self) -> f64 {
        self.topics.iter().map(topic_progress).sum()
    }

    /// Parsed exam date, if one was supplied and is well-formed
    pub fn exam_datetime(&self) -> Option<NaiveDateTime> {
        parse_exam_date(&self.exam_date)
    }

    /// Time left until the exam. `None` when no valid date is set,
    /// zero once the exam has started.
    pub fn time_until_exam(&self, now: NaiveDateTime) -> Option<Duration> {
        let exam = self.exam_datetime()?;
        Some((exam - now).max(Duration::zero()))
    }
}

/// Summed weightage of the completed sub-topics of one topic
pub fn topic_progress(topic: &Module) -> f64 {
    topic
        .sub_items
        .iter()
        .filter(|s| s.completed)
        .map(|s| s.weight)
        .sum()
}

/// Parse "YYYY-MM-DDTHH:MM[:SS]". Returns None for anything else.
pub fn parse_exam_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    EXAM_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Render a countdown as "3d 4h 15m"
pub fn format_countdown(remaining: Duration) -> String {
    let minutes = remaining.num_minutes().max(0);
    format!("{}d {}h {}m", minutes / (24 * 60), (minutes / 60) % 24, minutes % 60)
}
