// ============================================================
// Layer 6 — Study Plan Store
// ============================================================
// Saves and restores a StudyPlan as pretty-printed JSON, so
// the learner can tick sub-topics across several runs:
//
//   syllabus-planner extract  --input cloud.txt --output plan.json
//   syllabus-planner toggle   --plan plan.json --topic t1 --sub-topic st1-2
//   syllabus-planner progress --plan plan.json
//
// The file holds exactly the wire shape of the plan
// ("examName", "topics", "subTopics", ...), so it can be
// handed to any other consumer of that JSON unchanged.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::domain::plan::StudyPlan;
use crate::domain::traits::Persistable;

impl Persistable for StudyPlan {
    /// Write the plan to `path`, creating parent directories.
    fn save(&self, path: &str) -> Result<()> {
        let path = Path::new(path);

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self)?;

        fs::write(path, json)
            .with_context(|| format!("Cannot write study plan to '{}'", path.display()))?;

        tracing::debug!("Saved study plan to '{}'", path.display());
        Ok(())
    }

    /// Read a plan previously written by `save` (or any JSON of
    /// the same shape).
    fn load(path: &str) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| {
                format!(
                    "Cannot read study plan from '{path}'. \
                     Run 'extract --output {path}' first."
                )
            })?;

        serde_json::from_str(&json)
            .with_context(|| format!("'{path}' is not a valid study plan"))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outline::{Module, Outline, SubItem};

    fn plan() -> StudyPlan {
        let modules = vec![Module::new(1, "Intro", 20.0, vec![
            SubItem::new(1, 1, "Basics", 10.0),
            SubItem::new(1, 2, "History", 10.0),
        ])];
        StudyPlan::from_outline(Outline::new("Syllabus", modules), "")
    }

    #[test]
    fn test_save_then_load_keeps_completion() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("plan.json");
        let path = path.to_str().unwrap();

        let mut original = plan();
        original.toggle("t1", "st1-2").unwrap();
        original.save(path).unwrap();

        let loaded = StudyPlan::load(path).unwrap();
        assert_eq!(loaded, original);
        assert!(loaded.topics[0].sub_items[1].completed);
    }

    #[test]
    fn test_load_missing_file() {
        let err = StudyPlan::load("/nonexistent/plan.json").unwrap_err();
        assert!(err.to_string().contains("Cannot read study plan"));
    }

    #[test]
    fn test_load_rejects_other_json() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.json");
        fs::write(&path, r#"{"hello": "world"}"#).unwrap();

        assert!(StudyPlan::load(path.to_str().unwrap()).is_err());
    }
}
