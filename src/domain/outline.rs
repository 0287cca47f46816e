// ============================================================
// Layer 3 — Outline Domain Types
// ============================================================
// The structured result of running the extraction engine
// over one syllabus:
//
//   Outline
//     ├── course_label   "BCSE408L Cloud Computing"
//     ├── total_weight   100 (nominal, never a computed sum)
//     └── modules: Vec<Module>
//           ├── id, title, weight (% of the course)
//           └── sub_items: Vec<SubItem>
//                 └── id, title, weight, completed
//
// Module and SubItem serialise with the field names the
// study-plan JSON uses ("topicWeightage", "subTopics",
// "weightage") so the same values flow straight into the
// StudyPlan without a second set of types.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// Nominal total weight of every outline, in percent.
pub const NOMINAL_TOTAL_WEIGHT: u32 = 100;

/// Course code and name found at the top of a syllabus,
/// e.g. code "BCSE408L", name "Cloud Computing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseHeader {
    pub code: String,
    pub name: String,
}

impl CourseHeader {
    /// Human-readable label: "<code> <name>"
    pub fn label(&self) -> String {
        format!("{} {}", self.code, self.name)
    }
}

/// A learner-trackable leaf unit within a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubItem {
    /// "st<module position>-<sub position>", both 1-based
    pub id: String,

    pub title: String,

    /// Share of the whole course in percent, rounded to 2 decimals
    #[serde(rename = "weightage")]
    pub weight: f64,

    /// Always false at extraction time; toggled later by the learner
    pub completed: bool,
}

impl SubItem {
    pub fn new(module_position: usize, position: usize, title: impl Into<String>, weight: f64) -> Self {
        Self {
            id:        format!("st{module_position}-{position}"),
            title:     title.into(),
            weight,
            completed: false,
        }
    }
}

/// A top-level syllabus unit ("topic") with its sub-items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// "t<position>" where position is the 1-based block index
    pub id: String,

    pub title: String,

    /// Share of the whole course in percent, rounded to 2 decimals
    #[serde(rename = "topicWeightage")]
    pub weight: f64,

    #[serde(rename = "subTopics")]
    pub sub_items: Vec<SubItem>,
}

impl Module {
    pub fn new(position: usize, title: impl Into<String>, weight: f64, sub_items: Vec<SubItem>) -> Self {
        Self {
            id: format!("t{position}"),
            title: title.into(),
            weight,
            sub_items,
        }
    }

    /// Sum of the sub-item weights. May drift from `weight`
    /// by up to 0.01 per extra sub-item because each share
    /// is rounded on its own.
    pub fn sub_item_weight_sum(&self) -> f64 {
        self.sub_items.iter().map(|s| s.weight).sum()
    }
}

/// The complete extraction result for one syllabus.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub course_label: String,
    pub total_weight: u32,
    pub modules:      Vec<Module>,
}

impl Outline {
    pub fn new(course_label: impl Into<String>, modules: Vec<Module>) -> Self {
        Self {
            course_label: course_label.into(),
            total_weight: NOMINAL_TOTAL_WEIGHT,
            modules,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_positions() {
        let sub = SubItem::new(2, 3, "Hypervisors", 5.0);
        assert_eq!(sub.id, "st2-3");
        assert!(!sub.completed);

        let module = Module::new(2, "Virtualization", 5.0, vec![sub]);
        assert_eq!(module.id, "t2");
    }

    #[test]
    fn test_module_serialises_with_plan_field_names() {
        let module = Module::new(1, "Intro", 20.0, vec![SubItem::new(1, 1, "Models", 20.0)]);
        let json   = serde_json::to_value(&module).unwrap();

        assert_eq!(json["topicWeightage"], 20.0);
        assert_eq!(json["subTopics"][0]["id"], "st1-1");
        assert_eq!(json["subTopics"][0]["weightage"], 20.0);
        assert_eq!(json["subTopics"][0]["completed"], false);
    }

    #[test]
    fn test_outline_total_weight_is_nominal() {
        let outline = Outline::new("Syllabus", Vec::new());
        assert_eq!(outline.total_weight, 100);
        assert!(outline.modules.is_empty());
    }

    #[test]
    fn test_course_header_label() {
        let header = CourseHeader { code: "BCSE408L".into(), name: "Cloud Computing".into() };
        assert_eq!(header.label(), "BCSE408L Cloud Computing");
    }
}
