// ============================================================
// Layer 5 — Outline Assembler
// ============================================================
// Runs every extraction step over one syllabus and composes
// the Outline:
//
//   1. Course label           (title.rs)
//   2. Total lecture hours    (duration.rs)
//   3. Module blocks          (segmenter.rs)
//   4. Per block: header → weight → sub-items
//   5. Drop modules whose weight is not positive
//
// Ids come from the block position and are assigned before
// filtering, so a dropped module leaves a gap (t1, t3, ...).
// Sub-item ids ("st3-1") use the same position, which keeps
// both stable for the lifetime of the outline.

use crate::domain::error::ExtractionError;
use crate::domain::outline::{Module, Outline};
use crate::parser::{duration, header, segmenter, subitems, title, weight, ParserConfig};

/// Extract the full outline from `text`.
///
/// Fails only with `ExtractionError::DegenerateInput`, when the
/// total lecture hours are 0 and at least one module block exists.
pub fn assemble(text: &str, config: &ParserConfig) -> Result<Outline, ExtractionError> {
    let course_label = title::course_label(text, config);
    let total_hours  = duration::total_hours(text, config);
    let blocks       = segmenter::segment_modules(text, &config.module_delimiter);

    let mut modules = Vec::with_capacity(blocks.len());

    for block in &blocks {
        let parsed = header::parse_module_header(block.text, block.position);
        let weight = weight::module_weight(parsed.hours, total_hours)?;

        if weight <= 0.0 {
            tracing::debug!("Dropping '{}' (t{}): zero weight", parsed.title, block.position);
            continue;
        }

        let sub_items = subitems::split_sub_items(&parsed.description, weight, block.position, config);

        let module = Module::new(block.position, parsed.title, weight, sub_items);

        tracing::debug!(
            "{} '{}': {} h → {:.2}% across {} sub-item(s) summing to {:.2}%",
            module.id,
            module.title,
            parsed.hours,
            module.weight,
            module.sub_items.len(),
            module.sub_item_weight_sum()
        );

        modules.push(module);
    }

    tracing::info!(
        "Extracted '{}': {} of {} module(s) kept, total {} hours",
        course_label,
        modules.len(),
        blocks.len(),
        total_hours
    );

    Ok(Outline::new(course_label, modules))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Result<Outline, ExtractionError> {
        assemble(text, &ParserConfig::default())
    }

    const CLOUD_SYLLABUS: &str = "BCSE408L Cloud Computing (3-0-0-3)\n\
        Total Lecture hours: 45 hours\n\
        Module:1 Introduction 9 hours\n\
        Basics - History - Use cases\n\
        Module:2 Deployment 9 hours\n\
        Models";

    #[test]
    fn test_end_to_end_cloud_computing() {
        let outline = extract(CLOUD_SYLLABUS).unwrap();

        assert_eq!(outline.course_label, "BCSE408L Cloud Computing");
        assert_eq!(outline.total_weight, 100);
        assert_eq!(outline.modules.len(), 2);

        let intro = &outline.modules[0];
        assert_eq!(intro.id, "t1");
        assert_eq!(intro.title, "Introduction");
        assert_eq!(intro.weight, 20.0);
        assert_eq!(intro.sub_items.len(), 3);
        assert!(intro.sub_items.iter().all(|s| s.weight == 6.67 && !s.completed));
        assert_eq!(intro.sub_items[0].title, "Basics");
        assert_eq!(intro.sub_items[2].id, "st1-3");

        let deploy = &outline.modules[1];
        assert_eq!(deploy.id, "t2");
        assert_eq!(deploy.weight, 20.0);
        assert_eq!(deploy.sub_items.len(), 1);
        assert_eq!(deploy.sub_items[0].title, "Models");
        assert_eq!(deploy.sub_items[0].weight, 20.0);
    }

    #[test]
    fn test_fallback_title() {
        let outline = extract("Cloud Computing\nModule:1 Intro 9 hours\nModels").unwrap();
        assert_eq!(outline.course_label, "Syllabus");
    }

    #[test]
    fn test_fallback_duration_is_45() {
        // 9 / 45 = 20%; with any other denominator this would differ
        let outline = extract("Module:1 Intro 9 hours\nModels").unwrap();
        assert_eq!(outline.modules[0].weight, 20.0);

        let outline = extract("Module:1 Intro 3 hours\nModels").unwrap();
        assert_eq!(outline.modules[0].weight, 6.67);
    }

    #[test]
    fn test_no_module_delimiter_means_no_modules() {
        let outline = extract("BCSE408L Cloud Computing (3-0-0-3)\nTotal Lecture hours: 45 hours").unwrap();
        assert!(outline.modules.is_empty());
        assert_eq!(outline.course_label, "BCSE408L Cloud Computing");
    }

    #[test]
    fn test_unparseable_header_is_filtered() {
        let text = "Total Lecture hours: 45 hours\n\
            Module:garbage text with no hours\nSome description here\n\
            Module:2 Deployment 9 hours\nModels";
        let outline = extract(text).unwrap();

        assert_eq!(outline.modules.len(), 1);
        assert_eq!(outline.modules[0].id, "t2");
        assert!(outline.modules.iter().all(|m| m.title != "Module 1"));
    }

    #[test]
    fn test_garbage_header_parses_to_zero_hours() {
        let parsed = header::parse_module_header("garbage text with no hours", 1);
        assert_eq!(parsed.hours, 0);
        assert_eq!(weight::module_weight(parsed.hours, 45).unwrap(), 0.0);
        assert!(extract("Total Lecture hours: 45 hours\nModule:garbage text with no hours")
            .unwrap()
            .modules
            .is_empty());
    }

    #[test]
    fn test_zero_hour_module_is_filtered() {
        let outline = extract("Module:1 Orientation 0 hours\nWelcome session\nModule:2 Core 9 hours\nModels").unwrap();
        assert_eq!(outline.modules.len(), 1);
        assert_eq!(outline.modules[0].title, "Core");
    }

    #[test]
    fn test_zero_total_hours_is_degenerate() {
        let text = "Total Lecture hours: 0 hours\nModule:1 Intro 9 hours\nModels";
        assert_eq!(extract(text), Err(ExtractionError::DegenerateInput));

        // Even an unreadable header counts as a module block
        let text = "Total Lecture hours: 0 hours\nModule:garbage";
        assert_eq!(extract(text), Err(ExtractionError::DegenerateInput));
    }

    #[test]
    fn test_zero_total_hours_without_modules_is_fine() {
        let outline = extract("Total Lecture hours: 0 hours\nNo modules listed").unwrap();
        assert!(outline.modules.is_empty());
    }

    #[test]
    fn test_weight_sum_drift_bound_per_module() {
        let text = "Total Lecture hours: 30 hours\n\
            Module:1 Storage 7 hours\nBlock storage, Object storage, File systems, Replication\n\
            Module:2 Networking 11 hours\nVirtual networks - Load balancers - Content delivery\n\
            Module:3 Security 12 hours\nIdentity management, Encryption at rest, Compliance audits";
        let outline = extract(text).unwrap();
        assert_eq!(outline.modules.len(), 3);

        for module in &outline.modules {
            let n = module.sub_items.len() as f64;
            let drift = (module.sub_item_weight_sum() - module.weight).abs();
            assert!(drift <= 0.01 * (n - 1.0) + 1e-9, "{}: drift {drift}", module.title);
        }
    }

    #[test]
    fn test_module_weights_need_not_sum_to_100() {
        let text = "Total Lecture hours: 45 hours\n\
            Module:1 A topic 7 hours\nx\nModule:2 B topic 7 hours\ny\n\
            Module:3 C topic 31 hours\nz";
        let outline = extract(text).unwrap();
        let sum: f64 = outline.modules.iter().map(|m| m.weight).sum();
        assert_eq!(outline.total_weight, 100);
        assert!((sum - 100.01).abs() < 1e-9);
    }

    #[test]
    fn test_custom_delimiter() {
        let cfg = ParserConfig { module_delimiter: "Unit:".into(), ..ParserConfig::default() };
        let outline = assemble("Unit:1 Intro 9 hours\nModels", &cfg).unwrap();
        assert_eq!(outline.modules.len(), 1);
    }
}
