// ============================================================
// Layer 5 — Sub-item Splitter
// ============================================================
// Breaks a module description into learner-trackable items:
//
//   "Basics - History - Use cases"
//     → "Basics" (6.67) · "History" (6.67) · "Use cases" (6.67)
//
// Steps:
//   1. Split on hyphen, en-dash or comma
//   2. Trim each fragment and drop short ones (≤ 5 chars)
//   3. Two or more survivors → one item each, first letter
//      capitalised, module weight shared evenly
//   4. Otherwise the delimiters found no real structure, so the
//      whole description becomes a single item carrying the
//      full module weight

use crate::domain::outline::SubItem;
use crate::parser::patterns::SUB_ITEM_DELIMITER;
use crate::parser::weight::distribute;
use crate::parser::ParserConfig;

/// Split `description` into sub-items for the module at
/// `module_position`. Always returns at least one item.
pub fn split_sub_items(
    description:     &str,
    module_weight:   f64,
    module_position: usize,
    config:          &ParserConfig,
) -> Vec<SubItem> {
    let fragments: Vec<&str> = SUB_ITEM_DELIMITER
        .split(description)
        .map(str::trim)
        .filter(|s| s.chars().count() > config.min_fragment_chars)
        .collect();

    if fragments.len() >= 2 {
        let share = distribute(module_weight, fragments.len());
        return fragments
            .into_iter()
            .enumerate()
            .map(|(i, fragment)| SubItem::new(module_position, i + 1, capitalize_first(fragment), share))
            .collect();
    }

    let title = if description.is_empty() {
        config.fallback_sub_item.clone()
    } else {
        description.to_string()
    };
    vec![SubItem::new(module_position, 1, title, module_weight)]
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None        => String::new(),
    }
}
