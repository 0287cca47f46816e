// ============================================================
// Layer 5 — Compiled Patterns
// ============================================================
// Every regular expression the extraction engine uses lives
// here, compiled once on first use. Each is documented with
// its capture groups so the steps that use them stay short.
//
// Digits are matched with [0-9] rather than \d: \d is
// Unicode-aware in the regex crate and would accept digits
// that u32::from_str rejects.
//
// Reference: regex crate documentation (leftmost-first,
//            lazy quantifiers), once_cell::sync::Lazy

use once_cell::sync::Lazy;
use regex::Regex;

/// Course code followed by the course name, anchored on the
/// opening parenthesis of the credit scheme that follows:
///
///   "BCSE408L Cloud Computing (3-0-0-3)"
///
/// Group 1: course code — 4 capitals, 3–4 digits, 1 capital
/// Group 2: course name — letters, whitespace, '&', '-' (lazy, untrimmed)
pub static COURSE_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z]{4}[0-9]{3,4}[A-Z])\s+([A-Za-z\s&-]+?)\s+\(").unwrap()
});

/// Total instructional hours of the course:
///
///   "Total Lecture hours: 45 hours"
///
/// Group 1: the hour count
pub static TOTAL_HOURS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Total Lecture hours:\s*([0-9]+)\s*[Hh]ours").unwrap()
});

/// First line of a module block (the text after "Module:"):
///
///   "1 Introduction to Cloud 9 hours"
///
/// The leading digits are the module's own number and are
/// discarded. Case-insensitive "hour"/"hours".
///
/// Group 1: module title (lazy, untrimmed)
/// Group 2: module hours
pub static MODULE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9]+\s*(.*?)\s*([0-9]+)\s*hours?").unwrap()
});

/// Separators between sub-items inside a module description:
/// hyphen, en-dash, or comma, with any surrounding whitespace.
pub static SUB_ITEM_DELIMITER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*-\s*|\s*–\s*|\s*,\s*").unwrap()
});

/// Any run of whitespace, collapsed to a single space in descriptions
pub static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_title_captures() {
        let caps = COURSE_TITLE
            .captures("Course: BCSE408L Cloud Computing (3-0-0-3)")
            .unwrap();
        assert_eq!(&caps[1], "BCSE408L");
        assert_eq!(&caps[2], "Cloud Computing");
    }

    #[test]
    fn test_course_title_allows_ampersand_and_hyphen() {
        let caps = COURSE_TITLE
            .captures("BECE2016E Signals & Systems - Lab (2-0-2-3)")
            .unwrap();
        assert_eq!(&caps[1], "BECE2016E");
        assert_eq!(caps[2].trim(), "Signals & Systems - Lab");
    }

    #[test]
    fn test_course_title_requires_parenthesis() {
        assert!(COURSE_TITLE.captures("BCSE408L Cloud Computing 3-0-0-3").is_none());
    }

    #[test]
    fn test_total_hours() {
        let caps = TOTAL_HOURS.captures("Total Lecture hours: 45 hours").unwrap();
        assert_eq!(&caps[1], "45");
        assert!(TOTAL_HOURS.is_match("Total Lecture hours:30 Hours"));
        // The phrase itself is case-sensitive
        assert!(!TOTAL_HOURS.is_match("total lecture hours: 45 hours"));
    }

    #[test]
    fn test_module_header() {
        let caps = MODULE_HEADER.captures("1 Introduction 9 hours").unwrap();
        assert_eq!(caps[1].trim(), "Introduction");
        assert_eq!(&caps[2], "9");

        let caps = MODULE_HEADER.captures("3 Web 2.0 Services 6 HOUR").unwrap();
        assert_eq!(caps[1].trim(), "Web 2.0 Services");
        assert_eq!(&caps[2], "6");

        assert!(MODULE_HEADER.captures("garbage text with no hours").is_none());
    }

    #[test]
    fn test_sub_item_delimiters() {
        let parts: Vec<&str> = SUB_ITEM_DELIMITER
            .split("Basics - History – Use cases, Limits")
            .collect();
        assert_eq!(parts, vec!["Basics", "History", "Use cases", "Limits"]);
    }
}
