// ============================================================
// Layer 5 — Title Extractor
// ============================================================
// Finds the course code and name near the top of a syllabus:
//
//   "BCSE408L Cloud Computing (3-0-0-3)"  →  "BCSE408L Cloud Computing"
//
// The opening parenthesis is a required anchor: it separates
// the course name from the credit scheme that follows. Without
// it the name has no reliable end, so there is no match and
// the label falls back to "Syllabus".

use crate::domain::outline::CourseHeader;
use crate::parser::patterns::COURSE_TITLE;
use crate::parser::{Extraction, ParserConfig};

/// Locate the first course code + name in the text.
pub fn extract_course_header(text: &str) -> Extraction<CourseHeader> {
    COURSE_TITLE
        .captures(text)
        .map(|caps| CourseHeader {
            code: caps[1].to_string(),
            name: caps[2].trim().to_string(),
        })
        .into()
}

/// The course label for the outline: "<code> <name>" or the
/// configured fallback.
pub fn course_label(text: &str, config: &ParserConfig) -> String {
    extract_course_header(text)
        .map(|header| header.label())
        .or_fallback(|| {
            tracing::warn!(
                "No course code found — using fallback label '{}'",
                config.fallback_course_label
            );
            config.fallback_course_label.clone()
        })
}
