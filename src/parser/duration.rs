// ============================================================
// Layer 5 — Total-Duration Extractor
// ============================================================
// Reads the course's total instructional hours from the
// "Total Lecture hours: 45 hours" line. That figure is the
// denominator for every module weight.
//
// The number is passed through as written — including 0.
// A zero total is caught by the weight allocator, which
// refuses to divide by it.

use crate::parser::patterns::TOTAL_HOURS;
use crate::parser::{Extraction, ParserConfig};

/// Find the stated total lecture hours.
///
/// A figure too large for u32 is treated as no match.
pub fn extract_total_hours(text: &str) -> Extraction<u32> {
    TOTAL_HOURS
        .captures(text)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .into()
}

/// Total lecture hours, or the configured default (45).
pub fn total_hours(text: &str, config: &ParserConfig) -> u32 {
    extract_total_hours(text).or_fallback(|| {
        tracing::debug!(
            "No 'Total Lecture hours' line — assuming {} hours",
            config.default_total_hours
        );
        config.default_total_hours
    })
}
