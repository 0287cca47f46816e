// ============================================================
// Layer 5 — Outline Extraction Engine
// ============================================================
// Turns the decoded text of a syllabus into an Outline:
//
//   syllabus text
//       │
//       ├──► title       → "BCSE408L Cloud Computing" | "Syllabus"
//       ├──► duration    → total lecture hours | 45
//       │
//       ▼
//   segmenter            → one block per "Module:" occurrence
//       │
//       ▼
//   header               → (title, hours, description) per block
//       │
//       ▼
//   weight               → hours / total × 100, rounded to 2 dp
//       │
//       ▼
//   subitems             → description split into weighted sub-items
//       │
//       ▼
//   assembler            → ids, zero-weight filtering, Outline
//
// The engine is a pure function of its input: no I/O, no
// shared mutable state, linear in the length of the text.
// Heuristic mismatches fall back to defaults; the only error
// is a zero total-hours figure (ExtractionError::DegenerateInput).
//
// Reference: regex crate documentation
//            Rust Book §6 (Enums), §9 (Error Handling)

pub mod patterns;
pub mod title;
pub mod duration;
pub mod segmenter;
pub mod header;
pub mod weight;
pub mod subitems;
pub mod assembler;

use serde::{Deserialize, Serialize};

use crate::domain::error::ExtractionError;
use crate::domain::outline::Outline;
use crate::domain::traits::OutlineExtractor;

/// Total lecture hours assumed when the syllabus does not state them
pub const DEFAULT_TOTAL_HOURS: u32 = 45;

/// Literal that starts every module block
pub const MODULE_DELIMITER: &str = "Module:";

/// Fragments this many characters long or shorter are noise
pub const MIN_FRAGMENT_CHARS: usize = 5;

pub const FALLBACK_COURSE_LABEL: &str = "Syllabus";

pub const FALLBACK_SUB_ITEM: &str = "Overview of module content.";

// ─── Extraction ───────────────────────────────────────────────────────────────
/// Outcome of one pattern-driven extraction step.
///
/// Steps never fail on a mismatch: they report `Unmatched`
/// and the caller picks the documented fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    Matched(T),
    Unmatched,
}

impl<T> Extraction<T> {
    /// The matched value, or the fallback produced by `f`
    pub fn or_fallback(self, f: impl FnOnce() -> T) -> T {
        match self {
            Extraction::Matched(v) => v,
            Extraction::Unmatched  => f(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extraction<U> {
        match self {
            Extraction::Matched(v) => Extraction::Matched(f(v)),
            Extraction::Unmatched  => Extraction::Unmatched,
        }
    }
}

impl<T> From<Option<T>> for Extraction<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Extraction::Matched(v),
            None    => Extraction::Unmatched,
        }
    }
}

// ─── Parser Configuration ────────────────────────────────────────────────────
/// Constants that steer the heuristics. The defaults match the
/// syllabus layout the patterns were written for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Denominator used when "Total Lecture hours:" is absent
    pub default_total_hours: u32,

    /// Literal that separates module blocks
    pub module_delimiter: String,

    /// Sub-item fragments with this many characters or fewer are dropped
    pub min_fragment_chars: usize,

    /// Course label used when no course code is found
    pub fallback_course_label: String,

    /// Sub-item title used when a module has no description
    pub fallback_sub_item: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_total_hours:   DEFAULT_TOTAL_HOURS,
            module_delimiter:      MODULE_DELIMITER.to_string(),
            min_fragment_chars:    MIN_FRAGMENT_CHARS,
            fallback_course_label: FALLBACK_COURSE_LABEL.to_string(),
            fallback_sub_item:     FALLBACK_SUB_ITEM.to_string(),
        }
    }
}

// ─── SyllabusParser ───────────────────────────────────────────────────────────
/// The extraction engine behind the OutlineExtractor trait.
/// Holds only its configuration, so one instance can serve
/// any number of documents.
#[derive(Debug, Clone, Default)]
pub struct SyllabusParser {
    config: ParserConfig,
}

impl SyllabusParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }
}

impl OutlineExtractor for SyllabusParser {
    fn extract(&self, text: &str) -> Result<Outline, ExtractionError> {
        assembler::assemble(text, &self.config)
    }
}
