// ============================================================
// Layer 3 — Extraction Errors
// ============================================================
// The extraction engine has exactly one fatal condition:
// a syllabus whose total lecture hours resolve to zero while
// at least one module is present. Dividing by zero would
// produce NaN/Infinity weights, so the engine stops instead.
//
// Every other mismatch (no title, no total hours, no module
// delimiter, unreadable module header, unstructured
// description) falls back to a default value and is never
// reported as an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// Total lecture hours resolved to zero, so module
    /// weights cannot be allocated.
    #[error("total lecture hours resolved to 0; module weights are undefined")]
    DegenerateInput,
}
