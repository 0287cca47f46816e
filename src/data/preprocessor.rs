// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Normalises decoded syllabus text before extraction.
//
// PDF-to-text and Word exports leave artefacts behind:
//   "Module:1\tIntroduction    9\u{00A0}hours\r\n"
// which the extraction patterns would read, but which make
// module descriptions and saved titles noisy. After cleaning:
//   "Module:1 Introduction 9 hours\n"
//
// Each step is one compiled pattern, applied in order:
//   1. LINE_ENDING   \r\n and \r        → \n
//   2. INLINE_NOISE  control / invisible → space
//   3. SPACE_RUN     two or more spaces  → one space
//   4. LINE_EDGE     spaces at line ends → removed
//   5. BLANK_LINES   3+ newlines         → one blank line
//
// Dashes are left alone: the sub-item splitter understands
// both "-" and "–".

use once_cell::sync::Lazy;
use regex::Regex;

/// Windows and classic-Mac line endings
static LINE_ENDING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").unwrap());

/// Control characters (tab included, newline excluded), non-breaking
/// space, zero-width space and byte order mark
static INLINE_NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{Cc}\x{00A0}\x{200B}\x{FEFF}&&[^\n]]").unwrap()
});

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

/// Leading or trailing spaces of any line
static LINE_EDGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^ +| +$").unwrap());

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean raw syllabus text. Takes a &str and returns an owned String.
    pub fn clean(&self, text: &str) -> String {
        let text = LINE_ENDING.replace_all(text, "\n");
        let text = INLINE_NOISE.replace_all(&text, " ");
        let text = SPACE_RUN.replace_all(&text, " ");
        let text = LINE_EDGE.replace_all(&text, "");
        let text = BLANK_LINES.replace_all(&text, "\n\n");
        text.trim().to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
