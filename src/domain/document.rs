// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// Represents a single syllabus document loaded from disk.
// This is a plain data struct with no behaviour —
// just a source name and the decoded text content.
//
// By the time a Document is created, the text has already
// been decoded from its file format (.docx, .txt). PDF
// decoding happens outside this program.
//
// Reference: Rust Book §5 (Structs and Methods)

/// A raw syllabus document loaded from disk.
#[derive(Debug, Clone)]
pub struct Document {
    /// The filename — kept for log messages and error context
    pub source: String,

    /// The full decoded text of the syllabus
    /// before any cleaning or extraction
    pub text: String,
}

impl Document {
    /// Create a new Document with a source name and text content.
    /// Uses impl Into<String> so callers can pass &str or String.
    ///
    /// Example:
    ///   let doc = Document::new("BCSE408L.txt", "Module:1 Introduction 9 hours...");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// True when the decoded text holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
