// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a syllabus file on disk and the text
// the extraction engine reads:
//
//   .txt / .docx file
//       │
//       ▼
//   SyllabusLoader    → reads the file, decodes .docx
//       │
//       ▼
//   Preprocessor      → normalises line endings and whitespace
//       │
//       ▼
//   (Layer 5 parser)
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads .txt and .docx syllabus files
pub mod loader;

/// Normalises decoded text before extraction
pub mod preprocessor;
