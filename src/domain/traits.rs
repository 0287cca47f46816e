// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Programming against these traits keeps the application
// layer independent of how documents are read, how outlines
// are extracted, and where study plans are stored:
//   - SyllabusLoader implements DocumentSource
//   - SyllabusParser implements OutlineExtractor
//   - StudyPlan      implements Persistable (infra::plan_store)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::document::Document;
use crate::domain::error::ExtractionError;
use crate::domain::outline::Outline;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can produce the decoded text of one syllabus.
pub trait DocumentSource {
    fn load(&self) -> Result<Document>;
}

// ─── OutlineExtractor ─────────────────────────────────────────────────────────
/// Any component that turns syllabus text into an Outline.
///
/// Either returns a complete Outline or fails with
/// ExtractionError — there is no partial result.
pub trait OutlineExtractor {
    fn extract(&self, text: &str) -> std::result::Result<Outline, ExtractionError>;
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any value that can be saved to and restored from a path.
pub trait Persistable: Sized {
    fn save(&self, path: &str) -> Result<()>;

    fn load(path: &str) -> Result<Self>;
}
