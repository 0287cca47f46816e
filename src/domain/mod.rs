// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that define the core concepts
// of the study planner: documents, the extracted outline,
// and the trackable study plan built from it.
//
// Rules for this layer:
//   - NO file I/O
//   - NO regex or parsing code (that's Layer 5)
//   - NO clap types (that's Layer 1)
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A loaded syllabus document
pub mod document;

// The extracted outline: modules and their sub-items
pub mod outline;

// The serialisable study plan with completion tracking
pub mod plan;

// Core abstractions (traits) that other layers implement
pub mod traits;

// The typed failure of the extraction engine
pub mod error;
