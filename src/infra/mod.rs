// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong in any business
// layer:
//
//   plan_store.rs — Study plan persistence
//                   Saves / loads a StudyPlan as JSON so
//                   completion state survives between runs.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Study plan JSON persistence
pub mod plan_store;
