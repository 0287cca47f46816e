// ============================================================
// Layer 5 — Module Segmenter
// ============================================================
// Splits the syllabus into module blocks on every literal
// occurrence of the delimiter ("Module:").
//
// Example:
//   "Front matter Module:1 Intro 9 hours ... Module:2 Deploy 9 hours ..."
//    └─ discarded ─┘       └──── block 1 ────┘       └──── block 2 ────┘
//
// Text before the first delimiter is course front matter
// (objectives, outcomes, credits) and never a module.
// No delimiter at all means no modules — an empty outline,
// not an error.

/// One module's raw text, borrowed from the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleBlock<'a> {
    /// 1-based position in document order
    pub position: usize,

    /// Everything between this delimiter and the next
    pub text: &'a str,
}

/// Split `text` into module blocks, in document order.
pub fn segment_modules<'a>(text: &'a str, delimiter: &str) -> Vec<ModuleBlock<'a>> {
    // An empty delimiter would split between every character
    if delimiter.is_empty() {
        tracing::warn!("Empty module delimiter — no modules extracted");
        return Vec::new();
    }

    let blocks: Vec<ModuleBlock<'a>> = text
        .split(delimiter)
        .skip(1)
        .enumerate()
        .map(|(i, block)| ModuleBlock { position: i + 1, text: block })
        .collect();

    tracing::debug!("Found {} module block(s)", blocks.len());
    blocks
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discards_front_matter() {
        let blocks = segment_modules("Objectives\nModule:1 A 3 hours\nModule:2 B 3 hours", "Module:");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], ModuleBlock { position: 1, text: "1 A 3 hours\n" });
        assert_eq!(blocks[1], ModuleBlock { position: 2, text: "2 B 3 hours" });
    }

    #[test]
    fn test_no_delimiter_means_no_blocks() {
        assert!(segment_modules("Just a course description.", "Module:").is_empty());
    }

    #[test]
    fn test_delimiter_is_case_sensitive() {
        assert!(segment_modules("module:1 A 3 hours", "Module:").is_empty());
    }

    #[test]
    fn test_adjacent_delimiters_yield_empty_blocks() {
        let blocks = segment_modules("Module:Module:", "Module:");
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.text.is_empty()));
    }

    #[test]
    fn test_empty_delimiter() {
        assert!(segment_modules("Module:1 A 3 hours", "").is_empty());
    }
}
