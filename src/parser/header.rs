// ============================================================
// Layer 5 — Module Header Parser
// ============================================================
// Separates a module block into its header line and body:
//
//   "1 Introduction 9 hours\nBasics - History - Use cases\n"
//     │                     └── description: "Basics - History - Use cases"
//     └── header: title "Introduction", hours 9
//
// A header that does not match the pattern is not an error.
// The module gets a generic title ("Module <n>") and zero
// hours, which gives it zero weight, and the assembler drops it.

use crate::parser::patterns::{MODULE_HEADER, WHITESPACE_RUN};
use crate::parser::Extraction;

/// Title and hours read from a module's first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleHeader {
    pub title: String,
    pub hours: u32,
}

/// A module block after header parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedModule {
    pub title:       String,
    pub hours:       u32,
    /// Body text with whitespace runs collapsed to single spaces
    pub description: String,
}

/// Match the header pattern against one line.
pub fn match_header(line: &str) -> Extraction<ModuleHeader> {
    MODULE_HEADER
        .captures(line)
        .and_then(|caps| {
            let hours = caps[2].parse::<u32>().ok()?;
            Some(ModuleHeader { title: caps[1].trim().to_string(), hours })
        })
        .into()
}

/// Parse one module block. `position` is the block's 1-based
/// index and only feeds the fallback title.
pub fn parse_module_header(block: &str, position: usize) -> ParsedModule {
    let first_line = block.trim().split('\n').next().unwrap_or_default();

    let description = block.replacen(first_line, "", 1);
    let description = WHITESPACE_RUN
        .replace_all(description.trim(), " ")
        .into_owned();

    let header = match_header(first_line).or_fallback(|| {
        tracing::warn!("Module {position}: unreadable header '{}' — module will be dropped", first_line.trim());
        ModuleHeader { title: format!("Module {position}"), hours: 0 }
    });

    ParsedModule {
        title: header.title,
        hours: header.hours,
        description,
    }
}
