// ============================================================
// Layer 4 — Syllabus Loader
// ============================================================
// Reads one syllabus file and returns its decoded text.
//
// Supported formats:
//   .txt / .text / .md  → read as UTF-8
//   .docx               → parsed with the docx-rs crate
//
// PDF decoding is out of scope: convert the PDF to text first
// (e.g. `pdftotext syllabus.pdf`) and pass the .txt file.
//
// How .docx files work:
//   A .docx file is a ZIP archive of XML parts. docx-rs gives
//   a typed tree over the main document part:
//
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text (the actual words!)
//
// We walk this tree collecting all Text nodes, one line per
// paragraph (table cells included), so each "Module:"
// header keeps its own line.
//
// Reference: docx-rs crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use docx_rs::read_docx;
use std::{fs, path::{Path, PathBuf}};

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// File formats the loader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyllabusFormat {
    PlainText,
    Docx,
}

impl SyllabusFormat {
    /// Detect the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" | "text" | "md" => Some(Self::PlainText),
            "docx"                => Some(Self::Docx),
            _                     => None,
        }
    }
}

/// Loads a single syllabus file.
/// Implements the DocumentSource trait from Layer 3.
pub struct SyllabusLoader {
    path: PathBuf,
}

impl SyllabusLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for SyllabusLoader {
    fn load(&self) -> Result<Document> {
        let path = self.path.as_path();

        let text = match SyllabusFormat::from_path(path) {
            Some(SyllabusFormat::PlainText) => fs::read_to_string(path)
                .with_context(|| format!("Cannot read '{}' as UTF-8 text", path.display()))?,
            Some(SyllabusFormat::Docx) => load_docx_text(path)?,
            None => bail!(
                "Unsupported syllabus format '{}'. Use .txt, .md or .docx \
                 (convert PDFs to text first).",
                path.display()
            ),
        };

        let source = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        tracing::debug!("Loaded: {} ({} chars)", source, text.chars().count());
        Ok(Document::new(source, text))
    }
}

/// Parse a .docx file: body paragraphs and table-cell
/// paragraphs, one line each, in document order.
fn load_docx_text(path: &Path) -> Result<String> {
    // Read the raw bytes of the .docx file (which is a ZIP)
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let docx = read_docx(&bytes)
        .map_err(|e| anyhow::anyhow!("docx-rs parse error in '{}': {:?}", path.display(), e))?;

    let mut lines: Vec<String> = Vec::new();

    for child in &docx.document.children {
        use docx_rs::DocumentChild;

        match child {
            DocumentChild::Paragraph(para) => push_line(&mut lines, extract_paragraph_text(para)),
            // Module rows of a syllabus usually sit in a table
            DocumentChild::Table(table) => collect_table_lines(table, &mut lines),
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

/// One line per paragraph of every cell, row by row.
/// Nested tables are walked in place.
fn collect_table_lines(table: &docx_rs::Table, lines: &mut Vec<String>) {
    use docx_rs::{TableCellContent, TableChild, TableRowChild};

    for TableChild::TableRow(row) in &table.rows {
        for TableRowChild::TableCell(cell) in &row.cells {
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(para) => push_line(lines, extract_paragraph_text(para)),
                    TableCellContent::Table(inner)    => collect_table_lines(inner, lines),
                    _ => {}
                }
            }
        }
    }
}

fn push_line(lines: &mut Vec<String>, text: String) {
    if !text.trim().is_empty() {
        lines.push(text);
    }
}

/// Concatenate the text runs of one paragraph.
/// Runs split a sentence wherever formatting changes, so they
/// are joined with no separator.
fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();

    for child in &para.children {
        use docx_rs::ParagraphChild;

        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                use docx_rs::RunChild;

                if let RunChild::Text(t) = rc {
                    parts.push(t.text.clone());
                }
            }
        }
    }

    parts.join("")
}
