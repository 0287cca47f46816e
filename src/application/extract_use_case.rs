// ============================================================
// Layer 2 — ExtractUseCase
// ============================================================
// Orchestrates one extraction run:
//
//   Step 1: Load the syllabus file       (Layer 4 - data)
//   Step 2: Normalise the text           (Layer 4 - data)
//   Step 3: Extract the outline          (Layer 5 - parser)
//   Step 4: Attach the exam date         (Layer 3 - domain)
//   Step 5: Save the plan, if asked      (Layer 6 - infra)
//
// A zero "Total Lecture hours" figure surfaces here as an
// ExtractionError inside the anyhow chain; Layer 1 recognises
// it and reports it as bad input rather than an internal fault.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{loader::SyllabusLoader, preprocessor::Preprocessor};
use crate::domain::plan::{parse_exam_date, StudyPlan};
use crate::domain::traits::{DocumentSource, OutlineExtractor, Persistable};
use crate::parser::{ParserConfig, SyllabusParser};

// ─── Extraction Configuration ────────────────────────────────────────────────
// Everything one extraction run needs. Serialisable so a run
// can be described in (and reproduced from) JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub input:     String,
    /// Where to save the plan; None prints it instead
    pub output:    Option<String>,
    /// "YYYY-MM-DDTHH:MM[:SS]", empty when unknown
    pub exam_date: String,
    /// Skip the Preprocessor and feed the text through untouched
    pub raw:       bool,
    pub parser:    ParserConfig,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input:     "syllabus.txt".to_string(),
            output:    None,
            exam_date: String::new(),
            raw:       false,
            parser:    ParserConfig::default(),
        }
    }
}

// ─── ExtractUseCase ───────────────────────────────────────────────────────────
pub struct ExtractUseCase {
    config: ExtractConfig,
}

impl ExtractUseCase {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline end to end and return the study plan.
    pub fn execute(&self) -> Result<StudyPlan> {
        let cfg = &self.config;

        if !cfg.exam_date.is_empty() && parse_exam_date(&cfg.exam_date).is_none() {
            bail!(
                "Invalid exam date '{}': expected YYYY-MM-DDTHH:MM[:SS]",
                cfg.exam_date
            );
        }

        // ── Step 1: Load ──────────────────────────────────────────────────────
        tracing::info!("Loading syllabus from '{}'", cfg.input);
        let document = SyllabusLoader::new(&cfg.input).load()?;
        if document.is_blank() {
            tracing::warn!("'{}' contains no text — the plan will be empty", document.source);
        }

        // ── Step 2: Normalise ─────────────────────────────────────────────────
        let text = if cfg.raw {
            document.text
        } else {
            Preprocessor::new().clean(&document.text)
        };

        // ── Step 3: Extract ───────────────────────────────────────────────────
        let parser  = SyllabusParser::new(cfg.parser.clone());
        let outline = parser
            .extract(&text)
            .with_context(|| format!("Cannot build a study plan from '{}'", cfg.input))?;

        // ── Step 4: Wrap with the exam date ───────────────────────────────────
        let plan = StudyPlan::from_outline(outline, cfg.exam_date.clone());

        // ── Step 5: Persist ───────────────────────────────────────────────────
        if let Some(output) = &cfg.output {
            plan.save(output)?;
            tracing::info!("Saved study plan to '{}'", output);
        }

        Ok(plan)
    }
}
