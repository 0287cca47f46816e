// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `extract`, `toggle` and
// `progress`, and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → u32, bool, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::extract_use_case::ExtractConfig;
use crate::parser::{ParserConfig, DEFAULT_TOTAL_HOURS, MODULE_DELIMITER};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a weighted study plan from a syllabus (.txt, .md or .docx)
    Extract(ExtractArgs),

    /// Mark a sub-topic of a saved plan complete (or incomplete again)
    Toggle(ToggleArgs),

    /// Show completion per topic and the time left until the exam
    Progress(ProgressArgs),
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Syllabus file. Convert PDFs to text first.
    #[arg(long, short)]
    pub input: String,

    /// Save the plan as JSON here instead of printing it
    #[arg(long, short)]
    pub output: Option<String>,

    /// Exam date, e.g. 2025-12-20T10:00
    #[arg(long, default_value = "")]
    pub exam_date: String,

    /// Feed the text to the parser without normalising whitespace
    #[arg(long)]
    pub raw: bool,

    /// Total lecture hours assumed when the syllabus does not state them
    #[arg(long, default_value_t = DEFAULT_TOTAL_HOURS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub default_hours: u32,

    /// Literal that starts each module block
    #[arg(long, default_value = MODULE_DELIMITER,
          value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub delimiter: String,
}

/// Convert CLI ExtractArgs into the application-layer ExtractConfig.
/// The application layer never sees clap types.
impl From<ExtractArgs> for ExtractConfig {
    fn from(a: ExtractArgs) -> Self {
        ExtractConfig {
            input:     a.input,
            output:    a.output,
            exam_date: a.exam_date,
            raw:       a.raw,
            parser:    ParserConfig {
                default_total_hours: a.default_hours,
                module_delimiter:    a.delimiter,
                ..ParserConfig::default()
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct ToggleArgs {
    /// Plan file written by `extract --output`
    #[arg(long)]
    pub plan: String,

    /// Topic id, e.g. t1
    #[arg(long)]
    pub topic: String,

    /// Sub-topic id, e.g. st1-2
    #[arg(long)]
    pub sub_topic: String,
}

#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Plan file written by `extract --output`
    #[arg(long)]
    pub plan: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_extract_defaults() {
        let cli = Cli::try_parse_from(["syllabus-planner", "extract", "--input", "cloud.txt"]).unwrap();
        let Commands::Extract(args) = cli.command else { panic!("expected extract") };

        let cfg: ExtractConfig = args.into();
        assert_eq!(cfg.input, "cloud.txt");
        assert_eq!(cfg.output, None);
        assert_eq!(cfg.exam_date, "");
        assert!(!cfg.raw);
        assert_eq!(cfg.parser, ParserConfig::default());
    }

    #[test]
    fn test_extract_overrides() {
        let cli = Cli::try_parse_from([
            "syllabus-planner", "extract", "-i", "cloud.docx", "-o", "plan.json",
            "--default-hours", "60", "--delimiter", "Unit:", "--raw",
        ])
        .unwrap();
        let Commands::Extract(args) = cli.command else { panic!("expected extract") };

        let cfg: ExtractConfig = args.into();
        assert_eq!(cfg.output.as_deref(), Some("plan.json"));
        assert_eq!(cfg.parser.default_total_hours, 60);
        assert_eq!(cfg.parser.module_delimiter, "Unit:");
        assert!(cfg.raw);
    }

    #[test]
    fn test_rejects_zero_default_hours_and_empty_delimiter() {
        assert!(Cli::try_parse_from(["syllabus-planner", "extract", "-i", "a.txt", "--default-hours", "0"]).is_err());
        assert!(Cli::try_parse_from(["syllabus-planner", "extract", "-i", "a.txt", "--delimiter", ""]).is_err());
    }

    #[test]
    fn test_toggle_args() {
        let cli = Cli::try_parse_from([
            "syllabus-planner", "toggle", "--plan", "plan.json", "--topic", "t1", "--sub-topic", "st1-2",
        ])
        .unwrap();
        let Commands::Toggle(args) = cli.command else { panic!("expected toggle") };
        assert_eq!(args.topic, "t1");
        assert_eq!(args.sub_topic, "st1-2");
    }
}
