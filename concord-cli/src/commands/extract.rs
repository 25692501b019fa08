//! Extract command implementation

use crate::input;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use concord_core::{ContextExtractor, ContextType, Row, SearchTerm};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Treat input files as JSON Lines datasets (one row object per line)
    #[arg(long)]
    pub jsonl: bool,

    /// Field holding the document text
    #[arg(short = 'F', long, value_name = "NAME", default_value = "text")]
    pub field: String,

    /// Search terms (repeatable)
    #[arg(short, long, value_name = "TEXT", required = true)]
    pub term: Vec<String>,

    /// Treat terms as regular expressions instead of literal text
    #[arg(short = 'e', long)]
    pub regex: bool,

    /// Match case-insensitively
    #[arg(short = 'c', long)]
    pub ignore_case: bool,

    /// Unit context windows are measured in
    #[arg(short, long, value_enum, default_value = "words")]
    pub granularity: Granularity,

    /// Context units kept on either side of a match
    #[arg(short = 'n', long, value_name = "N", default_value_t = 5)]
    pub count: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Scan documents on a thread pool
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported context granularities
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Granularity {
    /// Single characters
    Characters,
    /// Whitespace-delimited words
    Words,
    /// Newline-terminated lines
    Lines,
}

impl From<Granularity> for ContextType {
    fn from(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Characters => ContextType::Characters,
            Granularity::Words => ContextType::Words,
            Granularity::Lines => ContextType::Lines,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One concordance line per match
    Text,
    /// JSON array of output rows
    Json,
    /// Markdown table of output rows
    Markdown,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting context extraction");
        log::debug!("Arguments: {:?}", self);

        let terms: Vec<SearchTerm> = self
            .term
            .iter()
            .map(|text| SearchTerm {
                text: text.clone(),
                use_regex: self.regex,
                ignore_case: self.ignore_case,
            })
            .collect();
        let extractor = ContextExtractor::new(&terms, self.granularity.into(), self.count)?;

        let files = input::resolve_patterns(&self.input)?;
        log::info!("Resolved {} input file(s)", files.len());

        let rows = if self.jsonl {
            input::jsonl_rows(&files)?
        } else {
            input::text_rows(&files)?
        };
        log::info!("Loaded {} document row(s)", rows.len());

        let mut reporter = ProgressReporter::new(self.quiet);
        reporter.init_documents(rows.len() as u64);

        let matches = if self.parallel {
            extractor.extract_parallel(&rows, &self.field, &reporter)
        } else {
            extractor.extract(&rows, &self.field, &reporter)
        };
        reporter.finish(matches.len());
        log::info!("Extracted {} match(es)", matches.len());

        self.write_output(&matches)
    }

    fn write_output(&self, rows: &[Row]) -> Result<()> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, self.field.as_str())),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for row in rows {
            formatter.write_row(row)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
