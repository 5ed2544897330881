//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options, convertible into
//!   [`format::OutputFormat`](crate::format::OutputFormat)

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;

/// Stem of the output file written when `--output` is omitted.
pub const DEFAULT_OUTPUT_STEM: &str = "talk";

/// Convert LINE talk history exports into CSV, JSON or JSON Lines.
#[derive(Parser, Debug, Clone)]
#[command(name = "linetalk")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    linetalk \"[LINE] Aliceとのトーク.txt\"
    linetalk talk.txt -o alice.json
    linetalk talk.txt -f jsonl --after 2024-01-01 --from Alice
    linetalk talk.txt --merge --strict")]
pub struct Args {
    /// Path to the exported talk history (.txt)
    pub input: String,

    /// Path to output file [default: talk.<format extension>]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (inferred from --output when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep messages from this sender only
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Merge consecutive messages from the same sender on the same day
    #[arg(long)]
    pub merge: bool,

    /// Fail on the first line that cannot be parsed with confidence
    #[arg(long)]
    pub strict: bool,

    /// Reject inputs larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_size: Option<usize>,

    /// Log parser decisions to stderr (same as RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the parser configuration selected by `--strict` and `--max-size`.
    pub fn parser_config(&self) -> ParserConfig {
        let mut config = ParserConfig::new().with_skip_invalid(!self.strict);
        if let Some(max) = self.max_size {
            config = config.with_max_input_size(max);
        }
        config
    }

    /// Resolves the output format: `--format`, else the output extension, else CSV.
    pub fn resolved_format(&self) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }
        self.output
            .as_deref()
            .and_then(|path| crate::format::OutputFormat::from_path(path).ok())
            .map(OutputFormat::from)
            .unwrap_or_default()
    }

    /// Output path: `--output` verbatim, else `talk.<ext>` for the resolved format.
    pub fn resolved_output(&self) -> String {
        if let Some(output) = &self.output {
            return output.clone();
        }
        let format: crate::format::OutputFormat = self.resolved_format().into();
        format!("{DEFAULT_OUTPUT_STEM}.{}", format.extension())
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON object with partner and messages
    Json,

    /// JSON Lines - one message per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

impl From<crate::format::OutputFormat> for OutputFormat {
    fn from(format: crate::format::OutputFormat) -> OutputFormat {
        match format {
            crate::format::OutputFormat::Csv => OutputFormat::Csv,
            crate::format::OutputFormat::Json => OutputFormat::Json,
            crate::format::OutputFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}
