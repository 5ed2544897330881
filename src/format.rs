//! Output format selection and dispatch.
//!
//! [`OutputFormat`] names a writer without pulling in any CLI framework, so
//! library users can pick a format from a file extension or a string and
//! hand a [`Talk`] to [`write_to_format`] or [`to_format_string`].
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> linetalk::Result<()> {
//! use linetalk::format::{OutputFormat, to_format_string};
//! use linetalk::core::models::OutputConfig;
//! use linetalk::parser::parse;
//!
//! let talk = parse("[LINE] Aliceとのトーク履歴\n2024/01/15(月)\n09:00\tAlice\tHello!");
//!
//! let format = OutputFormat::from_path("talk.jsonl")?;
//! let jsonl = to_format_string(&talk, format, &OutputConfig::new())?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Talk;
use crate::core::models::OutputConfig;
use crate::error::TalkError;

/// Output format for converted talks.
///
/// - [`Csv`](OutputFormat::Csv) - `;`-delimited table, most compact for LLM context
/// - [`Json`](OutputFormat::Json) - the whole talk, partner included
/// - [`Jsonl`](OutputFormat::Jsonl) - one message per line, for RAG/ML pipelines
///
/// ```rust
/// use linetalk::format::OutputFormat;
///
/// let format: OutputFormat = "ndjson".parse().unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// Pretty-printed JSON object `{ partner, messages }`
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names, aliases included.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Cargo feature that enables the writer for this format.
    pub fn required_feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Errors
    ///
    /// Returns [`TalkError::InvalidFormat`] for unknown extensions.
    pub fn from_path(path: &str) -> Result<Self, TalkError> {
        let ext = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        Self::from_name(ext).ok_or_else(|| {
            TalkError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )
        })
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            TalkError::invalid_format(
                "output",
                format!(
                    "Unknown format: '{s}'. Expected one of: {}",
                    OutputFormat::all_names().join(", ")
                ),
            )
        })
    }
}

fn feature_disabled(format: OutputFormat) -> TalkError {
    TalkError::invalid_format(
        "output",
        format!(
            "Output format {format} requires the '{}' feature to be enabled",
            format.required_feature()
        ),
    )
}

/// Writes a talk to a file in the specified format.
///
/// # Errors
///
/// Returns an error if the writer's feature is disabled or the file cannot
/// be written.
#[allow(unused_variables)]
pub fn write_to_format(
    talk: &Talk,
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), TalkError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(talk, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(talk, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(talk, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Converts a talk to a string in the specified format.
///
/// # Errors
///
/// Returns an error if the writer's feature is disabled or serialization fails.
#[allow(unused_variables)]
pub fn to_format_string(
    talk: &Talk,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, TalkError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(talk, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(talk, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(talk, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}
