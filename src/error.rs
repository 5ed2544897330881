//! Unified error types for linetalk.
//!
//! Parsing a transcript never fails on its own; errors come from the edges:
//! reading files, size limits, strict-mode diagnostics, filter dates and
//! output writers. All of them are variants of [`TalkError`].

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for linetalk operations.
///
/// # Example
///
/// ```rust
/// use linetalk::error::Result;
/// use linetalk::Talk;
///
/// fn load() -> Result<Talk> {
///     Ok(Talk::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, TalkError>;

/// The error type for all linetalk operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TalkError {
    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input bytes are not valid UTF-8.
    ///
    /// Exports must already be decoded text; no transcoding is attempted.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A line could not be classified with confidence (strict mode only).
    #[error("Line {line}: {reason}")]
    InvalidLine {
        /// 1-based line number in the input
        line: usize,
        /// Why the line was rejected
        reason: String,
    },

    /// The input exceeds the configured size limit.
    #[error("Input too large: {actual_size} bytes (maximum: {max_size} bytes)")]
    InputTooLarge {
        /// Configured maximum in bytes
        max_size: usize,
        /// Actual input size in bytes
        actual_size: usize,
    },

    /// The requested format or file extension is not supported.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being selected (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date in filter configuration.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for TalkError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        TalkError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TalkError {
    /// Creates a strict-mode line error.
    pub fn invalid_line(line: usize, reason: impl Into<String>) -> Self {
        TalkError::InvalidLine {
            line,
            reason: reason.into(),
        }
    }

    /// Creates a size limit error.
    pub fn input_too_large(max_size: usize, actual_size: usize) -> Self {
        TalkError::InputTooLarge {
            max_size,
            actual_size,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        TalkError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        TalkError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, TalkError::Io(_))
    }

    /// Returns `true` if this is a strict-mode line error.
    pub fn is_invalid_line(&self) -> bool {
        matches!(self, TalkError::InvalidLine { .. })
    }

    /// Returns `true` if the input exceeded the size limit.
    pub fn is_input_too_large(&self) -> bool {
        matches!(self, TalkError::InputTooLarge { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, TalkError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, TalkError::InvalidDate { .. })
    }
}
