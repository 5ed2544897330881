//! Configuration for the transcript parser.
//!
//! The free function [`parse`](crate::parser::parse) is always lenient and
//! unbounded. [`TalkParser`](crate::parser::TalkParser) takes a
//! [`ParserConfig`] to impose a size limit or reject lines it cannot classify
//! with confidence.
//!
//! # Example
//!
//! ```rust
//! use linetalk::config::ParserConfig;
//! use linetalk::parser::TalkParser;
//!
//! let config = ParserConfig::new()
//!     .with_skip_invalid(false)
//!     .with_max_input_size(10 * 1024 * 1024);
//!
//! let parser = TalkParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for LINE talk export parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Skip or merge unclassifiable lines instead of returning errors (default: true)
    pub skip_invalid: bool,

    /// Reject inputs larger than this many bytes (default: no limit)
    pub max_input_size: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_invalid: true,
            max_input_size: None,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that fails on the first suspicious line.
    pub fn strict() -> Self {
        Self {
            skip_invalid: false,
            ..Self::default()
        }
    }

    /// Sets whether to skip invalid lines.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    /// Sets the maximum accepted input size in bytes.
    #[must_use]
    pub fn with_max_input_size(mut self, size: usize) -> Self {
        self.max_input_size = Some(size);
        self
    }
}
