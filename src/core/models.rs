//! Output configuration shared by the file writers.

use serde::{Deserialize, Serialize};

/// Controls which columns the CSV and JSONL writers emit.
///
/// Sender and content are always written. The JSON writer serializes the
/// whole [`Talk`](crate::Talk) and ignores these flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Include the date-separator text (default: true)
    pub include_dates: bool,
    /// Include the message time (default: true)
    pub include_times: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::all()
    }
}

impl OutputConfig {
    /// Creates a configuration that writes every column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes date, time, sender and content.
    pub fn all() -> Self {
        Self {
            include_dates: true,
            include_times: true,
        }
    }

    /// Writes sender and content only, the most compact form.
    pub fn minimal() -> Self {
        Self {
            include_dates: false,
            include_times: false,
        }
    }

    #[must_use]
    pub fn with_dates(mut self, include: bool) -> Self {
        self.include_dates = include;
        self
    }

    #[must_use]
    pub fn with_times(mut self, include: bool) -> Self {
        self.include_times = include;
        self
    }
}
