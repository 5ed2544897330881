//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter (best for LLMs) - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - the whole talk as one JSON object - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines (one message per line, best for RAG) - requires `json-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Use Case | Keeps partner |
//! |--------|----------|---------------|
//! | CSV | ChatGPT/Claude context, spreadsheets | No |
//! | JSON | Structured data, APIs | Yes |
//! | JSONL | RAG pipelines, line-oriented tools | No |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> linetalk::Result<()> {
//! use linetalk::core::output::{write_csv, write_json, write_jsonl, to_csv};
//! use linetalk::core::models::OutputConfig;
//! use linetalk::{Message, Talk};
//!
//! let talk = Talk::new("Alice", vec![
//!     Message::new("2024/01/15(月)", "09:00", "Alice", "Hello!"),
//!     Message::new("2024/01/15(月)", "09:01", "Bob", "Hi there!"),
//! ]);
//!
//! let config = OutputConfig::new();
//!
//! write_csv(&talk, "output.csv", &config)?;
//! write_json(&talk, "output.json", &config)?;
//! write_jsonl(&talk, "output.jsonl", &config)?;
//!
//! let csv_string = to_csv(&talk, &OutputConfig::minimal())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
