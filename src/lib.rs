//! # linetalk
//!
//! A Rust library for turning LINE "export as text" talk histories into
//! structured, strongly-typed conversations.
//!
//! ## Overview
//!
//! A LINE export is a plain-text file: a `[LINE] <name>とのトーク履歴` header,
//! date-separator lines such as `2024/01/15(月)`, and tab-delimited
//! `time, sender, content` message lines whose bodies may continue over
//! several physical lines. linetalk folds that into a [`Talk`]: the partner
//! name plus the ordered [`Message`]s.
//!
//! ## Quick Start
//!
//! ```rust
//! use linetalk::prelude::*;
//!
//! let export = "[LINE] Aliceとのトーク履歴
//! 2024/01/15(月)
//! 09:00\tAlice\tGood morning
//! 09:01\tBob\tMorning!
//! 続きのメッセージ";
//!
//! let talk = parse(export);
//! assert_eq!(talk.partner, "Alice");
//! assert_eq!(talk.messages[1].content, "Morning!\n続きのメッセージ");
//! ```
//!
//! ## Reading Files
//!
//! ```rust,no_run
//! use linetalk::parser::TalkParser;
//!
//! let talk = TalkParser::new().parse_file("talk.txt")?;
//! println!("{} messages with {}", talk.len(), talk.partner);
//! # Ok::<(), linetalk::TalkError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`parse`](parser::parse), [`parse_with_diagnostics`](parser::parse_with_diagnostics), [`TalkParser`](parser::TalkParser)
//! - [`parsing`] - Pure line classification ([`classify`](parsing::classify))
//! - [`message`] - [`Message`] and [`Talk`]
//! - [`config`] - [`ParserConfig`](config::ParserConfig)
//! - [`core`] - Filtering, merging and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`error`] - [`TalkError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{Result, TalkError};
pub use message::{Message, Talk};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use linetalk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Message, Talk};

    pub use crate::error::{Result, TalkError};

    pub use crate::parser::{
        Diagnostic, DiagnosticKind, ParseReport, TalkParser, parse, parse_with_diagnostics,
    };

    pub use crate::config::ParserConfig;

    pub use crate::core::models::OutputConfig;

    pub use crate::core::filter::{FilterConfig, apply_filters};

    pub use crate::core::processor::{ProcessingStats, merge_consecutive};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::OutputFormat;
}
