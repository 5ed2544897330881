//! Line-level parsing utilities.
//!
//! These are the pure building blocks used by the [`parser`](crate::parser)
//! fold: trimming, classification of a single line, and partner extraction
//! from the header line.

pub mod classify;

pub use classify::{
    LineKind, classify, extract_partner, is_date_separator, is_message_time, is_saved_at_line,
    trim_line,
};
