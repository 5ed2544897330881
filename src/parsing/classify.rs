//! Line classification for LINE talk exports.
//!
//! A LINE text export looks like this:
//!
//! ```text
//! [LINE] Aliceとのトーク履歴
//! 保存日時：2024/01/20 12:00
//!
//! 2024/01/15(月)
//! 09:00	Alice	Good morning
//! 09:01	Bob	Morning!
//! 続きのメッセージ
//! 09:02	Bob	[スタンプ]
//! ```
//!
//! There is no continuation marker: a line belongs to the previous message
//! whenever it does not look like a date separator or a tab-delimited
//! `time, sender[, content]` header. Everything here is a pure function of a
//! single line so the heuristic stays in one place.

use std::sync::LazyLock;

use regex::Regex;

/// `YYYY/MM/DD` at the start of a line, trailing text allowed.
static DATE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}/[0-9]{2}/[0-9]{2}").expect("date separator pattern is valid")
});

/// `[<app-tag>] <name>とのトーク履歴`
static TALK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[[^\]]*\]\s*(.+)とのトーク履歴").expect("talk header pattern is valid")
});

/// `H:MM` / `HH:MM`, optionally with the 午前/午後 prefix some exports use.
static MESSAGE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:午前|午後)?[0-9]{1,2}:[0-9]{2}$").expect("message time pattern is valid")
});

/// Prefix of the "saved at" line that follows the header in exports.
const SAVED_AT_PREFIX: &str = "保存日時";

/// Classification of one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty after trimming.
    Blank,

    /// Announces the date of the following messages. Holds the whole trimmed
    /// line, not just the date prefix.
    DateSeparator(&'a str),

    /// Starts a new message. `content` is `None` for two-field lines
    /// (stickers, calls and other payloads without inline text).
    Header {
        time: &'a str,
        sender: &'a str,
        content: Option<&'a str>,
    },

    /// Anything else: part of the previous message's body.
    Continuation(&'a str),
}

/// Strips leading and trailing whitespace, including a byte-order mark.
///
/// Inner whitespace and tabs are left alone. NEL (U+0085) is not trimmed.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(is_trimmable)
}

fn is_trimmable(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// Returns `true` if the trimmed line starts with `YYYY/MM/DD`.
pub fn is_date_separator(line: &str) -> bool {
    DATE_SEPARATOR.is_match(line)
}

/// Returns `true` if the line is the export's "saved at" line.
pub fn is_saved_at_line(line: &str) -> bool {
    trim_line(line).starts_with(SAVED_AT_PREFIX)
}

/// Returns `true` if a header's time field looks like a real time of day.
pub fn is_message_time(time: &str) -> bool {
    MESSAGE_TIME.is_match(time)
}

/// Classifies a single physical line.
///
/// The line is trimmed first. Date separators win over everything else; then
/// exactly two or three tab-separated fields make a header; any other
/// non-empty line is a continuation.
///
/// # Example
///
/// ```rust
/// use linetalk::parsing::{LineKind, classify};
///
/// assert_eq!(
///     classify("09:00\tAlice\tHi"),
///     LineKind::Header { time: "09:00", sender: "Alice", content: Some("Hi") },
/// );
/// assert_eq!(classify("2024/01/15(月)"), LineKind::DateSeparator("2024/01/15(月)"));
/// assert_eq!(classify("  "), LineKind::Blank);
/// assert_eq!(classify("more text"), LineKind::Continuation("more text"));
/// ```
pub fn classify(line: &str) -> LineKind<'_> {
    let line = trim_line(line);

    if is_date_separator(line) {
        return LineKind::DateSeparator(line);
    }

    let mut fields = line.split('\t');
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(time), Some(sender), Some(content), None) => LineKind::Header {
            time,
            sender,
            content: Some(content),
        },
        (Some(time), Some(sender), None, None) => LineKind::Header {
            time,
            sender,
            content: None,
        },
        _ if line.is_empty() => LineKind::Blank,
        _ => LineKind::Continuation(line),
    }
}

/// Extracts the partner name from the first line of an export.
///
/// Returns `None` when the first line is not a `[<app-tag>] <name>とのトーク履歴`
/// header or the name is blank.
///
/// # Example
///
/// ```rust
/// use linetalk::parsing::extract_partner;
///
/// assert_eq!(extract_partner("[LINE] Aliceとのトーク履歴\n..."), Some("Alice"));
/// assert_eq!(extract_partner("[X] Alice とのトーク履歴"), Some("Alice"));
/// assert_eq!(extract_partner("hello"), None);
/// ```
pub fn extract_partner(content: &str) -> Option<&str> {
    let first = trim_line(content.lines().next()?);
    let name = TALK_HEADER.captures(first)?.get(1)?.as_str().trim();
    (!name.is_empty()).then_some(name)
}
