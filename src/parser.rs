//! Transcript parser for LINE talk exports.
//!
//! Parsing is a single forward pass: every physical line is
//! [classified](crate::parsing::classify) and folded into a [`ParseState`]
//! holding the current date and the messages emitted so far.
//!
//! # Example
//!
//! ```rust
//! use linetalk::parser::parse;
//!
//! let talk = parse("[LINE] Aliceとのトーク履歴\n2024/01/15(月)\n09:00\tAlice\tHi\n09:01\tBob\tHello\nthere");
//!
//! assert_eq!(talk.partner, "Alice");
//! assert_eq!(talk.messages.len(), 2);
//! assert_eq!(talk.messages[1].content, "Hello\nthere");
//! ```
//!
//! # Lenient vs strict
//!
//! [`parse`] never fails: unrecognized lines are merged into the previous
//! message or dropped. [`parse_with_diagnostics`] produces the same [`Talk`]
//! plus a list of lines it could not classify with confidence, and
//! [`TalkParser`] configured with `skip_invalid = false` turns the first of
//! those into an error.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::error::{Result, TalkError};
use crate::parsing::{LineKind, classify, extract_partner, is_message_time, is_saved_at_line};
use crate::{Message, Talk};

/// What applying one line did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// The current date was replaced.
    DateChanged,
    /// A new message was appended.
    MessageStarted,
    /// The line was appended to the last message.
    Continued,
    /// A non-empty line was discarded because no message exists yet.
    Dropped,
    /// A blank line was ignored.
    Skipped,
}

/// Running state of the line fold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    current_date: String,
    messages: Vec<Message>,
}

impl ParseState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the date in effect for the next message.
    pub fn current_date(&self) -> &str {
        &self.current_date
    }

    /// Returns the messages emitted so far.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Applies one classified line.
    pub fn apply(&mut self, kind: LineKind<'_>) -> LineOutcome {
        match kind {
            LineKind::DateSeparator(date) => {
                date.clone_into(&mut self.current_date);
                LineOutcome::DateChanged
            }
            LineKind::Header {
                time,
                sender,
                content,
            } => {
                self.messages.push(Message::new(
                    self.current_date.as_str(),
                    time,
                    sender,
                    content.unwrap_or_default(),
                ));
                LineOutcome::MessageStarted
            }
            LineKind::Continuation(text) => match self.messages.last_mut() {
                Some(last) => {
                    last.content.push('\n');
                    last.content.push_str(text);
                    LineOutcome::Continued
                }
                None => LineOutcome::Dropped,
            },
            LineKind::Blank => LineOutcome::Skipped,
        }
    }

    /// Consumes the state, producing the finished talk.
    pub fn finish(self, partner: impl Into<String>) -> Talk {
        Talk::new(partner, self.messages)
    }
}

/// Parses the full text of a LINE talk export.
///
/// Never fails and has no side effects. A first line that is not a
/// `[<app-tag>] <name>とのトーク履歴` header yields an empty partner.
pub fn parse(content: &str) -> Talk {
    let partner = extract_partner(content).unwrap_or_default();

    content
        .lines()
        .map(classify)
        .fold(ParseState::new(), |mut state, kind| {
            state.apply(kind);
            state
        })
        .finish(partner)
}

/// Why a line could not be classified with confidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The first line is not a talk header; the partner is unknown.
    MissingHeader,
    /// Text before the first message was discarded.
    OrphanLine { text: String },
    /// A header-shaped line has an empty sender field.
    EmptySender,
    /// A header-shaped line has a time field that is not a time of day,
    /// usually a body line that happened to contain tabs.
    SuspiciousTime { time: String },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::MissingHeader => {
                write!(f, "first line is not a talk history header")
            }
            DiagnosticKind::OrphanLine { text } => {
                write!(f, "text before the first message was dropped: '{text}'")
            }
            DiagnosticKind::EmptySender => write!(f, "message line has an empty sender"),
            DiagnosticKind::SuspiciousTime { time } => {
                write!(f, "time field '{time}' is not HH:MM")
            }
        }
    }
}

/// A line the parser could not classify with confidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl From<Diagnostic> for TalkError {
    fn from(diagnostic: Diagnostic) -> Self {
        TalkError::invalid_line(diagnostic.line, diagnostic.kind.to_string())
    }
}

/// Result of [`parse_with_diagnostics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    /// Same talk [`parse`] returns for the input.
    pub talk: Talk,
    /// Suspicious lines, in line order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    /// Returns `true` if every line was classified with confidence.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parses like [`parse`], also reporting lines that look wrong.
///
/// The header line and the export's `保存日時` line are expected before the
/// first message and are not reported as orphans.
///
/// # Example
///
/// ```rust
/// use linetalk::parser::{DiagnosticKind, parse_with_diagnostics};
///
/// let report = parse_with_diagnostics("[LINE] Aliceとのトーク履歴\n09:00\tAlice\tHi\na\tb\tc\td");
/// assert!(report.is_clean());
/// assert_eq!(report.talk.messages[0].content, "Hi\na\tb\tc\td");
///
/// let report = parse_with_diagnostics("[LINE] Aliceとのトーク履歴\n09:00\tAlice\tHi\nsee\tthis");
/// assert_eq!(report.talk.messages.len(), 2);
/// assert!(matches!(report.diagnostics[0].kind, DiagnosticKind::SuspiciousTime { .. }));
/// ```
pub fn parse_with_diagnostics(content: &str) -> ParseReport {
    let partner = extract_partner(content);
    let mut diagnostics = Vec::new();

    if partner.is_none() {
        diagnostics.push(Diagnostic::new(1, DiagnosticKind::MissingHeader));
    }

    let mut state = ParseState::new();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let kind = classify(raw);

        if let LineKind::Header { time, sender, .. } = kind {
            if !is_message_time(time) {
                diagnostics.push(Diagnostic::new(
                    line,
                    DiagnosticKind::SuspiciousTime {
                        time: time.to_string(),
                    },
                ));
            }
            if sender.is_empty() {
                diagnostics.push(Diagnostic::new(line, DiagnosticKind::EmptySender));
            }
        }

        if let (LineOutcome::Dropped, LineKind::Continuation(text)) = (state.apply(kind), kind) {
            if line > 1 && !is_saved_at_line(raw) {
                diagnostics.push(Diagnostic::new(
                    line,
                    DiagnosticKind::OrphanLine {
                        text: text.to_string(),
                    },
                ));
            }
        }
    }

    ParseReport {
        talk: state.finish(partner.unwrap_or_default()),
        diagnostics,
    }
}

/// Configured parser for LINE talk exports.
///
/// # Example
///
/// ```rust,no_run
/// use linetalk::parser::TalkParser;
///
/// let parser = TalkParser::new();
/// let talk = parser.parse_file("[LINE] Aliceとのトーク.txt")?;
/// # Ok::<(), linetalk::TalkError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TalkParser {
    config: ParserConfig,
}

impl TalkParser {
    /// Creates a new lenient parser without a size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Creates a parser that rejects the first suspicious line.
    pub fn strict() -> Self {
        Self {
            config: ParserConfig::strict(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses export text already in memory.
    ///
    /// # Errors
    ///
    /// - [`TalkError::InputTooLarge`] if the input exceeds `max_input_size`
    /// - [`TalkError::InvalidLine`] in strict mode, for the first diagnostic
    pub fn parse_str(&self, content: &str) -> Result<Talk> {
        self.check_size(content.len())?;

        let report = parse_with_diagnostics(content);

        if self.config.skip_invalid {
            for diagnostic in &report.diagnostics {
                debug!(line = diagnostic.line, reason = %diagnostic.kind, "skipped");
            }
            debug!(
                partner = %report.talk.partner,
                messages = report.talk.len(),
                skipped = report.diagnostics.len(),
                "parsed talk"
            );
            return Ok(report.talk);
        }

        if let Some(first) = report.diagnostics.into_iter().next() {
            warn!(line = first.line, reason = %first.kind, "rejecting talk export");
            return Err(first.into());
        }

        debug!(
            partner = %report.talk.partner,
            messages = report.talk.len(),
            "parsed talk (strict)"
        );
        Ok(report.talk)
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`TalkError::Io`] if the file cannot be read and
    /// [`TalkError::Utf8`] if it is not UTF-8 text, in addition to the
    /// errors of [`parse_str`](Self::parse_str).
    pub fn parse(&self, path: &Path) -> Result<Talk> {
        if self.config.max_input_size.is_some() {
            let len = fs::metadata(path)?.len();
            self.check_size(usize::try_from(len).unwrap_or(usize::MAX))?;
        }

        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|source| TalkError::Utf8 {
            context: format!("reading {}", path.display()),
            source,
        })?;

        debug!(path = %path.display(), bytes = content.len(), "read talk export");
        self.parse_str(&content)
    }

    /// Reads and parses an export file (convenience method accepting &str path).
    pub fn parse_file(&self, path: &str) -> Result<Talk> {
        self.parse(Path::new(path))
    }

    fn check_size(&self, actual_size: usize) -> Result<()> {
        match self.config.max_input_size {
            Some(max_size) if actual_size > max_size => {
                Err(TalkError::input_too_large(max_size, actual_size))
            }
            _ => Ok(()),
        }
    }
}
