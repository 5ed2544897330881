//! Message and talk types produced by the transcript parser.
//!
//! A LINE export is parsed into a [`Talk`]: the conversation partner plus the
//! ordered list of [`Message`]s. Dates and times are kept verbatim, exactly as
//! they appear in the export, because the export's strings are also the
//! display format.
//!
//! # Examples
//!
//! ```
//! use linetalk::{Message, Talk};
//!
//! let msg = Message::new("2024/01/15(月)", "09:00", "Alice", "Good morning");
//! assert_eq!(msg.sender(), "Alice");
//!
//! let talk = Talk::new("Alice", vec![msg]);
//! assert!(!talk.is_mine(&talk.messages[0]));
//! ```
//!
//! ## Serialization
//!
//! ```
//! use linetalk::Message;
//!
//! let msg = Message::new("2024/01/15(月)", "09:00", "Alice", "Hi");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single message from a LINE talk export.
///
/// | Field | Description |
/// |-------|-------------|
/// | `date` | Date-separator line in effect, verbatim (e.g. `2024/01/15(月)`), or empty |
/// | `time` | Time field of the message line, verbatim (e.g. `09:00`) |
/// | `sender` | Display name of the author |
/// | `content` | Text, possibly multi-line, possibly empty (stickers, calls) |
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Most recent date-separator line, verbatim.
    pub date: String,

    /// Time of day, verbatim from the export.
    pub time: String,

    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    ///
    /// Continuation lines are joined with `\n`. Empty for messages without an
    /// inline text payload.
    pub content: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            sender: sender.into(),
            content: content.into(),
        }
    }

    /// Returns the verbatim date text.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the verbatim time text.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` if the content is empty or whitespace-only.
    ///
    /// Unlike [`Talk::is_empty`], which checks for zero messages.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Parses the `YYYY/MM/DD` prefix of the date text.
    ///
    /// Returns `None` when the message has no date or the prefix is not a
    /// real calendar date.
    ///
    /// ```
    /// use linetalk::Message;
    /// use chrono::NaiveDate;
    ///
    /// let msg = Message::new("2024/01/15(月)", "09:00", "Alice", "");
    /// assert_eq!(msg.calendar_date(), NaiveDate::from_ymd_opt(2024, 1, 15));
    /// ```
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let prefix = self.date.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y/%m/%d").ok()
    }

    /// Parses the time text (`H:MM` or `HH:MM`).
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, "%H:%M").ok()
    }

    /// Returns the date in `YYYY年MM月DD日` form, as shown above each day of a
    /// talk. Falls back to the verbatim text if the date does not parse.
    ///
    /// ```
    /// use linetalk::Message;
    ///
    /// let msg = Message::new("2024/01/15(月)", "09:00", "Alice", "");
    /// assert_eq!(msg.formatted_date(), "2024年01月15日");
    /// ```
    pub fn formatted_date(&self) -> String {
        self.calendar_date()
            .map(|d| d.format("%Y年%m月%d日").to_string())
            .unwrap_or_else(|| self.date.clone())
    }
}

/// A parsed conversation: the partner and the ordered messages.
///
/// `messages` keeps input order, which is already chronological in an export.
/// An empty `partner` means the header line was not recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    /// The other participant, from the export's header line.
    pub partner: String,

    /// Messages in input order.
    pub messages: Vec<Message>,
}

impl Talk {
    /// Creates a talk from its parts.
    pub fn new(partner: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            partner: partner.into(),
            messages,
        }
    }

    /// Returns the partner name.
    pub fn partner(&self) -> &str {
        &self.partner
    }

    /// Returns `true` if the header named a partner.
    pub fn has_partner(&self) -> bool {
        !self.partner.is_empty()
    }

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the talk has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns `true` if `message` was sent by the exporting account rather
    /// than the partner.
    pub fn is_mine(&self, message: &Message) -> bool {
        message.sender != self.partner
    }

    /// Returns `true` if the message at `index` is the first of its day.
    ///
    /// Out-of-range indices return `false`.
    pub fn starts_new_day(&self, index: usize) -> bool {
        match index {
            0 => !self.messages.is_empty(),
            i if i < self.messages.len() => self.messages[i].date != self.messages[i - 1].date,
            _ => false,
        }
    }

    /// Groups consecutive messages sharing a date.
    ///
    /// ```
    /// use linetalk::{Message, Talk};
    ///
    /// let talk = Talk::new("Alice", vec![
    ///     Message::new("2024/01/15(月)", "09:00", "Alice", "a"),
    ///     Message::new("2024/01/15(月)", "09:01", "Bob", "b"),
    ///     Message::new("2024/01/16(火)", "10:00", "Alice", "c"),
    /// ]);
    ///
    /// let days = talk.days();
    /// assert_eq!(days.len(), 2);
    /// assert_eq!(days[0].1.len(), 2);
    /// ```
    pub fn days(&self) -> Vec<(&str, &[Message])> {
        let mut days = Vec::new();
        let mut start = 0;

        for i in 1..=self.messages.len() {
            if i == self.messages.len() || self.starts_new_day(i) {
                days.push((self.messages[start].date.as_str(), &self.messages[start..i]));
                start = i;
            }
        }

        days
    }

    /// Returns the distinct senders in first-seen order.
    pub fn senders(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for msg in &self.messages {
            if !seen.contains(&msg.sender.as_str()) {
                seen.push(&msg.sender);
            }
        }
        seen
    }
}
