//! Merging consecutive messages and processing statistics.

use crate::Message;

/// Merges consecutive messages from the same sender on the same day.
///
/// The merged entry keeps the date and time of its first message; contents
/// are joined with `\n`. This reduces token count when feeding talks to LLMs.
///
/// # Example
///
/// ```
/// use linetalk::Message;
/// use linetalk::core::merge_consecutive;
///
/// let merged = merge_consecutive(vec![
///     Message::new("2024/01/15(月)", "09:00", "Alice", "Hi"),
///     Message::new("2024/01/15(月)", "09:01", "Alice", "How are you?"),
///     Message::new("2024/01/15(月)", "09:05", "Bob", "Fine"),
/// ]);
///
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0].content, "Hi\nHow are you?");
/// assert_eq!(merged[0].time, "09:00");
/// ```
pub fn merge_consecutive(messages: Vec<Message>) -> Vec<Message> {
    let mut merged: Vec<Message> = Vec::with_capacity(messages.len());

    for msg in messages {
        match merged.last_mut() {
            Some(last) if last.sender == msg.sender && last.date == msg.date => {
                last.content.push('\n');
                last.content.push_str(&msg.content);
            }
            _ => merged.push(msg),
        }
    }

    merged
}

/// Statistics about a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub original_count: usize,
    pub merged_count: usize,
}

impl ProcessingStats {
    pub fn new(original_count: usize, merged_count: usize) -> Self {
        Self {
            original_count,
            merged_count,
        }
    }

    /// Percentage of entries removed by merging (0.0 - 100.0).
    pub fn compression_ratio(&self) -> f64 {
        if self.original_count == 0 {
            return 0.0;
        }
        (1.0 - (self.merged_count as f64 / self.original_count as f64)) * 100.0
    }

    /// Number of entries removed by merging.
    pub fn messages_saved(&self) -> usize {
        self.original_count.saturating_sub(self.merged_count)
    }
}
