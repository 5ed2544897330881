//! JSON Lines output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::{Message, Talk};

/// One message as written to a JSONL line.
#[derive(Serialize)]
struct JsonlRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<&'a str>,
    sender: &'a str,
    content: &'a str,
}

impl<'a> JsonlRecord<'a> {
    fn from_message(msg: &'a Message, config: &OutputConfig) -> Self {
        Self {
            date: config.include_dates.then_some(msg.date.as_str()),
            time: config.include_times.then_some(msg.time.as_str()),
            sender: &msg.sender,
            content: &msg.content,
        }
    }
}

/// Writes a talk's messages to a JSON Lines file.
///
/// # Format
/// One JSON object per line, no enclosing array:
/// ```text
/// {"date":"2024/01/15(月)","time":"09:00","sender":"Alice","content":"Hello"}
/// {"date":"2024/01/15(月)","time":"09:01","sender":"Bob","content":"Hi"}
/// ```
///
/// Ideal for RAG pipelines where each message becomes a document.
pub fn write_jsonl(talk: &Talk, output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, &talk.messages, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts a talk's messages to a JSON Lines string.
pub fn to_jsonl(talk: &Talk, config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_lines(&mut buf, &talk.messages, config)?;
    Ok(String::from_utf8(buf)?)
}

fn write_lines<W: Write>(sink: &mut W, messages: &[Message], config: &OutputConfig) -> Result<()> {
    for msg in messages {
        serde_json::to_writer(&mut *sink, &JsonlRecord::from_message(msg, config))?;
        sink.write_all(b"\n")?;
    }
    Ok(())
}
