//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::{Message, Talk};

/// Writes a talk's messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Time`, `Sender`, `Content`; date and time are
///   dropped when disabled in [`OutputConfig`]
/// - Multi-line contents are quoted, newlines preserved
/// - Encoding: UTF-8
pub fn write_csv(talk: &Talk, output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(file, &talk.messages, config)
}

/// Converts a talk's messages to a CSV string.
///
/// Same format as [`write_csv`], but returns a `String`.
pub fn to_csv(talk: &Talk, config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_records(&mut buf, &talk.messages, config)?;
    Ok(String::from_utf8(buf)?)
}

fn write_records<W: Write>(sink: W, messages: &[Message], config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(sink);

    writer.write_record(build_header(config))?;
    for msg in messages {
        writer.write_record(build_record(msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(4);

    if config.include_dates {
        header.push("Date");
    }
    if config.include_times {
        header.push("Time");
    }

    header.push("Sender");
    header.push("Content");
    header
}

fn build_record<'a>(msg: &'a Message, config: &OutputConfig) -> Vec<&'a str> {
    let mut record = Vec::with_capacity(4);

    if config.include_dates {
        record.push(msg.date.as_str());
    }
    if config.include_times {
        record.push(msg.time.as_str());
    }

    record.push(msg.sender.as_str());
    record.push(msg.content.as_str());
    record
}
