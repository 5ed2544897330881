//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::Talk;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes a talk to a JSON file.
///
/// # Format
/// ```json
/// {
///   "partner": "Alice",
///   "messages": [
///     {"date": "2024/01/15(月)", "time": "09:00", "sender": "Alice", "content": "Hello"}
///   ]
/// }
/// ```
///
/// The JSON form always carries every field so it can be read back into a
/// [`Talk`]; the config is accepted for signature parity with the other writers.
pub fn write_json(talk: &Talk, output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(talk, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a talk to a pretty-printed JSON string.
pub fn to_json(talk: &Talk, _config: &OutputConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(talk)?)
}
