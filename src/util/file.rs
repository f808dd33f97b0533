use crate::errors::CheckResult;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads and parses a JSON payload.
///
/// # Arguments
/// * `path` - File to read, or `-` for standard input.
///
/// # Returns
/// The parsed document, or an I/O / JSON error.
pub fn read_json_payload(path: &str) -> CheckResult<Value> {
    let text = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(Path::new(path))?
    };

    parse_json_payload(&text)
}

/// Parses a JSON payload from text, keeping object members in document order.
pub fn parse_json_payload(text: &str) -> CheckResult<Value> {
    Ok(serde_json::from_str(text)?)
}
