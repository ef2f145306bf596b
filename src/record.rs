//! The semicolon-delimited export written by the extractor and read by the
//! renderer: an optional header line, then `display_name;description;url;owner`
//! per entry, each line `\n` terminated.

use crate::constants::{DELIMITER_SUBSTITUTE, EXPORT_HEADER, FIELD_DELIMITER};
use crate::types::Entry;

const FIELD_COUNT: usize = 4;

/// Result of reading a delimited document.
#[derive(Debug, Default)]
pub struct ParsedRecords {
    pub entries: Vec<Entry>,
    /// Non-blank lines that did not have exactly four fields.
    pub skipped: usize,
}

/// Makes a value safe to embed as one field: the delimiter becomes
/// `DELIMITER_SUBSTITUTE` and line breaks become spaces.
pub fn sanitize_field(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            FIELD_DELIMITER => DELIMITER_SUBSTITUTE,
            '\r' | '\n' => ' ',
            other => other,
        })
        .collect()
}

pub fn serialize_line(entry: &Entry) -> String {
    let fields = [
        &entry.display_name,
        &entry.description,
        &entry.url,
        &entry.owner,
    ];
    let mut line = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            line.push(FIELD_DELIMITER);
        }
        line.push_str(&sanitize_field(field));
    }
    line
}

/// Header line followed by one line per entry.
pub fn serialize_all(entries: &[Entry]) -> String {
    let mut out = String::with_capacity(EXPORT_HEADER.len() + entries.len() * 64);
    out.push_str(EXPORT_HEADER);
    out.push('\n');
    for entry in entries {
        out.push_str(&serialize_line(entry));
        out.push('\n');
    }
    out
}

/// Parses one record line. Returns `None` unless it has exactly four fields.
pub fn parse_line(line: &str) -> Option<Entry> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }
    Some(Entry::new(fields[0], fields[1], fields[2], fields[3]))
}

pub fn is_header(line: &str) -> bool {
    line.trim() == EXPORT_HEADER
}

pub fn parse_document(text: &str) -> ParsedRecords {
    let mut parsed = ParsedRecords::default();
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || (index == 0 && is_header(line)) {
            continue;
        }
        match parse_line(line) {
            Some(entry) if !(entry.display_name.is_empty() && entry.url.is_empty()) => {
                parsed.entries.push(entry)
            }
            _ => {
                tracing::warn!(line = index + 1, "Skipping malformed record: {}", line);
                parsed.skipped += 1;
            }
        }
    }
    parsed
}
