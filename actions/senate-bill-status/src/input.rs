use crate::error::{Error, Result};
use crate::types::StatusLine;
use std::io::BufRead;

/// Read status lines from a JSON Lines stream (one object per line).
///
/// Blank lines are skipped; a malformed line, or one carrying a key the
/// output record writes itself (`name`, `kind`, ...), fails with its
/// 1-based number.
pub fn read_json_lines<R: BufRead>(reader: R) -> Result<Vec<StatusLine>> {
    let mut lines = Vec::new();
    for (index, text) in reader.lines().enumerate() {
        let text = text?;
        if text.trim().is_empty() {
            continue;
        }
        let line: StatusLine = serde_json::from_str(&text).map_err(|e| Error::InvalidLine {
            line: index + 1,
            message: e.to_string(),
        })?;
        if let Some(key) = line.reserved_extra_key() {
            return Err(Error::InvalidLine {
                line: index + 1,
                message: format!("field '{}' is reserved for classified records", key),
            });
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Read bare status text, one entry per line.
///
/// Each entry's `sequence` is its 1-based line number in the input. Blank
/// lines are skipped but still counted. Only a trailing `\r` is removed;
/// other whitespace stays part of the item.
pub fn read_plain_lines<R: BufRead>(reader: R) -> Result<Vec<StatusLine>> {
    let mut lines = Vec::new();
    for (index, text) in reader.lines().enumerate() {
        let text = text?;
        let item = text.strip_suffix('\r').unwrap_or(&text);
        if item.trim().is_empty() {
            continue;
        }
        lines.push(StatusLine::new(item).with_sequence(sequence_for(index)?));
    }
    Ok(lines)
}

fn sequence_for(index: usize) -> Result<u32> {
    u32::try_from(index + 1).map_err(|_| Error::InvalidLine {
        line: index + 1,
        message: "line number does not fit a status sequence".to_string(),
    })
}
