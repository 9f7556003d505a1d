use std::collections::HashMap;
use std::io::BufRead;

use crate::error::{Error, ParseError, ParseErrorKind};
use crate::model::Entry;
use crate::value::Value;

/// Parse config entries from UTF-8 text.
///
/// Entries come back in first-seen key order; a key appearing on several
/// lines keeps the last occurrence.
pub fn parse_str(input: &str) -> Result<Vec<Entry>, Error> {
    let mut entries = Vec::new();
    let mut by_key = HashMap::<String, usize>::new();

    for (idx, line) in input.lines().enumerate() {
        let Some(entry) = parse_line(line, idx as u32 + 1)? else {
            continue;
        };

        if let Some(existing_idx) = by_key.get(&entry.key).copied() {
            entries[existing_idx] = entry;
        } else {
            by_key.insert(entry.key.clone(), entries.len());
            entries.push(entry);
        }
    }

    Ok(entries)
}

/// Parse config entries from UTF-8 bytes.
pub fn parse_bytes(input: &[u8]) -> Result<Vec<Entry>, Error> {
    let text = std::str::from_utf8(input)?;
    parse_str(text)
}

/// Parse config entries from a buffered reader.
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Vec<Entry>, Error> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(Error::Read)?;
    parse_bytes(&buf)
}

/// Apply the line contract to one raw line.
///
/// Skip checks run on the untrimmed line: only an exactly-empty line or
/// one whose first character is `#` is skipped, so an indented comment or
/// a whitespace-only line falls through to the separator check. The split
/// is on the first `=`; only the key is trimmed, the raw value goes to
/// the typer untouched.
pub(crate) fn parse_line(line: &str, line_num: u32) -> Result<Option<Entry>, ParseError> {
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let Some((raw_key, raw_value)) = line.split_once('=') else {
        return Err(ParseError::new(
            line_num,
            ParseErrorKind::MalformedLine(line.to_owned()),
        ));
    };

    let Some(value) = Value::parse(raw_value) else {
        return Err(ParseError::new(
            line_num,
            ParseErrorKind::InvalidValue(raw_value.trim().to_owned()),
        ));
    };

    Ok(Some(Entry {
        key: raw_key.trim().to_owned(),
        value,
        line: line_num,
    }))
}
