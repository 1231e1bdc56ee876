//! Line classification and `key = value` splitting.

use super::error::ParseError;
use super::text::{trim_set, KEY_VALUE_TRIM};

/// Value given to a bare flag such as `restart`.
pub const FLAG_VALUE: &str = "TRUE";

/// A classified, non-empty options line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A section header. `None` for an empty `[]`, which keeps the current section.
    Section(Option<String>),
    /// A key/value pair.
    Pair { key: String, value: String },
}

/// Classifies a normalized line as a section header or a key/value pair.
pub fn parse_line(line: &str) -> Result<Line, ParseError> {
    if line.contains('[') {
        return parse_section(line).map(Line::Section);
    }
    let (key, value) = parse_key_value(line)?;
    Ok(Line::Pair { key, value })
}

fn parse_section(line: &str) -> Result<Option<String>, ParseError> {
    let missing = || ParseError::MissingBracket {
        line: line.to_string(),
    };
    let start = line.find('[').ok_or_else(missing)?;
    let end = line.rfind(']').ok_or_else(missing)?;

    // A `]` ahead of the `[` still closes the header; only the ends are trimmed.
    let inner = if start < end { &line[start + 1..end] } else { line };
    let name = trim_set(inner, &['[', ']', ' ', '\t']);
    Ok((!name.is_empty()).then(|| name.to_string()))
}

/// Splits a token into a trimmed key and value.
///
/// The key ends at the first `=` and the value is everything after it, so
/// values may contain `=` but keys may not. A token without `=` is a bare
/// flag valued [`FLAG_VALUE`].
pub fn parse_key_value(buffer: &str) -> Result<(String, String), ParseError> {
    let empty = || ParseError::EmptyKeyOrValue {
        line: buffer.to_string(),
    };

    let (key, value) = match buffer.split_once('=') {
        Some((key, value)) => (trim_set(key, &KEY_VALUE_TRIM), trim_set(value, &KEY_VALUE_TRIM)),
        None => (trim_set(buffer, &KEY_VALUE_TRIM), FLAG_VALUE),
    };

    if key.is_empty() || value.is_empty() {
        return Err(empty());
    }
    Ok((key.to_string(), value.to_string()))
}
