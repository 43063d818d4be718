//! Front-matter extraction.
//!
//! Splits a raw document into a key/value header and a body string. This is
//! not a YAML parser: header lines are split on their first colon, values get
//! a small amount of normalization (bracketed lists, wrapping quotes, `\n`
//! escapes) and everything else passes through untouched.

use super::record::{FieldValue, Record};

/// A parsed content document: front-matter record plus markdown body.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub record: Record,
    pub body: String,
}

impl Document {
    /// Whether the document carried a recognizable front-matter header.
    pub fn has_front_matter(&self) -> bool {
        !self.record.is_empty()
    }
}

/// Parse a content document into its record and body.
///
/// A document without the `---` markers (or with markers that never close)
/// yields an empty record and the entire raw text as body. That is the
/// designed fallback, not an error; this function cannot fail.
pub fn parse_document(source: &str) -> Document {
    let Some((header, body)) = split_front_matter(source) else {
        return Document {
            record: Record::new(),
            body: source.to_string(),
        };
    };

    let mut record = Record::new();
    for line in header.lines() {
        if line.trim().is_empty() {
            continue;
        }
        // Lines without a colon carry no field and are ignored.
        let Some(colon) = line.find(':') else {
            continue;
        };
        let key = line[..colon].trim();
        let value = line[colon + 1..].trim();
        record.insert(key, normalize_value(value));
    }

    Document {
        record,
        body: body.to_string(),
    }
}

/// Split `---\n<header>\n---` off the start of the text.
///
/// Returns `(header, body)`, where body is the remainder with the single
/// newline after the closing marker consumed. `None` when the markers are
/// absent or never close.
fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let rest = source.strip_prefix("---\n")?;
    let close = rest.find("\n---")?;
    let header = &rest[..close];
    let after = &rest[close + 4..];
    let body = after.strip_prefix('\n').unwrap_or(after);
    Some((header, body))
}

/// Normalize a raw field value.
///
/// Bracket-delimited values become string sequences with per-element quote
/// stripping. Scalar values lose one fully-wrapping pair of double quotes,
/// then literal `\n` escapes become real newlines.
fn normalize_value(raw: &str) -> FieldValue {
    if raw.len() >= 2 && raw.starts_with('[') && raw.ends_with(']') {
        let inner = &raw[1..raw.len() - 1];
        if inner.trim().is_empty() {
            return FieldValue::List(Vec::new());
        }
        let items = inner
            .split(',')
            .map(|item| strip_quotes(item.trim()).to_string())
            .collect();
        return FieldValue::List(items);
    }

    let unquoted = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    };

    FieldValue::Scalar(unquoted.replace("\\n", "\n"))
}

/// Strip a single layer of surrounding single or double quotes.
fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
