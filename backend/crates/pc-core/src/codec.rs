//! Line codec for user records.
//!
//! One record maps to one comma-separated line with the columns of
//! [`header_line`]. Values holding a comma, a double quote or a newline are
//! wrapped in double quotes with inner quotes doubled, so an encoded record
//! can span several physical lines. [`record_lines`] rejoins such a record
//! and leaves every other line on its own.

use crate::UserRecord;

use std::borrow::Cow;

const SEPARATOR: char = ',';
const QUOTE: char = '"';
const FIELD_COUNT: usize = 10;
const HEADER: &str = "id,firstName,lastName,email,phone,city,country,picture,gender,age";

/// Column-name line that starts every backing file
pub fn header_line() -> &'static str {
    HEADER
}

/// Encode `record` as one CSV line (no terminator)
pub fn encode(record: &UserRecord) -> String {
    let age = record.age.to_string();
    let values: [&str; FIELD_COUNT] = [
        &record.id,
        &record.first_name,
        &record.last_name,
        &record.email,
        &record.phone,
        &record.city,
        &record.country,
        &record.picture,
        &record.gender,
        &age,
    ];

    let mut line = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            line.push(SEPARATOR);
        }
        line.push_str(&escape(value));
    }
    line
}

/// Decode one CSV line.
///
/// Returns `None` for blank lines and for lines with fewer than ten values;
/// callers skip those. Values past the tenth are ignored. An age that does
/// not start with digits becomes 0.
pub fn decode(line: &str) -> Option<UserRecord> {
    if line.trim().is_empty() {
        return None;
    }

    let values = split_fields(line);
    if values.len() < FIELD_COUNT {
        return None;
    }

    let mut values = values.into_iter();
    Some(UserRecord {
        id: values.next()?,
        first_name: values.next()?,
        last_name: values.next()?,
        email: values.next()?,
        phone: values.next()?,
        city: values.next()?,
        country: values.next()?,
        picture: values.next()?,
        gender: values.next()?,
        age: parse_age(&values.next()?),
    })
}

/// Split file contents into encoded record lines.
///
/// Every `\n` ends a line and a trailing `\r` is dropped. A line that fails
/// to decode because a quoted value is left open is joined with the lines
/// after it only when the joined text is exactly one full record; otherwise
/// it stays on its own so one bad line never hides the lines that follow.
/// No empty entry is produced for the final terminator.
pub fn record_lines(content: &str) -> Vec<&str> {
    let spans = physical_spans(content);
    let mut lines = Vec::with_capacity(spans.len());
    let mut i = 0;

    while i < spans.len() {
        let (start, end) = spans[i];
        match continuation_end(content, &spans, i) {
            Some(last) => {
                lines.push(trim_cr(&content[start..spans[last].1]));
                i = last + 1;
            }
            None => {
                lines.push(trim_cr(&content[start..end]));
                i += 1;
            }
        }
    }
    lines
}

/// Byte ranges of the `\n`-separated lines, terminators excluded
fn physical_spans(content: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;

    for (i, _) in content.match_indices('\n') {
        spans.push((start, i));
        start = i + 1;
    }
    if start < content.len() {
        spans.push((start, content.len()));
    }
    spans
}

/// Last span of a record whose quoted value continues past `spans[first]`
fn continuation_end(content: &str, spans: &[(usize, usize)], first: usize) -> Option<usize> {
    let (start, end) = spans[first];
    let line = trim_cr(&content[start..end]);
    if !has_open_quote(line) || decode(line).is_some() {
        return None;
    }

    let mut open = true;
    for (index, &(line_start, line_end)) in spans.iter().enumerate().skip(first + 1) {
        if has_open_quote(&content[line_start..line_end]) {
            open = !open;
        }
        if !open {
            let joined = trim_cr(&content[start..line_end]);
            return (split_fields(joined).len() == FIELD_COUNT).then_some(index);
        }
    }
    None
}

/// Odd number of quote characters, so a quoted value is left open
fn has_open_quote(text: &str) -> bool {
    text.bytes().filter(|&b| b == b'"').count() % 2 == 1
}

fn escape(value: &str) -> Cow<'_, str> {
    if value.contains([SEPARATOR, QUOTE, '\n']) {
        Cow::Owned(format!("{QUOTE}{}{QUOTE}", value.replace(QUOTE, "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            QUOTE if in_quotes && chars.peek() == Some(&QUOTE) => {
                current.push(QUOTE);
                chars.next();
            }
            QUOTE => in_quotes = !in_quotes,
            SEPARATOR if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
}

/// Leading-digits integer parse: "42" and " 42yo" give 42, anything else 0
fn parse_age(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end].parse().unwrap_or(0)
}

fn trim_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
