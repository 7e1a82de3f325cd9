//! Line grammar for `.env`-style content.
//!
//! Responsibilities:
//! - Turn a single line into an optional key/value [`Assignment`].
//! - Strip trailing comments and one matching pair of outer quotes.
//!
//! Does NOT handle:
//! - Writing anything into a variable table (see `loader.rs`).
//! - Interpolation, escape sequences or multi-line values.
//!
//! Invariants:
//! - Parsing never fails; lines that are not assignments yield `None`.
//! - Everything from the first `#` onward is a comment, even inside quotes.
//! - Only the first `=` separates key from value.

const COMMENT: char = '#';
const SEPARATOR: char = '=';

/// A key/value pair parsed from one line, borrowing from that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Parse one line into an assignment.
///
/// Returns `None` for blank lines, comment-only lines, lines without `=`
/// and lines whose key is empty after trimming.
pub fn parse_line(line: &str) -> Option<Assignment<'_>> {
    let line = trim_comment(line);
    let (key, value) = line.split_once(SEPARATOR)?;

    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some(Assignment {
        key,
        value: unquote(value.trim()),
    })
}

/// Iterate the assignments of a block of content together with their
/// 1-based line numbers. Non-assignment lines are skipped.
pub fn assignments(content: &str) -> impl Iterator<Item = (usize, Assignment<'_>)> {
    content
        .split('\n')
        .enumerate()
        .filter_map(|(index, line)| parse_line(line).map(|assignment| (index + 1, assignment)))
}

/// Drop everything from the first `#` onward.
pub fn trim_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(at) => &line[..at],
        None => line,
    }
}

/// Strip one pair of matching outer quotes (`'` or `"`).
pub fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() < 2 {
        return value;
    }

    let first = bytes[0];
    let last = bytes[bytes.len() - 1];
    if first == last && (first == b'"' || first == b'\'') {
        return &value[1..value.len() - 1];
    }

    value
}
