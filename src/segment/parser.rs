//! RFC 6901 escaping, rendering and string parsing.
//!
//! Rendering escapes `~` to `~0` and `/` to `~1` so step values can carry the
//! delimiter safely. Parsing is deliberately asymmetric: it splits on `/` and
//! keeps every raw segment verbatim, never applying [`unescape`], so a parsed
//! `~0foo` stays the four-character name `~0foo`.

use std::fmt;
use std::str::FromStr;

use super::types::PathSegment;
use crate::error::PathError;

/// Escapes a step value for RFC 6901 rendering: every `~` becomes `~0` and
/// every `/` becomes `~1`; all other characters pass through unchanged.
#[must_use]
pub fn escape(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '~' => result.push_str("~0"),
            '/' => result.push_str("~1"),
            _ => result.push(c),
        }
    }
    result
}

/// Inverse of [`escape`]: `~0` becomes `~` and `~1` becomes `/`. Any other
/// `~` pair is kept as the literal two characters, as is a trailing lone `~`.
///
/// This transform is a standalone utility; [`FromStr`] parsing never invokes
/// it.
#[must_use]
pub fn unescape(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => result.push('~'),
            Some('1') => result.push('/'),
            Some(other) => {
                result.push('~');
                result.push(other);
            }
            None => result.push('~'),
        }
    }
    result
}

impl fmt::Display for PathSegment {
    /// The memoized RFC 6901 rendering; the missing sentinel prints nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathSegment {
    type Err = PathError;

    /// Parses a rendered path back into a chain.
    ///
    /// The empty string yields the missing sentinel. Anything else must start
    /// with `/`; the remainder splits on `/` (consecutive delimiters yield
    /// empty-string steps) and every raw segment, escape sequences included,
    /// is appended untouched as a field-name step. Digits-only segments
    /// become names too, never indices.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidFormat`] for non-empty input that does not
    /// start with `/`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Ok(PathSegment::missing());
        }
        if !text.starts_with('/') {
            log::debug!("rejecting path without leading '/': {text:?}");
            return Err(PathError::InvalidFormat {
                message: "path must start with '/'".to_string(),
            });
        }
        let mut result = PathSegment::missing();
        for raw in text[1..].split('/') {
            result = result.append_name(raw);
        }
        log::trace!("parsed {} segment(s) from {text:?}", result.depth() + 1);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::{escape, unescape};

    #[test]
    fn test_escape_replaces_tilde_and_slash() {
        assert_eq!(escape("~/"), "~0~1");
        assert_eq!(escape("a/b~c"), "a~1b~0c");
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_unescape_inverts_escape_pairs() {
        assert_eq!(unescape("~0~1"), "~/");
        assert_eq!(unescape("a~1b~0c"), "a/b~c");
        assert_eq!(unescape("~2x"), "~2x");
        assert_eq!(unescape("end~"), "end~");
        assert_eq!(unescape(""), "");
    }
}
