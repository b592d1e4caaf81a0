//! Parsing of `file://` and `file-line-column://` locators.
//!
//! A locator names a file plus an optional 1-based line and column:
//!
//! ```text
//! scheme://[host]/path[:line[:column]]
//! ```
//!
//! Scheme and host are ignored; only the URL path is read. Line and column
//! are lenient: anything that is not a positive integer is treated as absent.

use std::fmt;

use percent_encoding::percent_decode_str;
use url::{ParseError, Url};

use crate::error::{Error, Result};

/// A file location to open: path plus optional 1-based line and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    /// Filesystem path, percent-decoded when it came from a URL
    pub path: String,
    /// Line number (1-based)
    pub line: Option<u32>,
    /// Column number (1-based)
    pub column: Option<u32>,
}

impl Locator {
    pub fn new(path: impl Into<String>, line: Option<u32>, column: Option<u32>) -> Self {
        Self {
            path: path.into(),
            line,
            column,
        }
    }

    /// Parse a locator URL.
    ///
    /// Input without a scheme (a plain `/path:line:column`) is read as the
    /// path itself, without percent-decoding. Missing or malformed `:line` /
    /// `:column` suffixes yield `None` rather than an error.
    pub fn parse(input: &str) -> Result<Self> {
        let (raw, encoded) = match Url::parse(input) {
            Ok(url) => (url.path().to_string(), true),
            Err(ParseError::RelativeUrlWithoutBase) => (input.to_string(), false),
            Err(e) => return Err(Error::invalid_locator(input, e)),
        };

        // Split before decoding so an escaped `%3A` stays part of the name
        let (path, rest) = split_suffix(&raw);
        let (line, column) = match rest.split_once(':') {
            Some((line, column)) => (line, column),
            None => (rest, ""),
        };

        Ok(Self {
            path: if encoded {
                decode_path(path)
            } else {
                path.to_string()
            },
            line: parse_position(line),
            column: parse_position(column),
        })
    }

    /// Line to open, defaulting to the first line.
    pub fn line_or_first(&self) -> u32 {
        self.line.unwrap_or(1)
    }

    /// Column to open, defaulting to the first column.
    pub fn column_or_first(&self) -> u32 {
        self.column.unwrap_or(1)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path={} line={:?} column={:?}", self.path, self.line, self.column)
    }
}

/// Split `path` at the first `:` in its final segment.
///
/// Colons in directory names are left alone. Returns an empty suffix when
/// the final segment has no colon.
fn split_suffix(path: &str) -> (&str, &str) {
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[segment_start..].find(':') {
        Some(i) => {
            let at = segment_start + i;
            (&path[..at], &path[at + 1..])
        }
        None => (path, ""),
    }
}

fn decode_path(encoded: &str) -> String {
    match percent_decode_str(encoded).decode_utf8() {
        Ok(path) => path.into_owned(),
        Err(e) => {
            tracing::warn!(
                "Path {} is not valid UTF-8 once decoded ({}); opening a lossy copy",
                encoded,
                e
            );
            percent_decode_str(encoded).decode_utf8_lossy().into_owned()
        }
    }
}

/// Parse a decimal position. Values too large for `u32` saturate; zero,
/// signs other than a leading `+`, and non-digits give `None`.
fn parse_position(s: &str) -> Option<u32> {
    let digits = s.strip_prefix('+').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse::<u32>().unwrap_or(u32::MAX)).filter(|&n| n > 0)
}
