//! Text normalization utilities and compiled patterns.
//!
//! All patterns are compiled once at startup using `LazyLock`.

#![allow(clippy::expect_used)]

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Literal two-character marker (`\` + `n`) injected into the tree where a
/// line break is significant. Being non-whitespace, it survives
/// [`inner_trim`] and is only resolved back into paragraph breaks when the
/// renderer splits on it.
pub const NEWLINE_MARKER: &str = r"\n";

/// Hindi sentence terminator (danda), kept attached to the sentence it ends
/// during lead splitting.
pub const SENTENCE_TERMINATOR: char = '।';

/// Any run of whitespace, including real newlines and tabs.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// A parenthesized aside with no nested parentheses.
pub static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("PARENTHETICAL regex"));

/// A leading `label:` prefix, up to and including the first colon.
pub static LEADING_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^:]*:").expect("LEADING_LABEL regex"));

/// Collapse internal whitespace runs to single spaces and trim the ends.
///
/// Real newlines are collapsed along with everything else; paragraph
/// boundaries are carried by [`NEWLINE_MARKER`], which is not whitespace.
#[must_use]
pub fn inner_trim(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value, " ").trim().to_string()
}

/// Decode HTML entities left in text content.
///
/// The parser already decodes one level; this catches double-escaped
/// entities (`&amp;amp;` and friends) common in syndicated markup.
#[must_use]
pub fn unescape(value: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(value)
}

/// Split `value` on `sep`, keeping each separator attached to the end of the
/// segment it terminates. A trailing unterminated remainder becomes the last
/// segment; no empty segments are produced.
#[must_use]
pub fn split_keep_sep(value: &str, sep: char) -> Vec<String> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (idx, ch) in value.char_indices() {
        if ch == sep {
            let end = idx + ch.len_utf8();
            segments.push(value[start..end].to_string());
            start = end;
        }
    }
    if start < value.len() {
        segments.push(value[start..].to_string());
    }
    segments
}
