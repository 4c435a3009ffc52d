//! Result types for formatting output.

/// Output of one formatting call.
///
/// Produced once per call; an empty `text` is a valid, non-error outcome
/// (the subtree simply contained no readable prose).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatted {
    /// Article body as plain text, paragraphs separated by blank lines.
    pub text: String,

    /// Short lead/summary string, or empty if no candidate was accepted.
    pub lead: String,

    /// Lightly cleaned article HTML, or empty unless
    /// [`Options::keep_article_html`](crate::Options::keep_article_html) was set.
    pub html: String,
}
