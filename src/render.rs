//! Body-text rendering.
//!
//! Walks the normalized subtree's direct children only; whatever structure
//! the normalizer left below them is already flattened to text.

use tracing::info;

use crate::dom::{self, Selection};
use crate::text::{self, NEWLINE_MARKER};

/// Render the subtree's direct children into the article body text.
///
/// Per-child text goes through entity unescaping and whitespace collapsing,
/// then splits on the literal newline marker; non-empty lines across all
/// children join with blank-line separators. A child whose text cannot be
/// materialized is logged and skipped, never aborting the render.
#[must_use]
pub fn render_text(top: &Selection) -> String {
    let mut lines: Vec<String> = Vec::new();

    for node in dom::children(top).nodes() {
        let child = Selection::from(*node);
        let raw = match dom::node_text(&child) {
            Ok(text) => text,
            Err(err) => {
                info!("ignoring unreadable node during text render: {err}");
                continue;
            }
        };
        if raw.is_empty() {
            continue;
        }

        let unescaped = text::unescape(&raw);
        let collapsed = text::inner_trim(&unescaped);
        for line in collapsed.split(NEWLINE_MARKER) {
            let line = line.trim();
            if !line.is_empty() {
                lines.push(line.to_string());
            }
        }
    }

    lines.join("\n\n")
}
