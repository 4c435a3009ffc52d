//! # bodytext
//!
//! Post-selection article formatter. Takes an HTML subtree already chosen by
//! an upstream content scorer as the article body candidate and turns it into
//! clean, human-readable text, a short lead/summary string, and optionally a
//! lightly cleaned HTML snapshot.
//!
//! The work splits into three stages run over one document:
//!
//! - **Tree normalization**: an ordered pipeline of destructive cleanups on
//!   the subtree (score-based pruning, link and inline-tag flattening, list
//!   flattening, empty-node pruning, trailing-media removal, publisher rules).
//! - **Text rendering**: linearizes the normalized subtree's direct children
//!   into paragraph-separated body text.
//! - **Lead extraction**: pulls a short summary from the original document,
//!   with per-publisher strategies keyed by canonical-link prefix.
//!
//! ## Quick Start
//!
//! ```rust
//! use bodytext::format;
//! use dom_query::Document;
//!
//! let doc = Document::from(
//!     r#"<html><body><div id="article"><p>Main content of the story here.</p></div></body></html>"#,
//! );
//! let top = doc.select("#article");
//!
//! let result = format(&top, "https://example.com/story", &doc)?;
//! assert_eq!(result.text, "Main content of the story here.");
//! assert!(result.html.is_empty());
//! # Ok::<(), bodytext::Error>(())
//! ```
//!
//! The subtree is mutated in place during formatting; the document as a whole
//! is only read. Callers needing the pristine tree afterwards should format a
//! clone.

mod error;
mod formatter;
mod lead;
mod normalize;
mod options;
mod render;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Light HTML clean for the retained article snapshot.
pub mod html_clean;

/// Publisher-specific rule table keyed by canonical-link prefix.
pub mod sites;

/// Per-language stopwords handle passed through to downstream consumers.
pub mod stopwords;

/// Text normalization utilities and compiled patterns.
pub mod text;

// Public API - re-exports
pub use error::{Error, Result};
pub use formatter::OutputFormatter;
pub use options::Options;
pub use result::Formatted;
pub use stopwords::{Segmenter, Stopwords};

use dom::{Document, Selection};

/// Formats an article subtree using default options.
///
/// # Arguments
///
/// * `top_node` - The subtree selected upstream as the article body candidate
/// * `canonical_link` - De-duplicated source URL, used for publisher rules
/// * `doc` - The full original document (read-only; lead extraction only)
///
/// # Returns
///
/// Returns `Ok(Formatted)` with body text, lead and HTML snapshot fields.
/// An empty body text is a valid outcome for a subtree with no readable
/// prose.
#[allow(clippy::missing_errors_doc)]
pub fn format(top_node: &Selection, canonical_link: &str, doc: &Document) -> Result<Formatted> {
    format_with_options(top_node, canonical_link, doc, &Options::default())
}

/// Formats an article subtree with custom options.
///
/// # Example
///
/// ```rust
/// use bodytext::{format_with_options, Options};
/// use dom_query::Document;
///
/// let doc = Document::from(
///     r#"<html><body><div id="article"><p>Story <a href="/x">link</a> text.</p></div></body></html>"#,
/// );
/// let top = doc.select("#article");
/// let options = Options {
///     keep_article_html: true,
///     ..Options::default()
/// };
///
/// let result = format_with_options(&top, "https://example.com/story", &doc, &options)?;
/// assert_eq!(result.text, "Story link text.");
/// assert!(result.html.contains("<a href="));
/// # Ok::<(), bodytext::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn format_with_options(
    top_node: &Selection,
    canonical_link: &str,
    doc: &Document,
    options: &Options,
) -> Result<Formatted> {
    OutputFormatter::new(options.clone()).format(top_node, canonical_link, doc)
}
