//! Output formatter: orchestrates normalization, rendering and lead
//! extraction over one document.

use crate::dom::{Document, Selection};
use crate::error::Result;
use crate::lead;
use crate::normalize;
use crate::options::Options;
use crate::render;
use crate::result::Formatted;
use crate::stopwords::Stopwords;

/// Formats a selected main-content subtree into body text, lead and
/// optional cleaned HTML.
///
/// Holds the per-call configuration plus the active language and its
/// stopwords handle. The subtree passed to [`format`](Self::format) is
/// mutated destructively for the duration of that call; the original
/// document is only read.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    options: Options,
    language: String,
    stopwords: Stopwords,
}

impl OutputFormatter {
    /// Create a formatter; the stopwords handle resolves from the configured
    /// language.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let language = options.language.clone();
        let stopwords = Stopwords::for_language(&language);
        Self {
            options,
            language,
            stopwords,
        }
    }

    /// Replace the active language with a detected one.
    ///
    /// Call before [`format`](Self::format) when upstream language detection
    /// ran; needed for non-latin scripts where the configured default would
    /// resolve the wrong stopwords. Empty or absent codes leave the current
    /// language in place.
    pub fn update_language(&mut self, meta_lang: Option<&str>) {
        if let Some(code) = meta_lang {
            if !code.is_empty() {
                self.language = code.to_string();
                self.stopwords = Stopwords::for_language(code);
            }
        }
    }

    /// Active language code.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Stopwords handle for the active language (passed through downstream,
    /// never inspected here).
    #[must_use]
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Format one article.
    ///
    /// Normalizes the subtree in place, renders its body text, and extracts
    /// the lead from the original document. An empty body text is a valid
    /// outcome; errors surface only for genuinely fatal tree faults.
    pub fn format(
        &self,
        top_node: &Selection,
        canonical_link: &str,
        doc: &Document,
    ) -> Result<Formatted> {
        let html = normalize::normalize(top_node, canonical_link, &self.options)?;
        let text = render::render_text(top_node);
        let lead = lead::extract_lead(doc, top_node, canonical_link, &self.options);

        Ok(Formatted {
            text,
            lead,
            html: html.unwrap_or_default(),
        })
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
