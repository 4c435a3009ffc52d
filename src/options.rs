//! Configuration options for article formatting.
//!
//! The `Options` struct controls formatting behavior. All fields are public
//! for easy configuration; use `Default::default()` for standard settings.

/// Configuration options for one formatting run.
///
/// # Example
///
/// ```rust
/// use bodytext::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     keep_article_html: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Retain a lightly cleaned HTML snapshot of the subtree alongside the
    /// body text. The snapshot is taken before the destructive cleanup steps.
    ///
    /// Default: `false`
    pub keep_article_html: bool,

    /// ISO 639-1 language code of the document.
    ///
    /// Used to resolve the stopwords handle passed through to downstream
    /// consumers; never inspected by the formatter itself.
    ///
    /// Default: `"en"`
    pub language: String,

    /// Minimum number of direct children the subtree must have before the
    /// trailing-media check considers removing the last one.
    ///
    /// Default: `3`
    pub trailing_media_min_children: usize,

    /// Nesting depth at which the last top-level child is treated as a
    /// trailing media block (related-links galleries and the like) and
    /// removed. A leaf has depth 1.
    ///
    /// Default: `2`
    pub trailing_media_max_depth: usize,

    /// Length floor for lead candidates: a candidate is accepted only when
    /// its character count exceeds this value.
    ///
    /// Default: `10`
    pub min_lead_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            keep_article_html: false,
            language: "en".to_string(),
            trailing_media_min_children: 3,
            trailing_media_max_depth: 2,
            min_lead_len: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(!opts.keep_article_html);
        assert_eq!(opts.language, "en");
        assert_eq!(opts.trailing_media_min_children, 3);
        assert_eq!(opts.trailing_media_max_depth, 2);
        assert_eq!(opts.min_lead_len, 10);
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            trailing_media_min_children: 5,
            trailing_media_max_depth: 4,
            min_lead_len: 20,
            ..Options::default()
        };

        assert_eq!(opts.trailing_media_min_children, 5);
        assert_eq!(opts.trailing_media_max_depth, 4);
        assert_eq!(opts.min_lead_len, 20);
    }
}
