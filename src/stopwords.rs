//! Per-language stopwords handle.
//!
//! The formatter carries a `Stopwords` handle for downstream NLP stages but
//! never inspects it; the only operation performed here is re-resolving it
//! when a detected language replaces the configured one.

/// Word segmentation strategy for a language's stopword matcher.
///
/// Non-latin scripts need script-aware segmentation downstream; latin-based
/// languages split on whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segmenter {
    /// Whitespace-delimited words (latin-based default).
    Whitespace,
    /// Arabic script segmentation.
    Arabic,
    /// Chinese character segmentation.
    Chinese,
    /// Devanagari segmentation.
    Hindi,
    /// Japanese segmentation.
    Japanese,
    /// Korean segmentation.
    Korean,
}

/// Opaque stopwords handle resolved per language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwords {
    language: String,
    segmenter: Segmenter,
}

impl Stopwords {
    /// Resolves the stopwords handle for an ISO 639-1 language code.
    ///
    /// Unknown codes fall back to whitespace segmentation.
    #[must_use]
    pub fn for_language(code: &str) -> Self {
        let segmenter = match code {
            "ar" => Segmenter::Arabic,
            "zh" => Segmenter::Chinese,
            "hi" => Segmenter::Hindi,
            "ja" => Segmenter::Japanese,
            "ko" => Segmenter::Korean,
            _ => Segmenter::Whitespace,
        };
        Self {
            language: code.to_string(),
            segmenter,
        }
    }

    /// Language code this handle was resolved for.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Segmentation strategy for this language.
    #[must_use]
    pub fn segmenter(&self) -> Segmenter {
        self.segmenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_default() {
        let sw = Stopwords::for_language("en");
        assert_eq!(sw.language(), "en");
        assert_eq!(sw.segmenter(), Segmenter::Whitespace);
    }

    #[test]
    fn test_non_latin_resolution() {
        assert_eq!(Stopwords::for_language("hi").segmenter(), Segmenter::Hindi);
        assert_eq!(Stopwords::for_language("ko").segmenter(), Segmenter::Korean);
        assert_eq!(Stopwords::for_language("zh").segmenter(), Segmenter::Chinese);
        assert_eq!(Stopwords::for_language("ar").segmenter(), Segmenter::Arabic);
        assert_eq!(Stopwords::for_language("ja").segmenter(), Segmenter::Japanese);
    }

    #[test]
    fn test_unknown_code_falls_back_to_whitespace() {
        assert_eq!(Stopwords::for_language("xx").segmenter(), Segmenter::Whitespace);
    }
}
