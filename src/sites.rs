//! Publisher-specific formatting rules.
//!
//! A static table keyed by canonical-link prefix replaces per-publisher
//! branching: each row describes where that publisher keeps its description
//! (for the lead extractor) and which subtree nodes it is known to pollute
//! with non-prose markup (for the normalizer). Prefix matching is literal and
//! case-sensitive; the first matching row wins.

/// Where a lead candidate's text comes from once the selector matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadSource {
    /// Read the element's `content` attribute (meta-style description tags).
    ContentAttr,
    /// Read the element's rendered text.
    ElementText,
}

/// Structured lead query for one publisher.
#[derive(Debug, Clone, Copy)]
pub struct LeadQuery {
    /// CSS selector evaluated against the original document.
    pub selector: &'static str,
    /// Source of the candidate text on a matched element.
    pub source: LeadSource,
    /// Consider only the first match instead of iterating all of them.
    pub first_only: bool,
    /// Fall back to the first-paragraph strategy when nothing is accepted.
    pub fallback: bool,
}

/// One publisher's rule row.
#[derive(Debug, Clone, Copy)]
pub struct SiteRule {
    /// Canonical-link prefixes this rule applies to.
    pub prefixes: &'static [&'static str],
    /// Lead query override, if the publisher has one.
    pub lead: Option<LeadQuery>,
    /// Selector for subtree nodes the normalizer removes for this publisher.
    pub remove_selector: Option<&'static str>,
}

/// The publisher rule table. Extending it never touches the pipeline.
pub static SITE_RULES: &[SiteRule] = &[
    SiteRule {
        prefixes: &[
            "https://navbharattimes.indiatimes.com",
            "http://navbharattimes.indiatimes.com",
        ],
        lead: Some(LeadQuery {
            selector: r#"meta[name="description"]"#,
            source: LeadSource::ContentAttr,
            first_only: true,
            fallback: true,
        }),
        remove_selector: None,
    },
    SiteRule {
        prefixes: &["https://khabar.ndtv.com", "http://khabar.ndtv.com"],
        lead: Some(LeadQuery {
            selector: r#"span[itemprop="description"]"#,
            source: LeadSource::ContentAttr,
            first_only: false,
            fallback: true,
        }),
        remove_selector: None,
    },
    SiteRule {
        // No paragraph fallback for this publisher: an unusable description
        // yields an empty lead.
        prefixes: &["https://zeenews.india.com", "http://zeenews.india.com"],
        lead: Some(LeadQuery {
            selector: r#"meta[name="description"]"#,
            source: LeadSource::ContentAttr,
            first_only: true,
            fallback: false,
        }),
        remove_selector: None,
    },
    SiteRule {
        prefixes: &["https://aajtak.intoday.in", "http://aajtak.intoday.in"],
        lead: Some(LeadQuery {
            selector: r#"meta[name="description"]"#,
            source: LeadSource::ContentAttr,
            first_only: true,
            fallback: true,
        }),
        remove_selector: None,
    },
    SiteRule {
        prefixes: &["https://www.indiatv.in", "http://www.indiatv.in"],
        lead: Some(LeadQuery {
            selector: r#"meta[property="og:description"]"#,
            source: LeadSource::ContentAttr,
            first_only: true,
            fallback: true,
        }),
        remove_selector: None,
    },
    SiteRule {
        prefixes: &["https://www.punjabkesari.in"],
        lead: None,
        remove_selector: Some(r#"p[itemprop="description"]"#),
    },
];

/// Lead query for the first rule matching the canonical link, if any.
#[must_use]
pub fn lead_query(canonical_link: &str) -> Option<&'static LeadQuery> {
    SITE_RULES
        .iter()
        .find(|rule| matches_prefix(rule, canonical_link))
        .and_then(|rule| rule.lead.as_ref())
}

/// Node-removal selector for the first rule matching the canonical link.
#[must_use]
pub fn removal_selector(canonical_link: &str) -> Option<&'static str> {
    SITE_RULES
        .iter()
        .find(|rule| matches_prefix(rule, canonical_link))
        .and_then(|rule| rule.remove_selector)
}

fn matches_prefix(rule: &SiteRule, canonical_link: &str) -> bool {
    rule.prefixes.iter().any(|p| canonical_link.starts_with(p))
}
