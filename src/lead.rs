//! Lead (summary) extraction.
//!
//! Works on the original document rather than the normalized subtree:
//! publishers usually carry a better one-line description in their meta
//! markup than in the article body. The per-publisher strategy comes from
//! the [`sites`](crate::sites) table; anything without a rule gets the
//! first-paragraph fallback.

use tracing::info;

use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::sites::{self, LeadQuery, LeadSource};
use crate::text::{self, LEADING_LABEL, PARENTHETICAL, SENTENCE_TERMINATOR};

/// Maximum number of sentence segments kept in the lead.
const MAX_LEAD_SEGMENTS: usize = 3;

/// Extract and post-process the lead string.
///
/// Returns an empty string when no candidate clears the length floor; that
/// is a valid outcome, not an error.
#[must_use]
pub fn extract_lead(
    doc: &Document,
    top: &Selection,
    canonical_link: &str,
    options: &Options,
) -> String {
    let candidate = match sites::lead_query(canonical_link) {
        Some(query) => structured_lookup(doc, query, options)
            .or_else(|| query.fallback.then(|| first_paragraph(top, options)).flatten()),
        None => first_paragraph(top, options),
    };

    candidate.map(|c| post_process(&c)).unwrap_or_default()
}

/// Evaluate a publisher's structured query against the original document.
fn structured_lookup(doc: &Document, query: &LeadQuery, options: &Options) -> Option<String> {
    let matches = doc.select(query.selector);
    let nodes = matches.nodes();
    let candidates = if query.first_only && !nodes.is_empty() {
        &nodes[..1]
    } else {
        nodes
    };

    for node in candidates {
        let el = Selection::from(*node);
        let txt = match query.source {
            LeadSource::ContentAttr => dom::get_attribute(&el, "content").unwrap_or_default(),
            LeadSource::ElementText => match dom::node_text(&el) {
                Ok(text) => text.to_string(),
                Err(err) => {
                    info!("ignoring unreadable node during lead search: {err}");
                    return None;
                }
            },
        };
        if accepted(&txt, options) {
            return Some(txt);
        }
    }
    None
}

/// Fallback and default strategy: first paragraph in the subtree whose text
/// clears the length floor.
fn first_paragraph(top: &Selection, options: &Options) -> Option<String> {
    for node in dom::query_selector_all(top, "p").nodes() {
        let el = Selection::from(*node);
        let txt = match dom::node_text(&el) {
            Ok(text) => text,
            Err(err) => {
                info!("ignoring unreadable node during lead search: {err}");
                return None;
            }
        };
        if accepted(&txt, options) {
            return Some(txt.to_string());
        }
    }
    None
}

fn accepted(candidate: &str, options: &Options) -> bool {
    candidate.chars().count() > options.min_lead_len
}

/// Normalize an accepted candidate into the final lead string.
///
/// Sentence-splits keeping the danda attached, caps the segment count,
/// removes parenthesized asides everywhere and the `label:` prefix from the
/// first segment only, then joins with single spaces.
fn post_process(candidate: &str) -> String {
    let unescaped = text::unescape(candidate);
    let collapsed = text::inner_trim(&unescaped);

    let mut segments: Vec<String> = Vec::new();
    for (idx, segment) in text::split_keep_sep(&collapsed, SENTENCE_TERMINATOR)
        .into_iter()
        .take(MAX_LEAD_SEGMENTS)
        .enumerate()
    {
        let cleaned = PARENTHETICAL.replace_all(&segment, " ");
        let cleaned = if idx == 0 {
            LEADING_LABEL.replace(&cleaned, " ")
        } else {
            cleaned
        };
        let cleaned = text::inner_trim(&cleaned);
        if !cleaned.is_empty() {
            segments.push(cleaned);
        }
    }

    segments.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_process_strips_label_parenthetical_and_caps_segments() {
        let lead = post_process("Breaking: Event happened (details) today। More text।");
        assert_eq!(lead, "Event happened today। More text।");
    }

    #[test]
    fn test_post_process_caps_at_three_segments() {
        let lead = post_process("One। Two। Three। Four।");
        assert_eq!(lead, "One। Two। Three।");
    }

    #[test]
    fn test_post_process_label_strip_first_segment_only() {
        let lead = post_process("Intro: first। note: second।");
        assert_eq!(lead, "first। note: second।");
    }

    #[test]
    fn test_default_strategy_uses_first_long_paragraph() {
        let doc = dom::parse(
            r#"<html><body><div id="top"><p>short</p><p>A paragraph long enough to accept.</p></div></body></html>"#,
        );
        let top = doc.select("#top");

        let lead = extract_lead(&doc, &top, "https://example.com/story", &Options::default());
        assert_eq!(lead, "A paragraph long enough to accept.");
    }

    #[test]
    fn test_length_floor_rejects_short_candidates() {
        let doc = dom::parse(
            r#"<html><head><meta name="description" content="too short"></head><body><div id="top"><p>Fallback paragraph with plenty of text.</p></div></body></html>"#,
        );
        let top = doc.select("#top");

        let lead = extract_lead(
            &doc,
            &top,
            "https://navbharattimes.indiatimes.com/articleshow/1.cms",
            &Options::default(),
        );
        assert_eq!(lead, "Fallback paragraph with plenty of text.");
    }

    #[test]
    fn test_no_candidate_yields_empty_lead() {
        let doc = dom::parse(r#"<html><body><div id="top"><p>tiny</p></div></body></html>"#);
        let top = doc.select("#top");

        let lead = extract_lead(&doc, &top, "https://example.com/story", &Options::default());
        assert_eq!(lead, "");
    }

    #[test]
    fn test_structured_query_wins_over_fallback() {
        let doc = dom::parse(
            r#"<html><head><meta name="description" content="Meta description of the story"></head><body><div id="top"><p>Body paragraph of the story text.</p></div></body></html>"#,
        );
        let top = doc.select("#top");

        let lead = extract_lead(
            &doc,
            &top,
            "https://aajtak.intoday.in/story/1.html",
            &Options::default(),
        );
        assert_eq!(lead, "Meta description of the story");
    }

    #[test]
    fn test_no_fallback_publisher_yields_empty_on_short_meta() {
        let doc = dom::parse(
            r#"<html><head><meta name="description" content="short"></head><body><div id="top"><p>Long enough fallback paragraph here.</p></div></body></html>"#,
        );
        let top = doc.select("#top");

        let lead = extract_lead(
            &doc,
            &top,
            "https://zeenews.india.com/hindi/story",
            &Options::default(),
        );
        assert_eq!(lead, "");
    }
}
