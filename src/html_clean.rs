//! Light HTML clean for the retained article snapshot.
//!
//! A shallower sanitization than the normalization pipeline: scripting and
//! style-only artifacts go, presentation attributes go, prose structure
//! (paragraphs, lists, links, images) stays. Runs on a serialized clone so
//! the live subtree used by the rest of the pipeline is never touched.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::dom::{self, Selection};

/// Elements with no place in article HTML output.
static ARTIFACT_SELECTOR: &str =
    "script, style, noscript, link, meta, form, input, button, select, textarea, iframe";

/// Attributes worth keeping in the snapshot; everything else is presentation
/// or tracking noise.
static KEPT_ATTRIBUTES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["href", "src", "srcset", "alt", "title", "itemprop", "content"]
        .into_iter()
        .collect()
});

/// Serialize a lightly cleaned copy of the subtree.
#[must_use]
pub fn clean_fragment(top: &Selection) -> String {
    let scratch = dom::clone_fragment(top);

    dom::remove(&scratch.select(ARTIFACT_SELECTOR));

    for node in scratch.select("body *").nodes() {
        let el = Selection::from(*node);
        for (name, _) in dom::get_all_attributes(&el) {
            if !KEPT_ATTRIBUTES.contains(name.as_str()) {
                dom::remove_attribute(&el, &name);
            }
        }
    }

    dom::inner_html(&scratch.select("body")).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_fragment_drops_script_keeps_prose() {
        let doc = dom::parse(
            r#"<div><p>Real text.</p><script>alert(1)</script><style>p{}</style></div>"#,
        );
        let top = doc.select("div");

        let html = clean_fragment(&top);

        assert!(html.contains("<p>Real text.</p>"));
        assert!(!html.contains("script"));
        assert!(!html.contains("style"));
    }

    #[test]
    fn test_clean_fragment_strips_presentation_attributes() {
        let doc = dom::parse(
            r#"<div><p class="lede" style="color:red" data-track="x">Text</p><a href="/a" onclick="x()">link</a></div>"#,
        );
        let top = doc.select("div");

        let html = clean_fragment(&top);

        assert!(html.contains(r#"href="/a""#));
        assert!(!html.contains("class="));
        assert!(!html.contains("style="));
        assert!(!html.contains("data-track"));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn test_clean_fragment_does_not_mutate_live_subtree() {
        let doc = dom::parse(r#"<div><p class="lede">Text</p><script>x</script></div>"#);
        let top = doc.select("div");

        let _ = clean_fragment(&top);

        assert!(doc.select("script").exists());
        assert!(doc.select("p.lede").exists());
    }

    #[test]
    fn test_clean_fragment_preserves_links_and_lists() {
        let doc = dom::parse(
            r#"<div><ul><li><a href="/x">One</a></li><li>Two</li></ul><img src="pic.jpg" alt="pic"></div>"#,
        );
        let top = doc.select("div");

        let html = clean_fragment(&top);

        assert!(html.contains("<ul>"));
        assert!(html.contains(r#"<a href="/x">One</a>"#));
        assert!(html.contains(r#"src="pic.jpg""#));
    }
}
