//! Tree normalization pipeline.
//!
//! Reduces the selected subtree to clean prose structure before text
//! rendering. The steps run in a fixed order and mutate the subtree in
//! place; later steps assume earlier ones already ran (inline stripping
//! expects anchors gone, empty pruning expects line-break markers set, and
//! so on).

use crate::dom::{self, Selection};
use crate::error::{Error, Result};
use crate::html_clean;
use crate::options::Options;
use crate::sites;
use crate::text::NEWLINE_MARKER;

/// Attribute carrying the upstream content score. HTML parsing lowercases
/// attribute names, so `gravityScore="..."` in markup is matched here.
pub const SCORE_ATTR: &str = "gravityscore";

const SCORE_SELECTOR: &str = "[gravityscore]";

/// Hard ceiling for depth computation; deeper input fails fast instead of
/// recursing without bound.
const MAX_TREE_DEPTH: usize = 256;

/// Class names exempting the last top-level child from trailing-media removal.
static NON_MEDIA_CLASSES: &[&str] = &["zn-body__read-all"];

/// Inline tags flattened to their text anywhere in the subtree.
static INLINE_TAGS: &[&str] = &["b", "strong", "i", "br", "sup"];

/// Run the full normalization pipeline over the subtree.
///
/// Mutates the subtree in place. Returns the lightly cleaned HTML snapshot
/// when `keep_article_html` is set; the snapshot is taken after score
/// pruning but before the destructive flattening steps.
pub fn normalize(top: &Selection, canonical_link: &str, options: &Options) -> Result<Option<String>> {
    remove_negative_score_nodes(top);

    let html = options
        .keep_article_html
        .then(|| html_clean::clean_fragment(top));

    links_to_text(top);
    mark_line_breaks(top);
    flatten_list_items(top);
    strip_inline_tags(top);
    remove_empty_tags(top);
    remove_trailing_media_block(top, options)?;
    remove_noise_containers(top);
    remove_site_specific_nodes(top, canonical_link);

    Ok(html)
}

/// Detach every descendant whose upstream score falls below 1.
///
/// An unparseable or absent score counts as 0 and is pruned with the rest.
fn remove_negative_score_nodes(top: &Selection) {
    for node in top.select(SCORE_SELECTOR).nodes().to_vec() {
        let el = Selection::from(node);
        let score = dom::get_attribute(&el, SCORE_ATTR)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(0.0);
        if score < 1.0 {
            dom::remove(&el);
        }
    }
}

/// Replace every anchor with its inline text.
fn links_to_text(top: &Selection) {
    dom::strip_tags(top, &["a"]);
}

/// Set each `<br>` to the literal newline marker so the break survives
/// whitespace collapsing.
fn mark_line_breaks(top: &Selection) {
    for node in top.select("br").nodes().to_vec() {
        dom::set_inner_html(&Selection::from(node), NEWLINE_MARKER);
    }
}

/// Flatten every list item except the last one of each `<ul>` to plain text
/// ending in the newline marker.
///
/// The last item keeps its children; the container itself is dropped later
/// by [`remove_noise_containers`], after the retained text has been folded
/// into the tree.
fn flatten_list_items(top: &Selection) {
    for list_node in top.select("ul").nodes().to_vec() {
        let list = Selection::from(list_node);
        let items = list.select("li").nodes().to_vec();
        let Some((_last, rest)) = items.split_last() else {
            continue;
        };
        for item_node in rest {
            let item = Selection::from(*item_node);
            let text = dom::text_content(&item);
            let escaped = html_escape::encode_text(&*text);
            dom::set_inner_html(&item, &format!("{escaped}{NEWLINE_MARKER}"));
        }
    }
}

/// Strip formatting tags anywhere in the subtree, keeping their text.
fn strip_inline_tags(top: &Selection) {
    dom::strip_tags(top, INLINE_TAGS);
}

/// Remove elements that render no text, walking in reverse document order so
/// children are pruned before their now-empty parents are judged.
///
/// Kept regardless of emptiness: elements wrapping an `object`/`embed`,
/// elements with `itemprop="description"` that also carry a `content`
/// attribute, and a `<br>` holding the literal `\r` escape.
fn remove_empty_tags(top: &Selection) {
    for node in top.select("*").nodes().to_vec().into_iter().rev() {
        let el = Selection::from(node);
        let tag = dom::tag_name(&el).unwrap_or_default();
        let text = dom::text_content(&el);

        if tag == "br" && &*text == r"\r" {
            continue;
        }
        if !text.is_empty() {
            continue;
        }
        if el.select("object").exists() || el.select("embed").exists() {
            continue;
        }
        if dom::get_attribute(&el, "itemprop").as_deref() == Some("description")
            && dom::has_attribute(&el, "content")
        {
            continue;
        }
        dom::remove(&el);
    }
}

/// Drop the last top-level child when it nests deeply enough to look like a
/// trailing media block (related-links boxes, gallery loaders).
///
/// Only the single last child is ever considered, and only once the subtree
/// has enough direct children to spare it.
fn remove_trailing_media_block(top: &Selection, options: &Options) -> Result<()> {
    let children = dom::children(top);
    if children.length() < options.trailing_media_min_children {
        return Ok(());
    }
    let Some(last) = children.nodes().last().copied() else {
        return Ok(());
    };
    let last = Selection::from(last);

    if let Some(class) = dom::get_attribute(&last, "class") {
        if NON_MEDIA_CLASSES.contains(&class.as_str()) {
            return Ok(());
        }
    }

    if node_depth(&last, 1)? >= options.trailing_media_max_depth {
        dom::remove(&last);
    }
    Ok(())
}

/// Maximum nesting depth below `sel` via depth-first search.
///
/// A node with no element children reports the depth it was reached at.
fn node_depth(sel: &Selection, depth: usize) -> Result<usize> {
    if depth > MAX_TREE_DEPTH {
        return Err(Error::TreeTooDeep { depth });
    }
    let children = dom::children(sel);
    if children.is_empty() {
        return Ok(depth);
    }
    let mut max_depth = 0;
    for child in children.nodes() {
        let child_depth = node_depth(&Selection::from(*child), depth + 1)?;
        max_depth = max_depth.max(child_depth);
    }
    Ok(max_depth)
}

/// Remove heading and list containers left over after flattening.
fn remove_noise_containers(top: &Selection) {
    dom::remove(&top.select("h1, ul, ol"));
}

/// Apply the publisher-specific removal rule for the canonical link, if the
/// site table carries one.
fn remove_site_specific_nodes(top: &Selection, canonical_link: &str) {
    if let Some(selector) = sites::removal_selector(canonical_link) {
        dom::remove(&dom::query_selector_all(top, selector));
    }
}
