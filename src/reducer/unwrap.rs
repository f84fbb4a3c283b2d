//! Unwrap non-whitelisted elements and sanitize attributes.
//!
//! Breadth-first over an explicit work queue so the node-processing budget
//! (`max_depth`, counted in dequeued elements) can be enforced on arbitrarily
//! large or deep trees. Elements left in the queue when the budget runs out
//! are not touched.

use std::collections::VecDeque;

use log::{trace, warn};

use crate::dom::{self, NodeRef};
use crate::options::{AllowedTags, CleanOptions};
use crate::result::CleaningStats;
use crate::url_utils::sanitize_url;

/// What attribute handling did to a whitelisted element.
enum Disposition<'a> {
    /// Element stays; its children need processing.
    Kept,
    /// Element was replaced by these children.
    Unwrapped(Vec<NodeRef<'a>>),
    /// Element and its subtree are gone.
    Removed,
}

/// Run the unwrap/attribute pass over `body`.
///
/// Returns the number of elements processed.
pub fn unwrap_and_sanitize(
    body: &NodeRef,
    options: &CleanOptions,
    allowed: &AllowedTags,
    stats: &mut CleaningStats,
) -> usize {
    let mut queue: VecDeque<NodeRef> = body.children().into_iter().filter(NodeRef::is_element).collect();
    let mut processed = 0;

    while let Some(node) = queue.pop_front() {
        if processed >= options.max_depth {
            warn!(
                "node budget of {} exhausted; {} queued elements left unprocessed",
                options.max_depth,
                queue.len() + 1
            );
            break;
        }
        processed += 1;

        let Some(tag) = dom::tag_name(&node) else {
            continue;
        };

        if !allowed.contains(&tag) {
            if !options.tables_kept() {
                match tag.as_str() {
                    "tr" => dom::insert_text_before(&node, "\n"),
                    "td" | "th" => dom::insert_text_before(&node, " "),
                    _ => {}
                }
            }
            trace!("unwrapping <{tag}>");
            let children = dom::unwrap(&node);
            stats.unwrapped_nodes += 1;
            queue.extend(children.into_iter().filter(NodeRef::is_element));
            continue;
        }

        match sanitize_element(&node, &tag, options, allowed, stats) {
            Disposition::Kept => queue.extend(node.children().into_iter().filter(NodeRef::is_element)),
            Disposition::Unwrapped(children) => queue.extend(children.into_iter().filter(NodeRef::is_element)),
            Disposition::Removed => {}
        }
    }

    processed
}

/// Strip attributes from a whitelisted element, keeping only a safe `href`
/// on anchors and a safe `src` on allowed images.
fn sanitize_element<'a>(
    node: &NodeRef<'a>,
    tag: &str,
    options: &CleanOptions,
    allowed: &AllowedTags,
    stats: &mut CleaningStats,
) -> Disposition<'a> {
    let mut kept_href = false;
    let mut kept_src = false;
    let img_allowed = allowed.contains("img");

    for name in dom::attribute_names(node) {
        match (tag, name.as_str()) {
            ("a", "href") => {
                kept_href = sanitize_url_attribute(node, &name, options.strict_urls, stats);
            }
            ("img", "src") => {
                if !img_allowed {
                    node.remove_from_parent();
                    stats.removed_nodes += 1;
                    return Disposition::Removed;
                }
                kept_src = sanitize_url_attribute(node, &name, options.strict_urls, stats);
            }
            _ => {
                node.remove_attr(&name);
                stats.removed_attrs += 1;
            }
        }
    }

    match tag {
        "a" if !kept_href => {
            trace!("stripping link without a safe href");
            stats.stripped_links += 1;
            Disposition::Unwrapped(dom::unwrap(node))
        }
        "img" if !img_allowed || !kept_src => {
            node.remove_from_parent();
            stats.removed_nodes += 1;
            Disposition::Removed
        }
        _ => Disposition::Kept,
    }
}

/// Replace a URL attribute with its sanitized form, or drop it.
///
/// Returns whether the attribute was kept.
fn sanitize_url_attribute(node: &NodeRef, name: &str, strict: bool, stats: &mut CleaningStats) -> bool {
    let raw = dom::get_attribute(node, name).unwrap_or_default();
    if let Some(safe) = sanitize_url(&raw, strict) {
        node.set_attr(name, &safe);
        true
    } else {
        trace!("dropping unsafe {name}={raw:?}");
        node.remove_attr(name);
        stats.removed_attrs += 1;
        false
    }
}
