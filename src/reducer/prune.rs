//! Empty-node pruning.

use std::collections::HashMap;

use log::trace;

use crate::dom::{self, NodeId, NodeRef};
use crate::options::AllowedTags;
use crate::patterns::ZERO_WIDTH;
use crate::tags::{LIST_ITEM, LIST_TAGS};

/// What a subtree still contains, as far as pruning cares.
#[derive(Debug, Default, Clone, Copy)]
struct Content {
    text: bool,
    list_item: bool,
}

impl Content {
    fn merge(&mut self, other: Self) {
        self.text |= other.text;
        self.list_item |= other.list_item;
    }
}

/// Remove whitelisted elements that carry nothing meaningful.
///
/// Walks in reverse document order so children are judged (and possibly
/// removed) before their parents. Each node's [`Content`] is folded into its
/// parent's entry once, so the pass stays linear in the size of the tree.
/// Returns the number of elements removed.
pub fn prune_empty(body: &NodeRef, allowed: &AllowedTags) -> usize {
    let mut removed = 0;
    let mut content: HashMap<NodeId, Content> = HashMap::new();

    for node in dom::descendants_pre_order(body).iter().rev() {
        let mut own = content.remove(&node.id).unwrap_or_default();

        if node.is_text() {
            own.text = is_visible_text(&node.text());
        } else if let Some(tag) = dom::tag_name(node) {
            if allowed.contains(&tag) && !is_meaningful(node, &tag, own, allowed) {
                trace!("pruning empty <{tag}>");
                node.remove_from_parent();
                removed += 1;
                continue;
            }
            own.list_item |= tag == LIST_ITEM;
        }

        if let Some(parent) = node.parent() {
            content.entry(parent.id).or_default().merge(own);
        }
    }
    removed
}

/// Whether an element is worth keeping, given what its remaining children hold.
///
/// `br` always is; lists need at least one `li`; images need to be allowed
/// and still carry a `src`; anything else needs visible text.
fn is_meaningful(node: &NodeRef, tag: &str, content: Content, allowed: &AllowedTags) -> bool {
    match tag {
        "br" => true,
        t if LIST_TAGS.contains(&t) => content.list_item,
        "img" => allowed.contains("img") && node.has_attr("src"),
        _ => content.text,
    }
}

fn is_visible_text(text: &str) -> bool {
    !ZERO_WIDTH.replace_all(text, "").trim().is_empty()
}
