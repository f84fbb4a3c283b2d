//! Document adapter and node-level helpers.
//!
//! The cleaning passes operate on a `dom_query` [`Document`]. Parsing is
//! pluggable through [`HtmlParser`] so a host can supply its own lenient
//! parser; [`DomQueryParser`] (html5ever under the hood) is the default.
//! The helpers below work on single [`NodeRef`]s because the reducer needs
//! comment nodes, text nodes and exact child positions, which the
//! selection-level API hides.

pub use dom_query::{Document, NodeId, NodeRef, Selection};
pub use tendril::StrTendril;

/// A lenient HTML parser producing a mutable document tree.
///
/// Implementations must never fail on malformed markup: ugly HTML parses to
/// *something*, possibly an empty body.
pub trait HtmlParser {
    /// Parse a full HTML document.
    fn parse(&self, html: &str) -> Document;
}

/// Default parser backed by `dom_query`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomQueryParser;

impl HtmlParser for DomQueryParser {
    fn parse(&self, html: &str) -> Document {
        Document::from(html)
    }
}

/// Parse HTML with the default parser.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    DomQueryParser.parse(html)
}

// === Body resolution ===

/// Resolve the element the passes operate on.
///
/// Prefers the first `body` element; falls back to the document's root
/// element when no body exists.
#[must_use]
pub fn body_of(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("body")
        .nodes()
        .first()
        .copied()
        .or_else(|| doc.root().children().into_iter().find(NodeRef::is_element))
}

// === Node information ===

/// Lowercase tag name of an element node.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Attribute names present on an element, in document order.
#[must_use]
pub fn attribute_names(node: &NodeRef) -> Vec<String> {
    node.attrs()
        .iter()
        .map(|attr| attr.name.local.to_string())
        .collect()
}

/// Attribute value, or `None` when absent.
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|v| v.to_string())
}

/// Concatenated `id` and `class` values, used for name-based heuristics.
#[must_use]
pub fn id_and_class(node: &NodeRef) -> String {
    let id = node.attr("id").map(|v| v.to_string()).unwrap_or_default();
    let class = node.attr("class").map(|v| v.to_string()).unwrap_or_default();
    format!("{id} {class}")
}

/// Text content of a node and its descendants.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

// === Traversal ===

/// Flatten the subtree below `root` into pre-order (document order).
///
/// `root` itself is not included. Iterative, so deep trees cannot exhaust
/// the call stack.
#[must_use]
pub fn descendants_pre_order<'a>(root: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeRef<'a>> = root.children().into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        stack.extend(node.children().into_iter().rev());
        out.push(node);
    }
    out
}

/// Whether `node` is still reachable from `ancestor` by parent links.
#[must_use]
pub fn is_descendant_of(node: &NodeRef, ancestor: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.id == ancestor.id {
            return true;
        }
        current = parent.parent();
    }
    false
}

// === Tree manipulation ===

/// Replace an element with its children, in place.
///
/// Returns the spliced children in their original order.
pub fn unwrap<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let children = node.children();
    for child in &children {
        child.remove_from_parent();
        node.insert_before(child);
    }
    node.remove_from_parent();
    children
}

/// Insert a new text node directly before `node`.
pub fn insert_text_before(node: &NodeRef, text: &str) {
    let text_node = node.tree.new_text(text);
    node.insert_before(&text_node);
}

/// Insert a new text node directly after `node`.
pub fn insert_text_after(node: &NodeRef, text: &str) {
    let text_node = node.tree.new_text(text);
    node.insert_after(&text_node);
}

/// Replace `node` with a text node.
pub fn replace_with_text(node: &NodeRef, text: &str) {
    insert_text_before(node, text);
    node.remove_from_parent();
}

/// Remove every comment node below `root`. Returns the number removed.
pub fn remove_comments(root: &NodeRef) -> usize {
    let comments: Vec<_> = descendants_pre_order(root)
        .into_iter()
        .filter(NodeRef::is_comment)
        .collect();
    for comment in &comments {
        comment.remove_from_parent();
    }
    comments.len()
}
