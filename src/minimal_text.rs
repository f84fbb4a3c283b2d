//! Structured plain-text rendering of a reduced document.
//!
//! Block elements (headings, paragraphs, lists, table structure) become
//! groups of lines; runs of inline content between blocks form their own
//! group. Groups are separated by exactly one blank line.

use std::collections::HashSet;

use crate::dom::{self, Document, NodeId, NodeRef};
use crate::patterns::ANY_WHITESPACE;
use crate::tags::{self, LIST_ITEM, LIST_TAGS, TABLE_TAG_SET};

/// How headings are introduced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadingStyle {
    /// `#` repeated by heading level (`## Section`).
    #[default]
    Hashes,
    /// A fixed prefix regardless of level.
    Prefix,
    /// Heading text only.
    Plain,
}

/// Rendering options for minimal-text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalTextOptions {
    /// Heading style.
    ///
    /// Default: [`HeadingStyle::Hashes`]
    pub heading_style: HeadingStyle,

    /// Prefix used with [`HeadingStyle::Prefix`].
    ///
    /// Default: `"#"`
    pub heading_prefix: String,

    /// Marker placed before each list item.
    ///
    /// Default: `"-"`
    pub list_marker: String,

    /// Separator between table cells on a row.
    ///
    /// Default: `"\t"`
    pub table_cell_separator: String,
}

impl Default for MinimalTextOptions {
    fn default() -> Self {
        Self {
            heading_style: HeadingStyle::Hashes,
            heading_prefix: "#".to_string(),
            list_marker: "-".to_string(),
            table_cell_separator: "\t".to_string(),
        }
    }
}

/// Render a document's body as minimal text.
#[must_use]
pub fn render_minimal_text(doc: &Document, options: &MinimalTextOptions) -> String {
    dom::body_of(doc)
        .map(|body| render_node(&body, options))
        .unwrap_or_default()
}

/// Render the children of `root` as minimal text.
///
/// Traversal uses explicit stacks, so arbitrarily deep trees render without
/// exhausting the call stack.
#[must_use]
pub fn render_node(root: &NodeRef, options: &MinimalTextOptions) -> String {
    let mut renderer = Renderer {
        options,
        block_holders: block_holders(root),
        groups: Vec::new(),
        inline: String::new(),
    };
    renderer.walk(root);
    renderer.flush_inline();

    renderer
        .groups
        .into_iter()
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

struct Renderer<'o> {
    options: &'o MinimalTextOptions,
    /// Elements with a block element somewhere below them.
    block_holders: HashSet<NodeId>,
    groups: Vec<Vec<String>>,
    inline: String,
}

/// Pending work while flattening a list.
enum ListWork<'a> {
    List(NodeRef<'a>),
    Item(NodeRef<'a>),
}

impl Renderer<'_> {
    fn walk(&mut self, root: &NodeRef) {
        let mut stack: Vec<NodeRef> = root.children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            if let Some(tag) = block_tag(&node) {
                self.flush_inline();
                let lines = self.render_block(&node, &tag);
                self.push_group(lines);
            } else if self.block_holders.contains(&node.id) {
                stack.extend(node.children().into_iter().rev());
            } else {
                collect_inline(&node, &mut self.inline);
            }
        }
    }

    fn flush_inline(&mut self) {
        let text = std::mem::take(&mut self.inline);
        self.push_group(text_lines(&text));
    }

    fn push_group(&mut self, lines: Vec<String>) {
        if !lines.is_empty() {
            self.groups.push(lines);
        }
    }

    fn render_block(&self, node: &NodeRef, tag: &str) -> Vec<String> {
        if let Some(level) = tags::heading_level(tag) {
            return self.render_heading(node, level).into_iter().collect();
        }
        match tag {
            "p" => {
                let mut text = String::new();
                collect_inline(node, &mut text);
                text_lines(&text)
            }
            t if LIST_TAGS.contains(&t) => self.render_list(ListWork::List(*node)),
            LIST_ITEM => self.render_list(ListWork::Item(*node)),
            "td" | "th" | "caption" => single_line(&inline_text(node)).into_iter().collect(),
            _ => self.render_table(node),
        }
    }

    fn render_heading(&self, node: &NodeRef, level: usize) -> Option<String> {
        let text = single_line(&inline_text(node))?;
        Some(match self.options.heading_style {
            HeadingStyle::Hashes => format!("{} {text}", "#".repeat(level)),
            HeadingStyle::Prefix => format!("{} {text}", self.options.heading_prefix),
            HeadingStyle::Plain => text,
        })
    }

    /// Emits each item's own text, then its nested lists as flat sibling bullets.
    fn render_list(&self, start: ListWork<'_>) -> Vec<String> {
        let mut lines = Vec::new();
        let mut stack = vec![start];
        while let Some(work) = stack.pop() {
            match work {
                ListWork::List(list) => {
                    for child in list.children().into_iter().rev() {
                        match dom::tag_name(&child).as_deref() {
                            Some(LIST_ITEM) => stack.push(ListWork::Item(child)),
                            Some(t) if LIST_TAGS.contains(&t) => stack.push(ListWork::List(child)),
                            _ => {}
                        }
                    }
                }
                ListWork::Item(item) => {
                    let mut text = String::new();
                    let mut nested = Vec::new();
                    collect_item(&item, &mut text, &mut nested);
                    if let Some(line) = single_line(&text) {
                        lines.push(format!("{} {line}", self.options.list_marker));
                    }
                    stack.extend(nested.into_iter().rev().map(ListWork::List));
                }
            }
        }
        lines
    }

    fn render_table(&self, node: &NodeRef) -> Vec<String> {
        let rows: Vec<NodeRef> = if dom::tag_name(node).as_deref() == Some("tr") {
            vec![*node]
        } else {
            dom::descendants_pre_order(node)
                .into_iter()
                .filter(|n| dom::tag_name(n).as_deref() == Some("tr"))
                .collect()
        };

        let mut lines = Vec::new();
        if let Some(caption) = dom::descendants_pre_order(node)
            .into_iter()
            .find(|n| dom::tag_name(n).as_deref() == Some("caption"))
            .and_then(|c| single_line(&inline_text(&c)))
        {
            lines.push(caption);
        }
        for row in rows {
            let cells: Vec<String> = row
                .children()
                .iter()
                .filter(|c| matches!(dom::tag_name(c).as_deref(), Some("td" | "th")))
                .map(|c| single_line(&inline_text(c)).unwrap_or_default())
                .collect();
            if cells.iter().any(|c| !c.is_empty()) {
                lines.push(cells.join(&self.options.table_cell_separator));
            }
        }
        lines
    }
}

/// Tag name when `node` is a block element.
fn block_tag(node: &NodeRef) -> Option<String> {
    dom::tag_name(node).filter(|tag| tags::is_block_tag(tag, true))
}

/// Ids of the nodes below `root` that have a block element among their descendants.
fn block_holders(root: &NodeRef) -> HashSet<NodeId> {
    let mut holders = HashSet::new();
    for node in dom::descendants_pre_order(root).iter().rev() {
        if block_tag(node).is_some() || holders.contains(&node.id) {
            if let Some(parent) = node.parent() {
                holders.insert(parent.id);
            }
        }
    }
    holders
}

/// Append a node's inline text; `br` becomes a newline.
fn collect_inline(node: &NodeRef, out: &mut String) {
    let mut stack = vec![*node];
    while let Some(node) = stack.pop() {
        if node.is_text() {
            out.push_str(&node.text());
        } else if dom::tag_name(&node).as_deref() == Some("br") {
            out.push('\n');
        } else if node.is_element() {
            stack.extend(node.children().into_iter().rev());
        }
    }
}

/// Like [`collect_inline`] over a list item's children, setting nested lists aside.
fn collect_item<'a>(item: &NodeRef<'a>, out: &mut String, nested: &mut Vec<NodeRef<'a>>) {
    // `None` closes an element with a space.
    let mut stack: Vec<Option<NodeRef<'a>>> = item.children().into_iter().rev().map(Some).collect();
    while let Some(entry) = stack.pop() {
        let Some(node) = entry else {
            out.push(' ');
            continue;
        };
        match dom::tag_name(&node).as_deref() {
            Some(t) if LIST_TAGS.contains(&t) => nested.push(node),
            Some("br") => out.push('\n'),
            Some(_) => {
                // Block children of an item are still part of its own text.
                out.push(' ');
                stack.push(None);
                stack.extend(node.children().into_iter().rev().map(Some));
            }
            None if node.is_text() => out.push_str(&node.text()),
            None => {}
        }
    }
}

fn inline_text(node: &NodeRef) -> String {
    let mut text = String::new();
    collect_inline(node, &mut text);
    if TABLE_TAG_SET.contains(dom::tag_name(node).as_deref().unwrap_or_default()) {
        // Cell content may still hold nested structure; keep it on one line.
        return text.replace('\n', " ");
    }
    text
}

/// Collapse all whitespace to single spaces; `None` when nothing is left.
fn single_line(text: &str) -> Option<String> {
    let line = ANY_WHITESPACE.replace_all(text, " ").trim().to_string();
    (!line.is_empty()).then_some(line)
}

/// Split on newlines, collapse each line, drop empty lines.
fn text_lines(text: &str) -> Vec<String> {
    text.split('\n').filter_map(single_line).collect()
}
