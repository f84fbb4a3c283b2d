//! Line-break normalization, serialization and visible-length measurement.
//!
//! Line structure is made explicit in the tree (`br` and block boundaries
//! become newline text nodes), the body is serialized, whitespace is
//! collapsed, and newlines are turned back into markup: newlines that sit
//! on a block-tag boundary are dropped, the remaining ones become `<br>`.
//! Newlines already present in text nodes, including the row separators
//! left by table flattening, are treated the same way.

use std::borrow::Cow;

use regex::Captures;

use crate::dom::{self, NodeRef};
use crate::patterns::{
    ANY_TAG, ANY_WHITESPACE, BLOCK_BOUNDARY, BREAKING_TAG, EMPTY_BLOCK_PAIR, HORIZONTAL_WHITESPACE,
    LI_NOT_AT_LINE_START, MULTIPLE_NEWLINES, SPACES_AFTER_NEWLINE, SPACES_BEFORE_NEWLINE,
};
use crate::tags;

/// Normalize line structure under `body` and serialize it to an HTML fragment.
///
/// Line breaks are written as `<br>` when `br_allowed`, otherwise as a space,
/// so the fragment never holds a tag outside the whitelist.
pub fn normalize_and_serialize(body: &NodeRef, keep_tables: bool, br_allowed: bool) -> String {
    mark_line_breaks(body, keep_tables);

    let serialized = body.inner_html();
    let collapsed = collapse_whitespace(&serialized);
    restore_markup(&collapsed, if br_allowed { "<br>" } else { " " })
}

/// Replace `br` with newline text and surround block elements with newlines.
fn mark_line_breaks(body: &NodeRef, keep_tables: bool) {
    for node in dom::descendants_pre_order(body) {
        let Some(tag) = dom::tag_name(&node) else {
            continue;
        };
        if tag == "br" {
            dom::replace_with_text(&node, "\n");
        } else if tags::is_block_tag(&tag, keep_tables) {
            dom::insert_text_before(&node, "\n");
            dom::insert_text_after(&node, "\n");
        }
    }
}

/// Collapse serialized whitespace: no spaces around newlines, single spaces,
/// single newlines, trimmed.
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    let s = SPACES_AFTER_NEWLINE.replace_all(s, "\n");
    let s = SPACES_BEFORE_NEWLINE.replace_all(&s, "\n");
    let s = HORIZONTAL_WHITESPACE.replace_all(&s, " ");
    let s = MULTIPLE_NEWLINES.replace_all(&s, "\n");
    s.trim().to_string()
}

/// Turn collapsed newlines back into markup and tidy empty blocks.
fn restore_markup(s: &str, line_break: &str) -> String {
    let s = BLOCK_BOUNDARY.replace_all(s, "$1");
    let s = s.replace('\n', line_break);
    let s = drop_empty_block_pairs(&s);
    let s = LI_NOT_AT_LINE_START.replace_all(&s, "$1\n<li>");
    s.trim().to_string()
}

/// Remove `<tag></tag>` pairs for list, paragraph and heading tags, repeating
/// until nothing changes so nested empties disappear too.
fn drop_empty_block_pairs(s: &str) -> String {
    let mut current = s.to_string();
    loop {
        let next = EMPTY_BLOCK_PAIR.replace_all(&current, |caps: &Captures| {
            if caps[1] == caps[2] {
                String::new()
            } else {
                caps[0].to_string()
            }
        });
        if let Cow::Owned(next) = next {
            if next != current {
                current = next;
                continue;
            }
        }
        return current;
    }
}

/// Approximate visible length of an HTML fragment, in characters.
///
/// Tags are stripped (`br` and block tags count as a word break), the basic
/// entities are decoded, whitespace runs (zero-width characters included)
/// count as one space, and the result is trimmed. This is an estimate of
/// reading length, not a rendering-accurate metric.
#[must_use]
pub fn visible_text_length(html: &str) -> usize {
    let spaced = BREAKING_TAG.replace_all(html, " ");
    let stripped = ANY_TAG.replace_all(&spaced, "");
    plain_text_length(&decode_basic_entities(&stripped))
}

/// Character count of text after whitespace collapsing and trimming.
#[must_use]
pub fn plain_text_length(text: &str) -> usize {
    ANY_WHITESPACE.replace_all(text, " ").trim().chars().count()
}

fn decode_basic_entities(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&"),
    )
}
