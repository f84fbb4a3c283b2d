//! Result types for cleaning and recipe extraction output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Counters of structural operations performed during one invocation.
///
/// Counters are per call and never cumulative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningStats {
    /// Elements deleted with their subtree (noise, media, consent UI, images).
    pub removed_nodes: usize,
    /// Non-whitelisted elements replaced by their children.
    pub unwrapped_nodes: usize,
    /// Attributes stripped from surviving elements.
    pub removed_attrs: usize,
    /// Anchors unwrapped because they had no safe `href`.
    pub stripped_links: usize,
    /// Elements pruned for having no meaningful content.
    pub empty_nodes: usize,
    /// Comment nodes deleted.
    pub removed_comments: usize,
}

impl CleaningStats {
    /// Counters keyed by their wire name.
    #[must_use]
    pub fn as_map(&self) -> BTreeMap<&'static str, usize> {
        BTreeMap::from([
            ("removedNodes", self.removed_nodes),
            ("unwrappedNodes", self.unwrapped_nodes),
            ("removedAttrs", self.removed_attrs),
            ("strippedLinks", self.stripped_links),
            ("emptyNodes", self.empty_nodes),
            ("removedComments", self.removed_comments),
        ])
    }
}

/// Output of [`crate::reduce`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCleaningResult {
    /// Reduced HTML fragment, or minimal text when `output_minimal_text` is set.
    pub output: String,

    /// Approximate visible reading length in characters.
    ///
    /// Computed by stripping tags from `output` and collapsing whitespace
    /// (zero-width characters included). This is an estimate, not a
    /// rendering-accurate metric.
    pub text_length: usize,

    /// Operation counters for this invocation.
    pub stats: CleaningStats,
}

/// A Schema.org Recipe normalized to flat strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Yield/servings as written by the publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_yield: Option<String>,

    /// Ingredient lines, cleaned.
    pub recipe_ingredients: Vec<String>,

    /// Instruction steps, flattened and cleaned.
    pub recipe_instructions: Vec<String>,
}
