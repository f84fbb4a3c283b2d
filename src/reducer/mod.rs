//! HTML reduction pipeline.
//!
//! Multi-pass, in-place rewrite of the body element. Pass order matters:
//! each pass assumes the previous ones completed.
//!
//! 0. consent UI removal, when enabled ([`crate::consent`])
//! 1. comment removal
//! 2. noise removal ([`noise`])
//! 3. unwrap non-whitelisted elements and sanitize attributes ([`unwrap`])
//! 4. empty-node pruning ([`prune`])
//! 5. line-break normalization and serialization ([`normalize`]), or
//!    minimal-text rendering of the pruned tree
//! 6. visible text length
//!
//! The document is consumed destructively. Reducing a document twice without
//! re-parsing is not supported.

pub mod noise;
pub mod normalize;
pub mod prune;
pub mod unwrap;

use log::debug;

use crate::consent;
use crate::dom::{self, Document};
use crate::minimal_text;
use crate::options::CleanOptions;
use crate::result::{CleaningStats, PageCleaningResult};

/// Reduce a parsed document to a whitelisted HTML fragment or minimal text.
///
/// Runs the consent heuristics first when `apply_consent_ui_heuristics` is
/// set. A document without a resolvable body yields an empty result.
#[must_use]
pub fn reduce(doc: &Document, options: &CleanOptions) -> PageCleaningResult {
    let mut stats = CleaningStats::default();

    if options.apply_consent_ui_heuristics {
        stats.removed_nodes += consent::remove_consent_ui(doc);
    }

    let Some(body) = dom::body_of(doc) else {
        return PageCleaningResult {
            stats,
            ..PageCleaningResult::default()
        };
    };

    let allowed = options.effective_allowed_tags();

    stats.removed_comments += dom::remove_comments(&body);
    stats.removed_nodes += noise::remove_noise(&body, options, &allowed);

    unwrap::unwrap_and_sanitize(&body, options, &allowed, &mut stats);
    stats.removed_comments += dom::remove_comments(&body);

    stats.empty_nodes += prune::prune_empty(&body, &allowed);
    stats.removed_comments += dom::remove_comments(&body);

    let (output, text_length) = if options.output_minimal_text {
        let text = minimal_text::render_node(&body, &options.minimal_text);
        let len = normalize::plain_text_length(&text);
        (text, len)
    } else {
        let html = normalize::normalize_and_serialize(&body, options.keep_tables, allowed.contains("br"));
        let len = normalize::visible_text_length(&html);
        (html, len)
    };

    debug!(
        "reduced page: {} chars visible, removed={} unwrapped={} attrs={} links={} empty={} comments={}",
        text_length,
        stats.removed_nodes,
        stats.unwrapped_nodes,
        stats.removed_attrs,
        stats.stripped_links,
        stats.empty_nodes,
        stats.removed_comments,
    );

    PageCleaningResult {
        output,
        text_length,
        stats,
    }
}
