//! Noise removal: elements that never carry content worth keeping.

use log::trace;

use crate::dom::{self, NodeRef, Selection};
use crate::options::{AllowedTags, CleanOptions};
use crate::tags::{MEDIA_TAGS, NOISE_TAGS, WIDGET_SELECTORS};

/// Selector for explicitly hidden subtrees.
const HIDDEN_SELECTOR: &str = r#"[aria-hidden="true"]"#;

/// Build the combined removal selector for one invocation.
///
/// Media tags are always removed when `drop_media` is set; otherwise
/// `video`/`audio`/`figure` survive only when whitelisted. `img` is left to
/// the attribute pass unless media is dropped.
#[must_use]
pub fn noise_selector(options: &CleanOptions, allowed: &AllowedTags) -> String {
    let mut selectors: Vec<&str> = NOISE_TAGS.to_vec();
    selectors.push(HIDDEN_SELECTOR);
    selectors.extend(WIDGET_SELECTORS);

    if options.drop_media {
        selectors.push("img");
        selectors.extend(MEDIA_TAGS);
    } else {
        selectors.extend(MEDIA_TAGS.iter().filter(|tag| !allowed.contains(tag)));
    }

    selectors.join(", ")
}

/// Remove noise elements below `body`. Returns the number of subtrees removed.
///
/// Matches nested inside an already-removed subtree are not counted.
pub fn remove_noise(body: &NodeRef, options: &CleanOptions, allowed: &AllowedTags) -> usize {
    let selector = noise_selector(options, allowed);
    let matches = Selection::from(*body).select(&selector);

    let mut removed = 0;
    for node in matches.nodes() {
        if !dom::is_descendant_of(node, body) {
            continue;
        }
        trace!("removing noise <{}>", dom::tag_name(node).unwrap_or_default());
        node.remove_from_parent();
        removed += 1;
    }
    removed
}
