//! Cookie/consent banner removal.
//!
//! A heuristic pass run before reduction. Candidates come from known
//! consent-management-platform markup plus generic naming and dialog
//! attributes; each candidate is kept or removed based on its names and a
//! keyword score over its visible text. False positives and false negatives
//! are accepted: this is best-effort cleanup, not a guarantee.

use log::{debug, trace};

use crate::dom::{self, Document, NodeRef};
use crate::patterns::{CONSENT_ATTR, CONSENT_TEXT, CONSENT_VENDOR, OVERLAY_ATTR};

/// Vendor-specific selectors for consent-management platforms.
pub static VENDOR_SELECTORS: [&str; 24] = [
    "#onetrust-consent-sdk",
    "#onetrust-banner-sdk",
    "#CybotCookiebotDialog",
    "#CookiebotWidget",
    "#didomi-host",
    "#qc-cmp2-container",
    ".qc-cmp2-container",
    "#usercentrics-root",
    "#truste-consent-track",
    ".truste_box_overlay",
    "#consent_blackbar",
    r#"[id^="sp_message_container"]"#,
    ".cc-window",
    "#cookie-law-info-bar",
    "#cmplz-cookiebanner-container",
    ".osano-cm-window",
    "#iubenda-cs-banner",
    ".fc-consent-root",
    "#CookieConsent",
    "#cookiescript_injected",
    ".cky-consent-container",
    "#termly-code-snippet-support",
    "#_evidon_banner",
    "#BorlabsCookieBox",
];

/// Selectors for generic dialog candidates.
static DIALOG_SELECTORS: [&str; 2] = [r#"[role="dialog"]"#, r#"[aria-modal="true"]"#];

/// Score at or above which a candidate is removed on text alone.
const REMOVAL_SCORE: u32 = 5;

/// Remove consent UI below the body. Returns the number of elements removed.
pub fn remove_consent_ui(doc: &Document) -> usize {
    let Some(body) = dom::body_of(doc) else {
        return 0;
    };

    let mut removed = 0;

    for candidate in collect_candidates(doc, &body) {
        if !dom::is_descendant_of(&candidate, &body) {
            continue;
        }
        let names = dom::id_and_class(&candidate);
        let text = dom::text_content(&candidate).to_lowercase();
        let score = consent_score(&text);

        if CONSENT_VENDOR.is_match(&names) || CONSENT_TEXT.is_match(&text) || score >= REMOVAL_SCORE {
            trace!("removing consent candidate '{}' (score {score})", names.trim());
            candidate.remove_from_parent();
            removed += 1;
        }
    }

    for overlay in collect_overlays(&body) {
        if !dom::is_descendant_of(&overlay, &body) {
            continue;
        }
        let text = dom::text_content(&overlay);
        let text = text.trim();
        if text.is_empty() || CONSENT_TEXT.is_match(text) {
            trace!("removing overlay '{}'", dom::id_and_class(&overlay).trim());
            overlay.remove_from_parent();
            removed += 1;
        }
    }

    if removed > 0 {
        debug!("consent heuristics removed {removed} elements");
    }
    removed
}

/// Keyword score of a candidate's lowercased visible text.
#[must_use]
pub fn consent_score(text: &str) -> u32 {
    let has_any = |words: &[&str]| words.iter().any(|w| text.contains(w));

    let mut score = 0;
    if text.contains("cookie") {
        score += 3;
    }
    if text.contains("consent") {
        score += 2;
    }
    if has_any(&["preferences", "settings", "manage"]) {
        score += 2;
    }
    if has_any(&["vendors", "purposes"]) {
        score += 2;
    }
    if has_any(&["iab", "tcf", "legitimate interest"]) {
        score += 2;
    }
    if text.contains("privacy") {
        score += 1;
    }
    if has_any(&["accept", "reject"]) {
        score += 1;
    }
    score
}

/// Vendor and generic candidates in document order, without duplicates.
fn collect_candidates<'a>(doc: &'a Document, body: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut candidates: Vec<NodeRef<'a>> = Vec::new();
    let mut push = |node: NodeRef<'a>| {
        if node.id != body.id && !candidates.iter().any(|c| c.id == node.id) {
            candidates.push(node);
        }
    };

    for selector in VENDOR_SELECTORS.iter().chain(DIALOG_SELECTORS.iter()) {
        for node in doc.select(selector).nodes() {
            push(*node);
        }
    }

    for node in dom::descendants_pre_order(body) {
        if !node.is_element() {
            continue;
        }
        let names = dom::id_and_class(&node);
        if CONSENT_ATTR.is_match(&names) || CONSENT_VENDOR.is_match(&names) {
            push(node);
        }
    }

    candidates
}

fn collect_overlays<'a>(body: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    dom::descendants_pre_order(body)
        .into_iter()
        .filter(|node| node.is_element() && OVERLAY_ATTR.is_match(&dom::id_and_class(node)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_full_banner() {
        let text = "we use cookies. manage preferences. vendors and purposes under tcf. accept";
        assert!(consent_score(text) >= REMOVAL_SCORE);
    }

    #[test]
    fn test_score_recipe_text_is_low() {
        assert_eq!(consent_score("whisk the eggs and fold in the flour"), 0);
        assert_eq!(consent_score("privacy"), 1);
    }

    #[test]
    fn test_vendor_banner_removed() {
        let doc = dom::parse(
            r#"<body><div id="onetrust-consent-sdk"><p>Hello</p></div><p>Recipe</p></body>"#,
        );
        assert_eq!(remove_consent_ui(&doc), 1);
        assert!(doc.select("#onetrust-consent-sdk").is_empty());
        assert!(doc.select("body").text().contains("Recipe"));
    }

    #[test]
    fn test_dialog_with_cookie_text_removed() {
        let doc = dom::parse(
            r#"<body><div role="dialog"><p>We use cookies to personalise content.</p><button>Accept</button></div><p>Stir</p></body>"#,
        );
        assert_eq!(remove_consent_ui(&doc), 1);
        assert!(doc.select("[role=dialog]").is_empty());
    }

    #[test]
    fn test_unrelated_dialog_kept() {
        let doc = dom::parse(r#"<body><div role="dialog"><p>Save this recipe to your box</p></div></body>"#);
        assert_eq!(remove_consent_ui(&doc), 0);
        assert!(doc.select("[role=dialog]").exists());
    }

    #[test]
    fn test_empty_overlay_removed() {
        let doc = dom::parse(r#"<body><div class="modal-backdrop"></div><p>Text</p></body>"#);
        assert_eq!(remove_consent_ui(&doc), 1);
        assert!(doc.select(".modal-backdrop").is_empty());
    }

    #[test]
    fn test_overlay_with_content_kept() {
        let doc = dom::parse(r#"<body><div class="video-overlay"><p>Watch how to knead</p></div></body>"#);
        assert_eq!(remove_consent_ui(&doc), 0);
    }

    #[test]
    fn test_nested_candidates_counted_once() {
        let doc = dom::parse(
            r#"<body><div class="cookie-banner"><div class="cookie-text">We use cookies</div></div></body>"#,
        );
        assert_eq!(remove_consent_ui(&doc), 1);
    }
}
