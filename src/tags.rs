//! Tag catalogs used by the reducer and the minimal-text renderer.
//!
//! All catalogs are immutable process-wide values. Per-call adjustments (such
//! as adding table tags when `keep_tables` is set) always work on a copy.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Allowed-tag presets ===

/// Default whitelist: headings, paragraphs, lists, inline emphasis, line
/// breaks, time and anchors.
pub static DEFAULT_ALLOWED_TAGS: [&str; 19] = [
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "ol", "ul", "li", "b", "i", "u", "strong", "em",
    "sup", "sub", "br", "time",
];

/// Anchor is listed separately so presets read naturally; it belongs to both.
const ANCHOR: &str = "a";

/// Narrower preset for recipe-content extraction.
pub static RECIPE_MINIMAL_TAGS: [&str; 11] = [
    "h1", "h2", "h3", "p", "ul", "ol", "li", "strong", "em", "br", "time",
];

/// Table structure tags. Unioned into the allowed set when tables are kept.
pub static TABLE_TAGS: [&str; 8] = [
    "table", "caption", "thead", "tbody", "tfoot", "tr", "th", "td",
];

/// Tags that anchor the tree and are never unwrapped.
pub static ANCHOR_TAGS: [&str; 2] = ["html", "body"];

// === Removal catalogs ===

/// Elements removed wholesale, children included.
pub static NOISE_TAGS: [&str; 25] = [
    // scripting, styling, templates
    "script", "style", "noscript", "template",
    // embeds
    "iframe", "frame", "frameset", "object", "embed",
    // form controls
    "form", "input", "textarea", "select", "button",
    // graphics containers
    "svg", "canvas", "picture", "source",
    // document metadata
    "meta", "link",
    // layout chrome
    "header", "footer", "nav", "aside",
    // legacy
    "applet",
];

/// Media elements removed unless explicitly whitelisted (or always, when
/// `drop_media` is set).
pub static MEDIA_TAGS: [&str; 3] = ["video", "audio", "figure"];

/// Selectors for advertising and share widgets by common naming convention.
pub static WIDGET_SELECTORS: [&str; 14] = [
    r#"[class~="ad"]"#,
    r#"[class~="ads"]"#,
    r#"[class^="ad-"]"#,
    r#"[class*=" ad-"]"#,
    r#"[id^="ad-"]"#,
    r#"[id^="google_ads"]"#,
    r#"[class*="advert"]"#,
    r#"[id*="advert"]"#,
    r#"[class*="sponsored"]"#,
    r#"[class*="share-buttons"]"#,
    r#"[class*="social-share"]"#,
    r#"[class*="sharing"]"#,
    r#"[class*="addtoany"]"#,
    r#"[class*="sharethis"]"#,
];

// === Structural classes ===

/// Heading tags.
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// List containers.
pub static LIST_TAGS: [&str; 2] = ["ul", "ol"];

/// Block-level tags that receive line breaks at their boundaries.
pub static BLOCK_TAGS: [&str; 9] = ["h1", "h2", "h3", "h4", "h5", "h6", "p", "ul", "ol"];

/// List items are blocks too, kept separate so list handling can find them.
pub const LIST_ITEM: &str = "li";

/// `DEFAULT_ALLOWED_TAGS` plus the anchor tag, as a set.
pub static DEFAULT_ALLOWED_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    DEFAULT_ALLOWED_TAGS.into_iter().chain([ANCHOR]).collect()
});

/// `RECIPE_MINIMAL_TAGS` plus the anchor tag, as a set.
pub static RECIPE_MINIMAL_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    RECIPE_MINIMAL_TAGS.into_iter().chain([ANCHOR]).collect()
});

/// `TABLE_TAGS` as a set.
pub static TABLE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| TABLE_TAGS.into_iter().collect());

/// Returns true for `h1`..`h6`, returning the level.
#[must_use]
pub fn heading_level(tag: &str) -> Option<usize> {
    HEADING_TAGS.iter().position(|h| *h == tag).map(|i| i + 1)
}

/// Block tags for one invocation, optionally including table structure.
#[must_use]
pub fn is_block_tag(tag: &str, include_tables: bool) -> bool {
    BLOCK_TAGS.contains(&tag) || tag == LIST_ITEM || (include_tables && TABLE_TAG_SET.contains(tag))
}
