//! Compiled regex patterns used across the cleaning pipeline.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Whitespace
// =============================================================================

/// Spaces and tabs directly following a newline.
pub static SPACES_AFTER_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]+").expect("SPACES_AFTER_NEWLINE regex"));

/// Spaces and tabs directly preceding a newline.
pub static SPACES_BEFORE_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r]+\n").expect("SPACES_BEFORE_NEWLINE regex"));

/// Runs of horizontal whitespace (tabs, spaces, carriage returns).
pub static HORIZONTAL_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r]+").expect("HORIZONTAL_WHITESPACE regex"));

/// Two or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("MULTIPLE_NEWLINES regex"));

/// Any whitespace run, zero-width characters included.
pub static ANY_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s\u{200B}\u{200C}\u{200D}\u{2060}\u{FEFF}]+").expect("ANY_WHITESPACE regex")
});

/// Zero-width characters.
pub static ZERO_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\u{200B}\u{200C}\u{200D}\u{2060}\u{FEFF}]").expect("ZERO_WIDTH regex")
});

/// Leading bullets or dashes on an ingredient/instruction line.
pub static LEADING_BULLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s\-\u{2013}\u{2014}\u{2022}\u{25AA}\u{25CF}\u{00B7}*]+").expect("LEADING_BULLET regex")
});

// =============================================================================
// Serialized-HTML cleanup
// =============================================================================

/// Any tag in serialized output.
pub static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("ANY_TAG regex"));

/// Tags that separate words when stripped: `br` and block-level elements.
pub static BREAKING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:br|p|h[1-6]|ul|ol|li|table|caption|thead|tbody|tfoot|tr|th|td)\b[^>]*>")
        .expect("BREAKING_TAG regex")
});

/// Empty block tag pairs revealed by whitespace collapsing.
pub static EMPTY_BLOCK_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(ul|ol|li|p|h[1-6])>\s*</(ul|ol|li|p|h[1-6])>").expect("EMPTY_BLOCK_PAIR regex")
});

/// Newlines and spaces touching an opening or closing block-level tag.
pub static BLOCK_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\n ]*(</?(?:p|h[1-6]|ul|ol|li|table|caption|thead|tbody|tfoot|tr|th|td)>)[\n ]*")
        .expect("BLOCK_BOUNDARY regex")
});

/// A `<li>` not already at the start of a line.
pub static LI_NOT_AT_LINE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\n])<li>").expect("LI_NOT_AT_LINE_START regex"));

/// `<meta charset=...>` and the `http-equiv` content-type form.
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?([A-Za-z0-9_.:-]+)"#).expect("META_CHARSET regex")
});

// =============================================================================
// URL safety
// =============================================================================

/// Literal-safe relative URL, used when URL parsing fails.
pub static SAFE_BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/?[A-Za-z0-9#/?=&.+%-]+$").expect("SAFE_BARE_URL regex"));

/// Allowed-tag name shape for user-supplied lists.
pub static TAG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("TAG_NAME regex"));

// =============================================================================
// JSON-LD
// =============================================================================

/// The Schema.org vocabulary IRI, with or without trailing slash.
pub static SCHEMA_ORG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://schema\.org/?$").expect("SCHEMA_ORG regex"));

/// Prefixes in front of a Schema.org type name.
pub static SCHEMA_TYPE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:schema:|https?://schema\.org/)").expect("SCHEMA_TYPE_PREFIX regex")
});

// =============================================================================
// Consent UI
// =============================================================================

/// Class/id fragments of known consent-management platforms.
pub static CONSENT_VENDOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(onetrust|optanon|cookiebot|cybotcookiebot|didomi|quantcast|qc-cmp|usercentrics|trustarc|truste|sp_message|sourcepoint|iubenda|osano|termly|cookieyes|cky-consent|complianz|cmplz|evidon|cookiescript|cookie-law-info|cookielawinfo|fc-consent|borlabs|klaro|consentmanager)",
    )
    .expect("CONSENT_VENDOR regex")
});

/// Class/id fragments marking generic consent candidates.
pub static CONSENT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(cookie|consent|gdpr|\bcmp\b|cmp[-_])").expect("CONSENT_ATTR regex"));

/// Broad consent wording in visible text.
pub static CONSENT_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(we use cookies|this (?:site|website) uses cookies|cookie (?:policy|settings|preferences|consent)|accept (?:all )?cookies|manage (?:cookies|consent|preferences)|your privacy choices|we value your privacy|gdpr|legitimate interest|consent preferences)",
    )
    .expect("CONSENT_TEXT regex")
});

/// Class/id fragments marking overlays and backdrops.
pub static OVERLAY_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(overlay|backdrop)").expect("OVERLAY_ATTR regex"));
