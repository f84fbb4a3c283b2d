//! # rs-page-cleaner
//!
//! Reduces rendered web pages to a compact representation for language-model
//! consumption: a whitelist-filtered HTML fragment or a structured plain-text
//! rendering, plus any Schema.org recipes embedded as JSON-LD.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_page_cleaner::{clean_html, CleanOptions};
//!
//! let html = r#"<html><body><nav>Menu</nav>
//! <div class="post"><h1 id="t">Title</h1><p>Body text</p></div></body></html>"#;
//!
//! let result = clean_html(html, &CleanOptions::default());
//! assert_eq!(result.output, "<h1>Title</h1><p>Body text</p>");
//! assert_eq!(result.text_length, "Title Body text".len());
//! ```
//!
//! ## Pipeline
//!
//! - **Consent removal**: cookie/GDPR banners and their overlays
//! - **Noise removal**: scripts, embeds, forms, layout chrome, ads, hidden subtrees
//! - **Unwrapping**: non-whitelisted elements are replaced by their children
//! - **Attribute sanitization**: only safe `href`/`src` survive
//! - **Pruning and normalization**: empty elements dropped, whitespace collapsed
//!
//! All passes are infallible and bounded by [`CleanOptions::max_depth`].

mod error;
mod options;
mod patterns;
mod result;

/// Document adapter: parsing and node-level helpers.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Tag catalogs and presets.
pub mod tags;

/// URL sanitization for `href`/`src`.
pub mod url_utils;

/// Cookie-consent banner removal.
pub mod consent;

/// The multi-pass reduction pipeline.
pub mod reducer;

/// Structured plain-text rendering.
pub mod minimal_text;

/// JSON-LD recipe extraction.
pub mod recipe;

// Public API - re-exports
pub use consent::remove_consent_ui;
pub use dom::{parse, Document};
pub use encoding::parse_bytes;
pub use error::{Error, Result};
pub use minimal_text::{render_minimal_text, HeadingStyle, MinimalTextOptions};
pub use options::{AllowedTags, CleanOptions, DEFAULT_MAX_DEPTH};
pub use recipe::extract_recipes;
pub use reducer::reduce;
pub use result::{CleaningStats, PageCleaningResult, Recipe};

/// Parses and reduces an HTML document.
///
/// # Example
///
/// ```rust
/// use rs_page_cleaner::{clean_html, CleanOptions};
///
/// let options = CleanOptions {
///     output_minimal_text: true,
///     ..CleanOptions::default()
/// };
/// let result = clean_html("<h2>Steps</h2><ol><li>Mix</li><li>Bake</li></ol>", &options);
/// assert_eq!(result.output, "## Steps\n\n- Mix\n- Bake");
/// ```
#[must_use]
pub fn clean_html(html: &str, options: &CleanOptions) -> PageCleaningResult {
    reduce(&parse(html), options)
}

/// Parses and reduces HTML bytes, detecting the character encoding from a
/// `<meta>` declaration.
///
/// ```rust
/// use rs_page_cleaner::{clean_bytes, CleanOptions};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let result = clean_bytes(html, &CleanOptions::default());
/// assert_eq!(result.output, "<p>Caf\u{e9}</p>");
/// ```
#[must_use]
pub fn clean_bytes(html: &[u8], options: &CleanOptions) -> PageCleaningResult {
    reduce(&parse_bytes(html), options)
}

/// Extracts JSON-LD recipes from an HTML string.
///
/// ```rust
/// use rs_page_cleaner::extract_recipes_from_html;
///
/// let html = r#"<script type="application/ld+json">
/// {"@context": "https://schema.org", "@type": "Recipe", "name": "Toast",
///  "recipeIngredient": ["1 slice bread"], "recipeInstructions": "Toast it."}
/// </script>"#;
/// let recipes = extract_recipes_from_html(html);
/// assert_eq!(recipes[0].name.as_deref(), Some("Toast"));
/// assert_eq!(recipes[0].recipe_instructions, ["Toast it."]);
/// ```
#[must_use]
pub fn extract_recipes_from_html(html: &str) -> Vec<Recipe> {
    extract_recipes(&parse(html))
}
