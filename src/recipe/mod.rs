//! JSON-LD recipe extraction.
//!
//! Independent of the reduction pipeline: reads `application/ld+json`
//! script blocks from a document, finds Schema.org `Recipe` nodes wherever
//! they are nested, and flattens them into [`Recipe`] records.

pub mod json_ld;
pub mod normalize;

use log::debug;
use serde_json::Value;

use crate::dom::{self, Document};
use crate::result::Recipe;

pub use json_ld::RecipeCollector;

const JSON_LD_TYPE: &str = "application/ld+json";

/// Extract every Schema.org Recipe embedded as JSON-LD in `doc`.
///
/// Blocks that fail to parse are skipped. Recipes sharing an `@id` are
/// reported once, first occurrence winning.
#[must_use]
pub fn extract_recipes(doc: &Document) -> Vec<Recipe> {
    let mut collector = RecipeCollector::new();

    for script in doc.select("script[type]").nodes() {
        let is_json_ld = dom::get_attribute(script, "type")
            .is_some_and(|t| t.trim().to_ascii_lowercase().starts_with(JSON_LD_TYPE));
        if !is_json_ld {
            continue;
        }

        let text = dom::text_content(script);
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(text) {
            Ok(value) => collector.collect(&value),
            Err(e) => debug!("skipping unparseable JSON-LD block: {e}"),
        }
    }

    collector.into_recipes()
}
