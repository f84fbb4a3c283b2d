//! Schema.org Recipe discovery in parsed JSON-LD values.

use std::collections::HashSet;

use log::trace;
use serde_json::{Map, Value};

use super::normalize::recipe_from_node;
use crate::patterns::{SCHEMA_ORG, SCHEMA_TYPE_PREFIX};
use crate::result::Recipe;

/// Keys under which publishers nest further entities.
pub const STRUCTURAL_KEYS: [&str; 9] = [
    "@graph",
    "mainEntity",
    "mainEntityOfPage",
    "hasPart",
    "subjectOf",
    "about",
    "itemListElement",
    "itemList",
    "isPartOf",
];

/// Accumulates normalized recipes across JSON-LD blocks.
///
/// `@id` deduplication spans every block fed to the same collector.
#[derive(Debug, Default)]
pub struct RecipeCollector {
    recipes: Vec<Recipe>,
    seen_ids: HashSet<String>,
}

impl RecipeCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search one parsed JSON-LD value.
    pub fn collect(&mut self, value: &Value) {
        self.search(value, false);
    }

    #[must_use]
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes
    }

    fn search(&mut self, value: &Value, parent_allowed: bool) {
        match value {
            Value::Array(items) => {
                for item in items {
                    self.search(item, parent_allowed);
                }
            }
            Value::Object(node) => {
                let allowed = parent_allowed || context_allows(node.get("@context"));
                if allowed && is_recipe(node) {
                    self.add(node);
                }
                for key in STRUCTURAL_KEYS {
                    if let Some(child) = node.get(key) {
                        self.search(child, allowed);
                    }
                }
            }
            _ => {}
        }
    }

    fn add(&mut self, node: &Map<String, Value>) {
        if let Some(id) = node.get("@id").and_then(Value::as_str) {
            if !self.seen_ids.insert(id.to_string()) {
                trace!("skipping duplicate recipe {id}");
                return;
            }
        }
        let recipe = recipe_from_node(node);
        trace!("found recipe {:?}", recipe.name);
        self.recipes.push(recipe);
    }
}

/// Whether a node's `@context` puts it in the Schema.org vocabulary.
///
/// A missing (or null) context is inherited and therefore allowed.
#[must_use]
pub fn context_allows(context: Option<&Value>) -> bool {
    match context {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => SCHEMA_ORG.is_match(s.trim()),
        Some(Value::Array(items)) => items.iter().any(|item| match item {
            Value::String(s) => SCHEMA_ORG.is_match(s.trim()),
            Value::Object(obj) => vocab_is_schema_org(obj),
            _ => false,
        }),
        Some(Value::Object(obj)) => vocab_is_schema_org(obj),
        Some(_) => false,
    }
}

fn vocab_is_schema_org(obj: &Map<String, Value>) -> bool {
    obj.get("@vocab")
        .and_then(Value::as_str)
        .is_some_and(|vocab| SCHEMA_ORG.is_match(vocab.trim()))
}

/// Local type names of a node, with `schema:` and Schema.org URL prefixes removed.
#[must_use]
pub fn type_names(node: &Map<String, Value>) -> Vec<String> {
    let local = |s: &str| SCHEMA_TYPE_PREFIX.replace(s.trim(), "").into_owned();
    match node.get("@type") {
        Some(Value::String(s)) => vec![local(s)],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).map(local).collect(),
        _ => Vec::new(),
    }
}

/// Whether a node's `@type` includes `Recipe`.
#[must_use]
pub fn is_recipe(node: &Map<String, Value>) -> bool {
    type_names(node).iter().any(|t| t == "Recipe")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collect(value: &Value) -> Vec<Recipe> {
        let mut collector = RecipeCollector::new();
        collector.collect(value);
        collector.into_recipes()
    }

    #[test]
    fn test_context_forms() {
        assert!(context_allows(None));
        assert!(context_allows(Some(&json!("https://schema.org"))));
        assert!(context_allows(Some(&json!("http://schema.org/"))));
        assert!(context_allows(Some(&json!(["https://schema.org", {"x": "y"}]))));
        assert!(context_allows(Some(&json!({"@vocab": "https://schema.org/"}))));
        assert!(!context_allows(Some(&json!("https://example.com/vocab"))));
        assert!(!context_allows(Some(&json!({"@vocab": "https://example.com/"}))));
    }

    #[test]
    fn test_type_prefixes() {
        for ty in ["Recipe", "schema:Recipe", "https://schema.org/Recipe", "http://schema.org/Recipe"] {
            let node = json!({"@type": ty});
            assert!(is_recipe(node.as_object().expect("object")), "{ty}");
        }
        let node = json!({"@type": ["NewsArticle", "Recipe"]});
        assert!(is_recipe(node.as_object().expect("object")));
        let node = json!({"@type": "RecipeCollection"});
        assert!(!is_recipe(node.as_object().expect("object")));
    }

    #[test]
    fn test_foreign_context_is_ignored() {
        let value = json!({"@context": "https://example.com", "@type": "Recipe", "name": "X"});
        assert!(collect(&value).is_empty());
    }

    #[test]
    fn test_allowed_context_propagates_through_graph() {
        let value = json!({
            "@context": "https://schema.org",
            "@graph": [
                {"@type": "WebSite", "name": "Site"},
                {"@context": "https://example.com", "@type": "Recipe", "name": "Inner"}
            ]
        });
        let recipes = collect(&value);
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name.as_deref(), Some("Inner"));
    }

    #[test]
    fn test_item_list_nesting() {
        let value = json!({
            "@context": "https://schema.org",
            "@type": "ItemList",
            "itemListElement": [
                {"@type": "ListItem", "about": {"@type": "Recipe", "name": "A"}},
                {"@type": "Recipe", "name": "B"}
            ]
        });
        let names: Vec<_> = collect(&value).into_iter().filter_map(|r| r.name).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_dedup_by_id_keeps_first() {
        let mut collector = RecipeCollector::new();
        collector.collect(&json!({"@type": "Recipe", "@id": "#r", "name": "First"}));
        collector.collect(&json!({"@type": "Recipe", "@id": "#r", "name": "Second"}));
        collector.collect(&json!({"@type": "Recipe", "name": "No id"}));
        let names: Vec<_> = collector.into_recipes().into_iter().filter_map(|r| r.name).collect();
        assert_eq!(names, ["First", "No id"]);
    }
}
