//! Flatten a Schema.org Recipe node into a [`Recipe`].

use serde_json::{Map, Value};

use super::json_ld::type_names;
use crate::patterns::{ANY_WHITESPACE, LEADING_BULLET, ZERO_WIDTH};
use crate::result::Recipe;

/// Build a [`Recipe`] from a node already known to be a Recipe.
#[must_use]
pub fn recipe_from_node(node: &Map<String, Value>) -> Recipe {
    let mut ingredients = ingredient_list(node.get("recipeIngredient"));
    if ingredients.is_empty() {
        ingredients = ingredient_list(node.get("ingredients"));
    }

    let mut instructions = Vec::new();
    if let Some(value) = node.get("recipeInstructions") {
        collect_instructions(value, &mut instructions);
    }

    Recipe {
        name: node.get("name").and_then(coerce_string).and_then(non_empty),
        recipe_yield: node.get("recipeYield").and_then(coerce_string).and_then(non_empty),
        recipe_ingredients: ingredients,
        recipe_instructions: instructions,
    }
}

/// Remove zero-width characters, collapse whitespace, strip leading bullets
/// and dashes, trim.
#[must_use]
pub fn clean_text(s: &str) -> String {
    let s = ZERO_WIDTH.replace_all(s, "");
    let s = ANY_WHITESPACE.replace_all(&s, " ");
    let s = LEADING_BULLET.replace(&s, "");
    s.trim().to_string()
}

/// Scalar coercion: strings as-is, numbers and booleans printed, arrays
/// joined with `", "`. Objects and null have no string form.
#[must_use]
pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(coerce_string).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Object(_) | Value::Null => None,
    }
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// === Ingredients ===

fn ingredient_list(value: Option<&Value>) -> Vec<String> {
    let entries: Vec<&Value> = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
    };
    entries
        .into_iter()
        .map(|entry| clean_text(&ingredient_text(entry)))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Raw text of one ingredient entry. Multi-part values join with a space.
fn ingredient_text(value: &Value) -> String {
    match value {
        Value::Array(parts) => parts
            .iter()
            .map(ingredient_text)
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        Value::Object(obj) => {
            // Role wrapper: the ingredient sits one level down.
            if let Some(inner) = obj.get("recipeIngredient") {
                if type_names(obj).iter().any(|t| t == "Role") {
                    return ingredient_text(inner);
                }
            }
            ["text", "name", "@id"]
                .iter()
                .find_map(|key| obj.get(*key).and_then(coerce_string))
                .unwrap_or_else(|| value.to_string())
        }
        other => coerce_string(other).unwrap_or_default(),
    }
}

// === Instructions ===

fn collect_instructions(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_instructions(item, out);
            }
        }
        Value::Object(obj) => collect_instruction_object(obj, out),
        other => {
            if let Some(text) = coerce_string(other) {
                push_clean(out, &text);
            }
        }
    }
}

fn collect_instruction_object(obj: &Map<String, Value>, out: &mut Vec<String>) {
    let types = type_names(obj);
    let is_type = |name: &str| types.iter().any(|t| t == name);

    if let Some(elements) = obj.get("itemListElement") {
        if types.is_empty() || is_type("HowToSection") || is_type("ItemList") {
            collect_instructions(elements, out);
            return;
        }
    }

    if let Some(text) = obj.get("text").and_then(coerce_string) {
        push_clean(out, &text);
        return;
    }

    let name = obj.get("name").and_then(coerce_string);
    if is_type("HowToStep") {
        if let (Some(name), Some(elements)) = (&name, obj.get("itemListElement")) {
            let sub = sub_item_text(elements);
            if sub.is_empty() {
                push_clean(out, name);
            } else {
                push_clean(out, &format!("{name}: {sub}"));
            }
            return;
        }
    }

    if let Some(name) = name {
        push_clean(out, &name);
    }
}

/// Joined `text`/`name` of a step's sub-items (e.g. `HowToDirection`s).
fn sub_item_text(elements: &Value) -> String {
    let items: Vec<&Value> = match elements {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(obj) => obj
                .get("text")
                .or_else(|| obj.get("name"))
                .and_then(coerce_string),
            other => coerce_string(other),
        })
        .map(|s| clean_text(&s))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_clean(out: &mut Vec<String>, raw: &str) {
    let cleaned = clean_text(raw);
    if !cleaned.is_empty() {
        out.push(cleaned);
    }
}
