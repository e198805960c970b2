//! Fixed instructions, the recipe response schema, and response text parsing.

use serde_json::{json, Value};
use std::collections::HashSet;

use crate::domain::{DietaryRestriction, Difficulty, Recipe};

pub const DETECT_INSTRUCTION: &str = "Identify all the food items and ingredients visible in this fridge. Return only a comma-separated list of items.";

/// Number of recipes requested per generation.
pub const RECIPES_PER_REQUEST: usize = 3;

pub fn recipe_prompt(ingredients: &[String], restriction: DietaryRestriction) -> String {
    format!(
        "Based on these ingredients found in a fridge: {}.\n\
         Suggest {} unique recipes. Consider dietary restriction: {}.\n\
         Return the response in JSON format.",
        ingredients.join(", "),
        RECIPES_PER_REQUEST,
        restriction.as_str()
    )
}

pub fn narration_prompt(text: &str) -> String {
    format!("Say clearly: {}", text)
}

/// Response schema constraining recipe generation to an array of recipes.
pub fn recipe_schema() -> Value {
    let difficulties: Vec<&str> = Difficulty::ALL.iter().map(Difficulty::as_str).collect();
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "difficulty": { "type": "STRING", "enum": difficulties },
                "prepTime": { "type": "INTEGER" },
                "calories": { "type": "INTEGER" },
                "ingredients": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": { "type": "STRING" },
                            "quantity": { "type": "STRING" }
                        },
                        "required": ["name", "quantity"]
                    }
                },
                "steps": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                },
                "dietaryTags": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                }
            },
            "required": [
                "id", "title", "description", "difficulty",
                "prepTime", "calories", "ingredients", "steps"
            ]
        }
    })
}

/// Split a comma-separated answer into trimmed, non-empty item names.
pub fn parse_ingredient_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the recipe model's JSON text.
///
/// Empty text counts as an empty array. Recipes without steps are dropped,
/// and empty or duplicate ids are replaced so ids stay unique in the batch.
pub fn parse_recipes(text: &str) -> Result<Vec<Recipe>, serde_json::Error> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let parsed: Vec<Recipe> = serde_json::from_str(text)?;

    let mut seen = HashSet::new();
    let recipes = parsed
        .into_iter()
        .filter(|recipe| {
            let keep = !recipe.steps.is_empty();
            if !keep {
                tracing::warn!(title = %recipe.title, "Dropping recipe without steps");
            }
            keep
        })
        .map(|mut recipe| {
            if recipe.id.trim().is_empty() || !seen.insert(recipe.id.clone()) {
                recipe.id = uuid::Uuid::new_v4().to_string();
                seen.insert(recipe.id.clone());
            }
            recipe
        })
        .collect();
    Ok(recipes)
}
