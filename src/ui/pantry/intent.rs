use crate::domain::{DietaryRestriction, Recipe};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PantryIntent {
    /// An image was handed to the gateway for detection.
    DetectionStarted,
    /// Detection answered. Replaces the ingredient list even when empty.
    IngredientsDetected { ingredients: Vec<String> },
    ClearIngredients,
    SetDietary { restriction: DietaryRestriction },
    /// A generation request with this id was sent.
    RecipesRequested { request_id: u64 },
    /// Generation answered. Ignored for the recipe list unless `request_id`
    /// is the latest one.
    RecipesGenerated { request_id: u64, recipes: Vec<Recipe> },
    MoveUp,
    MoveDown,
}

impl Intent for PantryIntent {}
