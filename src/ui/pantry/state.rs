use crate::domain::{DietaryRestriction, Recipe};
use crate::ui::mvi::UiState;

/// Detected ingredients, the dietary filter and the recipes they produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PantryState {
    pub ingredients: Vec<String>,
    /// Bumped on every wholesale replacement or clear of `ingredients`.
    pub ingredients_revision: u64,
    pub recipes: Vec<Recipe>,
    /// Highlighted card in the recipe grid.
    pub recipe_cursor: usize,
    pub dietary: DietaryRestriction,
    /// Gateway calls (detection or generation) not yet answered.
    pub in_flight: usize,
    /// Id of the most recent recipe generation request.
    pub latest_request: u64,
}

impl UiState for PantryState {}

impl PantryState {
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn has_ingredients(&self) -> bool {
        !self.ingredients.is_empty()
    }

    pub fn highlighted_recipe(&self) -> Option<&Recipe> {
        self.recipes.get(self.recipe_cursor)
    }

    /// Pair compared by change detection to decide whether recipes are stale.
    pub fn generation_key(&self) -> (u64, DietaryRestriction) {
        (self.ingredients_revision, self.dietary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle_and_empty() {
        let state = PantryState::default();
        assert!(!state.is_busy());
        assert!(!state.has_ingredients());
        assert!(state.highlighted_recipe().is_none());
        assert_eq!(state.generation_key(), (0, DietaryRestriction::None));
    }

    #[test]
    fn test_busy_while_any_call_in_flight() {
        let state = PantryState {
            in_flight: 2,
            ..Default::default()
        };
        assert!(state.is_busy());
    }
}
