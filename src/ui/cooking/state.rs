use crate::domain::Recipe;
use crate::ui::mvi::UiState;

/// Sub-view of cooking mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CookingView {
    /// Ingredient checklist with "add to shopping list".
    #[default]
    Checklist,
    /// Sequential step walker.
    Steps,
}

/// Cooking mode. `Open` holds the selected recipe; there is at most one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CookingState {
    #[default]
    Closed,
    Open {
        recipe: Recipe,
        view: CookingView,
        /// Always within `0..recipe.steps.len()`.
        step: usize,
        checklist_cursor: usize,
        /// A narration request is outstanding.
        reading: bool,
    },
}

impl UiState for CookingState {}

impl CookingState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        match self {
            Self::Open { recipe, .. } => Some(recipe),
            Self::Closed => None,
        }
    }

    pub fn current_step_text(&self) -> Option<&str> {
        match self {
            Self::Open { recipe, step, .. } => recipe.steps.get(*step).map(String::as_str),
            Self::Closed => None,
        }
    }

    /// Finish is only offered on the last step.
    pub fn is_last_step(&self) -> bool {
        match self {
            Self::Open { recipe, step, .. } => *step + 1 >= recipe.steps.len(),
            Self::Closed => false,
        }
    }

    pub fn is_reading(&self) -> bool {
        matches!(self, Self::Open { reading: true, .. })
    }
}
