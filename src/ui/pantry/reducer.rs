use crate::ui::mvi::Reducer;
use crate::ui::pantry::intent::PantryIntent;
use crate::ui::pantry::state::PantryState;

pub struct PantryReducer;

impl Reducer for PantryReducer {
    type State = PantryState;
    type Intent = PantryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PantryIntent::DetectionStarted => PantryState {
                in_flight: state.in_flight + 1,
                ..state
            },
            PantryIntent::IngredientsDetected { ingredients } => PantryState {
                ingredients,
                ingredients_revision: state.ingredients_revision + 1,
                in_flight: state.in_flight.saturating_sub(1),
                ..state
            },
            PantryIntent::ClearIngredients => {
                if state.ingredients.is_empty() {
                    return state;
                }
                PantryState {
                    ingredients: Vec::new(),
                    ingredients_revision: state.ingredients_revision + 1,
                    ..state
                }
            }
            PantryIntent::SetDietary { restriction } => PantryState {
                dietary: restriction,
                ..state
            },
            PantryIntent::RecipesRequested { request_id } => PantryState {
                in_flight: state.in_flight + 1,
                latest_request: request_id.max(state.latest_request),
                ..state
            },
            PantryIntent::RecipesGenerated {
                request_id,
                recipes,
            } => {
                let in_flight = state.in_flight.saturating_sub(1);
                if request_id < state.latest_request {
                    // Superseded by a newer request
                    return PantryState { in_flight, ..state };
                }
                PantryState {
                    recipes,
                    recipe_cursor: 0,
                    in_flight,
                    ..state
                }
            }
            PantryIntent::MoveUp => PantryState {
                recipe_cursor: state.recipe_cursor.saturating_sub(1),
                ..state
            },
            PantryIntent::MoveDown => {
                let last = state.recipes.len().saturating_sub(1);
                PantryState {
                    recipe_cursor: (state.recipe_cursor + 1).min(last),
                    ..state
                }
            }
        }
    }
}
