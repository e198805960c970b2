use crate::ui::cooking::intent::CookingIntent;
use crate::ui::cooking::state::{CookingState, CookingView};
use crate::ui::mvi::Reducer;

pub struct CookingReducer;

impl Reducer for CookingReducer {
    type State = CookingState;
    type Intent = CookingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CookingIntent::Open { recipe } => {
                if state
                    .selected_recipe()
                    .is_some_and(|current| current.id == recipe.id)
                {
                    return state;
                }
                CookingState::Open {
                    recipe,
                    view: CookingView::Checklist,
                    step: 0,
                    checklist_cursor: 0,
                    reading: false,
                }
            }
            CookingIntent::Close => CookingState::Closed,
            CookingIntent::Finish => {
                if state.is_last_step() {
                    CookingState::Closed
                } else {
                    state
                }
            }
            CookingIntent::ShowChecklist => with_view(state, CookingView::Checklist),
            CookingIntent::ShowSteps => with_view(state, CookingView::Steps),
            CookingIntent::NextStep => match state {
                CookingState::Open {
                    recipe,
                    view,
                    step,
                    checklist_cursor,
                    reading,
                } => {
                    let last = recipe.steps.len().saturating_sub(1);
                    CookingState::Open {
                        recipe,
                        view,
                        step: (step + 1).min(last),
                        checklist_cursor,
                        reading,
                    }
                }
                other => other,
            },
            CookingIntent::PrevStep => match state {
                CookingState::Open {
                    recipe,
                    view,
                    step,
                    checklist_cursor,
                    reading,
                } => CookingState::Open {
                    recipe,
                    view,
                    step: step.saturating_sub(1),
                    checklist_cursor,
                    reading,
                },
                other => other,
            },
            CookingIntent::MoveUp => match state {
                CookingState::Open {
                    recipe,
                    view,
                    step,
                    checklist_cursor,
                    reading,
                } => CookingState::Open {
                    recipe,
                    view,
                    step,
                    checklist_cursor: checklist_cursor.saturating_sub(1),
                    reading,
                },
                other => other,
            },
            CookingIntent::MoveDown => match state {
                CookingState::Open {
                    recipe,
                    view,
                    step,
                    checklist_cursor,
                    reading,
                } => {
                    let last = recipe.ingredients.len().saturating_sub(1);
                    CookingState::Open {
                        recipe,
                        view,
                        step,
                        checklist_cursor: (checklist_cursor + 1).min(last),
                        reading,
                    }
                }
                other => other,
            },
            CookingIntent::NarrationStarted => with_reading(state, true),
            CookingIntent::NarrationFinished => with_reading(state, false),
        }
    }
}

fn with_view(state: CookingState, view: CookingView) -> CookingState {
    match state {
        CookingState::Open {
            recipe,
            step,
            checklist_cursor,
            reading,
            ..
        } => CookingState::Open {
            recipe,
            view,
            step,
            checklist_cursor,
            reading,
        },
        other => other,
    }
}

fn with_reading(state: CookingState, reading: bool) -> CookingState {
    match state {
        CookingState::Open {
            recipe,
            view,
            step,
            checklist_cursor,
            ..
        } => CookingState::Open {
            recipe,
            view,
            step,
            checklist_cursor,
            reading,
        },
        other => other,
    }
}
