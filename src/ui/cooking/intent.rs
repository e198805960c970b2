use crate::domain::Recipe;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CookingIntent {
    /// Select a recipe. Re-selecting the open recipe is a no-op.
    Open { recipe: Recipe },
    Close,
    /// Leave cooking mode from the last step. Ignored elsewhere.
    Finish,
    ShowChecklist,
    ShowSteps,
    NextStep,
    PrevStep,
    MoveUp,
    MoveDown,
    NarrationStarted,
    NarrationFinished,
}

impl Intent for CookingIntent {}
