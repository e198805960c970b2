use crate::ui::mvi::Reducer;
use crate::ui::shopping::intent::ShoppingIntent;
use crate::ui::shopping::state::ShoppingListState;

pub struct ShoppingReducer;

impl Reducer for ShoppingReducer {
    type State = ShoppingListState;
    type Intent = ShoppingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShoppingIntent::Add { item } => {
                let mut items = state.items;
                items.push(item);
                ShoppingListState {
                    items,
                    focused: state.focused,
                }
            }
            ShoppingIntent::Remove { id } => {
                let mut items = state.items;
                items.retain(|item| item.id != id);
                let focused = state.focused.min(items.len().saturating_sub(1));
                ShoppingListState { items, focused }
            }
            ShoppingIntent::Clear => ShoppingListState::default(),
            ShoppingIntent::MoveUp => ShoppingListState {
                focused: state.focused.saturating_sub(1),
                ..state
            },
            ShoppingIntent::MoveDown => {
                let last = state.items.len().saturating_sub(1);
                ShoppingListState {
                    focused: (state.focused + 1).min(last),
                    ..state
                }
            }
        }
    }
}
