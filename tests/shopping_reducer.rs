use fridgechef::domain::ShoppingItem;
use fridgechef::ui::mvi::Reducer;
use fridgechef::ui::shopping::{ShoppingIntent, ShoppingListState, ShoppingReducer};
use std::time::SystemTime;

fn item(id: &str, name: &str) -> ShoppingItem {
    ShoppingItem {
        id: id.to_string(),
        name: name.to_string(),
        quantity: "1".to_string(),
        added_at: SystemTime::now(),
    }
}

fn add(state: ShoppingListState, id: &str, name: &str) -> ShoppingListState {
    ShoppingReducer::reduce(
        state,
        ShoppingIntent::Add {
            item: item(id, name),
        },
    )
}

#[test]
fn add_then_remove_restores_list() {
    let state = add(ShoppingListState::default(), "1", "eggs");
    let before = state.items.clone();
    let state = add(state, "2", "milk");
    assert_eq!(state.len(), 2);
    let state = ShoppingReducer::reduce(
        state,
        ShoppingIntent::Remove {
            id: "2".to_string(),
        },
    );
    assert_eq!(state.items, before);
}

#[test]
fn items_keep_insertion_order() {
    let state = add(add(add(ShoppingListState::default(), "1", "a"), "2", "b"), "3", "c");
    let names: Vec<&str> = state.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn removing_unknown_id_is_noop() {
    let state = add(ShoppingListState::default(), "1", "eggs");
    let state = ShoppingReducer::reduce(
        state,
        ShoppingIntent::Remove {
            id: "missing".to_string(),
        },
    );
    assert_eq!(state.len(), 1);
}

#[test]
fn focus_is_clamped_after_removal() {
    let mut state = add(add(ShoppingListState::default(), "1", "a"), "2", "b");
    state = ShoppingReducer::reduce(state, ShoppingIntent::MoveDown);
    state = ShoppingReducer::reduce(state, ShoppingIntent::MoveDown);
    assert_eq!(state.focused, 1);
    state = ShoppingReducer::reduce(
        state,
        ShoppingIntent::Remove {
            id: "2".to_string(),
        },
    );
    assert_eq!(state.focused, 0);
    assert_eq!(state.focused_item().map(|i| i.name.as_str()), Some("a"));
}

#[test]
fn clear_empties_list() {
    let state = add(add(ShoppingListState::default(), "1", "a"), "2", "b");
    let state = ShoppingReducer::reduce(state, ShoppingIntent::Clear);
    assert!(state.is_empty());
    assert_eq!(state.summary(), "0 Items Ready to buy");
}
