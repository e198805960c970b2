use crate::domain::ShoppingItem;
use crate::ui::mvi::UiState;

/// Session shopping list in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShoppingListState {
    pub items: Vec<ShoppingItem>,
    pub focused: usize,
}

impl UiState for ShoppingListState {}

impl ShoppingListState {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn focused_item(&self) -> Option<&ShoppingItem> {
        self.items.get(self.focused)
    }

    /// "1 Item Ready to buy", "3 Items Ready to buy".
    pub fn summary(&self) -> String {
        let noun = if self.items.len() == 1 { "Item" } else { "Items" };
        format!("{} {} Ready to buy", self.items.len(), noun)
    }
}
