use crate::domain::ShoppingItem;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ShoppingIntent {
    /// Append. The id and timestamp are generated by the caller.
    Add { item: ShoppingItem },
    Remove { id: String },
    Clear,
    MoveUp,
    MoveDown,
}

impl Intent for ShoppingIntent {}
