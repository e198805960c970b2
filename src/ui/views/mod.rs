//! Main content area: one view per tab plus cooking mode and the busy overlay.

pub mod cooking;
pub mod fridge;
pub mod overlay;
pub mod recipes;
pub mod shopping;
