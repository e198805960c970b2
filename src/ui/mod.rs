//! Terminal front-end: the kitchen controller, its feature states and views.

pub mod app;
pub mod cooking;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod pantry;
pub mod render;
pub mod runtime;
pub mod shopping;
pub mod sidebar;
pub mod terminal_guard;
pub mod theme;
pub mod views;
