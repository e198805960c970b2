//! Model-View-Intent primitives for the kitchen screens.
//!
//! ```text
//! key / gateway event ──→ Intent ──→ Reducer ──→ State ──→ View
//!         ↑                                                  │
//!         └──────────────────────────────────────────────────┘
//! ```
//!
//! Reducers are pure. Anything that talks to the outside world (gateway
//! commands, file reads, audio) happens in `App` around the dispatch call.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
