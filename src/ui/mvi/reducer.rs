//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents: `(State, Intent) -> State`.
///
/// The only place where feature state changes. No side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
