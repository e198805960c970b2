//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (a key press on a tab, a filter change)
/// or completions reported back by the gateway worker.
pub trait Intent: Send + 'static {}
