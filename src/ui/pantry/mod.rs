mod intent;
mod reducer;
mod state;

pub use intent::PantryIntent;
pub use reducer::PantryReducer;
pub use state::PantryState;
