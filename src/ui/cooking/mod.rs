mod intent;
mod reducer;
mod state;

pub use intent::CookingIntent;
pub use reducer::CookingReducer;
pub use state::{CookingState, CookingView};
