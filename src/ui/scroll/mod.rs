mod intent;
mod reducer;
mod state;

pub use intent::ScrollIntent;
pub use reducer::ScrollReducer;
pub use state::ScrollState;
