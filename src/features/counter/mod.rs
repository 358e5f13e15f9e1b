//! Counter feature: a click counter mirrored to persistent storage.

mod actions;
mod effects;
mod reducer;
mod state;

pub use actions::CounterAction;
pub use effects::{CounterEffects, PERSISTENCE_KEY};
pub use reducer::{apply, CounterReducer};
pub use state::CounterState;
