//! Counter hub feature: connection state for the real-time counter channel.

mod actions;
mod effects;
mod reducer;
mod state;

pub use actions::HubAction;
pub use effects::HubEffects;
pub use reducer::{apply, HubReducer};
pub use state::HubState;
