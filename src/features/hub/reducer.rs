use super::actions::HubAction;
use super::state::HubState;
use crate::features::{AppAction, AppState};
use crate::store::Reducer;

pub struct HubReducer;

impl Reducer for HubReducer {
    type State = HubState;
    type Action = HubAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            HubAction::SetConnected(connected) => HubState {
                connected: *connected,
            },
            _ => state,
        }
    }
}

/// Registry entry: applies the hub reducer to its slice.
pub fn apply(state: &mut AppState, action: &AppAction) {
    if let AppAction::Hub(action) = action {
        state.hub = HubReducer::reduce(state.hub, action);
    }
}
