use super::actions::CounterAction;
use super::state::CounterState;
use crate::features::{AppAction, AppState};
use crate::store::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            CounterAction::Increment => CounterState {
                count: state.count.saturating_add(1),
            },
            CounterAction::SetState(next) => *next,
            // Persistence acknowledgements carry no state change.
            _ => state,
        }
    }
}

/// Registry entry: applies the counter reducer to its slice.
pub fn apply(state: &mut AppState, action: &AppAction) {
    if let AppAction::Counter(action) = action {
        state.counter = CounterReducer::reduce(state.counter, action);
    }
}
