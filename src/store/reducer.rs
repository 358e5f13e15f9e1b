//! Reducer trait for the unidirectional flow.

use super::state::FeatureState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State, with no I/O,
/// total over every action the dispatcher can pass it.
pub trait Reducer {
    /// The feature state this reducer operates on.
    type State: FeatureState;

    /// The action type this reducer handles.
    type Action;

    /// Process an action and return the new state.
    ///
    /// Actions the feature does not care about must return the state
    /// unchanged.
    fn reduce(state: Self::State, action: &Self::Action) -> Self::State;
}
