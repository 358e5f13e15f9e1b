use super::actions::FeedbackAction;
use super::state::FeedbackState;
use crate::features::{AppAction, AppState};
use crate::store::Reducer;

pub struct FeedbackReducer;

impl Reducer for FeedbackReducer {
    type State = FeedbackState;
    type Action = FeedbackAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            FeedbackAction::Submit(model) => FeedbackState {
                submitting: true,
                model: model.clone(),
                ..state
            },
            FeedbackAction::SubmitSucceeded => FeedbackState {
                submitting: false,
                submitted: true,
                ..state
            },
            FeedbackAction::SubmitFailed { message } => FeedbackState {
                submitting: false,
                error_message: message.clone(),
                ..state
            },
        }
    }
}

/// Registry entry: applies the feedback reducer to its slice.
pub fn apply(state: &mut AppState, action: &AppAction) {
    if let AppAction::Feedback(action) = action {
        state.feedback = FeedbackReducer::reduce(std::mem::take(&mut state.feedback), action);
    }
}
