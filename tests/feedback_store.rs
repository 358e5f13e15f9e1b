mod common;

use common::{valid_feedback, MockFeedbackApi, Mocks};
use fluxkit::features::feedback::{FeedbackAction, FeedbackReducer, FeedbackState};
use fluxkit::features::AppAction;
use fluxkit::store::Reducer;

#[test]
fn submit_sets_submitting_and_records_model() {
    let model = valid_feedback();
    let state = FeedbackReducer::reduce(
        FeedbackState::default(),
        &FeedbackAction::Submit(model.clone()),
    );
    assert!(state.submitting);
    assert!(!state.submitted);
    assert_eq!(state.model, model);
}

#[test]
fn submit_failed_keeps_submitted_false() {
    let submitting = FeedbackReducer::reduce(
        FeedbackState::default(),
        &FeedbackAction::Submit(valid_feedback()),
    );
    let state = FeedbackReducer::reduce(
        submitting,
        &FeedbackAction::SubmitFailed {
            message: "Service Unavailable".to_string(),
        },
    );
    assert!(!state.submitting);
    assert!(!state.submitted);
    assert_eq!(state.error_message, "Service Unavailable");
}

#[tokio::test(start_paused = true)]
async fn successful_submission_marks_submitted() {
    let mocks = Mocks::new();
    let mut store = mocks.store();
    let handle = store.handle();

    handle.dispatch(FeedbackAction::Submit(valid_feedback()));
    store.run_until_settled().await;

    let feedback = store.state().feedback;
    assert!(feedback.submitted);
    assert!(!feedback.submitting);
    assert_eq!(feedback.error_message, "");
    assert_eq!(mocks.feedback.calls(), 1);
}

// A failed POST ends as an error message on the feature state, never as an
// escaped fault.
#[tokio::test(start_paused = true)]
async fn failed_submission_surfaces_the_reason() {
    let mut mocks = Mocks::new();
    mocks.feedback = MockFeedbackApi::failing();
    let mut store = mocks.store();
    let handle = store.handle();

    handle.dispatch(FeedbackAction::Submit(valid_feedback()));
    store.run_until_settled().await;

    let feedback = store.state().feedback;
    assert!(!feedback.submitting);
    assert!(!feedback.submitted);
    assert_eq!(feedback.error_message, "HTTP 500: Internal Server Error");
    assert_eq!(mocks.feedback.calls(), 1);
    assert_eq!(
        mocks
            .recorder
            .count_matching(|a| matches!(a, AppAction::Feedback(FeedbackAction::SubmitFailed { .. }))),
        1
    );
}
