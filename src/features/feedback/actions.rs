use super::model::FeedbackModel;

/// User feedback actions.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackAction {
    /// Submit an already-validated form model.
    Submit(FeedbackModel),
    SubmitSucceeded,
    SubmitFailed { message: String },
}
