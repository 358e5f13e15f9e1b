use super::model::FeedbackModel;
use crate::store::FeatureState;

/// User feedback feature state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedbackState {
    pub submitting: bool,
    pub submitted: bool,
    pub error_message: String,
    pub model: FeedbackModel,
}

impl FeatureState for FeedbackState {}
