use std::sync::Arc;
use std::time::Duration;

use super::actions::FeedbackAction;
use crate::api::FeedbackApi;
use crate::features::AppAction;
use crate::store::{EffectContext, EffectFuture, EffectHandler};

/// Brief pause so the submitting indicator is visible in the demo.
const SUBMIT_DELAY: Duration = Duration::from_millis(500);

/// Submission side effects for the feedback feature.
pub struct FeedbackEffects {
    api: Arc<dyn FeedbackApi>,
}

impl FeedbackEffects {
    pub fn new(api: Arc<dyn FeedbackApi>) -> Self {
        Self { api }
    }
}

impl EffectHandler for FeedbackEffects {
    fn handle(&self, action: &AppAction, ctx: EffectContext) -> Option<EffectFuture> {
        let AppAction::Feedback(FeedbackAction::Submit(model)) = action else {
            return None;
        };
        let api = self.api.clone();
        let model = model.clone();
        Some(Box::pin(async move {
            tokio::time::sleep(SUBMIT_DELAY).await;
            match api.submit(&model).await {
                Ok(()) => ctx.actions.dispatch(FeedbackAction::SubmitSucceeded),
                Err(err) => ctx.actions.dispatch(FeedbackAction::SubmitFailed {
                    message: err.to_string(),
                }),
            }
        }))
    }
}
