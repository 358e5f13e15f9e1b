use std::sync::Arc;

use super::actions::CounterAction;
use super::state::CounterState;
use crate::features::AppAction;
use crate::storage::KeyValueStorage;
use crate::store::{EffectContext, EffectFuture, EffectHandler};

/// Storage key for the mirrored counter state.
pub const PERSISTENCE_KEY: &str = "fluxkit_CounterState";

/// Persistence side effects for the counter feature.
pub struct CounterEffects {
    storage: Arc<dyn KeyValueStorage>,
}

impl CounterEffects {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

impl EffectHandler for CounterEffects {
    fn handle(&self, action: &AppAction, ctx: EffectContext) -> Option<EffectFuture> {
        let AppAction::Counter(action) = action else {
            return None;
        };
        match action {
            CounterAction::PersistState(state) => {
                let storage = self.storage.clone();
                let state = *state;
                Some(Box::pin(async move {
                    let value = match serde_json::to_value(state) {
                        Ok(value) => value,
                        Err(err) => {
                            ctx.actions.dispatch(CounterAction::PersistStateFailed {
                                message: err.to_string(),
                            });
                            return;
                        }
                    };
                    match storage.set(PERSISTENCE_KEY, value).await {
                        Ok(()) => ctx.actions.dispatch(CounterAction::PersistStateSucceeded),
                        Err(err) => ctx.actions.dispatch(CounterAction::PersistStateFailed {
                            message: err.to_string(),
                        }),
                    }
                }))
            }
            CounterAction::LoadState => {
                let storage = self.storage.clone();
                Some(Box::pin(async move {
                    match storage.get(PERSISTENCE_KEY).await {
                        Ok(Some(value)) => match serde_json::from_value::<CounterState>(value) {
                            Ok(state) => {
                                ctx.actions.dispatch(CounterAction::SetState(state));
                                ctx.actions.dispatch(CounterAction::LoadStateSucceeded);
                            }
                            Err(err) => {
                                ctx.actions.dispatch(CounterAction::LoadStateFailed {
                                    message: err.to_string(),
                                });
                            }
                        },
                        // Nothing stored yet; first run is not an error.
                        Ok(None) => {}
                        Err(err) => ctx.actions.dispatch(CounterAction::LoadStateFailed {
                            message: err.to_string(),
                        }),
                    }
                }))
            }
            CounterAction::ClearState => {
                let storage = self.storage.clone();
                Some(Box::pin(async move {
                    match storage.remove(PERSISTENCE_KEY).await {
                        Ok(()) => {
                            ctx.actions
                                .dispatch(CounterAction::SetState(CounterState::default()));
                            ctx.actions.dispatch(CounterAction::ClearStateSucceeded);
                        }
                        Err(err) => ctx.actions.dispatch(CounterAction::ClearStateFailed {
                            message: err.to_string(),
                        }),
                    }
                }))
            }
            _ => None,
        }
    }
}
