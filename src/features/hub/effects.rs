use std::sync::Arc;

use super::actions::HubAction;
use crate::features::AppAction;
use crate::hub::{ChannelEvent, CounterChannel};
use crate::store::{EffectContext, EffectFuture, EffectHandler};

/// Channel side effects for the counter hub feature.
///
/// Channel lifecycle events are translated one-for-one into actions by a
/// detached pump task started on `HubAction::Start`.
pub struct HubEffects {
    channel: Arc<dyn CounterChannel>,
}

impl HubEffects {
    pub fn new(channel: Arc<dyn CounterChannel>) -> Self {
        Self { channel }
    }
}

impl EffectHandler for HubEffects {
    fn handle(&self, action: &AppAction, ctx: EffectContext) -> Option<EffectFuture> {
        let AppAction::Hub(action) = action else {
            return None;
        };
        match action {
            HubAction::Start => {
                let channel = self.channel.clone();
                Some(Box::pin(async move {
                    match channel.start().await {
                        Ok(mut events) => {
                            ctx.actions.dispatch(HubAction::SetConnected(true));
                            let actions = ctx.actions.clone();
                            tokio::spawn(async move {
                                while let Some(event) = events.recv().await {
                                    match event {
                                        ChannelEvent::Reconnecting => {
                                            actions.dispatch(HubAction::SetConnected(false));
                                        }
                                        ChannelEvent::Reconnected => {
                                            actions.dispatch(HubAction::SetConnected(true));
                                        }
                                        ChannelEvent::CountReceived(count) => {
                                            actions.dispatch(HubAction::ReceiveCount(count));
                                        }
                                        ChannelEvent::Closed => {
                                            actions.dispatch(HubAction::SetConnected(false));
                                            break;
                                        }
                                    }
                                }
                            });
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "counter channel start failed");
                            ctx.actions.dispatch(HubAction::SetConnected(false));
                        }
                    }
                }))
            }
            HubAction::SendCount(count) => {
                let channel = self.channel.clone();
                let count = *count;
                Some(Box::pin(async move {
                    // Fail fast instead of queueing: a send while disconnected
                    // never reaches the network.
                    if !channel.is_connected() {
                        ctx.actions.dispatch(HubAction::SendCountFailed {
                            message: "Not connected to hub.".to_string(),
                        });
                        return;
                    }
                    if let Err(err) = channel.send_count(count).await {
                        ctx.actions.dispatch(HubAction::SendCountFailed {
                            message: err.to_string(),
                        });
                    }
                }))
            }
            HubAction::ReceiveCount(count) => {
                let count = *count;
                Some(Box::pin(async move {
                    tracing::info!(count, "count received from hub");
                }))
            }
            _ => None,
        }
    }
}
