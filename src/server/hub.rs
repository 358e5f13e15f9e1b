use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;
use uuid::Uuid;

use super::router::ServerState;
use crate::hub::HubMessage;

/// Capacity of the fan-out channel; slow clients that fall further behind
/// than this drop messages and log a warning.
const BROADCAST_CAPACITY: usize = 64;

/// Fan-out state for the counter hub: every received count is rebroadcast
/// to all connections except its sender.
#[derive(Clone)]
pub struct CounterHub {
    broadcast: broadcast::Sender<(Uuid, i32)>,
}

impl CounterHub {
    pub fn new() -> Self {
        let (broadcast, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { broadcast }
    }
}

impl Default for CounterHub {
    fn default() -> Self {
        Self::new()
    }
}

/// `GET /counterhub`: upgrade to the counter synchronization socket.
pub async fn upgrade(State(state): State<ServerState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state.hub))
}

async fn handle_socket(socket: WebSocket, hub: CounterHub) {
    let id = Uuid::new_v4();
    tracing::info!(%id, "counter hub client connected");
    let mut broadcasts = hub.broadcast.subscribe();
    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            received = broadcasts.recv() => match received {
                Ok((sender, _)) if sender == id => {}
                Ok((_, count)) => {
                    let frame = match serde_json::to_string(&HubMessage::ReceiveCount { count }) {
                        Ok(frame) => frame,
                        Err(err) => {
                            tracing::warn!(%id, error = %err, "dropping unencodable broadcast");
                            continue;
                        }
                    };
                    if sink.send(Message::Text(frame.into())).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(%id, skipped, "hub client lagged behind broadcasts");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            incoming = stream.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    match serde_json::from_str::<HubMessage>(text.as_str()) {
                        Ok(HubMessage::SendCount { count }) => {
                            tracing::debug!(%id, count, "rebroadcasting count");
                            let _ = hub.broadcast.send((id, count));
                        }
                        Ok(HubMessage::ReceiveCount { .. }) => {
                            tracing::debug!(%id, "ignoring receiveCount from a client");
                        }
                        Err(err) => tracing::warn!(%id, error = %err, "malformed hub frame"),
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    tracing::warn!(%id, error = %err, "hub socket error");
                    break;
                }
            },
        }
    }
    tracing::info!(%id, "counter hub client disconnected");
}
