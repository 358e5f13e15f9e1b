use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use super::protocol::HubMessage;
use super::{ChannelEvent, CounterChannel, HubError};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_secs(2);
const DEFAULT_RECONNECT_ATTEMPTS: u32 = 5;

/// WebSocket implementation of the counter channel.
///
/// A single supervising task owns the socket: it pumps frames both ways,
/// and on disconnect retries with a fixed delay up to the attempt budget,
/// emitting `Reconnecting`/`Reconnected`/`Closed` along the way.
pub struct WsCounterChannel {
    url: String,
    reconnect_delay: Duration,
    reconnect_attempts: u32,
    connected: Arc<AtomicBool>,
    outgoing: Mutex<Option<mpsc::UnboundedSender<HubMessage>>>,
}

impl WsCounterChannel {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            reconnect_delay: DEFAULT_RECONNECT_DELAY,
            reconnect_attempts: DEFAULT_RECONNECT_ATTEMPTS,
            connected: Arc::new(AtomicBool::new(false)),
            outgoing: Mutex::new(None),
        }
    }

    /// Override the reconnect policy (tests use a short delay).
    pub fn with_reconnect(mut self, delay: Duration, attempts: u32) -> Self {
        self.reconnect_delay = delay;
        self.reconnect_attempts = attempts;
        self
    }
}

#[async_trait]
impl CounterChannel for WsCounterChannel {
    async fn start(&self) -> Result<mpsc::UnboundedReceiver<ChannelEvent>, HubError> {
        if self
            .outgoing
            .lock()
            .expect("outgoing lock poisoned")
            .is_some()
        {
            return Err(HubError::AlreadyStarted);
        }

        let stream = connect(&self.url).await?;
        self.connected.store(true, Ordering::SeqCst);

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        *self.outgoing.lock().expect("outgoing lock poisoned") = Some(out_tx);

        let supervisor = Supervisor {
            url: self.url.clone(),
            delay: self.reconnect_delay,
            attempts: self.reconnect_attempts,
            connected: self.connected.clone(),
        };
        tokio::spawn(supervisor.run(stream, out_rx, events_tx));
        Ok(events_rx)
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn send_count(&self, count: i32) -> Result<(), HubError> {
        if !self.is_connected() {
            return Err(HubError::NotConnected);
        }
        let guard = self.outgoing.lock().expect("outgoing lock poisoned");
        let Some(tx) = guard.as_ref() else {
            return Err(HubError::NotConnected);
        };
        tx.send(HubMessage::SendCount { count })
            .map_err(|_| HubError::NotConnected)
    }
}

async fn connect(url: &str) -> Result<WsStream, HubError> {
    let (stream, _response) = connect_async(url).await.map_err(|source| HubError::Connect {
        url: url.to_string(),
        source,
    })?;
    Ok(stream)
}

/// Why a pump loop ended.
enum PumpEnd {
    /// The socket dropped or errored; the supervisor should reconnect.
    SocketDropped,
    /// The channel handle was dropped; shut down for good.
    OutboundClosed,
}

struct Supervisor {
    url: String,
    delay: Duration,
    attempts: u32,
    connected: Arc<AtomicBool>,
}

impl Supervisor {
    async fn run(
        self,
        mut stream: WsStream,
        mut out_rx: mpsc::UnboundedReceiver<HubMessage>,
        events: mpsc::UnboundedSender<ChannelEvent>,
    ) {
        loop {
            let end = pump(&mut stream, &mut out_rx, &events).await;
            self.connected.store(false, Ordering::SeqCst);
            if let PumpEnd::OutboundClosed = end {
                let _ = stream.close(None).await;
                return;
            }
            if events.send(ChannelEvent::Reconnecting).is_err() {
                return;
            }
            match self.reconnect().await {
                Some(next) => {
                    stream = next;
                    self.connected.store(true, Ordering::SeqCst);
                    if events.send(ChannelEvent::Reconnected).is_err() {
                        return;
                    }
                }
                None => {
                    let _ = events.send(ChannelEvent::Closed);
                    return;
                }
            }
        }
    }

    async fn reconnect(&self) -> Option<WsStream> {
        for attempt in 1..=self.attempts {
            tokio::time::sleep(self.delay).await;
            match connect(&self.url).await {
                Ok(stream) => return Some(stream),
                Err(err) => {
                    tracing::warn!(attempt, error = %err, "hub reconnect attempt failed");
                }
            }
        }
        None
    }
}

async fn pump(
    stream: &mut WsStream,
    out_rx: &mut mpsc::UnboundedReceiver<HubMessage>,
    events: &mpsc::UnboundedSender<ChannelEvent>,
) -> PumpEnd {
    loop {
        tokio::select! {
            outbound = out_rx.recv() => match outbound {
                Some(message) => {
                    let frame = match serde_json::to_string(&message) {
                        Ok(frame) => frame,
                        Err(err) => {
                            tracing::warn!(error = %err, "dropping unencodable hub message");
                            continue;
                        }
                    };
                    if stream.send(Message::Text(frame)).await.is_err() {
                        return PumpEnd::SocketDropped;
                    }
                }
                None => return PumpEnd::OutboundClosed,
            },
            incoming = stream.next() => match incoming {
                Some(Ok(Message::Text(text))) => match serde_json::from_str::<HubMessage>(&text) {
                    Ok(HubMessage::ReceiveCount { count }) => {
                        let _ = events.send(ChannelEvent::CountReceived(count));
                    }
                    Ok(HubMessage::SendCount { .. }) => {
                        tracing::debug!("ignoring client-bound sendCount frame");
                    }
                    Err(err) => tracing::warn!(error = %err, "malformed hub frame"),
                },
                Some(Ok(Message::Close(_))) | None => return PumpEnd::SocketDropped,
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "hub socket error");
                    return PumpEnd::SocketDropped;
                }
            },
        }
    }
}
