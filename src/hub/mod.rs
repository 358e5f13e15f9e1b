//! Bidirectional counter channel: wire protocol and the client transport.

mod client;
mod protocol;

pub use client::WsCounterChannel;
pub use protocol::HubMessage;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors from the counter channel collaborator.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Not connected to hub.")]
    NotConnected,

    #[error("channel already started")]
    AlreadyStarted,

    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },
}

/// Connection lifecycle and traffic events surfaced by a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelEvent {
    /// The connection dropped; the transport is retrying.
    Reconnecting,
    /// A retry succeeded.
    Reconnected,
    /// Another client's count arrived.
    CountReceived(i32),
    /// The transport gave up; no further events follow.
    Closed,
}

/// Client side of the counter synchronization channel.
///
/// Reconnection is the transport's job; consumers only observe the event
/// stream. Sends fail fast while not connected; nothing is queued.
#[async_trait]
pub trait CounterChannel: Send + Sync {
    /// Connect and return the event stream. `Ok` means connected.
    async fn start(&self) -> Result<mpsc::UnboundedReceiver<ChannelEvent>, HubError>;

    /// Whether the channel is currently connected.
    fn is_connected(&self) -> bool;

    /// Send this client's count to the server.
    async fn send_count(&self, count: i32) -> Result<(), HubError>;
}
