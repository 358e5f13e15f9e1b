use serde::{Deserialize, Serialize};

/// Wire messages exchanged on the counter hub socket, as JSON text frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HubMessage {
    /// Client to server: share this client's count.
    SendCount { count: i32 },
    /// Server to every other client: a peer's count.
    ReceiveCount { count: i32 },
}
