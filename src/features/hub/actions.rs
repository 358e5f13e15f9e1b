/// Counter hub actions.
#[derive(Debug, Clone, PartialEq)]
pub enum HubAction {
    /// Connect the channel and begin translating its events into actions.
    Start,
    SetConnected(bool),
    SendCount(i32),
    /// A count broadcast by another client. Deliberately has no reducer;
    /// receipt is observable through the action stream.
    ReceiveCount(i32),
    SendCountFailed { message: String },
}
