use crate::store::FeatureState;

/// Connection state of the counter hub channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HubState {
    pub connected: bool,
}

impl FeatureState for HubState {}
