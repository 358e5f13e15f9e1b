use serde::{Deserialize, Serialize};

use crate::store::FeatureState;

/// Counter feature state. Serializable because it round-trips through the
/// persistence collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i32,
}

impl FeatureState for CounterState {}
