//! Unidirectional state-management primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducers ──→ State ──→ subscribers
//!    ↑                      │
//!    └──── Effects ←────────┘
//! ```
//!
//! - **State**: one immutable value object per feature, replaced wholesale
//! - **Action**: an event or intent, the only input to reducers and effects
//! - **Reducer**: pure function that transforms a feature's state
//! - **Effect**: async side effect that may dispatch follow-up actions
//!
//! Reducers and effect handlers live in explicit registration tables built
//! at startup; nothing is discovered by scanning.

mod dispatcher;
mod effect;
mod reducer;
mod state;

pub use dispatcher::{Registry, Store, StoreHandle};
pub use effect::{ActionSender, EffectContext, EffectFuture, EffectHandler, StateHandle};
pub use reducer::Reducer;
pub use state::FeatureState;
