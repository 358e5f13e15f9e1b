//! Effect handler contract and the context handed to running effects.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, RwLock};

use tokio::sync::mpsc;

use crate::features::counter::CounterState;
use crate::features::feedback::FeedbackState;
use crate::features::hub::HubState;
use crate::features::weather::WeatherState;
use crate::features::{AppAction, AppState};

/// Boxed future returned by an effect handler.
pub type EffectFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Asynchronous side-effect hook.
///
/// Every registered handler sees every dispatched action and decides inside
/// `handle` whether to react; returning `None` means the action is not its
/// concern. A returned future is spawned by the dispatcher and must resolve
/// every external outcome, success or failure, into a follow-up action
/// rather than letting it escape.
pub trait EffectHandler: Send + Sync + 'static {
    fn handle(&self, action: &AppAction, ctx: EffectContext) -> Option<EffectFuture>;
}

/// Dispatch access handed to effect handlers.
///
/// Actions sent here re-enter the store's inbox and are reduced on the next
/// drain; cycles are ordinary control flow.
#[derive(Clone)]
pub struct ActionSender {
    tx: mpsc::UnboundedSender<AppAction>,
}

impl ActionSender {
    pub(crate) fn new(tx: mpsc::UnboundedSender<AppAction>) -> Self {
        Self { tx }
    }

    pub fn dispatch(&self, action: impl Into<AppAction>) {
        if self.tx.send(action.into()).is_err() {
            tracing::trace!("store inbox closed, action dropped");
        }
    }
}

/// Read access to the current state container.
///
/// Reads observe the value at the time of the call, not the value at the
/// time the triggering action was dispatched.
#[derive(Clone)]
pub struct StateHandle {
    inner: Arc<RwLock<AppState>>,
}

impl StateHandle {
    pub(crate) fn new(inner: Arc<RwLock<AppState>>) -> Self {
        Self { inner }
    }

    pub fn snapshot(&self) -> AppState {
        self.inner.read().expect("state lock poisoned").clone()
    }

    pub fn counter(&self) -> CounterState {
        self.inner.read().expect("state lock poisoned").counter
    }

    pub fn weather(&self) -> WeatherState {
        self.inner.read().expect("state lock poisoned").weather.clone()
    }

    pub fn feedback(&self) -> FeedbackState {
        self.inner.read().expect("state lock poisoned").feedback.clone()
    }

    pub fn hub(&self) -> HubState {
        self.inner.read().expect("state lock poisoned").hub
    }
}

/// Everything an effect needs: follow-up dispatch and state reads.
#[derive(Clone)]
pub struct EffectContext {
    pub actions: ActionSender,
    pub state: StateHandle,
}
