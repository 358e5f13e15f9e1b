//! The store: state container, registration tables, and dispatch loop.

use std::sync::{Arc, RwLock};

use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;

use super::effect::{ActionSender, EffectContext, EffectHandler, StateHandle};
use crate::features::{AppAction, AppState};

/// Registry entry applying one feature's pure transition to the container.
pub type ReducerFn = fn(&mut AppState, &AppAction);

/// Explicit registration tables, built once at startup.
#[derive(Default)]
pub struct Registry {
    reducers: Vec<ReducerFn>,
    effects: Vec<Arc<dyn EffectHandler>>,
}

impl Registry {
    pub fn register_reducer(&mut self, reducer: ReducerFn) -> &mut Self {
        self.reducers.push(reducer);
        self
    }

    pub fn register_effect(&mut self, handler: Arc<dyn EffectHandler>) -> &mut Self {
        self.effects.push(handler);
        self
    }
}

/// Central dispatcher and sole owner of state mutation.
///
/// `dispatch` applies every registered reducer synchronously, publishes the
/// new state to subscribers, then spawns the matching effect handlers.
/// Follow-up actions from effects arrive through the inbox and are applied
/// by `run` or `run_until_settled`.
pub struct Store {
    state: Arc<RwLock<AppState>>,
    registry: Registry,
    changes: watch::Sender<AppState>,
    inbox_tx: mpsc::UnboundedSender<AppAction>,
    inbox: mpsc::UnboundedReceiver<AppAction>,
    effects: JoinSet<()>,
}

impl Store {
    pub fn new(registry: Registry) -> Self {
        let (inbox_tx, inbox) = mpsc::unbounded_channel();
        let (changes, _) = watch::channel(AppState::default());
        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            registry,
            changes,
            inbox_tx,
            inbox,
            effects: JoinSet::new(),
        }
    }

    /// Cloneable handle for dispatching and reading from outside the store.
    pub fn handle(&self) -> StoreHandle {
        StoreHandle {
            actions: ActionSender::new(self.inbox_tx.clone()),
            state: StateHandle::new(self.state.clone()),
        }
    }

    /// Subscribe to state snapshots published after each dispatch.
    pub fn watch(&self) -> watch::Receiver<AppState> {
        self.changes.subscribe()
    }

    /// Snapshot of the current state container.
    pub fn state(&self) -> AppState {
        self.state.read().expect("state lock poisoned").clone()
    }

    /// Route one action through the registration tables.
    ///
    /// All reducer applications complete before the change notification is
    /// published and before any effect is spawned, so subscribers never see
    /// a partially reduced container.
    pub fn dispatch(&mut self, action: AppAction) {
        tracing::debug!(?action, "dispatch");
        let next = {
            let mut state = self.state.write().expect("state lock poisoned");
            for reduce in &self.registry.reducers {
                reduce(&mut state, &action);
            }
            state.clone()
        };
        self.changes.send_replace(next);

        let ctx = EffectContext {
            actions: ActionSender::new(self.inbox_tx.clone()),
            state: StateHandle::new(self.state.clone()),
        };
        for handler in &self.registry.effects {
            if let Some(effect) = handler.handle(&action, ctx.clone()) {
                self.effects.spawn(effect);
            }
        }
    }

    /// Drain queued actions and in-flight effects until both are empty.
    ///
    /// Detached tasks (such as a channel event pump) are not tracked here;
    /// settled means no queued action and no tracked effect remains.
    pub async fn run_until_settled(&mut self) {
        loop {
            while let Ok(action) = self.inbox.try_recv() {
                self.dispatch(action);
            }
            if self.effects.join_next().await.is_none() {
                // Nothing in flight; a final inbox check closes the window
                // between an effect finishing and its follow-up send.
                match self.inbox.try_recv() {
                    Ok(action) => self.dispatch(action),
                    Err(_) => break,
                }
            }
        }
    }

    /// Run forever, feeding the inbox into `dispatch`.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                maybe = self.inbox.recv() => match maybe {
                    Some(action) => self.dispatch(action),
                    None => break,
                },
                Some(_) = self.effects.join_next(), if !self.effects.is_empty() => {}
            }
        }
    }
}

/// Cloneable handle for dispatching from outside the store task.
#[derive(Clone)]
pub struct StoreHandle {
    actions: ActionSender,
    state: StateHandle,
}

impl StoreHandle {
    /// Queue an action for the store's next drain.
    pub fn dispatch(&self, action: impl Into<AppAction>) {
        self.actions.dispatch(action);
    }

    /// Snapshot of the current state container.
    pub fn state(&self) -> AppState {
        self.state.snapshot()
    }
}
