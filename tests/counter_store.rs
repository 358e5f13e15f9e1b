mod common;

use std::sync::Arc;

use common::{FailingStorage, Mocks};
use fluxkit::features::counter::{CounterAction, CounterReducer, CounterState, PERSISTENCE_KEY};
use fluxkit::features::{AppAction, AppState};
use fluxkit::store::Reducer;
use serde_json::json;

#[test]
fn increment_adds_one() {
    let state = CounterReducer::reduce(CounterState { count: 4 }, &CounterAction::Increment);
    assert_eq!(state, CounterState { count: 5 });
}

#[test]
fn set_state_replaces_wholesale() {
    let state = CounterReducer::reduce(
        CounterState { count: 4 },
        &CounterAction::SetState(CounterState { count: 99 }),
    );
    assert_eq!(state, CounterState { count: 99 });
}

#[test]
fn acknowledgements_leave_state_unchanged() {
    let start = CounterState { count: 7 };
    let acks = [
        CounterAction::PersistStateSucceeded,
        CounterAction::PersistStateFailed {
            message: "nope".to_string(),
        },
        CounterAction::LoadStateSucceeded,
        CounterAction::LoadStateFailed {
            message: "nope".to_string(),
        },
        CounterAction::ClearStateSucceeded,
        CounterAction::ClearStateFailed {
            message: "nope".to_string(),
        },
    ];
    for ack in &acks {
        assert_eq!(CounterReducer::reduce(start, ack), start);
    }
}

// Dispatching a sequence through the store must equal the left-fold of the
// reducer over the same sequence.
#[tokio::test]
async fn dispatched_sequence_equals_reducer_fold() {
    let actions = vec![
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::SetState(CounterState { count: 5 }),
        CounterAction::Increment,
    ];
    let folded = actions
        .iter()
        .fold(CounterState::default(), CounterReducer::reduce);

    let mocks = Mocks::new();
    let mut store = mocks.store();
    for action in actions {
        store.dispatch(AppAction::Counter(action));
    }
    store.run_until_settled().await;

    assert_eq!(store.state().counter, folded);
    assert_eq!(folded, CounterState { count: 6 });
}

#[tokio::test]
async fn persist_writes_storage_and_acknowledges() {
    let mocks = Mocks::new();
    let mut store = mocks.store();
    let handle = store.handle();

    handle.dispatch(CounterAction::PersistState(CounterState { count: 42 }));
    store.run_until_settled().await;

    assert_eq!(
        mocks.storage.get(PERSISTENCE_KEY).await.unwrap(),
        Some(json!({"count": 42}))
    );
    assert_eq!(
        mocks.recorder.count_matching(|a| matches!(
            a,
            AppAction::Counter(CounterAction::PersistStateSucceeded)
        )),
        1
    );
}

#[tokio::test]
async fn persist_failure_becomes_failure_action() {
    let mut mocks = Mocks::new();
    mocks.storage = Arc::new(FailingStorage);
    let mut store = mocks.store();
    let handle = store.handle();

    handle.dispatch(CounterAction::PersistState(CounterState { count: 1 }));
    store.run_until_settled().await;

    let failures: Vec<_> = mocks
        .recorder
        .actions()
        .into_iter()
        .filter_map(|a| match a {
            AppAction::Counter(CounterAction::PersistStateFailed { message }) => Some(message),
            _ => None,
        })
        .collect();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].contains("disk full"), "got: {}", failures[0]);
}

#[tokio::test]
async fn load_state_with_empty_storage_is_noop() {
    let mocks = Mocks::new();
    let mut store = mocks.store();
    let handle = store.handle();

    handle.dispatch(CounterAction::LoadState);
    store.run_until_settled().await;

    assert_eq!(store.state(), AppState::default());
    assert_eq!(
        mocks.recorder.count_matching(|a| matches!(
            a,
            AppAction::Counter(
                CounterAction::SetState(_)
                    | CounterAction::LoadStateSucceeded
                    | CounterAction::LoadStateFailed { .. }
            )
        )),
        0
    );
}

#[tokio::test]
async fn clear_resets_counter_and_storage() {
    let mocks = Mocks::new();
    let mut store = mocks.store();
    let handle = store.handle();

    handle.dispatch(CounterAction::SetState(CounterState { count: 9 }));
    handle.dispatch(CounterAction::PersistState(CounterState { count: 9 }));
    store.run_until_settled().await;

    handle.dispatch(CounterAction::ClearState);
    store.run_until_settled().await;

    assert_eq!(store.state().counter, CounterState::default());
    assert_eq!(mocks.storage.get(PERSISTENCE_KEY).await.unwrap(), None);
    assert_eq!(
        mocks
            .recorder
            .count_matching(|a| matches!(a, AppAction::Counter(CounterAction::ClearStateSucceeded))),
        1
    );
}
