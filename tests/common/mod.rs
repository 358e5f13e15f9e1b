//! Shared test utilities and mock collaborators.

#![allow(dead_code, unused_imports)]

use std::net::TcpListener;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::mpsc;

use fluxkit::api::{ApiError, FeedbackApi, ForecastApi};
use fluxkit::features::feedback::FeedbackModel;
use fluxkit::features::weather::WeatherForecast;
use fluxkit::features::AppAction;
use fluxkit::hub::{ChannelEvent, CounterChannel, HubError};
use fluxkit::runtime::build_registry;
use fluxkit::storage::{KeyValueStorage, MemoryStorage, StorageError};
use fluxkit::store::{EffectContext, EffectFuture, EffectHandler, Store};

/// Find an available port for a test server.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Bind and spawn a backend server on an ephemeral port.
pub async fn start_server() -> (
    std::net::SocketAddr,
    fluxkit::shutdown::ShutdownHandle,
    tokio::task::JoinHandle<Result<(), fluxkit::server::ServerError>>,
) {
    let mut server = fluxkit::server::AppServer::new();
    let addr = server.try_bind("127.0.0.1:0").await.expect("bind failed");
    let shutdown = server.shutdown_handle();
    let task = tokio::spawn(server.run());
    (addr, shutdown, task)
}

/// Let detached tasks (e.g. the hub event pump) run before settling.
pub async fn breathe() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

pub fn forecast_fixture() -> Vec<WeatherForecast> {
    vec![
        WeatherForecast {
            date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            temperature_c: 21,
            summary: "Mild".to_string(),
        },
        WeatherForecast {
            date: NaiveDate::from_ymd_opt(2026, 8, 8).unwrap(),
            temperature_c: -3,
            summary: "Bracing".to_string(),
        },
    ]
}

pub fn valid_feedback() -> FeedbackModel {
    FeedbackModel {
        email_address: "user@example.com".to_string(),
        rating: 4,
        comment: "Nice demo".to_string(),
    }
}

/// Forecast API returning a canned list, or a 500, and counting calls.
pub struct MockForecastApi {
    calls: AtomicUsize,
    forecasts: Vec<WeatherForecast>,
    fail: bool,
}

impl MockForecastApi {
    pub fn ok(forecasts: Vec<WeatherForecast>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            forecasts,
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            forecasts: Vec::new(),
            fail: true,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ForecastApi for MockForecastApi {
    async fn fetch_forecasts(&self) -> Result<Vec<WeatherForecast>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(ApiError::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
            })
        } else {
            Ok(self.forecasts.clone())
        }
    }
}

/// Feedback API accepting or rejecting every submission, counting calls.
pub struct MockFeedbackApi {
    calls: AtomicUsize,
    fail: bool,
}

impl MockFeedbackApi {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: true,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedbackApi for MockFeedbackApi {
    async fn submit(&self, _model: &FeedbackModel) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(ApiError::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Scriptable counter channel: records sends, lets tests emit events.
pub struct MockChannel {
    connected: AtomicBool,
    sent: Mutex<Vec<i32>>,
    events: Mutex<Option<mpsc::UnboundedSender<ChannelEvent>>>,
}

impl MockChannel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            connected: AtomicBool::new(false),
            sent: Mutex::new(Vec::new()),
            events: Mutex::new(None),
        })
    }

    pub fn sent(&self) -> Vec<i32> {
        self.sent.lock().unwrap().clone()
    }

    /// Push a channel event, as the transport would after `start`.
    pub fn emit(&self, event: ChannelEvent) {
        let guard = self.events.lock().unwrap();
        let tx = guard.as_ref().expect("channel not started");
        tx.send(event).unwrap();
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }
}

#[async_trait]
impl CounterChannel for MockChannel {
    async fn start(&self) -> Result<mpsc::UnboundedReceiver<ChannelEvent>, HubError> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.events.lock().unwrap() = Some(tx);
        self.connected.store(true, Ordering::SeqCst);
        Ok(rx)
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn send_count(&self, count: i32) -> Result<(), HubError> {
        if !self.is_connected() {
            return Err(HubError::NotConnected);
        }
        self.sent.lock().unwrap().push(count);
        Ok(())
    }
}

/// Storage whose every operation fails with an I/O error.
pub struct FailingStorage;

#[async_trait]
impl KeyValueStorage for FailingStorage {
    async fn get(&self, _key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }

    async fn set(&self, _key: &str, _value: serde_json::Value) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }
}

/// Effect handler that records every dispatched action and never reacts.
#[derive(Default)]
pub struct ActionRecorder {
    seen: Mutex<Vec<AppAction>>,
}

impl ActionRecorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn actions(&self) -> Vec<AppAction> {
        self.seen.lock().unwrap().clone()
    }

    pub fn count_matching<F>(&self, matcher: F) -> usize
    where
        F: Fn(&AppAction) -> bool,
    {
        self.seen.lock().unwrap().iter().filter(|a| matcher(a)).count()
    }
}

impl EffectHandler for ActionRecorder {
    fn handle(&self, action: &AppAction, _ctx: EffectContext) -> Option<EffectFuture> {
        self.seen.lock().unwrap().push(action.clone());
        None
    }
}

/// Default set of mocks wired into a store; swap fields before `store()`.
pub struct Mocks {
    pub storage: Arc<dyn KeyValueStorage>,
    pub forecasts: Arc<MockForecastApi>,
    pub feedback: Arc<MockFeedbackApi>,
    pub channel: Arc<MockChannel>,
    pub recorder: Arc<ActionRecorder>,
}

impl Mocks {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(MemoryStorage::new()),
            forecasts: MockForecastApi::ok(forecast_fixture()),
            feedback: MockFeedbackApi::ok(),
            channel: MockChannel::new(),
            recorder: ActionRecorder::new(),
        }
    }

    pub fn store(&self) -> Store {
        let mut registry = build_registry(
            self.storage.clone(),
            self.forecasts.clone(),
            self.feedback.clone(),
            self.channel.clone(),
        );
        registry.register_effect(self.recorder.clone());
        Store::new(registry)
    }
}
