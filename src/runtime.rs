//! Client runtime: wires collaborators into a store and drives the demo.

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{BackendClient, FeedbackApi, ForecastApi};
use crate::config::Config;
use crate::features::counter::{CounterAction, CounterEffects};
use crate::features::feedback::{FeedbackAction, FeedbackEffects, FeedbackModel};
use crate::features::hub::{HubAction, HubEffects};
use crate::features::weather::{WeatherAction, WeatherEffects};
use crate::features::{counter, feedback, hub, weather};
use crate::hub::{CounterChannel, WsCounterChannel};
use crate::storage::{FileStorage, KeyValueStorage};
use crate::store::{Registry, Store};

/// Build the registration tables for all four features.
pub fn build_registry(
    storage: Arc<dyn KeyValueStorage>,
    forecast_api: Arc<dyn ForecastApi>,
    feedback_api: Arc<dyn FeedbackApi>,
    channel: Arc<dyn CounterChannel>,
) -> Registry {
    let mut registry = Registry::default();
    registry
        .register_reducer(counter::apply)
        .register_reducer(weather::apply)
        .register_reducer(feedback::apply)
        .register_reducer(hub::apply);
    registry
        .register_effect(Arc::new(CounterEffects::new(storage)))
        .register_effect(Arc::new(WeatherEffects::new(forecast_api)))
        .register_effect(Arc::new(FeedbackEffects::new(feedback_api)))
        .register_effect(Arc::new(HubEffects::new(channel)));
    registry
}

/// Scripted walkthrough exercising every feature store end to end against a
/// running backend.
pub async fn run_demo(config: &Config, storage_path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = storage_path.unwrap_or_else(|| config.storage.resolved_path());
    tracing::info!(path = %path.display(), "opening storage");
    let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::open(path).await?);
    let api = Arc::new(BackendClient::new(&config.client.base_url));
    let channel = Arc::new(WsCounterChannel::new(&config.client.hub_url));

    let registry = build_registry(storage, api.clone(), api, channel);
    let mut store = Store::new(registry);
    let handle = store.handle();

    // Restore the persisted counter, if any.
    handle.dispatch(CounterAction::LoadState);
    store.run_until_settled().await;
    tracing::info!(count = store.state().counter.count, "counter restored");

    // Connect the counter hub.
    handle.dispatch(HubAction::Start);
    store.run_until_settled().await;
    tracing::info!(connected = store.state().hub.connected, "hub started");

    // First visit to the weather view.
    handle.dispatch(WeatherAction::SetInitialized);
    handle.dispatch(WeatherAction::LoadForecasts);
    store.run_until_settled().await;
    for forecast in &store.state().weather.forecasts {
        tracing::info!(
            date = %forecast.date,
            temperature_c = forecast.temperature_c,
            temperature_f = forecast.temperature_f(),
            summary = %forecast.summary,
            "forecast"
        );
    }

    // Click the counter a dozen times. Every tenth count reloads the
    // forecasts, and each new count is shared on the hub.
    for _ in 0..12 {
        handle.dispatch(CounterAction::Increment);
        store.run_until_settled().await;
        let count = store.state().counter.count;
        handle.dispatch(HubAction::SendCount(count));
        store.run_until_settled().await;
    }
    tracing::info!(count = store.state().counter.count, "counting done");

    // Persist the final count for the next run.
    handle.dispatch(CounterAction::PersistState(store.state().counter));
    store.run_until_settled().await;

    // Submit feedback about the experience.
    let model = FeedbackModel {
        email_address: "demo@example.com".to_string(),
        rating: 5,
        comment: "Dispatched from the demo scenario.".to_string(),
    };
    match model.validate() {
        Ok(()) => {
            handle.dispatch(FeedbackAction::Submit(model));
            store.run_until_settled().await;
        }
        Err(issues) => {
            for issue in issues {
                tracing::warn!(%issue, "feedback form invalid");
            }
        }
    }
    let feedback = store.state().feedback;
    tracing::info!(
        submitted = feedback.submitted,
        error = %feedback.error_message,
        "demo finished"
    );
    Ok(())
}
