use std::sync::Arc;
use std::time::Duration;

use super::actions::WeatherAction;
use crate::api::ForecastApi;
use crate::features::counter::CounterAction;
use crate::features::AppAction;
use crate::store::{EffectContext, EffectFuture, EffectHandler};

/// Reload the forecasts every Nth counter increment.
const RELOAD_EVERY: i32 = 10;

/// Pause after a successful fetch so the loading indicator stays visible in
/// the demo.
const LOAD_DELAY: Duration = Duration::from_millis(1000);

/// True when the given count should trigger a forecast reload.
pub fn should_reload(count: i32) -> bool {
    count % RELOAD_EVERY == 0
}

/// Forecast side effects, including the cross-feature reload trigger.
pub struct WeatherEffects {
    api: Arc<dyn ForecastApi>,
}

impl WeatherEffects {
    pub fn new(api: Arc<dyn ForecastApi>) -> Self {
        Self { api }
    }
}

impl EffectHandler for WeatherEffects {
    fn handle(&self, action: &AppAction, ctx: EffectContext) -> Option<EffectFuture> {
        match action {
            AppAction::Weather(WeatherAction::LoadForecasts) => {
                let api = self.api.clone();
                Some(Box::pin(async move {
                    ctx.actions.dispatch(WeatherAction::SetLoading(true));
                    match api.fetch_forecasts().await {
                        Ok(forecasts) => {
                            tokio::time::sleep(LOAD_DELAY).await;
                            ctx.actions.dispatch(WeatherAction::SetForecasts(forecasts));
                            ctx.actions.dispatch(WeatherAction::SetLoading(false));
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "forecast fetch failed");
                            ctx.actions.dispatch(WeatherAction::LoadFailed {
                                message: err.to_string(),
                            });
                        }
                    }
                }))
            }
            AppAction::Counter(CounterAction::Increment) => Some(Box::pin(async move {
                // The count is read when this handler runs, not when the
                // increment was reduced; the cross-feature race is accepted.
                let count = ctx.state.counter().count;
                if should_reload(count) {
                    ctx.actions.dispatch(WeatherAction::LoadForecasts);
                }
            })),
            _ => None,
        }
    }
}
