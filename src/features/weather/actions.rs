use super::forecast::WeatherForecast;

/// Weather actions.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherAction {
    SetInitialized,
    /// Kick off a forecast fetch; handled by effects, not by the reducer.
    LoadForecasts,
    SetForecasts(Vec<WeatherForecast>),
    SetLoading(bool),
    /// The fetch failed. Clears the loading flag so it can never go stale.
    LoadFailed { message: String },
}
