use super::forecast::WeatherForecast;
use crate::store::FeatureState;

/// Weather feature state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherState {
    /// Set once, on the first visit to the weather view.
    pub initialized: bool,
    pub loading: bool,
    pub forecasts: Vec<WeatherForecast>,
}

impl FeatureState for WeatherState {}
