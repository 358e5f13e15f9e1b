use super::actions::WeatherAction;
use super::state::WeatherState;
use crate::features::{AppAction, AppState};
use crate::store::Reducer;

pub struct WeatherReducer;

impl Reducer for WeatherReducer {
    type State = WeatherState;
    type Action = WeatherAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            WeatherAction::SetInitialized => WeatherState {
                initialized: true,
                ..state
            },
            WeatherAction::SetForecasts(forecasts) => WeatherState {
                forecasts: forecasts.clone(),
                ..state
            },
            WeatherAction::SetLoading(loading) => WeatherState {
                loading: *loading,
                ..state
            },
            WeatherAction::LoadFailed { .. } => WeatherState {
                loading: false,
                ..state
            },
            WeatherAction::LoadForecasts => state,
        }
    }
}

/// Registry entry: applies the weather reducer to its slice.
pub fn apply(state: &mut AppState, action: &AppAction) {
    if let AppAction::Weather(action) = action {
        state.weather = WeatherReducer::reduce(std::mem::take(&mut state.weather), action);
    }
}
