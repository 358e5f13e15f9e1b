//! Feature stores and their composition into one application container.

pub mod counter;
pub mod feedback;
pub mod hub;
pub mod weather;

use counter::{CounterAction, CounterState};
use feedback::{FeedbackAction, FeedbackState};
use hub::{HubAction, HubState};
use weather::{WeatherAction, WeatherState};

/// Top-level action routed through the dispatcher.
///
/// Every action belongs to one feature, but reducers and effect handlers of
/// any feature may react to it (the weather store reacts to counter
/// increments, for example).
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Counter(CounterAction),
    Weather(WeatherAction),
    Feedback(FeedbackAction),
    Hub(HubAction),
}

impl From<CounterAction> for AppAction {
    fn from(action: CounterAction) -> Self {
        AppAction::Counter(action)
    }
}

impl From<WeatherAction> for AppAction {
    fn from(action: WeatherAction) -> Self {
        AppAction::Weather(action)
    }
}

impl From<FeedbackAction> for AppAction {
    fn from(action: FeedbackAction) -> Self {
        AppAction::Feedback(action)
    }
}

impl From<HubAction> for AppAction {
    fn from(action: HubAction) -> Self {
        AppAction::Hub(action)
    }
}

/// One slice per feature, each replaced wholesale by its reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub counter: CounterState,
    pub weather: WeatherState,
    pub feedback: FeedbackState,
    pub hub: HubState,
}
