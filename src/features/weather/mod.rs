//! Weather feature: forecasts fetched from the backend, reloaded every
//! tenth counter increment.

mod actions;
mod effects;
mod forecast;
mod reducer;
mod state;

pub use actions::WeatherAction;
pub use effects::{should_reload, WeatherEffects};
pub use forecast::WeatherForecast;
pub use reducer::{apply, WeatherReducer};
pub use state::WeatherState;
