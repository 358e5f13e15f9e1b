use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::features::weather::WeatherForecast;

/// Canonical summary list from the weather demo.
const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

const FORECAST_DAYS: i64 = 5;
const TEMPERATURE_MIN: i32 = -20;
const TEMPERATURE_MAX: i32 = 55;

/// The sample forecast set served by `GET /weatherforecast`: five days
/// starting tomorrow, random temperature and summary.
pub fn sample_forecasts(from: NaiveDate) -> Vec<WeatherForecast> {
    let mut rng = rand::thread_rng();
    (1..=FORECAST_DAYS)
        .map(|offset| WeatherForecast {
            date: from + Duration::days(offset),
            temperature_c: rng.gen_range(TEMPERATURE_MIN..=TEMPERATURE_MAX),
            summary: SUMMARIES[rng.gen_range(0..SUMMARIES.len())].to_string(),
        })
        .collect()
}
