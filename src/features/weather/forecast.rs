use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One forecast record as served by `GET /weatherforecast`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: String,
}

impl WeatherForecast {
    pub fn temperature_f(&self) -> i32 {
        32 + (f64::from(self.temperature_c) / 0.5556) as i32
    }
}
