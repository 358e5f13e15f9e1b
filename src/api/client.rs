use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{ApiError, FeedbackApi, ForecastApi};
use crate::features::feedback::FeedbackModel;
use crate::features::weather::WeatherForecast;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the fluxkit backend.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("Failed to build backend client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl ForecastApi for BackendClient {
    async fn fetch_forecasts(&self) -> Result<Vec<WeatherForecast>, ApiError> {
        let response = self.client.get(self.url("weatherforecast")).send().await?;
        if !response.status().is_success() {
            return Err(status_error(&response));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl FeedbackApi for BackendClient {
    async fn submit(&self, model: &FeedbackModel) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("feedback"))
            .json(model)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error(&response));
        }
        Ok(())
    }
}

fn status_error(response: &reqwest::Response) -> ApiError {
    let status = response.status();
    ApiError::Status {
        status: status.as_u16(),
        reason: status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    }
}
