//! Request/response network collaborators for the backend endpoints.

mod client;

pub use client::BackendClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::feedback::FeedbackModel;
use crate::features::weather::WeatherForecast;

/// Errors from the request/response collaborators.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },
}

/// Fetch the forecast list from `GET /weatherforecast`.
#[async_trait]
pub trait ForecastApi: Send + Sync {
    async fn fetch_forecasts(&self) -> Result<Vec<WeatherForecast>, ApiError>;
}

/// Submit a feedback model to `POST /feedback`.
#[async_trait]
pub trait FeedbackApi: Send + Sync {
    async fn submit(&self, model: &FeedbackModel) -> Result<(), ApiError>;
}
