use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;

use super::forecast::sample_forecasts;
use super::hub::{self, CounterHub};
use crate::features::feedback::FeedbackModel;
use crate::features::weather::WeatherForecast;

/// Shared state for the request handlers.
#[derive(Clone)]
pub struct ServerState {
    pub hub: CounterHub,
}

pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/weatherforecast", get(forecasts))
        .route("/feedback", post(submit_feedback))
        .route("/counterhub", get(hub::upgrade))
        .with_state(state)
}

/// `GET /weatherforecast`: five sample records starting tomorrow.
async fn forecasts() -> Json<Vec<WeatherForecast>> {
    Json(sample_forecasts(Local::now().date_naive()))
}

/// `POST /feedback`: log the submission and acknowledge with no body.
async fn submit_feedback(Json(model): Json<FeedbackModel>) -> StatusCode {
    tracing::info!(
        rating = model.rating,
        email = %model.email_address,
        comment = %model.comment,
        "received feedback"
    );
    StatusCode::OK
}
