use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("AQI value must be a finite number, got {0}")]
    InvalidAqi(f64),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("Rejecting request: {}", self);
        let status = match &self {
            ApiError::InvalidAqi(_) => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}
