use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use replicate::ReplicateError;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use training::TrainRequestError;

#[derive(Debug, Error)]
pub enum TrainError {
    #[error("invalid train request: {0}")]
    Invalid(#[from] TrainRequestError),

    #[error("provider error: {0}")]
    Provider(#[from] ReplicateError),

    #[error("training not found")]
    NotFound,
}

fn log_error(error: &TrainError) {
    match error {
        TrainError::Invalid(e) => error!("Train request rejected: {}", e),
        TrainError::Provider(e) => error!("Provider call failed: {}", e),
        TrainError::NotFound => error!("Training job not found"),
    }
}

impl IntoResponse for TrainError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::Invalid(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            Self::Provider(_) => (
                StatusCode::BAD_GATEWAY,
                "Failed to reach the model provider.".to_string(),
            ),
            Self::NotFound => (StatusCode::NOT_FOUND, "Training not found.".to_string()),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
