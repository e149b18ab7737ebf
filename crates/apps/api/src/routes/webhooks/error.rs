use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum WebhookReceiverError {
    #[error("missing webhook secret header")]
    MissingSecret,

    #[error("invalid webhook secret")]
    InvalidSecret,

    #[error("malformed payload: {0}")]
    Malformed(#[from] replicate::WebhookError),
}

fn log_error(error: &WebhookReceiverError) {
    match error {
        WebhookReceiverError::MissingSecret | WebhookReceiverError::InvalidSecret => {
            error!("Webhook rejected: {}", error);
        }
        WebhookReceiverError::Malformed(e) => error!("Webhook payload rejected: {}", e),
    }
}

impl IntoResponse for WebhookReceiverError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::MissingSecret => (StatusCode::UNAUTHORIZED, "Missing signature".to_string()),
            Self::InvalidSecret => (StatusCode::UNAUTHORIZED, "Invalid signature".to_string()),
            Self::Malformed(_) => (StatusCode::BAD_REQUEST, "Malformed payload".to_string()),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
