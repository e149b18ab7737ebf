use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("image URL is required")]
    MissingImageUrl,
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        error!("Image analysis request rejected: {}", self);

        let (status, error_message) = match self {
            Self::MissingImageUrl => (StatusCode::BAD_REQUEST, "Image URL is required".to_string()),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
