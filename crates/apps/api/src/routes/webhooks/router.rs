use crate::api_state::ApiContext;
use crate::routes::webhooks::handlers::{prediction_webhook, training_webhook};
use axum::{Router, routing::post};

pub fn webhooks_router() -> Router<ApiContext> {
    Router::new()
        .route("/webhooks/train", post(training_webhook))
        .route("/webhooks/predict", post(prediction_webhook))
}
