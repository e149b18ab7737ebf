use crate::api_state::ApiContext;
use crate::routes::train::handlers::{get_training_status, start_training};
use axum::{Router, routing::get, routing::post};

pub fn train_router() -> Router<ApiContext> {
    Router::new()
        .route("/train", post(start_training))
        .route("/trainings/{id}", get(get_training_status))
}
