use crate::api_state::ApiContext;
use crate::routes::models::handlers::get_models;
use axum::{Router, routing::get};

pub fn models_router() -> Router<ApiContext> {
    Router::new().route("/models", get(get_models))
}
