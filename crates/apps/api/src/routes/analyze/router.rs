use crate::api_state::ApiContext;
use crate::routes::analyze::handlers::analyze_image;
use axum::{Router, routing::post};

pub fn analyze_router() -> Router<ApiContext> {
    Router::new().route("/analyze", post(analyze_image))
}
