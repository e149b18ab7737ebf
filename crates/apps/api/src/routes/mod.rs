pub mod analyze;
mod api_doc;
pub mod models;
pub mod root;
pub mod train;
pub mod webhooks;

use crate::api_state::ApiContext;
use crate::routes::analyze::router::analyze_router;
use crate::routes::api_doc::ApiDoc;
use crate::routes::models::router::models_router;
use crate::routes::root::router::root_public_router;
use crate::routes::train::router::train_router;
use crate::routes::webhooks::router::webhooks_router;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(root_public_router())
        .merge(analyze_router())
        .merge(train_router())
        .merge(models_router())
        .merge(webhooks_router())
        .with_state(api_state)
}
