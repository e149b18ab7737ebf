use crate::api_state::ApiContext;
use app_state::BaseModel;
use axum::Json;
use axum::extract::State;
use tracing::instrument;

/// The curated catalog of base models users can train on top of.
#[utoipa::path(
    get,
    path = "/models",
    tag = "Models",
    responses(
        (status = 200, description = "Base-model catalog", body = Vec<BaseModel>)
    )
)]
#[instrument(skip(context))]
pub async fn get_models(State(context): State<ApiContext>) -> Json<Vec<BaseModel>> {
    Json(context.settings.models.clone())
}
