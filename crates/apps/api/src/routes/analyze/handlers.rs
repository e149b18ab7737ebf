use crate::api_state::ApiContext;
use crate::routes::analyze::error::AnalyzeError;
use crate::routes::analyze::interfaces::{AnalyzeRequest, AnalyzeResponse};
use axum::Json;
use axum::extract::State;
use tracing::instrument;

/// Describe a single uploaded photo and normalize the description into a
/// structured record. Provider failures never surface here; the response
/// degrades to an all-defaults record instead.
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "Analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Structured photo characteristics", body = AnalyzeResponse),
        (status = 400, description = "Image URL missing from the request."),
    )
)]
#[instrument(skip(context), err(Debug))]
pub async fn analyze_image(
    State(context): State<ApiContext>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AnalyzeError> {
    if request.image_url.trim().is_empty() {
        return Err(AnalyzeError::MissingImageUrl);
    }

    let characteristics = context
        .analyzer
        .inspect_image(&request.image_url, &request.analysis_type)
        .await;
    let issues = characteristics.issues(Some(&request.analysis_type));
    Ok(Json(AnalyzeResponse {
        characteristics,
        issues,
    }))
}
