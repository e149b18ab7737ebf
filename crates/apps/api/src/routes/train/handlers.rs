use crate::api_state::ApiContext;
use crate::routes::train::error::TrainError;
use crate::routes::train::interfaces::{TrainResponse, TrainingStatusResponse};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use futures_util::future::join_all;
use inspection::aggregate;
use replicate::ReplicateError;
use tracing::{info, instrument};
use training::{TrainRequest, build_training_input};

/// Start a training job: analyze every uploaded photo, fold the per-photo
/// records into one consensus, build the trainer input from it and hand
/// the job to the provider.
#[utoipa::path(
    post,
    path = "/train",
    tag = "Training",
    request_body = training::TrainRequest,
    responses(
        (status = 200, description = "Training job started", body = TrainResponse),
        (status = 422, description = "The request failed validation."),
        (status = 502, description = "The model provider rejected the job."),
    )
)]
#[instrument(skip(context, request), err(Debug))]
pub async fn start_training(
    State(context): State<ApiContext>,
    Json(request): Json<TrainRequest>,
) -> Result<Json<TrainResponse>, TrainError> {
    request.validate(context.settings.limits.max_images)?;

    // One analysis call per photo, run concurrently; failures degrade to
    // all-defaults records inside the analyzer.
    let subject = request.subject_type.detected_name();
    let records = join_all(
        request
            .image_urls
            .iter()
            .map(|url| context.analyzer.inspect_image(url, subject)),
    )
    .await;
    let characteristics = aggregate(&records);
    info!(
        "aggregated {} characteristic(s) from {} photo(s) for model {}",
        characteristics.len(),
        records.len(),
        request.model_name
    );

    let input = build_training_input(&request, &characteristics);
    let training = context
        .provider
        .start_training(
            &context.settings.provider.trainer_model,
            &context.settings.provider.trainer_version,
            &request.model_name,
            &input,
        )
        .await?;

    context
        .jobs
        .insert(training.id.clone(), request.model_name.clone())
        .await;
    info!("training {} started for model {}", training.id, request.model_name);

    Ok(Json(TrainResponse {
        training_id: training.id,
        status: "training_started",
        message: "Training job started successfully",
    }))
}

/// Look up a training job, merging the provider's live status with the
/// locally registered job when this instance started it.
#[utoipa::path(
    get,
    path = "/trainings/{id}",
    tag = "Training",
    params(("id" = String, Path, description = "Provider training id")),
    responses(
        (status = 200, description = "Training status", body = TrainingStatusResponse),
        (status = 404, description = "No training with this id."),
        (status = 502, description = "The model provider could not be reached."),
    )
)]
#[instrument(skip(context), err(Debug))]
pub async fn get_training_status(
    State(context): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<TrainingStatusResponse>, TrainError> {
    let training = context.provider.get_training(&id).await.map_err(|error| {
        match &error {
            ReplicateError::Api { status, .. } if *status == StatusCode::NOT_FOUND => {
                TrainError::NotFound
            }
            _ => TrainError::Provider(error),
        }
    })?;

    let job = context.jobs.get(&id).await;
    Ok(Json(TrainingStatusResponse {
        training_id: training.id,
        provider_status: training.status.as_str(),
        trained_version: training.output.and_then(|output| output.version),
        error: training.error,
        job,
    }))
}
