use crate::api_state::ApiContext;
use crate::routes::webhooks::error::WebhookReceiverError;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use replicate::{PredictionUpdate, parse_prediction_update, parse_training_event};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument, warn};
use utoipa::IntoParams;

const SECRET_HEADER: &str = "x-webhook-secret";

/// The provider's HMAC signature scheme is handled upstream; receivers
/// authenticate calls with the shared secret configured for this service.
fn verify_secret(headers: &HeaderMap, expected: &str) -> Result<(), WebhookReceiverError> {
    let secret = headers
        .get(SECRET_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(WebhookReceiverError::MissingSecret)?;
    if secret != expected {
        return Err(WebhookReceiverError::InvalidSecret);
    }
    Ok(())
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TrainingWebhookParams {
    /// Provider training id this event belongs to.
    pub training_id: String,
}

/// Receive training lifecycle events and update the local job registry.
#[utoipa::path(
    post,
    path = "/webhooks/train",
    tag = "Webhooks",
    request_body = Vec<u8>,
    params(TrainingWebhookParams),
    responses(
        (status = 200, description = "Event processed"),
        (status = 400, description = "Malformed payload."),
        (status = 401, description = "Missing or invalid webhook secret."),
    )
)]
#[instrument(skip(context, headers, body), err(Debug))]
pub async fn training_webhook(
    State(context): State<ApiContext>,
    Query(params): Query<TrainingWebhookParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, WebhookReceiverError> {
    verify_secret(&headers, &context.settings.secrets.webhook_secret)?;
    let event = parse_training_event(&body)?;

    info!(
        "training webhook for {}: {:?}",
        params.training_id, event
    );
    context
        .jobs
        .apply_training_event(&params.training_id, &event)
        .await;

    Ok(Json(json!({ "received": true })))
}

/// Receive prediction status updates for generated headshots.
#[utoipa::path(
    post,
    path = "/webhooks/predict",
    tag = "Webhooks",
    request_body = Vec<u8>,
    responses(
        (status = 200, description = "Update processed"),
        (status = 400, description = "Malformed payload."),
        (status = 401, description = "Missing or invalid webhook secret."),
    )
)]
#[instrument(skip(context, headers, body), err(Debug))]
pub async fn prediction_webhook(
    State(context): State<ApiContext>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, WebhookReceiverError> {
    verify_secret(&headers, &context.settings.secrets.webhook_secret)?;
    let update = parse_prediction_update(&body)?;

    match &update {
        PredictionUpdate::Succeeded { id, .. } => {
            info!("prediction {id} succeeded");
        }
        PredictionUpdate::Failed { id, error } => {
            warn!(
                "prediction {id} failed: {}",
                error.as_deref().unwrap_or("unknown error")
            );
        }
        other => info!("prediction {} is {:?}", other.id(), other),
    }

    Ok(Json(json!({ "received": true })))
}
