use crate::jobs::TrainingJob;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct TrainResponse {
    pub training_id: String,
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrainingStatusResponse {
    pub training_id: String,
    /// Live status reported by the provider.
    pub provider_status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Locally registered job, when this instance started the training.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<TrainingJob>,
}
