use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub api: ApiSettings,
    pub logging: LoggingSettings,
    pub provider: RawProviderSettings,
    pub limits: LimitSettings,
    /// Base-model catalog served by `GET /models`.
    pub models: Vec<BaseModel>,
    pub secrets: SecretSettings,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

/// Model-provider endpoints and model pins, as they appear in the YAML file.
#[derive(Debug, Deserialize, Clone)]
pub struct RawProviderSettings {
    pub base_url: String,
    /// Account that owns the trained destination models.
    pub username: String,
    /// Version hash of the vision model used to describe uploaded photos.
    pub analysis_version: String,
    /// Trainer model in `owner/name` form.
    pub trainer_model: String,
    /// Version hash of the trainer model.
    pub trainer_version: String,
    pub poll_interval_ms: u64,
    pub poll_timeout_ms: u64,
}

/// Upload-side guard rails enforced before a training job is started.
#[derive(Debug, Deserialize, Clone)]
pub struct LimitSettings {
    pub max_images: usize,
}

/// One entry of the base-model catalog.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct BaseModel {
    pub id: String,
    pub title: String,
    pub cover_url: String,
    pub slug: String,
}

/// Secrets are expected to arrive via `APP__SECRETS__*` environment
/// variables rather than the checked-in YAML file.
#[derive(Debug, Deserialize, Clone)]
pub struct SecretSettings {
    pub api_token: String,
    pub webhook_secret: String,
}
